//! # greekscope - Options Greeks Calculator
//!
//! European option pricing and risk sensitivities under the
//! Black-Scholes-Merton model, with one-variable sensitivity sweeps for
//! visualization.
//!
//! ## Key Components
//!
//! - **Core types**: [`core::OptionInputs`], [`core::Greeks`],
//!   [`core::Moneyness`]
//! - **Black-Scholes**: closed-form price and Greeks in
//!   [`models::black_scholes`]
//! - **Sweeps**: evenly sampled sensitivity curves in [`sweep`]
//! - **Front ends**: a terminal binary (`cli`) and an interactive egui
//!   binary (`gui`)
//!
//! ## Usage
//!
//! ```rust
//! use greekscope::prelude::*;
//!
//! let inputs = OptionInputs::new(
//!     OptionType::Call,
//!     100.0,        // spot
//!     100.0,        // strike
//!     30.0 / 365.0, // time to expiry in years
//!     0.30,         // volatility
//!     0.025,        // risk-free rate
//!     0.0,          // dividend yield
//! );
//!
//! let price = bs_price(&inputs);
//! let greeks = bs_greeks(&inputs);
//!
//! assert!(price > 0.0);
//! assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
//! assert_eq!(inputs.moneyness(), Moneyness::Atm);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American-option early-exercise pricing
//! - Implied volatility solving
//! - Market data ingestion or model calibration
//! - Multi-leg/portfolio aggregation
//!
//! Everything is a pure function over an input value object: no shared
//! mutable state, no I/O, safe to call from any number of threads.

pub mod core;
pub mod fmt;
pub mod models;
pub mod sweep;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        classify_moneyness, year_fraction, Greeks, Moneyness, OptionInputs, OptionType,
        PricingError, PricingResult, DEFAULT_ATM_THRESHOLD,
    };

    // Black-Scholes
    pub use crate::models::{
        d1, d2, greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price,
    };

    // Sweeps
    pub use crate::sweep::{
        greeks_curve, price_curve, sweep_bounds, SweepVariable, SWEEP_POINTS,
    };
}

// Re-export main types at crate root
pub use crate::core::{PricingError, PricingResult};
