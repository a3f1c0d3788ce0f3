//! Pricing models
//!
//! Black-Scholes-Merton closed-form pricing is the only model; everything
//! the front ends display derives from it.

pub mod black_scholes;

pub use black_scholes::*;
