//! Core data types for the pricing engine
//!
//! Defines fundamental types:
//! - OptionType / OptionInputs: contract type and market inputs
//! - Greeks: sensitivity bundle
//! - Moneyness: ITM/ATM/OTM classification
//! - PricingError: input validation failures

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
