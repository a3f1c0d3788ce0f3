//! Error types for greekscope

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown option type: {0:?} (expected \"call\" or \"put\")")]
    UnknownOptionType(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
