//! Option Greeks
//!
//! First-order sensitivities of a European option price.

use serde::{Deserialize, Serialize};

/// Option Greeks (sensitivities)
///
/// A plain value bundle: recomputed on every pricing call, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per calendar day)
    pub theta: f64,
    /// Vega: dV/dσ (per 1 percentage-point vol move)
    pub vega: f64,
    /// Rho: dV/dr (per 1 percentage-point rate move)
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// The bundle reported for an expired option
    pub fn zero() -> Self {
        Self::default()
    }
}
