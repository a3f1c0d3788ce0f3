//! Sensitivity sweeps
//!
//! Varies exactly one pricing input across an evenly spaced grid and
//! re-prices at every sample, producing the curves the front ends plot.
//! Each sample is an independent pure call; curves are deterministic and
//! carry no ordering dependency between points.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Greeks, OptionInputs};
use crate::models::black_scholes;

/// Number of samples per curve
pub const SWEEP_POINTS: usize = 100;

/// Which input a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepVariable {
    Spot,
    Volatility,
    TimeToExpiry,
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepVariable::Spot => write!(f, "Spot"),
            SweepVariable::Volatility => write!(f, "Volatility"),
            SweepVariable::TimeToExpiry => write!(f, "Time to Expiry"),
        }
    }
}

/// Evenly spaced grid over `[start, stop]`, inclusive of both endpoints
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Sweep bounds for one variable, in that variable's natural units
/// (dollars, decimal volatility, years).
///
/// - Spot: 0.7x to 1.3x the base spot
/// - Volatility: 0.5x to 1.5x the base vol, floored at 5% so every sample
///   stays inside the `volatility > 0` precondition
/// - Time: 1 calendar day up to twice the base horizon, capped at one year
pub fn sweep_bounds(base: &OptionInputs, variable: SweepVariable) -> (f64, f64) {
    match variable {
        SweepVariable::Spot => (0.7 * base.spot, 1.3 * base.spot),
        SweepVariable::Volatility => {
            ((0.5 * base.volatility).max(0.05), 1.5 * base.volatility)
        }
        SweepVariable::TimeToExpiry => {
            let days = base.days_to_expiry();
            (1.0 / 365.0, (2.0 * days).min(365.0) / 365.0)
        }
    }
}

/// Copy of `base` with the swept field replaced
pub fn with_variable(base: &OptionInputs, variable: SweepVariable, value: f64) -> OptionInputs {
    let mut inputs = *base;
    match variable {
        SweepVariable::Spot => inputs.spot = value,
        SweepVariable::Volatility => inputs.volatility = value,
        SweepVariable::TimeToExpiry => inputs.time_to_expiry = value,
    }
    inputs
}

/// Price curve: `[varied value, option price]` pairs for `base.option_type`
pub fn price_curve(base: &OptionInputs, variable: SweepVariable) -> Vec<[f64; 2]> {
    let (lo, hi) = sweep_bounds(base, variable);
    linspace(lo, hi, SWEEP_POINTS)
        .into_iter()
        .map(|x| [x, black_scholes::price(&with_variable(base, variable, x))])
        .collect()
}

/// Greeks curve: the full bundle at every sample
pub fn greeks_curve(base: &OptionInputs, variable: SweepVariable) -> Vec<(f64, Greeks)> {
    let (lo, hi) = sweep_bounds(base, variable);
    linspace(lo, hi, SWEEP_POINTS)
        .into_iter()
        .map(|x| (x, black_scholes::greeks(&with_variable(base, variable, x))))
        .collect()
}
