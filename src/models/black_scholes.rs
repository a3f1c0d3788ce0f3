//! Black-Scholes-Merton Model
//!
//! Provides:
//! - European option pricing (closed form, continuous dividend yield)
//! - Greeks computation (delta, gamma, theta, vega, rho)
//!
//! All functions are pure and deterministic: the same inputs produce
//! bit-identical outputs, and nothing is cached between calls.
//!
//! Preconditions: `strike > 0` everywhere, and `volatility > 0` whenever
//! `time_to_expiry > 0` (both divide inside d1/d2). These are not re-checked
//! here; callers holding unvalidated input should run
//! [`OptionInputs::validate`] first. Bypassing validation with degenerate
//! inputs propagates NaN through the result rather than panicking.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{Greeks, OptionInputs, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Requires `strike > 0`, `volatility > 0`, `time_to_expiry > 0`.
pub fn d1(inputs: &OptionInputs) -> f64 {
    let t = inputs.time_to_expiry;
    let vol = inputs.volatility;
    ((inputs.spot / inputs.strike).ln()
        + (inputs.risk_free_rate - inputs.dividend_yield + 0.5 * vol * vol) * t)
        / (vol * t.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(inputs: &OptionInputs) -> f64 {
    d1(inputs) - inputs.volatility * inputs.time_to_expiry.sqrt()
}

/// Black-Scholes-Merton fair value
///
/// An expired option (`time_to_expiry <= 0`) is worth its intrinsic value;
/// the payoff is evaluated directly rather than as a limit of the formula.
pub fn price(inputs: &OptionInputs) -> f64 {
    if inputs.time_to_expiry <= 0.0 {
        return inputs.option_type.intrinsic(inputs.spot, inputs.strike);
    }

    let t = inputs.time_to_expiry;
    let d1 = d1(inputs);
    let d2 = d2(inputs);
    let df = (-inputs.risk_free_rate * t).exp();
    let div_factor = (-inputs.dividend_yield * t).exp();

    match inputs.option_type {
        OptionType::Call => {
            inputs.spot * div_factor * norm_cdf(d1) - inputs.strike * df * norm_cdf(d2)
        }
        OptionType::Put => {
            inputs.strike * df * norm_cdf(-d2) - inputs.spot * div_factor * norm_cdf(-d1)
        }
    }
}

/// Black-Scholes-Merton Greeks
///
/// Theta is reported per calendar day; vega and rho per 1 percentage-point
/// move in volatility and rate respectively.
///
/// An expired option reports all five Greeks as exactly zero: the kinked
/// payoff has no well-defined sensitivities at expiry, and zero is the
/// chosen convention rather than a mathematical limit.
pub fn greeks(inputs: &OptionInputs) -> Greeks {
    if inputs.time_to_expiry <= 0.0 {
        return Greeks::zero();
    }

    let t = inputs.time_to_expiry;
    let spot = inputs.spot;
    let strike = inputs.strike;
    let vol = inputs.volatility;
    let rate = inputs.risk_free_rate;
    let div = inputs.dividend_yield;

    let d1 = d1(inputs);
    let d2 = d2(inputs);
    let sqrt_t = t.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let df = (-rate * t).exp();
    let div_factor = (-div * t).exp();

    let delta = match inputs.option_type {
        OptionType::Call => div_factor * norm_cdf(d1),
        OptionType::Put => div_factor * (norm_cdf(d1) - 1.0),
    };

    // Gamma (same for call and put)
    let gamma = div_factor * pdf_d1 / (spot * vol * sqrt_t);

    // Vega (same for call and put, per 1% vol move)
    let vega = 0.01 * spot * div_factor * pdf_d1 * sqrt_t;

    // Theta (per day)
    let term1 = -spot * div_factor * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta_per_year = match inputs.option_type {
        OptionType::Call => {
            term1 - rate * strike * df * norm_cdf(d2) + div * spot * div_factor * norm_cdf(d1)
        }
        OptionType::Put => {
            term1 + rate * strike * df * norm_cdf(-d2) - div * spot * div_factor * norm_cdf(-d1)
        }
    };
    let theta = theta_per_year / 365.0;

    // Rho (per 1% rate move)
    let rho = match inputs.option_type {
        OptionType::Call => 0.01 * strike * t * df * norm_cdf(d2),
        OptionType::Put => -0.01 * strike * t * df * norm_cdf(-d2),
    };

    Greeks::new(delta, gamma, theta, vega, rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        time: f64,
        vol: f64,
        rate: f64,
        div: f64,
    ) -> OptionInputs {
        OptionInputs::new(option_type, spot, strike, time, vol, rate, div)
    }

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
    }

    #[test]
    fn test_norm_pdf() {
        assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
        assert_eq!(norm_pdf(1.5), norm_pdf(-1.5));
    }

    #[test]
    fn test_bs_price_textbook() {
        // ATM call, 20% vol, 1 year, 5% rate: classic value ~10.4506
        let call = inputs(OptionType::Call, 100.0, 100.0, 1.0, 0.20, 0.05, 0.0);
        assert!((price(&call) - 10.4506).abs() < 0.001);
    }

    #[test]
    fn test_reference_contract() {
        // 30-day ATM call, 30% vol, 2.5% rate
        let call = inputs(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.30, 0.025, 0.0);
        let p = price(&call);
        assert!(p > 3.48 && p < 3.58, "price was {}", p);

        let g = greeks(&call);
        assert!((g.delta - 0.52).abs() < 0.02, "delta was {}", g.delta);
        assert!(g.theta < 0.0);
        assert!(g.vega > 0.0);
        assert!(g.rho > 0.0);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S*e^(-qT) - K*e^(-rT)
        let cases = [
            (100.0, 100.0, 0.25, 0.20, 0.05, 0.00),
            (110.0, 100.0, 1.00, 0.30, 0.03, 0.02),
            (90.0, 100.0, 0.08, 0.45, 0.00, 0.01),
            (500.0, 505.0, 0.50, 0.18, 0.045, 0.013),
        ];

        for (spot, strike, time, vol, rate, div) in cases {
            let call = inputs(OptionType::Call, spot, strike, time, vol, rate, div);
            let put = inputs(OptionType::Put, spot, strike, time, vol, rate, div);

            let lhs = price(&call) - price(&put);
            let rhs = spot * (-div * time).exp() - strike * (-rate * time).exp();
            assert!(
                (lhs - rhs).abs() < 1e-9,
                "parity violated for spot {}: {} vs {}",
                spot,
                lhs,
                rhs
            );
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let call = inputs(OptionType::Call, 110.0, 100.0, 0.0, 0.30, 0.025, 0.0);
        assert_eq!(price(&call), 10.0);

        let put = inputs(OptionType::Put, 90.0, 100.0, 0.0, 0.30, 0.025, 0.0);
        assert_eq!(price(&put), 10.0);

        let otm = inputs(OptionType::Call, 90.0, 100.0, 0.0, 0.30, 0.025, 0.0);
        assert_eq!(price(&otm), 0.0);

        assert_eq!(greeks(&call), Greeks::zero());
        assert_eq!(greeks(&put), Greeks::zero());
    }

    #[test]
    fn test_delta_bounds() {
        let spots = [70.0, 85.0, 100.0, 115.0, 130.0];
        let vols = [0.10, 0.30, 0.60];
        let times = [7.0 / 365.0, 0.25, 1.0];
        let (rate, div): (f64, f64) = (0.03, 0.02);

        for spot in spots {
            for vol in vols {
                for time in times {
                    let cap = (-div * time).exp();

                    let call = inputs(OptionType::Call, spot, 100.0, time, vol, rate, div);
                    let call_delta = greeks(&call).delta;
                    assert!(call_delta >= -1e-12 && call_delta <= cap + 1e-12);

                    let put = inputs(OptionType::Put, spot, 100.0, time, vol, rate, div);
                    let put_delta = greeks(&put).delta;
                    assert!(put_delta >= -cap - 1e-12 && put_delta <= 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_gamma_vega_shared_and_nonnegative() {
        let spots = [80.0, 100.0, 120.0];
        for spot in spots {
            let call = inputs(OptionType::Call, spot, 100.0, 0.25, 0.30, 0.025, 0.01);
            let put = inputs(OptionType::Put, spot, 100.0, 0.25, 0.30, 0.025, 0.01);

            let cg = greeks(&call);
            let pg = greeks(&put);

            assert!(cg.gamma >= 0.0);
            assert!(cg.vega >= 0.0);
            assert_eq!(cg.gamma, pg.gamma);
            assert_eq!(cg.vega, pg.vega);
        }
    }

    #[test]
    fn test_rho_signs() {
        let call = inputs(OptionType::Call, 100.0, 100.0, 0.5, 0.25, 0.03, 0.0);
        let put = inputs(OptionType::Put, 100.0, 100.0, 0.5, 0.25, 0.03, 0.0);
        assert!(greeks(&call).rho > 0.0);
        assert!(greeks(&put).rho < 0.0);
    }

    #[test]
    fn test_spot_monotonicity() {
        let spots: Vec<f64> = (70..=130).map(|s| s as f64).collect();

        let mut prev_call = f64::NEG_INFINITY;
        let mut prev_put = f64::INFINITY;
        for spot in spots {
            let call = inputs(OptionType::Call, spot, 100.0, 0.25, 0.30, 0.025, 0.0);
            let put = inputs(OptionType::Put, spot, 100.0, 0.25, 0.30, 0.025, 0.0);

            let cp = price(&call);
            let pp = price(&put);
            assert!(cp >= prev_call - 1e-12);
            assert!(pp <= prev_put + 1e-12);
            prev_call = cp;
            prev_put = pp;
        }
    }

    #[test]
    fn test_determinism() {
        let call = inputs(OptionType::Call, 102.5, 97.0, 0.19, 0.33, 0.021, 0.007);
        assert_eq!(price(&call).to_bits(), price(&call).to_bits());
        assert_eq!(greeks(&call), greeks(&call));
    }

    #[test]
    fn test_d1_d2_relation() {
        let call = inputs(OptionType::Call, 100.0, 95.0, 0.5, 0.25, 0.03, 0.01);
        let gap = d1(&call) - d2(&call);
        assert!((gap - 0.25 * 0.5_f64.sqrt()).abs() < 1e-12);
    }
}
