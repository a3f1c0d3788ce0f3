//! Option inputs and moneyness classification
//!
//! Immutable value objects consumed by the pricing engine. Every entity here
//! is constructed, used, and discarded within a single computation; there is
//! no lifecycle beyond function-call scope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{PricingError, PricingResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses `"call"` or `"put"` (case-insensitive). Anything else is an
    /// error: there is no fallback branch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Moneyness of an option relative to the current spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moneyness {
    Itm,
    Atm,
    Otm,
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Moneyness::Itm => write!(f, "ITM"),
            Moneyness::Atm => write!(f, "ATM"),
            Moneyness::Otm => write!(f, "OTM"),
        }
    }
}

/// Default ATM band: spot within 1% of the strike
pub const DEFAULT_ATM_THRESHOLD: f64 = 0.01;

/// Classify an option as ITM, ATM, or OTM.
///
/// Within `threshold` (relative to strike) of the strike the option counts as
/// ATM regardless of type; outside the band, a call is ITM above the strike
/// and a put below it. Requires `strike != 0`.
pub fn classify_moneyness(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    threshold: f64,
) -> Moneyness {
    let pct_diff = (spot - strike).abs() / strike;
    if pct_diff <= threshold {
        return Moneyness::Atm;
    }

    let itm = match option_type {
        OptionType::Call => spot > strike,
        OptionType::Put => spot < strike,
    };
    if itm {
        Moneyness::Itm
    } else {
        Moneyness::Otm
    }
}

/// Pricing inputs for a European option
///
/// All rates are annualized decimals (0.30 = 30%), time is in years
/// (calendar days / 365). Fields are public and nothing here enforces the
/// pricing preconditions; use [`OptionInputs::validated`] or
/// [`OptionInputs::validate`] at the boundary where inputs come from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionInputs {
    pub option_type: OptionType,
    /// Current underlying price
    pub spot: f64,
    /// Contract strike
    pub strike: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Annualized volatility, decimal form
    pub volatility: f64,
    /// Annualized risk-free rate, decimal form
    pub risk_free_rate: f64,
    /// Annualized dividend yield, decimal form
    pub dividend_yield: f64,
}

impl OptionInputs {
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            time_to_expiry,
            volatility,
            risk_free_rate,
            dividend_yield,
        }
    }

    /// Fail-fast constructor: rejects inputs that would make the closed-form
    /// formulas divide by zero or take the log of a non-positive number.
    pub fn validated(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> PricingResult<Self> {
        let inputs = Self::new(
            option_type,
            spot,
            strike,
            time_to_expiry,
            volatility,
            risk_free_rate,
            dividend_yield,
        );
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the pricing preconditions: `spot > 0`, `strike > 0`, and
    /// `volatility > 0` whenever `time_to_expiry > 0`.
    pub fn validate(&self) -> PricingResult<()> {
        if !(self.spot > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if !(self.strike > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if self.time_to_expiry > 0.0 && !(self.volatility > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "volatility must be positive for an unexpired option, got {}",
                self.volatility
            )));
        }
        Ok(())
    }

    /// Construct from a whole number of calendar days to expiry
    pub fn from_days(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        days_to_expiry: u32,
        volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> Self {
        Self::new(
            option_type,
            spot,
            strike,
            days_to_expiry as f64 / 365.0,
            volatility,
            risk_free_rate,
            dividend_yield,
        )
    }

    /// Time to expiry in calendar days
    pub fn days_to_expiry(&self) -> f64 {
        self.time_to_expiry * 365.0
    }

    /// Payoff if exercised at the current spot
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Moneyness with the default 1% ATM band
    pub fn moneyness(&self) -> Moneyness {
        classify_moneyness(
            self.option_type,
            self.spot,
            self.strike,
            DEFAULT_ATM_THRESHOLD,
        )
    }
}

/// Year fraction between two calendar dates (days / 365)
pub fn year_fraction(expiry: NaiveDate, from: NaiveDate) -> f64 {
    (expiry - from).num_days() as f64 / 365.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, PricingError::UnknownOptionType(_)));
    }

    #[test]
    fn test_moneyness_classification() {
        assert_eq!(
            classify_moneyness(OptionType::Call, 110.0, 100.0, 0.01),
            Moneyness::Itm
        );
        assert_eq!(
            classify_moneyness(OptionType::Call, 100.5, 100.0, 0.01),
            Moneyness::Atm
        );
        assert_eq!(
            classify_moneyness(OptionType::Put, 110.0, 100.0, 0.01),
            Moneyness::Otm
        );
        assert_eq!(
            classify_moneyness(OptionType::Put, 95.0, 100.0, 0.01),
            Moneyness::Itm
        );

        // Exactly on the band edge counts as ATM
        assert_eq!(
            classify_moneyness(OptionType::Call, 101.0, 100.0, 0.01),
            Moneyness::Atm
        );
        // Wider band, same inputs
        assert_eq!(
            classify_moneyness(OptionType::Call, 104.0, 100.0, 0.05),
            Moneyness::Atm
        );
    }

    #[test]
    fn test_validate() {
        let valid = OptionInputs::new(OptionType::Call, 100.0, 100.0, 0.25, 0.30, 0.025, 0.0);
        assert!(valid.validate().is_ok());

        let bad_spot = OptionInputs::new(OptionType::Call, -1.0, 100.0, 0.25, 0.30, 0.025, 0.0);
        assert!(bad_spot.validate().is_err());

        let bad_strike = OptionInputs::new(OptionType::Call, 100.0, 0.0, 0.25, 0.30, 0.025, 0.0);
        assert!(bad_strike.validate().is_err());

        let zero_vol = OptionInputs::new(OptionType::Put, 100.0, 100.0, 0.25, 0.0, 0.025, 0.0);
        assert!(zero_vol.validate().is_err());

        // Zero vol is fine for an already-expired option
        let expired = OptionInputs::new(OptionType::Put, 100.0, 100.0, 0.0, 0.0, 0.025, 0.0);
        assert!(expired.validate().is_ok());

        assert!(
            OptionInputs::validated(OptionType::Call, 100.0, 100.0, 0.25, 0.0, 0.025, 0.0)
                .is_err()
        );
    }

    #[test]
    fn test_from_days() {
        let inputs = OptionInputs::from_days(OptionType::Call, 100.0, 100.0, 30, 0.30, 0.025, 0.0);
        assert!((inputs.time_to_expiry - 30.0 / 365.0).abs() < 1e-15);
        assert!((inputs.days_to_expiry() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_year_fraction() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let yf = year_fraction(expiry, from);
        assert!((yf - 151.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_intrinsic_value() {
        let call = OptionInputs::new(OptionType::Call, 110.0, 100.0, 0.25, 0.30, 0.025, 0.0);
        assert_eq!(call.intrinsic_value(), 10.0);
        let put = OptionInputs::new(OptionType::Put, 110.0, 100.0, 0.25, 0.30, 0.025, 0.0);
        assert_eq!(put.intrinsic_value(), 0.0);
    }
}
