//! Display formatting and input help text
//!
//! Pure presentation helpers shared by the CLI and GUI front ends. Nothing
//! here feeds back into the pricing math.

/// Format a dollar value to two decimals
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a decimal fraction as a percentage to two decimals
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Input fields the front ends collect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    OptionType,
    SpotPrice,
    StrikePrice,
    DaysToExpiry,
    Volatility,
    RiskFreeRate,
    DividendYield,
}

/// Help text attached to each input control
pub fn tooltip(field: InputField) -> &'static str {
    match field {
        InputField::OptionType => {
            "Call options give the right to buy the underlying asset at the strike price. \
             Put options give the right to sell the underlying asset at the strike price."
        }
        InputField::SpotPrice => "The current market price of the underlying asset.",
        InputField::StrikePrice => "The price at which the option contract can be exercised.",
        InputField::DaysToExpiry => {
            "The number of calendar days until the option contract expires."
        }
        InputField::Volatility => {
            "The expected volatility of the underlying asset over the life of the option, \
             expressed as an annualized percentage."
        }
        InputField::RiskFreeRate => {
            "The interest rate of a risk-free investment, generally based on government \
             securities."
        }
        InputField::DividendYield => {
            "The annual dividend yield of the underlying asset, expressed as a percentage."
        }
    }
}
