//! Options Greeks CLI
//!
//! Prints price, Greeks, and moneyness for a contract, or the full analysis
//! (including sensitivity curves) as JSON.
//!
//! Usage: `cli [call|put] [json]`

use serde::Serialize;

use greekscope::fmt::{format_currency, format_percentage};
use greekscope::prelude::*;

#[derive(Debug, Serialize)]
struct AnalysisReport {
    inputs: OptionInputs,
    price: f64,
    intrinsic_value: f64,
    time_value: f64,
    moneyness: Moneyness,
    greeks: Greeks,
    price_vs_spot: Vec<[f64; 2]>,
    price_vs_volatility: Vec<[f64; 2]>,
    price_vs_time: Vec<[f64; 2]>,
}

fn build_report(inputs: &OptionInputs) -> AnalysisReport {
    let price = bs_price(inputs);
    let intrinsic_value = inputs.intrinsic_value();

    AnalysisReport {
        inputs: *inputs,
        price,
        intrinsic_value,
        time_value: price - intrinsic_value,
        moneyness: inputs.moneyness(),
        greeks: bs_greeks(inputs),
        price_vs_spot: price_curve(inputs, SweepVariable::Spot),
        price_vs_volatility: price_curve(inputs, SweepVariable::Volatility),
        price_vs_time: price_curve(inputs, SweepVariable::TimeToExpiry),
    }
}

fn print_analysis(inputs: &OptionInputs) {
    println!("Options Greeks Calculator");
    println!("=========================\n");

    println!("{} Option:", inputs.option_type);
    println!("  Spot: {}", format_currency(inputs.spot));
    println!("  Strike: {}", format_currency(inputs.strike));
    println!("  Time: {:.0} days", inputs.days_to_expiry());
    println!("  Vol: {}", format_percentage(inputs.volatility));
    println!("  Rate: {}", format_percentage(inputs.risk_free_rate));
    println!("  Div: {}\n", format_percentage(inputs.dividend_yield));

    let price = bs_price(inputs);
    let intrinsic = inputs.intrinsic_value();

    println!("Option Analysis:");
    println!("  Price: {}", format_currency(price));
    println!("  Intrinsic Value: {}", format_currency(intrinsic));
    println!("  Time Value: {}", format_currency(price - intrinsic));
    println!("  Status: {}\n", inputs.moneyness());

    let greeks = bs_greeks(inputs);
    println!("Greeks:");
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Theta: {:.4} (per day)", greeks.theta);
    println!("  Vega: {:.4} (per 1% vol)", greeks.vega);
    println!("  Rho: {:.4} (per 1% rate)", greeks.rho);

    // Sweep preview: first, middle, and last sample of the spot curve
    let curve = price_curve(inputs, SweepVariable::Spot);
    if let (Some(first), Some(mid), Some(last)) =
        (curve.first(), curve.get(curve.len() / 2), curve.last())
    {
        println!("\nPrice vs Underlying ({} samples):", curve.len());
        for [spot, price] in [*first, *mid, *last] {
            println!(
                "  spot {} -> {}",
                format_currency(spot),
                format_currency(price)
            );
        }
    }
}

fn main() {
    let mut option_type = OptionType::Call;
    let mut as_json = false;

    for arg in std::env::args().skip(1) {
        if arg == "json" {
            as_json = true;
            continue;
        }
        match arg.parse::<OptionType>() {
            Ok(parsed) => option_type = parsed,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Usage: cli [call|put] [json]");
                std::process::exit(1);
            }
        }
    }

    let inputs = OptionInputs::from_days(option_type, 100.0, 100.0, 30, 0.30, 0.025, 0.0);
    if let Err(e) = inputs.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if as_json {
        match serde_json::to_string_pretty(&build_report(&inputs)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_analysis(&inputs);
}
