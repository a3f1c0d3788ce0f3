//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use greekscope::prelude::*;

fn main() {
    // Option parameters
    let inputs = OptionInputs::new(
        OptionType::Call,
        500.0, // spot
        505.0, // strike
        0.25,  // 3 months
        0.20,  // 20% volatility
        0.05,  // 5% risk-free rate
        0.01,  // 1% dividend yield
    );

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", inputs.spot);
    println!("Strike:   ${:.2}", inputs.strike);
    println!(
        "Time:     {:.2} years ({:.0} days)",
        inputs.time_to_expiry,
        inputs.days_to_expiry()
    );
    println!("Rate:     {:.1}%", inputs.risk_free_rate * 100.0);
    println!("Div:      {:.1}%", inputs.dividend_yield * 100.0);
    println!("Vol:      {:.1}%\n", inputs.volatility * 100.0);

    // Price call option
    let call_price = bs_price(&inputs);
    println!("Call Price: ${:.4}", call_price);

    // Price put option
    let mut put_inputs = inputs;
    put_inputs.option_type = OptionType::Put;
    let put_price = bs_price(&put_inputs);
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S*e^(-qT) - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = inputs.spot * (-inputs.dividend_yield * inputs.time_to_expiry).exp()
        - inputs.strike * (-inputs.risk_free_rate * inputs.time_to_expiry).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S*e^(-qT) - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    // Calculate Greeks for the call
    println!("\n=== Greeks (Call) ===\n");
    let greeks = bs_greeks(&inputs);
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.6}", greeks.gamma);
    println!("Theta:  {:.4} (per day)", greeks.theta);
    println!("Vega:   {:.4} (per 1% vol)", greeks.vega);
    println!("Rho:    {:.4} (per 1% rate)", greeks.rho);

    // Moneyness
    println!("\n=== Moneyness ===\n");
    println!("Status: {}", inputs.moneyness());
    println!("Intrinsic value: ${:.4}", inputs.intrinsic_value());
    println!("Time value: ${:.4}", call_price - inputs.intrinsic_value());

    // Sensitivity sweep preview
    println!("\n=== Price vs Underlying ===\n");
    let curve = price_curve(&inputs, SweepVariable::Spot);
    for &[spot, price] in curve.iter().step_by(20) {
        println!("  spot ${:>7.2} -> ${:>7.4}", spot, price);
    }
}
