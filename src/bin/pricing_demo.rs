// src/bin/pricing_demo.rs

//! Demonstration of the two pricing entry points
//!
//! Values a single at-the-money European option with the closed-form
//! Black-Scholes formula and with a one-million-path Monte Carlo run, then
//! prints both results side by side.

use anyhow::Result;
use pricer_lib::{analytic_price, monte_carlo_price, MonteCarloConfig, PricingInputs};

fn main() -> Result<()> {
    println!("European Option Pricing Demo");
    println!("============================");

    let inputs = PricingInputs {
        spot: 100.0,
        strike: 100.0,
        volatility: 0.3,
        maturity: 1.0,
        risk_free_rate: 0.04,
    };

    println!("Spot: {:.0}  Strike: {:.0}", inputs.spot, inputs.strike);
    println!(
        "Volatility: {:.0}%  Maturity: {:.1}y  Rate: {:.1}%",
        inputs.volatility * 100.0,
        inputs.maturity,
        inputs.risk_free_rate * 100.0
    );

    let analytic = analytic_price(&inputs)?;
    println!(
        "\nAnalytic:    (call {:.6}, put {:.6})",
        analytic.call, analytic.put
    );

    let config = MonteCarloConfig::production(inputs);
    let mc = monte_carlo_price(&config)?;
    println!(
        "Monte Carlo: {:.6}  [{:.6}, {:.6}]  ({} samples, {:.0}% confidence)",
        mc.price,
        mc.lower_bound,
        mc.upper_bound,
        config.sample_count,
        config.confidence_level * 100.0
    );
    println!("Interval half-width: {:.6}", mc.half_width());

    Ok(())
}
