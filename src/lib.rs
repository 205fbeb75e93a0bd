//! # Pricer-Lib: European Option Valuation
//!
//! `pricer-lib` is a small computational kernel for valuing vanilla European
//! call and put options two independent ways:
//!
//! - **Analytic**: closed-form Black-Scholes valuation
//! - **Monte Carlo**: risk-neutral GBM simulation with a confidence interval
//!
//! Both pricers are stateless pure functions over the same five market
//! parameters; neither depends on the other.
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{analytic_price, monte_carlo_price, MonteCarloConfig, PricingInputs};
//!
//! let inputs = PricingInputs {
//!     spot: 100.0,
//!     strike: 100.0,
//!     volatility: 0.3,
//!     maturity: 1.0,
//!     risk_free_rate: 0.04,
//! };
//!
//! let analytic = analytic_price(&inputs)?;
//! println!("call {:.4}, put {:.4}", analytic.call, analytic.put);
//!
//! // Seeded for a reproducible run; leave the seed off in production
//! let config = MonteCarloConfig::fast(inputs).with_seed(42);
//! let mc = monte_carlo_price(&config)?;
//! println!("price {:.4} in [{:.4}, {:.4}]", mc.price, mc.lower_bound, mc.upper_bound);
//! # Ok::<(), pricer_lib::PricingError>(())
//! ```
//!
//! ## Error Handling
//!
//! Invalid inputs (non-positive spot, strike, volatility, or maturity, a
//! confidence level outside (0, 1), or a zero sample count) fail fast with a
//! typed [`PricingError`] before any computation runs. Non-finite
//! intermediates are surfaced as errors, never returned as silent NaN.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod dist;
pub mod error;
pub mod models;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::MonteCarloConfig;
pub use dist::{NormalDistribution, StandardNormal};
pub use error::PricingError;
pub use types::{AnalyticResult, MonteCarloResult, PricingInputs};

/// Price a European call and put with the closed-form Black-Scholes formula.
///
/// Deterministic: identical inputs always produce bit-identical outputs.
/// Uses the default `statrs`-backed standard-normal provider; use
/// [`models::analytic::price`] directly to plug in a different one.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] if spot, strike, volatility, or maturity is
/// not strictly positive; [`PricingError::DomainComputation`] if the
/// computation produces a non-finite value.
pub fn analytic_price(inputs: &PricingInputs) -> Result<AnalyticResult, PricingError> {
    models::analytic::price(inputs, &StandardNormal::new())
}

/// Price a European call by Monte Carlo simulation, with confidence bounds.
///
/// Output varies run-to-run unless `config.seed` is set. The returned
/// interval always satisfies `lower_bound <= price <= upper_bound`.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] for invalid market parameters or a zero
/// sample count, [`PricingError::ConfidenceLevel`] for a confidence level
/// outside (0, 1), and [`PricingError::DomainComputation`] for non-finite
/// intermediates.
pub fn monte_carlo_price(config: &MonteCarloConfig) -> Result<MonteCarloResult, PricingError> {
    models::monte_carlo::price(config, &StandardNormal::new())
}
