//! Closed-form Black-Scholes valuation of European options.

use crate::dist::NormalDistribution;
use crate::error::PricingError;
use crate::types::{AnalyticResult, PricingInputs};

/// Price a European call and put under Black-Scholes assumptions
/// (continuous dividend yield of zero).
///
/// Pure recomputation on every call; no caching and no side effects. Inputs
/// are validated up front, and a non-finite result is surfaced as a
/// [`PricingError::DomainComputation`] rather than returned silently.
pub fn price<N: NormalDistribution>(
    inputs: &PricingInputs,
    dist: &N,
) -> Result<AnalyticResult, PricingError> {
    inputs.validate()?;

    let PricingInputs {
        spot,
        strike,
        volatility,
        maturity,
        risk_free_rate,
    } = *inputs;

    let vol_sqrt_t = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (risk_free_rate + 0.5 * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discount = inputs.discount_factor();

    let call = spot * dist.cdf(d1) - strike * discount * dist.cdf(d2);
    let put = strike * discount * dist.cdf(-d2) - spot * dist.cdf(-d1);

    if !call.is_finite() {
        return Err(PricingError::non_finite("black_scholes call", call));
    }
    if !put.is_finite() {
        return Err(PricingError::non_finite("black_scholes put", put));
    }

    Ok(AnalyticResult { call, put })
}
