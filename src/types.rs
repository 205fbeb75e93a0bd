use crate::error::PricingError;

/// Market parameters shared by both pricers.
///
/// All fields except `risk_free_rate` must be strictly positive; `validate`
/// enforces this before any computation so that invalid inputs fail fast
/// instead of propagating NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Current price of the underlying asset
    pub spot: f64,
    /// Exercise price of the option
    pub strike: f64,
    /// Annualized volatility of log-returns (as decimal, e.g., 0.3 for 30%)
    pub volatility: f64,
    /// Time to expiration in years
    pub maturity: f64,
    /// Continuously compounded risk-free rate (may be negative)
    pub risk_free_rate: f64,
}

impl PricingInputs {
    /// Check the positivity invariants on all market parameters.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("maturity", self.maturity),
        ];
        for (parameter, value) in positive {
            if !(value > 0.0) {
                return Err(PricingError::invalid(parameter, value));
            }
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::non_finite("risk_free_rate", self.risk_free_rate));
        }
        Ok(())
    }

    /// Discount factor e^(-r*T) over the life of the option.
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.maturity).exp()
    }
}

/// Closed-form valuation output: one price per option side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyticResult {
    /// European call price
    pub call: f64,
    /// European put price
    pub put: f64,
}

/// Simulation valuation output with a two-sided confidence interval.
///
/// Invariant: `lower_bound <= price <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloResult {
    /// Discounted mean payoff across all simulated paths
    pub price: f64,
    /// Lower edge of the confidence interval
    pub lower_bound: f64,
    /// Upper edge of the confidence interval
    pub upper_bound: f64,
}

impl MonteCarloResult {
    /// Half-width of the confidence interval.
    pub fn half_width(&self) -> f64 {
        0.5 * (self.upper_bound - self.lower_bound)
    }
}
