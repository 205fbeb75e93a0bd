use thiserror::Error;

/// Errors surfaced by the pricing kernel.
///
/// Every error is raised synchronously before or during computation; the
/// kernel never retries, logs, or returns NaN in place of a failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A market parameter violated its positivity constraint.
    #[error("invalid input: {parameter} must be strictly positive, got {value}")]
    InvalidInput { parameter: &'static str, value: f64 },

    /// Confidence level for the Monte Carlo interval must lie strictly
    /// between 0 and 1.
    #[error("confidence level must be strictly between 0 and 1, got {0}")]
    ConfidenceLevel(f64),

    /// A computation produced a non-finite intermediate despite validated
    /// inputs. Surfaced as fatal rather than swallowed.
    #[error("non-finite value in {context}: {value}")]
    DomainComputation { context: &'static str, value: f64 },
}

impl PricingError {
    pub(crate) fn invalid(parameter: &'static str, value: f64) -> Self {
        Self::InvalidInput { parameter, value }
    }

    pub(crate) fn non_finite(context: &'static str, value: f64) -> Self {
        Self::DomainComputation { context, value }
    }
}
