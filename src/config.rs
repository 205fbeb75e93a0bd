use crate::error::PricingError;
use crate::types::PricingInputs;

/// Configuration for the Monte Carlo pricer.
///
/// Wraps the shared market parameters together with the simulation-specific
/// knobs: how many paths to draw, how much probability mass the reported
/// interval should capture, and an optional seed for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    /// Market parameters for the simulated option
    pub inputs: PricingInputs,

    /// Number of independent terminal-price draws (must be > 0)
    #[cfg_attr(feature = "serde", serde(default = "default_sample_count"))]
    pub sample_count: usize,

    /// Two-sided interval coverage, strictly in (0, 1) (e.g., 0.95)
    #[cfg_attr(feature = "serde", serde(default = "default_confidence_level"))]
    pub confidence_level: f64,

    /// Random seed for reproducibility; `None` draws from entropy
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Production-grade configuration: 10^6 samples at 95% confidence.
    pub fn production(inputs: PricingInputs) -> Self {
        Self {
            inputs,
            sample_count: default_sample_count(),
            confidence_level: default_confidence_level(),
            seed: None,
        }
    }

    /// Fast configuration for development and testing: 10^5 samples.
    pub fn fast(inputs: PricingInputs) -> Self {
        Self {
            sample_count: 100_000,
            ..Self::production(inputs)
        }
    }

    /// Minimal configuration for quick validation: 10^4 samples.
    pub fn minimal(inputs: PricingInputs) -> Self {
        Self {
            sample_count: 10_000,
            ..Self::production(inputs)
        }
    }

    /// Fix the random seed so repeated runs produce identical results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the simulation invariants on top of the market-parameter ones.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.inputs.validate()?;
        if self.sample_count == 0 {
            return Err(PricingError::invalid("sample_count", 0.0));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(PricingError::ConfidenceLevel(self.confidence_level));
        }
        Ok(())
    }
}

fn default_sample_count() -> usize {
    1_000_000
}

fn default_confidence_level() -> f64 {
    0.95
}
