//! Standard-normal distribution provider.
//!
//! Both pricers depend only on Φ, Φ⁻¹ and a standard-normal sampler. The
//! trait keeps that dependency pluggable; [`StandardNormal`] is the default
//! implementation backed by `statrs`.

use rand::distributions::Distribution;
use rand::RngCore;
use statrs::distribution::{ContinuousCDF, Normal};

/// Standard-normal distribution interface used by the pricers.
pub trait NormalDistribution {
    /// Cumulative distribution function Φ(x).
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function Φ⁻¹(p) for p in (0, 1).
    fn inverse_cdf(&self, p: f64) -> f64;

    /// Fill `out` with independent standard-normal variates drawn from `rng`.
    fn fill_standard_normal(&self, rng: &mut dyn RngCore, out: &mut [f64]);
}

/// Default provider backed by `statrs::distribution::Normal(0, 1)`.
#[derive(Debug, Clone)]
pub struct StandardNormal {
    inner: Normal,
}

impl StandardNormal {
    pub fn new() -> Self {
        // Normal::new only fails for non-finite or non-positive std dev.
        let inner = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
        Self { inner }
    }
}

impl Default for StandardNormal {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalDistribution for StandardNormal {
    fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.inner.inverse_cdf(p)
    }

    fn fill_standard_normal(&self, rng: &mut dyn RngCore, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.inner.sample(rng);
        }
    }
}
