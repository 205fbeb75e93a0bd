pub mod analytic;
pub mod monte_carlo;
