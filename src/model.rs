// src/model.rs
//! Process parameters for the simulated asset
//!
//! `GeomBrownMotion` holds the drift/volatility pair of the GBM
//! process; `PricesParam` bundles it with the discretization of the
//! simulation horizon. Both validate on construction and are immutable
//! afterwards, so a value of either type is always usable.

use crate::error::{validation::*, SimResult};

/// Drift and volatility parameters of a geometric Brownian motion
///
/// Invariant: `mu > 0`, `sigma >= 0`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomBrownMotion {
    mu: f64,
    sigma: f64,
}

impl GeomBrownMotion {
    pub fn new(mu: f64, sigma: f64) -> SimResult<Self> {
        validate_finite("mu", mu)?;
        validate_positive("mu", mu)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        Ok(GeomBrownMotion { mu, sigma })
    }

    /// Expected rate of return per unit time
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of returns per unit time
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

/// Simulation configuration: initial price, horizon, and process parameters
///
/// Invariant: `s0 > 0`, `years > 0`, `periods > 0`. Copied by value
/// into each path; paths never share parameter storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricesParam {
    s0: f64,
    years: u32,
    periods: u32,
    motion: GeomBrownMotion,
}

impl PricesParam {
    pub fn new(s0: f64, years: u32, periods: u32, motion: GeomBrownMotion) -> SimResult<Self> {
        validate_finite("s0", s0)?;
        validate_positive("s0", s0)?;
        validate_count("years", years)?;
        validate_count("periods", periods)?;
        Ok(PricesParam {
            s0,
            years,
            periods,
            motion,
        })
    }

    /// Starting price
    pub fn s0(&self) -> f64 {
        self.s0
    }

    /// Horizon in years
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Number of periods per year
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// GBM parameters
    pub fn motion(&self) -> &GeomBrownMotion {
        &self.motion
    }

    /// Total number of discretization steps over the horizon
    pub fn steps(&self) -> usize {
        self.years as usize * self.periods as usize
    }

    /// Time step in years
    pub fn dt(&self) -> f64 {
        1.0 / self.periods as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gbm_valid_parameters() {
        let g = GeomBrownMotion::new(0.1, 0.3).unwrap();
        assert_eq!(g.mu(), 0.1);
        assert_eq!(g.sigma(), 0.3);
    }

    #[test]
    fn test_gbm_zero_sigma_is_valid() {
        assert!(GeomBrownMotion::new(0.1, 0.0).is_ok());
    }

    #[test]
    fn test_gbm_rejects_bad_parameters() {
        assert!(GeomBrownMotion::new(0.0, 0.3).is_err());
        assert!(GeomBrownMotion::new(-0.1, 0.3).is_err());
        assert!(GeomBrownMotion::new(0.1, -0.3).is_err());
        assert!(GeomBrownMotion::new(f64::NAN, 0.3).is_err());
    }

    #[test]
    fn test_params_valid() {
        let g = GeomBrownMotion::new(0.1, 0.3).unwrap();
        let p = PricesParam::new(1.0, 1, 12, g).unwrap();
        assert_eq!(p.s0(), 1.0);
        assert_eq!(p.years(), 1);
        assert_eq!(p.periods(), 12);
        assert_eq!(p.steps(), 12);
        assert_relative_eq!(p.dt(), 1.0 / 12.0);
    }

    #[test]
    fn test_params_rejects_bad_values() {
        let g = GeomBrownMotion::new(0.1, 0.3).unwrap();
        assert!(PricesParam::new(0.0, 1, 12, g).is_err());
        assert!(PricesParam::new(-1.0, 1, 12, g).is_err());
        assert!(PricesParam::new(1.0, 0, 12, g).is_err());
        assert!(PricesParam::new(1.0, 1, 0, g).is_err());
    }

    #[test]
    fn test_steps_multi_year() {
        let g = GeomBrownMotion::new(0.05, 0.2).unwrap();
        let p = PricesParam::new(100.0, 3, 252, g).unwrap();
        assert_eq!(p.steps(), 756);
    }
}
