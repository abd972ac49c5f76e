// src/analytics.rs
//! Closed-Form Expectations for GBM
//!
//! Used to sanity-check Monte Carlo aggregates: the sample mean of the
//! simulated final values should converge to these as the trial count
//! grows.

use crate::model::PricesParam;

/// E[S_T] = s0 · exp(μ T) for the continuous-time process
pub fn expected_final_price(s0: f64, mu: f64, t: f64) -> f64 {
    s0 * (mu * t).exp()
}

/// E[ln S_T] = ln(s0) + (μ − σ²/2) T
pub fn expected_final_log_price(s0: f64, mu: f64, sigma: f64, t: f64) -> f64 {
    s0.ln() + (mu - sigma * sigma / 2.0) * t
}

/// Exact mean of the discrete linear scheme after its N − 1 updates:
/// s0 · (1 + μ Δt)^(N−1). Differs from the continuous mean by O(Δt).
pub fn expected_final_price_linear(params: &PricesParam) -> f64 {
    let dt = params.dt();
    let mu = params.motion().mu();
    params.s0() * (1.0 + mu * dt).powi(params.steps() as i32 - 1)
}

/// Exact mean of the discrete log scheme's terminal log-value:
/// ln(s0) + (μ − σ²/2) Δt (N−1)
pub fn expected_final_log_discrete(params: &PricesParam) -> f64 {
    let dt = params.dt();
    let mu = params.motion().mu();
    let sigma = params.motion().sigma();
    params.s0().ln() + (mu - sigma * sigma / 2.0) * dt * (params.steps() as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeomBrownMotion;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_final_price() {
        assert_relative_eq!(
            expected_final_price(1.0, 0.1, 1.0),
            0.1_f64.exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_expected_final_log_price() {
        // s0=1 → ln(s0)=0, so the expectation is just nu*T
        assert_relative_eq!(
            expected_final_log_price(1.0, 0.1, 0.3, 1.0),
            0.055,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_discrete_linear_mean_approaches_continuous() {
        let g = GeomBrownMotion::new(0.1, 0.3).unwrap();
        let fine = PricesParam::new(1.0, 1, 10_000, g).unwrap();
        let discrete = expected_final_price_linear(&fine);
        let continuous = expected_final_price(1.0, 0.1, 1.0);
        assert_relative_eq!(discrete, continuous, max_relative = 1e-3);
    }
}
