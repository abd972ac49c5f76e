// src/mc.rs
//! Repeated-Trial Averaging
//!
//! # Design
//!
//! Runs `trials` independent path simulations for both schemes and
//! reports the sample mean of the terminal values: final price for the
//! linear scheme, final log-price for the logarithmic one, each with a
//! standard error and a two-sided confidence half-width.
//!
//! Trials parallelize with rayon: every trial derives its own seed
//! from the base seed through [`RngFactory`](crate::rng::RngFactory),
//! builds its own series, and touches no shared state. Trial i uses
//! the same derived seed for its linear and logarithmic path, so the
//! two schemes see identical shock sequences and their estimates stay
//! comparable.

use crate::error::{validation::*, SimError, SimResult};
use crate::integration::Integration;
use crate::math_utils;
use crate::model::PricesParam;
use crate::path::simulate_path;
use crate::rng::RngFactory;
use rayon::prelude::*;

/// Configuration for the repeated-trial loop
#[derive(Debug, Clone, Copy)]
pub struct TrialConfig {
    pub params: PricesParam,
    pub trials: usize,
    pub seed: u64,
    /// Two-sided confidence level for the reported half-widths
    pub confidence: f64,
}

impl TrialConfig {
    /// Defaults matching the historical driver: 1000 trials, 95% CI
    pub fn new(params: PricesParam, seed: u64) -> Self {
        TrialConfig {
            params,
            trials: 1000,
            seed,
            confidence: 0.95,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        validate_trials(self.trials)?;
        validate_positive("confidence", self.confidence)?;
        if self.confidence >= 1.0 {
            return Err(SimError::InvalidConfiguration {
                field: "confidence".to_string(),
                reason: "must be strictly below 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Aggregate estimates over the trial loop
#[derive(Debug, Clone, Copy)]
pub struct TrialReport {
    pub trials: usize,
    /// Mean terminal price of the linear-scheme paths
    pub mean_final_price: f64,
    pub half_width_price: f64,
    /// Mean terminal log-price of the logarithmic-scheme paths
    pub mean_final_log_price: f64,
    pub half_width_log_price: f64,
}

/// Run the trial loop and average terminal values
///
/// Deterministic given the configuration, independent of thread count.
///
/// # Errors
///
/// Returns `SimError` for an invalid configuration, or
/// `NumericalInstability` when the accumulated estimates are not
/// finite or a variance estimate turns significantly negative.
pub fn run_trials(cfg: &TrialConfig) -> SimResult<TrialReport> {
    cfg.validate()?;
    let n = cfg.trials;
    let factory = RngFactory::new(cfg.seed);

    // Simulate in parallel, then sum in index order: float addition is
    // not associative, and the result must not depend on how rayon
    // splits the range.
    let finals: Vec<(f64, f64)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let trial_seed = factory.trial_seed(i as u64);

            let (_, lin) = simulate_path(&cfg.params, Integration::Linear, trial_seed);
            let (_, log) = simulate_path(&cfg.params, Integration::Logarithmic, trial_seed);

            (lin[lin.len() - 1], log[log.len() - 1])
        })
        .collect();

    let (mut sum_lin, mut sum_lin_sq, mut sum_log, mut sum_log_sq) = (0.0, 0.0, 0.0, 0.0);
    for &(fin_lin, fin_log) in &finals {
        sum_lin += fin_lin;
        sum_lin_sq += fin_lin * fin_lin;
        sum_log += fin_log;
        sum_log_sq += fin_log * fin_log;
    }

    let z = math_utils::two_sided_z(cfg.confidence);
    let (mean_lin, half_lin) = mean_and_half_width("linear trials", sum_lin, sum_lin_sq, n, z)?;
    let (mean_log, half_log) =
        mean_and_half_width("logarithmic trials", sum_log, sum_log_sq, n, z)?;

    Ok(TrialReport {
        trials: n,
        mean_final_price: mean_lin,
        half_width_price: half_lin,
        mean_final_log_price: mean_log,
        half_width_log_price: half_log,
    })
}

fn mean_and_half_width(
    method: &str,
    sum: f64,
    sum_sq: f64,
    n: usize,
    z: f64,
) -> SimResult<(f64, f64)> {
    let mean = sum / n as f64;
    if !mean.is_finite() {
        return Err(SimError::NumericalInstability {
            method: method.to_string(),
            reason: format!("mean estimate is not finite: {}", mean),
        });
    }

    if n == 1 {
        return Ok((mean, f64::INFINITY));
    }

    let mut sample_var = (sum_sq - sum * mean) / (n as f64 - 1.0);
    if sample_var < 0.0 {
        if sample_var > -1e-10 {
            // Round-off from the sum-of-squares formula
            sample_var = 0.0;
        } else {
            return Err(SimError::NumericalInstability {
                method: method.to_string(),
                reason: format!(
                    "variance estimate became significantly negative: {}",
                    sample_var
                ),
            });
        }
    }

    Ok((mean, z * (sample_var / n as f64).sqrt()))
}
