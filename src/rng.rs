// src/rng.rs
//! Random Number Generation for the Path Simulator
//!
//! # Design Philosophy
//!
//! Monte Carlo trials need random numbers with two properties:
//! 1. **Reproducibility**: same seed → same path (critical for debugging/validation)
//! 2. **Independence**: separate trials must draw from independent streams
//!
//! A single path is generated from a `StdRng` seeded once. For the
//! repeated-trial loop, `RngFactory` maps `(base_seed, trial_id)` to an
//! independent stream by running the pair through a splitmix64-style
//! mix before seeding, so trial i and trial i+1 never share a stream
//! even when the base seed is small.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Derive a well-mixed seed from a base seed and a trial index.
///
/// Splitmix64 finalizer: adjacent trial indices map to distant seeds.
pub fn mix_seed(base_seed: u64, trial_id: u64) -> u64 {
    let mut z = base_seed.wrapping_add(trial_id.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// RNG factory for reproducible, independently seeded trials
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Seed for a specific trial, independent of every other trial's seed
    pub fn trial_seed(&self, trial_id: u64) -> u64 {
        mix_seed(self.base_seed, trial_id)
    }

    /// Create a seeded RNG for a specific trial
    pub fn create_rng(&self, trial_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.trial_seed(trial_id))
    }
}

/// Seed a standard RNG directly (single-path use)
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw one standard-normal shock
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_reproducibility() {
        let mut rng1 = seed_rng_from_u64(42);
        let mut rng2 = seed_rng_from_u64(42);

        for _ in 0..100 {
            assert_eq!(get_normal_draw(&mut rng1), get_normal_draw(&mut rng2));
        }
    }

    #[test]
    fn test_factory_different_trials() {
        let factory = RngFactory::new(42);

        let mut rng1 = factory.create_rng(0);
        let mut rng2 = factory.create_rng(1);

        let vals1: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng1)).collect();
        let vals2: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng2)).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_mix_seed_spreads_adjacent_indices() {
        let a = mix_seed(7, 0);
        let b = mix_seed(7, 1);
        assert_ne!(a, b);
        // Small bases must not collide with small indices either
        assert_ne!(mix_seed(0, 1), mix_seed(1, 0));
    }

    #[test]
    fn test_normal_distribution_moments() {
        let factory = RngFactory::new(42);
        let mut rng = factory.create_rng(0);

        let samples: Vec<f64> = (0..10000).map(|_| get_normal_draw(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }
}
