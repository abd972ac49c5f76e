// src/path.rs
//! Single-Path Generation
//!
//! A [`Prices`] instance owns one discretized sample path: a time grid
//! and a value series of fixed length `years * periods`, plus the
//! [`Integration`] tag picking the advance rule. The series is filled
//! in one O(N) pass by [`Prices::generate_prices`]; index `i` is
//! written exactly once and reads only index `i - 1`.
//!
//! Generation is also exposed as the pure function [`simulate_path`],
//! which the repeated-trial loop runs in parallel over independent
//! seeds — each call allocates its own series and RNG, so there is no
//! shared state to protect.

use crate::integration::Integration;
use crate::model::PricesParam;
use crate::rng;

/// Compute one full sample path as a `(times, values)` pair
///
/// Deterministic given `seed`. For the Logarithmic scheme the values
/// are log-prices, starting from `ln(s0)`.
pub fn simulate_path(params: &PricesParam, kind: Integration, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let n = params.steps();
    let dt = params.dt();
    let mu = params.motion().mu();
    let sigma = params.motion().sigma();

    let mut times = vec![0.0; n];
    let mut values = vec![0.0; n];
    values[0] = kind.initial_state(params.s0());

    let mut rng = rng::seed_rng_from_u64(seed);
    for i in 1..n {
        let shock = rng::get_normal_draw(&mut rng);
        times[i] = i as f64 * dt;
        values[i] = kind.advance(values[i - 1], mu, dt, sigma, shock);
    }

    (times, values)
}

/// One simulated price path with its bound discretization scheme
///
/// Two states: freshly constructed (`values[0]` set, rest zero) and
/// generated. Re-running `generate_prices` with the same seed
/// re-derives the identical series; callers needing an independent
/// second path should build a fresh instance with a different seed.
#[derive(Debug, Clone)]
pub struct Prices {
    params: PricesParam,
    kind: Integration,
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Prices {
    pub fn new(params: PricesParam, kind: Integration) -> Self {
        let n = params.steps();
        let mut values = vec![0.0; n];
        values[0] = kind.initial_state(params.s0());
        Prices {
            params,
            kind,
            times: vec![0.0; n],
            values,
        }
    }

    /// Fill the series from `seed`, overwriting indices 1..N
    pub fn generate_prices(&mut self, seed: u64) {
        let (times, values) = simulate_path(&self.params, self.kind, seed);
        self.times = times;
        self.values = values;
    }

    /// Last element of the value series, in the scheme's working space
    pub fn final_price(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Terminal value mapped to price level (`exp` for Logarithmic)
    pub fn final_level(&self) -> f64 {
        self.kind.to_price(self.final_price())
    }

    /// Read-only view of the paired (times, values) series
    pub fn ts_seq(&self) -> (&[f64], &[f64]) {
        (&self.times, &self.values)
    }

    pub fn params(&self) -> &PricesParam {
        &self.params
    }

    pub fn kind(&self) -> Integration {
        self.kind
    }
}
