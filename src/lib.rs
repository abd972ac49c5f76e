//! # gbm-paths: Monte Carlo Price-Path Simulation
//!
//! A small library for simulating asset price paths under geometric
//! Brownian motion and averaging terminal values over repeated trials.
//!
//! ## Key Features
//!
//! - **Two discretization schemes**: a multiplicative Euler update in
//!   price space and the exact additive update in log-price space
//! - **Deterministic paths**: same seed → same series, with independent
//!   per-trial seeding for the averaging loop
//! - **Parallel trials**: path generation is a pure function, so the
//!   trial loop runs on Rayon with no shared state
//! - **Validated construction**: invalid drift, volatility, or horizon
//!   parameters fail fast with a descriptive error
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_paths::model::{GeomBrownMotion, PricesParam};
//! use gbm_paths::integration::Integration;
//! use gbm_paths::path::Prices;
//!
//! let motion = GeomBrownMotion::new(0.1, 0.3)?;
//! let params = PricesParam::new(1.0, 1, 12, motion)?;
//!
//! let mut path = Prices::new(params, Integration::Linear);
//! path.generate_prices(42);
//! println!("final price: {:.4}", path.final_price());
//! # Ok::<(), gbm_paths::SimError>(())
//! ```
//!
//! ## Mathematical Foundation
//!
//! The simulated process is `dS_t = μ S_t dt + σ S_t dW_t`. The linear
//! scheme discretizes it directly; the logarithmic scheme advances
//! `ln S_t` with the drift correction `ν = μ − σ²/2`, which is the
//! exact solution of the SDE between grid points.

// Module declarations
pub mod analytics;
pub mod error;
pub mod integration;
pub mod math_utils;
pub mod mc;
pub mod model;
pub mod output;
pub mod path;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use integration::Integration;
pub use model::{GeomBrownMotion, PricesParam};
pub use path::Prices;
