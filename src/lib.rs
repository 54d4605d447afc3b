//! Pluggable metaheuristic optimization, specialized by Simulated Annealing.
//!
//! The crate splits search into three pieces:
//!
//! - **Optimization contract**: the [`metaheuristic::Metaheuristic`] trait
//!   carries the generic evaluate-generate-accept loop as a default `run`
//!   method; algorithms implement only the per-iteration hooks.
//! - **Simulated Annealing (SA)**: a single-solution trajectory optimizer
//!   with pluggable cooling schedules, Metropolis acceptance of worsening
//!   moves, and separate global-best tracking.
//! - **Random source**: an injectable uniform/Gaussian generator, seedable
//!   for reproducible runs.
//!
//! All searches minimize: lower objective values are better. To maximize,
//! negate the objective.
//!
//! # Examples
//!
//! ```
//! use simmer::metaheuristic::Metaheuristic;
//! use simmer::sa::{SaConfig, SimulatedAnnealing};
//!
//! let config = SaConfig::default().with_seed(42);
//! let mut annealer = SimulatedAnnealing::new(config);
//!
//! let solution = annealer.run(vec![3.0], |guess| guess[0] * guess[0]);
//! assert!(solution.value < 9.0);
//! ```
//!
//! # Architecture
//!
//! The crate contains no domain-specific concepts. Objective functions
//! are opaque callables from a point in R^n to a scalar, so scheduling,
//! curve fitting, layout, etc. are all defined by consumers.

pub mod metaheuristic;
pub mod random;
pub mod sa;
