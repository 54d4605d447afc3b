//! Core contract for iterative stochastic optimizers.
//!
//! A metaheuristic improves a candidate solution by repeatedly generating
//! a neighbor, evaluating it, and deciding whether to move to it. The
//! [`Metaheuristic`] trait captures exactly the points where concrete
//! algorithms differ (continuation, bookkeeping, neighbor generation,
//! acceptance, termination) and supplies the shared search loop as a
//! default [`run`](Metaheuristic::run) method.
//!
//! The loop minimizes: lower objective values are better. Maximization
//! problems are handled by negating the objective.
//!
//! # References
//!
//! - Blum & Roli (2003), "Metaheuristics in Combinatorial Optimization:
//!   Overview and Conceptual Comparison"
//! - Luke (2013), "Essentials of Metaheuristics"

mod types;

pub use types::{Guess, Metaheuristic, Solution};
