//! Random number source for stochastic search.
//!
//! A stateful generator producing uniform doubles in `[0, 1)` and
//! standard-normal ("Gaussian") doubles. The Gaussian stream uses the
//! polar Box-Muller method, which yields two samples per transform; the
//! second sample is buffered so every other call is nearly free.
//!
//! The source is an explicit value, injected wherever randomness is
//! needed. Seeding it makes a whole search trajectory reproducible.
//!
//! # References
//!
//! - Box & Muller (1958), "A Note on the Generation of Random Normal Deviates"
//! - Marsaglia & Bray (1964), "A Convenient Method for Generating Normal Variables"

mod source;

pub use source::RandomSource;
