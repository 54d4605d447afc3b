//! Annealing configuration and cooling schedules.

use std::fmt;
use std::sync::Arc;

/// Rule for lowering the temperature between epochs.
///
/// # References
///
/// - Geometric: the standard exponential decay, typical `alpha` 0.8-0.99
/// - Linear: fixed decrement per epoch
/// - Custom: any caller-supplied map from current to next temperature
#[derive(Clone)]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_{k+1} = T_k - beta`.
    ///
    /// Can drive the temperature negative; the search then stops at the
    /// next continuation check.
    Linear {
        /// Decrement applied per epoch.
        beta: f64,
    },

    /// Arbitrary cooling: `T_{k+1} = f(T_k)`.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl CoolingSchedule {
    /// Wraps a closure as a [`CoolingSchedule::Custom`] schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use simmer::sa::CoolingSchedule;
    ///
    /// let halving = CoolingSchedule::custom(|t| t / 2.0);
    /// assert_eq!(halving.next_temperature(8.0), 4.0);
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        CoolingSchedule::Custom(Arc::new(f))
    }

    /// Applies the schedule once to `temperature`.
    pub fn next_temperature(&self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => alpha * temperature,
            CoolingSchedule::Linear { beta } => temperature - beta,
            CoolingSchedule::Custom(f) => f(temperature),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl fmt::Debug for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolingSchedule::Geometric { alpha } => {
                f.debug_struct("Geometric").field("alpha", alpha).finish()
            }
            CoolingSchedule::Linear { beta } => {
                f.debug_struct("Linear").field("beta", beta).finish()
            }
            CoolingSchedule::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolingSchedule::Geometric { alpha } => write!(f, "geometric(alpha = {alpha})"),
            CoolingSchedule::Linear { beta } => write!(f, "linear(beta = {beta})"),
            CoolingSchedule::Custom(_) => write!(f, "custom"),
        }
    }
}

/// Configuration for the Simulated Annealing engine.
///
/// All values have working defaults; out-of-range values are clamped at
/// engine construction (temperatures floor to 0, budgets floor to 1)
/// rather than rejected.
///
/// # Examples
///
/// ```
/// use simmer::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(1e-6)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Temperature floor. The search stops once T is no longer above this.
    pub min_temperature: f64,

    /// Cooling schedule applied at each epoch boundary.
    pub cooling: CoolingSchedule,

    /// Consecutive-rejection budget. The search stops after this many
    /// rejections in a row without an improving accept.
    pub max_rejects: usize,

    /// Iterations per epoch before the temperature is lowered.
    pub max_runs: usize,

    /// Accepted moves per epoch before the temperature is lowered early.
    pub max_accepts: usize,

    /// Deadband half-width: objective deltas smaller than this count as
    /// neither improvement nor deterioration.
    pub min_diff: f64,

    /// Boltzmann-like constant scaling the acceptance temperature.
    pub k: f64,

    /// Random seed for reproducibility. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 1e-10,
            cooling: CoolingSchedule::default(),
            max_rejects: 2500,
            max_runs: 500,
            max_accepts: 15,
            min_diff: 1e-8,
            k: 1.0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_rejects(mut self, n: usize) -> Self {
        self.max_rejects = n;
        self
    }

    pub fn with_max_runs(mut self, n: usize) -> Self {
        self.max_runs = n;
        self
    }

    pub fn with_max_accepts(mut self, n: usize) -> Self {
        self.max_accepts = n;
        self
    }

    pub fn with_min_diff(mut self, d: f64) -> Self {
        self.min_diff = d;
        self
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1.0).abs() < 1e-12);
        assert!((config.min_temperature - 1e-10).abs() < 1e-20);
        assert_eq!(config.max_rejects, 2500);
        assert_eq!(config.max_runs, 500);
        assert_eq!(config.max_accepts, 15);
        assert!((config.min_diff - 1e-8).abs() < 1e-18);
        assert!((config.k - 1.0).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(matches!(
            config.cooling,
            CoolingSchedule::Geometric { alpha } if (alpha - 0.95).abs() < 1e-12
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_min_temperature(0.5)
            .with_cooling(CoolingSchedule::Linear { beta: 0.1 })
            .with_max_rejects(10)
            .with_max_runs(20)
            .with_max_accepts(5)
            .with_min_diff(1e-4)
            .with_k(2.0)
            .with_seed(7);

        assert_eq!(config.initial_temperature, 50.0);
        assert_eq!(config.min_temperature, 0.5);
        assert_eq!(config.max_rejects, 10);
        assert_eq!(config.max_runs, 20);
        assert_eq!(config.max_accepts, 5);
        assert_eq!(config.min_diff, 1e-4);
        assert_eq!(config.k, 2.0);
        assert_eq!(config.seed, Some(7));
        assert!(matches!(config.cooling, CoolingSchedule::Linear { .. }));
    }

    #[test]
    fn test_geometric_next_temperature() {
        let schedule = CoolingSchedule::Geometric { alpha: 0.5 };
        assert_eq!(schedule.next_temperature(100.0), 50.0);
        assert_eq!(schedule.next_temperature(0.0), 0.0);
    }

    #[test]
    fn test_linear_next_temperature() {
        let schedule = CoolingSchedule::Linear { beta: 0.25 };
        assert_eq!(schedule.next_temperature(1.0), 0.75);
        // Linear cooling is allowed to overshoot below zero.
        assert_eq!(schedule.next_temperature(0.1), -0.15);
    }

    #[test]
    fn test_custom_next_temperature() {
        let schedule = CoolingSchedule::custom(|t| t * t);
        assert_eq!(schedule.next_temperature(0.5), 0.25);
    }

    #[test]
    fn test_clone_shares_custom_closure() {
        let schedule = CoolingSchedule::custom(|t| t - 1.0);
        let cloned = schedule.clone();
        assert_eq!(
            schedule.next_temperature(5.0),
            cloned.next_temperature(5.0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CoolingSchedule::Geometric { alpha: 0.95 }.to_string(),
            "geometric(alpha = 0.95)"
        );
        assert_eq!(
            CoolingSchedule::Linear { beta: 0.1 }.to_string(),
            "linear(beta = 0.1)"
        );
        assert_eq!(CoolingSchedule::custom(|t| t).to_string(), "custom");
    }

    #[test]
    fn test_debug_custom_does_not_panic() {
        let schedule = CoolingSchedule::custom(|t| t);
        assert!(format!("{schedule:?}").contains("Custom"));
    }

    proptest! {
        #[test]
        fn prop_geometric_cooling_decreases(
            alpha in 0.01f64..0.99,
            t in 1.0f64..1e6,
        ) {
            let schedule = CoolingSchedule::Geometric { alpha };
            let next = schedule.next_temperature(t);
            prop_assert!(next < t);
            prop_assert!(next >= 0.0);
        }

        #[test]
        fn prop_linear_cooling_decreases(
            beta in 0.001f64..100.0,
            t in 1.0f64..1e6,
        ) {
            let schedule = CoolingSchedule::Linear { beta };
            prop_assert!(schedule.next_temperature(t) < t);
        }
    }
}
