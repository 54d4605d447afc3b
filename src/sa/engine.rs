//! The annealing engine: epoch bookkeeping, Metropolis acceptance, and
//! global-best tracking behind the [`Metaheuristic`] hooks.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;

use crate::metaheuristic::{Guess, Metaheuristic, Solution};
use crate::random::RandomSource;

use super::config::{CoolingSchedule, SaConfig};

/// Simulated Annealing minimizer.
///
/// Runs the shared search loop with annealing semantics: iterations are
/// grouped into epochs at a fixed temperature, the temperature drops at
/// each epoch boundary per the configured [`CoolingSchedule`], worse
/// moves are accepted with the Metropolis probability `exp(-delta/(k*t))`,
/// and the best solution ever seen is tracked separately so a late random
/// walk cannot lose it.
///
/// The search stops when the temperature reaches its floor or when
/// `max_rejects` candidates in a row have been rejected without an
/// improving accept.
///
/// An engine is single-use: counters, temperature, and the global best
/// carry the history of one `run` and are not reset. Build a fresh engine
/// (or reuse the cloned [`SaConfig`]) for another run.
///
/// # Examples
///
/// ```
/// use simmer::metaheuristic::Metaheuristic;
/// use simmer::sa::{SaConfig, SimulatedAnnealing};
///
/// let config = SaConfig::default().with_seed(42);
/// let mut annealer = SimulatedAnnealing::new(config);
///
/// // Minimize f(x) = x^2 starting from x = 3.
/// let solution = annealer.run(vec![3.0], |guess| guess[0] * guess[0]);
/// assert!(solution.value < 9.0);
/// ```
#[derive(Debug)]
pub struct SimulatedAnnealing<R: Rng = StdRng> {
    initial_temperature: f64,
    min_temperature: f64,
    cooling: CoolingSchedule,
    max_rejects: usize,
    max_runs: usize,
    max_accepts: usize,
    min_diff: f64,
    k: f64,

    temperature: f64,
    runs: usize,
    accepts: usize,
    rejects: usize,
    total_evaluations: usize,
    global_best: Solution,

    random: RandomSource<R>,
}

impl SimulatedAnnealing<StdRng> {
    /// Builds an engine from `config`, seeding the random source from
    /// `config.seed` or from system entropy when unset.
    pub fn new(config: SaConfig) -> Self {
        let random = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        Self::with_random_source(config, random)
    }
}

impl Default for SimulatedAnnealing<StdRng> {
    fn default() -> Self {
        Self::new(SaConfig::default())
    }
}

impl<R: Rng> SimulatedAnnealing<R> {
    /// Builds an engine around an explicit random source, ignoring
    /// `config.seed`.
    ///
    /// Out-of-range configuration values are clamped here: temperatures
    /// floor to 0, the per-epoch budgets floor to 1.
    pub fn with_random_source(config: SaConfig, random: RandomSource<R>) -> Self {
        let initial_temperature = config.initial_temperature.max(0.0);
        Self {
            initial_temperature,
            min_temperature: config.min_temperature.max(0.0),
            cooling: config.cooling,
            max_rejects: config.max_rejects,
            max_runs: config.max_runs.max(1),
            max_accepts: config.max_accepts.max(1),
            min_diff: config.min_diff,
            k: config.k,
            temperature: initial_temperature,
            runs: 0,
            accepts: 0,
            rejects: 0,
            total_evaluations: 0,
            global_best: Solution::new(f64::INFINITY, Vec::new()),
            random,
        }
    }

    /// Diagnostic snapshot of the configuration and evaluation count, as
    /// label-to-string pairs in stable order.
    pub fn statistics(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("initial_temperature", self.initial_temperature.to_string()),
            ("min_temperature", self.min_temperature.to_string()),
            ("cooling_schedule", self.cooling.to_string()),
            ("max_rejects", self.max_rejects.to_string()),
            ("max_runs", self.max_runs.to_string()),
            ("max_accepts", self.max_accepts.to_string()),
            ("min_diff", self.min_diff.to_string()),
            ("boltzmann_k", self.k.to_string()),
            ("total_evaluations", self.total_evaluations.to_string()),
        ])
    }
}

impl<R: Rng> Metaheuristic for SimulatedAnnealing<R> {
    fn should_continue(&self) -> bool {
        self.temperature > self.min_temperature && self.rejects <= self.max_rejects
    }

    fn step(&mut self) {
        self.runs += 1;
        if self.runs >= self.max_runs || self.accepts >= self.max_accepts {
            self.temperature = self.cooling.next_temperature(self.temperature);
            self.total_evaluations += self.runs;
            self.runs = 1;
            self.accepts = 0;
        }
    }

    fn generate_next_guess(&mut self, previous_best: &[f64]) -> Guess {
        previous_best
            .iter()
            .map(|x| x + self.random.gaussian() * self.random.uniform())
            .collect()
    }

    fn should_accept(&mut self, new_solution: &Solution, previous_solution: &Solution) -> bool {
        let delta = new_solution.value - previous_solution.value;

        if -delta > self.min_diff {
            // Meaningful improvement: always take it.
            self.accepts += 1;
            self.rejects = 0;
            if new_solution.value < self.global_best.value {
                self.global_best = new_solution.clone();
            }
            return true;
        }

        if delta >= self.min_diff
            && (-delta / (self.k * self.temperature)).exp() > self.random.uniform()
        {
            // Metropolis: occasionally move uphill. Does not clear the
            // reject streak.
            self.accepts += 1;
            return true;
        }

        self.rejects += 1;
        false
    }

    fn on_terminate(&mut self, _final_solution: &Solution) -> Option<Solution> {
        Some(self.global_best.clone())
    }
}
