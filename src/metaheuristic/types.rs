//! Solution representation and the algorithm contract.

/// Candidate position in the search space.
pub type Guess = Vec<f64>;

/// An evaluated candidate: a guess together with its objective value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Objective value at `guess`. Lower is better.
    pub value: f64,
    /// The evaluated position.
    pub guess: Guess,
}

impl Solution {
    /// Creates a solution from an objective value and its guess.
    pub fn new(value: f64, guess: Guess) -> Self {
        Self { value, guess }
    }
}

/// Contract for iterative stochastic optimizers.
///
/// Implementors supply the per-iteration decisions; the provided
/// [`run`](Metaheuristic::run) method drives the shared loop. The loop
/// evaluates the initial guess unconditionally, then repeats while
/// [`should_continue`](Metaheuristic::should_continue) holds: advance
/// internal state, generate a neighbor of the current best guess,
/// evaluate it exactly once, and adopt it if
/// [`should_accept`](Metaheuristic::should_accept) says so.
///
/// # Examples
///
/// ```ignore
/// struct HillClimber {
///     remaining: usize,
/// }
///
/// impl Metaheuristic for HillClimber {
///     fn should_continue(&self) -> bool {
///         self.remaining > 0
///     }
///
///     fn step(&mut self) {
///         self.remaining -= 1;
///     }
///
///     fn generate_next_guess(&mut self, previous_best: &[f64]) -> Guess {
///         previous_best.iter().map(|x| x + 0.1).collect()
///     }
///
///     fn should_accept(&mut self, new: &Solution, previous: &Solution) -> bool {
///         new.value < previous.value
///     }
/// }
/// ```
pub trait Metaheuristic {
    /// Whether the search loop should run another iteration.
    fn should_continue(&self) -> bool;

    /// Advances internal state at the top of each iteration, before a
    /// neighbor is generated.
    fn step(&mut self);

    /// Produces the next candidate guess from the current best guess.
    fn generate_next_guess(&mut self, previous_best: &[f64]) -> Guess;

    /// Decides whether `new_solution` replaces `previous_solution` as the
    /// loop's current solution.
    fn should_accept(&mut self, new_solution: &Solution, previous_solution: &Solution) -> bool;

    /// Called once after the loop exits with the loop's final solution.
    ///
    /// Returning `Some` overrides the result of [`run`](Metaheuristic::run);
    /// the default returns `None`, so the loop's final solution is used.
    fn on_terminate(&mut self, final_solution: &Solution) -> Option<Solution> {
        let _ = final_solution;
        None
    }

    /// Runs the search from `initial_guess`, minimizing `objective`.
    ///
    /// The objective is evaluated exactly once per candidate: once for the
    /// initial guess and once per loop iteration.
    fn run<F>(&mut self, initial_guess: Guess, mut objective: F) -> Solution
    where
        Self: Sized,
        F: FnMut(&[f64]) -> f64,
    {
        let initial_value = objective(&initial_guess);
        let mut best = Solution::new(initial_value, initial_guess);

        while self.should_continue() {
            self.step();

            let guess = self.generate_next_guess(&best.guess);
            let value = objective(&guess);
            let candidate = Solution::new(value, guess);

            if self.should_accept(&candidate, &best) {
                best = candidate;
            }
        }

        match self.on_terminate(&best) {
            Some(overridden) => overridden,
            None => best,
        }
    }
}
