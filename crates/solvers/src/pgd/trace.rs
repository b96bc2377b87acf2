use super::Point;

/// The recorded history of a run.
///
/// Four aligned traces cover the seed plus every completed iteration:
/// the trajectory, the running optima, the upper bounds, and the observed
/// errors. The step-size trace has no seed entry, so it is exactly one
/// shorter. Only the driver appends; everyone else reads.
#[derive(Debug, Clone)]
pub struct Traces {
    trajectory: Vec<Point>,
    optima: Vec<Point>,
    step_sizes: Vec<f64>,
    upper_bounds: Vec<f64>,
    errors: Vec<f64>,
}

impl Traces {
    /// Seeds all traces for a run of at most `budget` iterations.
    ///
    /// `initial_gap` is `f(x0) - f(x_star)`, the seed entry of both the
    /// upper-bound and error traces.
    pub(super) fn seeded(seed: Point, initial_gap: f64, budget: usize) -> Self {
        let mut trajectory = Vec::with_capacity(budget + 1);
        trajectory.push(seed);

        let mut optima = Vec::with_capacity(budget + 1);
        optima.push(seed);

        let mut upper_bounds = Vec::with_capacity(budget + 1);
        upper_bounds.push(initial_gap);

        let mut errors = Vec::with_capacity(budget + 1);
        errors.push(initial_gap);

        Self {
            trajectory,
            optima,
            step_sizes: Vec::with_capacity(budget),
            upper_bounds,
            errors,
        }
    }

    /// Records the step taken by an iteration.
    pub(super) fn push_step(&mut self, eta: f64, point: Point) {
        self.step_sizes.push(eta);
        self.trajectory.push(point);
    }

    /// Records the diagnostics that close out an iteration.
    pub(super) fn push_diagnostics(&mut self, optimum: Point, upper_bound: f64, error: f64) {
        self.optima.push(optimum);
        self.upper_bounds.push(upper_bound);
        self.errors.push(error);
    }

    /// Drops any step whose iteration never closed out, restoring trace
    /// alignment after an abort.
    pub(super) fn truncate_to_completed(&mut self) {
        let completed = self.optima.len();
        self.trajectory.truncate(completed);
        self.step_sizes.truncate(completed - 1);
    }

    /// Returns the newest trajectory entry.
    #[must_use]
    pub fn latest(&self) -> Point {
        // The trajectory is seeded at construction and never drained.
        self.trajectory[self.trajectory.len() - 1]
    }

    /// Returns the iterate trace, seed first.
    #[must_use]
    pub fn trajectory(&self) -> &[Point] {
        &self.trajectory
    }

    /// Returns the running-optimum trace, aligned with the trajectory.
    #[must_use]
    pub fn optima(&self) -> &[Point] {
        &self.optima
    }

    /// Returns the step sizes, one per completed iteration.
    #[must_use]
    pub fn step_sizes(&self) -> &[f64] {
        &self.step_sizes
    }

    /// Returns the theoretical upper bounds, aligned with the trajectory.
    #[must_use]
    pub fn upper_bounds(&self) -> &[f64] {
        &self.upper_bounds
    }

    /// Returns the observed errors `f(x̂) - f(x_star)`, aligned with the
    /// trajectory.
    #[must_use]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.optima.len() - 1
    }
}
