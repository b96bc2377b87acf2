use descent_core::Objective;

use super::{Config, Error, Point, Strategy, Traces};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Seeded but not yet driven.
    Pending,

    /// Drove the full iteration budget.
    Complete,

    /// Stopped early on an error; traces cover the completed iterations.
    Aborted,
}

/// A seeded projected gradient descent run.
///
/// Construction seeds the traces; [`solve`](Run::solve) drives the full
/// iteration budget in place. A run drives at most once: afterwards it stays
/// inert and only serves trace queries.
pub struct Run<F, S> {
    objective: F,
    strategy: S,
    config: Config,
    f_star: f64,
    traces: Traces,
    status: Status,
}

impl<F, S> Run<F, S>
where
    F: Objective,
    S: Strategy,
{
    /// Seeds a run at `x0`.
    ///
    /// Evaluates the objective at the seed and at the reference point; both
    /// values anchor the diagnostic traces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InfeasibleSeed`] if `x0` lies outside the domain, or
    /// a propagated objective error from the two anchor evaluations.
    pub fn new(objective: F, strategy: S, x0: f64, config: Config) -> Result<Self, Error> {
        let domain = config.domain();
        if !domain.contains(x0) {
            return Err(Error::InfeasibleSeed {
                x0,
                lower: domain.lower(),
                upper: domain.upper(),
            });
        }

        let seed_value = objective.value(x0).map_err(Error::objective)?;
        let f_star = objective.value(config.x_star()).map_err(Error::objective)?;
        let traces = Traces::seeded(
            Point::new(x0, seed_value),
            seed_value - f_star,
            config.budget(),
        );

        Ok(Self {
            objective,
            strategy,
            config,
            f_star,
            traces,
            status: Status::Pending,
        })
    }

    /// Drives the full iteration budget.
    ///
    /// Each iteration queries the strategy for a step size, takes the
    /// projected subgradient step, and closes out with the running optimum,
    /// the theoretical bound, and the observed error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyDriven`] if the run was driven before. A bad
    /// step size or a failed objective evaluation aborts the run: the error
    /// propagates and the traces keep the iterations completed up to that
    /// point.
    pub fn solve(&mut self) -> Result<(), Error> {
        if self.status != Status::Pending {
            return Err(Error::AlreadyDriven);
        }

        match self.drive() {
            Ok(()) => {
                self.status = Status::Complete;
                Ok(())
            }
            Err(err) => {
                self.traces.truncate_to_completed();
                self.status = Status::Aborted;
                Err(err)
            }
        }
    }

    fn drive(&mut self) -> Result<(), Error> {
        let domain = self.config.domain();

        for t in 1..=self.config.budget() {
            let eta = self.strategy.step_size(t);
            if !eta.is_finite() || eta <= 0.0 {
                return Err(Error::BadStepSize { t, eta });
            }

            let previous = self.traces.latest();
            let gradient = self
                .objective
                .subgradient(previous.x)
                .map_err(Error::objective)?;
            let x = domain.project(previous.x - eta * gradient);
            let value = self.objective.value(x).map_err(Error::objective)?;
            self.traces.push_step(eta, Point::new(x, value));

            let incumbent = self.strategy.running_optimum(self.traces.trajectory());
            let incumbent_value = self.objective.value(incumbent).map_err(Error::objective)?;

            self.traces.push_diagnostics(
                Point::new(incumbent, incumbent_value),
                self.strategy.upper_bound(t),
                incumbent_value - self.f_star,
            );
        }

        Ok(())
    }

    /// Returns the run status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the run configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the recorded traces.
    #[must_use]
    pub fn traces(&self) -> &Traces {
        &self.traces
    }

    /// Consumes the run and returns its traces.
    #[must_use]
    pub fn into_traces(self) -> Traces {
        self.traces
    }
}
