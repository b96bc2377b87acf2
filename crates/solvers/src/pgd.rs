//! Projected gradient descent over a bounded interval.
//!
//! # Algorithm
//!
//! Projected gradient descent minimizes a convex function on a closed
//! interval. Each iteration steps against a subgradient and projects the
//! result back onto the interval:
//!
//! ```text
//! x_{t+1} = project(x_t - eta_t * g(x_t))
//! ```
//!
//! The step-size schedule, the running-optimum rule, and the theoretical
//! suboptimality bound come from a pluggable [`Strategy`]. As the driver
//! iterates it records four aligned traces: the trajectory, the running
//! optima, the upper bounds, and the observed errors against a reference
//! point.
//!
//! # When to Use
//!
//! Projected gradient descent is appropriate when:
//! - The objective is convex on the domain; subgradients suffice, so kinks
//!   are fine
//! - You want the whole convergence picture, not just the final point
//! - A bound on the subgradient magnitude over the domain is known
//!
//! # Limitations
//!
//! - **Single variable only**: the domain is a bounded scalar interval
//! - **Sublinear convergence**: expect O(1/√T) suboptimality from the
//!   shipped schedules
//! - **No early stopping**: the driver always spends the whole iteration
//!   budget
//!
//! # Example
//!
//! ```ignore
//! use descent_core::{Domain, FnObjective};
//! use descent_solvers::pgd::{self, Config, DiminishingStep};
//!
//! let domain = Domain::new(2.5)?;
//! let objective = FnObjective::new(|x: f64| x * x, |x: f64| 2.0 * x);
//! let strategy = DiminishingStep::new(domain, 2.5)?;
//!
//! let traces = pgd::solve(objective, strategy, 1.0, Config::new(domain, 15, 0.0)?)?;
//!
//! for (point, error) in traces.optima().iter().zip(traces.errors()) {
//!     println!("x̂={:.4}  f(x̂)={:.4}  error={error:.4}", point.x, point.objective);
//! }
//! ```

mod config;
mod error;
mod point;
mod run;
mod strategy;
mod trace;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use point::Point;
pub use run::{Run, Status};
pub use strategy::{ConstantStep, DiminishingStep, PolyakAveraging, Strategy, StrategyError};
pub use trace::Traces;

use descent_core::Objective;

/// Runs projected gradient descent and returns the recorded traces.
///
/// This is a convenience wrapper around [`Run`] for callers that only want
/// the history of one full run.
///
/// # Errors
///
/// Returns an error if the seed is infeasible, the strategy produces an
/// invalid step size, or the objective fails to evaluate.
pub fn solve<F, S>(objective: F, strategy: S, x0: f64, config: Config) -> Result<Traces, Error>
where
    F: Objective,
    S: Strategy,
{
    let mut run = Run::new(objective, strategy, x0, config)?;
    run.solve()?;
    Ok(run.into_traces())
}
