use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use descent_core::{Domain, Objective};

use super::{Config, ConstantStep, DiminishingStep, Error, PolyakAveraging, Run, Status, solve};

fn domain(size: f64) -> Domain {
    Domain::new(size).expect("valid size")
}

/// A centered parabola: f(x) = x².
struct Quadratic;

impl Objective for Quadratic {
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x * x)
    }

    fn subgradient(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(2.0 * x)
    }
}

/// The kinked classic: f(x) = |x|.
struct AbsValue;

impl Objective for AbsValue {
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x.abs())
    }

    fn subgradient(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x.signum())
    }
}

/// A linear ramp: f(x) = x, minimized at the lower boundary.
struct Linear;

impl Objective for Linear {
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn subgradient(&self, _x: f64) -> Result<f64, Self::Error> {
        Ok(1.0)
    }
}

/// The degenerate flat objective: f(x) = 0 with a zero subgradient.
struct Flat;

impl Objective for Flat {
    type Error = Infallible;

    fn value(&self, _x: f64) -> Result<f64, Self::Error> {
        Ok(0.0)
    }

    fn subgradient(&self, _x: f64) -> Result<f64, Self::Error> {
        Ok(0.0)
    }
}

#[test]
fn flat_objective_stays_at_the_seed() {
    let strategy = DiminishingStep::new(domain(2.5), 1.0).expect("valid constants");
    let config = Config::new(domain(2.5), 5, 0.0).expect("valid config");

    let traces = solve(Flat, strategy, 0.5, config).expect("should complete");

    assert_eq!(traces.iterations(), 5);
    for point in traces.trajectory() {
        assert_relative_eq!(point.x, 0.5);
    }
    for error in traces.errors() {
        assert_relative_eq!(*error, 0.0);
    }
}

#[test]
fn unit_steps_walk_into_the_lower_boundary() {
    // f(x) = x with eta = 1 moves one unit per iteration until the clip at
    // -1.25 takes over.
    let strategy = ConstantStep::new(domain(2.5), 1.0, 1.0).expect("valid constants");
    let config = Config::new(domain(2.5), 3, -1.25).expect("valid config");

    let traces = solve(Linear, strategy, 1.0, config).expect("should complete");

    let xs: Vec<f64> = traces.trajectory().iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 4);
    assert_relative_eq!(xs[0], 1.0);
    assert_relative_eq!(xs[1], 0.0);
    assert_relative_eq!(xs[2], -1.0);
    assert_relative_eq!(xs[3], -1.25);

    // The boundary point is the best seen and matches the reference.
    assert_relative_eq!(*traces.errors().last().unwrap(), 0.0);
}

#[test]
fn infeasible_seed_is_rejected() {
    let strategy = DiminishingStep::new(domain(1.0), 1.0).expect("valid constants");
    let config = Config::new(domain(1.0), 5, 0.0).expect("valid config");

    let result = Run::new(Quadratic, strategy, 2.0, config);

    match result {
        Err(Error::InfeasibleSeed { x0, lower, upper }) => {
            assert_relative_eq!(x0, 2.0);
            assert_relative_eq!(lower, -0.5);
            assert_relative_eq!(upper, 0.5);
        }
        _ => panic!("seed outside the domain must be rejected"),
    }
}

#[test]
fn nan_seed_is_rejected() {
    let strategy = DiminishingStep::new(domain(2.5), 1.0).expect("valid constants");
    let config = Config::new(domain(2.5), 5, 0.0).expect("valid config");

    let result = Run::new(Quadratic, strategy, f64::NAN, config);
    assert!(matches!(result, Err(Error::InfeasibleSeed { .. })));
}

#[test]
fn a_full_run_records_every_trace() {
    let strategy = DiminishingStep::new(domain(2.5), 2.5).expect("valid constants");
    let config = Config::new(domain(2.5), 7, 0.0).expect("valid config");

    let traces = solve(Quadratic, strategy, 1.0, config).expect("should complete");

    assert_eq!(traces.trajectory().len(), 8);
    assert_eq!(traces.optima().len(), 8);
    assert_eq!(traces.upper_bounds().len(), 8);
    assert_eq!(traces.errors().len(), 8);
    assert_eq!(traces.step_sizes().len(), 7);
}

#[test]
fn every_iterate_stays_feasible() {
    // Steps far larger than the interval keep landing on the boundary.
    let strategy = ConstantStep::new(domain(2.5), 1.0, 5.0).expect("valid constants");
    let config = Config::new(domain(2.5), 4, 0.0).expect("valid config");

    let traces = solve(Linear, strategy, 0.0, config).expect("should complete");

    for point in traces.trajectory() {
        assert!(domain(2.5).contains(point.x), "escaped at x={}", point.x);
    }
    assert_relative_eq!(traces.latest().x, -1.25);
}

#[test]
fn errors_stay_non_negative_against_the_true_minimum() {
    let strategy = DiminishingStep::new(domain(2.5), 2.5).expect("valid constants");
    let config = Config::new(domain(2.5), 12, 0.0).expect("valid config");

    let traces = solve(Quadratic, strategy, 1.0, config).expect("should complete");

    for error in traces.errors() {
        assert!(*error >= 0.0, "error {error} dipped below zero");
    }
}

#[test]
fn best_so_far_optimum_never_worsens() {
    let strategy = DiminishingStep::new(domain(2.5), 2.5).expect("valid constants");
    let config = Config::new(domain(2.5), 10, 0.0).expect("valid config");

    let traces = solve(Quadratic, strategy, 1.0, config).expect("should complete");

    for pair in traces.optima().windows(2) {
        assert!(pair[1].objective <= pair[0].objective);
    }
}

#[test]
fn bounds_dominate_errors_for_the_classic_schedule() {
    // |x| has G = 1 everywhere, so the textbook guarantee applies exactly.
    let strategy = DiminishingStep::new(domain(2.5), 1.0).expect("valid constants");
    let config = Config::new(domain(2.5), 10, 0.0).expect("valid config");

    let traces = solve(AbsValue, strategy, 1.0, config).expect("should complete");

    for (error, bound) in traces.errors().iter().zip(traces.upper_bounds()) {
        assert!(error <= bound, "error {error} above bound {bound}");
    }
}

#[test]
fn diminishing_on_a_quadratic_reaches_the_minimum() {
    // With G = 2.5 the schedule is eta_t = 1/sqrt(t); the fourth step maps
    // any iterate exactly onto the minimizer.
    let strategy = DiminishingStep::new(domain(2.5), 2.5).expect("valid constants");
    let config = Config::new(domain(2.5), 5, 0.0).expect("valid config");

    let traces = solve(Quadratic, strategy, 1.0, config).expect("should complete");

    let last = traces.optima().last().unwrap();
    assert_relative_eq!(last.objective, 0.0);
    assert_relative_eq!(*traces.errors().last().unwrap(), 0.0);
}

#[test]
fn averaged_optimum_is_synthesized_from_the_trajectory() {
    let strategy = PolyakAveraging::new(domain(2.5), 2.5, 16).expect("valid constants");
    let config = Config::new(domain(2.5), 16, 0.0).expect("valid config");

    let mut run = Run::new(Quadratic, strategy, 1.0, config).expect("feasible seed");
    run.solve().expect("should complete");
    let traces = run.traces();

    let post_seed = &traces.trajectory()[1..];
    let mean = post_seed.iter().map(|p| p.x).sum::<f64>() / 16.0;

    let last = traces.optima().last().unwrap();
    assert_relative_eq!(last.x, mean);
    assert_relative_eq!(last.objective, mean * mean);
}

#[test]
fn solve_returns_the_traces_directly() {
    let strategy = DiminishingStep::new(domain(2.5), 2.5).expect("valid constants");
    let config = Config::new(domain(2.5), 3, 0.0).expect("valid config");

    let traces = solve(Quadratic, strategy, 1.0, config).expect("should complete");
    assert_eq!(traces.iterations(), 3);
}

// --- Objective failure handling ---

/// Objective that fails outside a trusted range: f(x) = x while |x| stays
/// within the limit.
struct FailsOutside {
    limit: f64,
}

#[derive(Debug, Clone, Error)]
#[error("evaluation failed at x={x} (limit={limit})")]
struct RangeError {
    x: f64,
    limit: f64,
}

impl FailsOutside {
    fn check(&self, x: f64) -> Result<(), RangeError> {
        if x.abs() > self.limit {
            Err(RangeError {
                x,
                limit: self.limit,
            })
        } else {
            Ok(())
        }
    }
}

impl Objective for FailsOutside {
    type Error = RangeError;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        self.check(x)?;
        Ok(x)
    }

    fn subgradient(&self, x: f64) -> Result<f64, Self::Error> {
        self.check(x)?;
        Ok(1.0)
    }
}

#[test]
fn objective_failure_aborts_and_keeps_completed_iterations() {
    // Each step moves 0.3 down from -0.5; the second lands at -1.1 and
    // trips the limit when evaluated.
    let objective = FailsOutside { limit: 1.0 };
    let strategy = ConstantStep::new(domain(2.5), 1.0, 0.3).expect("valid constants");
    let config = Config::new(domain(2.5), 10, 0.0).expect("valid config");

    let mut run = Run::new(objective, strategy, -0.5, config).expect("feasible seed");
    let err = run.solve().expect_err("second step leaves the trusted range");

    assert!(matches!(err, Error::Objective(_)));
    assert_eq!(run.status(), Status::Aborted);

    let traces = run.traces();
    assert_eq!(traces.iterations(), 1);
    assert_eq!(traces.trajectory().len(), 2);
    assert_eq!(traces.optima().len(), 2);
    assert_eq!(traces.upper_bounds().len(), 2);
    assert_eq!(traces.errors().len(), 2);
    assert_eq!(traces.step_sizes().len(), 1);
    assert_relative_eq!(traces.latest().x, -0.8);
}

#[test]
fn objective_failure_at_the_first_step_keeps_only_the_seed() {
    let objective = FailsOutside { limit: 1.0 };
    let strategy = ConstantStep::new(domain(2.5), 1.0, 0.75).expect("valid constants");
    let config = Config::new(domain(2.5), 10, 0.0).expect("valid config");

    let mut run = Run::new(objective, strategy, -0.5, config).expect("feasible seed");
    run.solve().expect_err("first step leaves the trusted range");

    let traces = run.traces();
    assert_eq!(traces.iterations(), 0);
    assert_eq!(traces.trajectory().len(), 1);
    assert!(traces.step_sizes().is_empty());
    assert_relative_eq!(traces.latest().x, -0.5);
}

#[test]
fn an_aborted_run_stays_inert() {
    let objective = FailsOutside { limit: 1.0 };
    let strategy = ConstantStep::new(domain(2.5), 1.0, 0.75).expect("valid constants");
    let config = Config::new(domain(2.5), 10, 0.0).expect("valid config");

    let mut run = Run::new(objective, strategy, -0.5, config).expect("feasible seed");
    run.solve().expect_err("first step leaves the trusted range");

    assert!(matches!(run.solve(), Err(Error::AlreadyDriven)));
    assert_eq!(run.status(), Status::Aborted);
}
