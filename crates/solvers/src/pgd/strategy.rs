use descent_core::Domain;
use thiserror::Error;

use super::Point;

/// A projected gradient descent variant.
///
/// A strategy bundles the three sub-algorithms that distinguish one variant
/// from another: the step-size schedule, the running-optimum rule, and the
/// theoretical upper bound on suboptimality. The driver queries all three
/// every iteration, so any type implementing this trait is a complete
/// variant; partial variants cannot be constructed.
pub trait Strategy {
    /// Returns the step size for iteration `t`, counted from 1.
    ///
    /// The driver rejects values that are not finite and positive before the
    /// iterate moves.
    fn step_size(&self, t: usize) -> f64;

    /// Selects the incumbent optimum estimate from a trajectory prefix.
    ///
    /// The driver passes the prefix ending at the newest iterate, seed
    /// included, so the slice is never empty. The returned x need not be a
    /// member of the prefix; averaging rules synthesize one from it.
    fn running_optimum(&self, trajectory: &[Point]) -> f64;

    /// Returns the theoretical bound on the suboptimality of the incumbent
    /// after iteration `t`, counted from 1.
    fn upper_bound(&self, t: usize) -> f64;
}

/// Errors that can occur when validating strategy constants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    #[error("lipschitz bound must be finite and positive")]
    Lipschitz,

    #[error("step size must be finite and positive")]
    Step,

    #[error("horizon must be at least 1")]
    Horizon,
}

/// Diminishing steps `R / (G √t)` with a best-so-far running optimum.
///
/// The classic schedule for the projected subgradient method, where `R` is
/// the domain size and `G` bounds the subgradient magnitude over the domain.
/// The upper bound is the standard guarantee
/// `(R² + G² Σ ηᵢ²) / (2 Σ ηᵢ)` over the steps taken so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiminishingStep {
    size: f64,
    lipschitz: f64,
}

impl DiminishingStep {
    /// Creates the schedule for a domain and a subgradient bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the Lipschitz bound is non-finite or not positive.
    pub fn new(domain: Domain, lipschitz: f64) -> Result<Self, StrategyError> {
        if !lipschitz.is_finite() || lipschitz <= 0.0 {
            return Err(StrategyError::Lipschitz);
        }

        Ok(Self {
            size: domain.size(),
            lipschitz,
        })
    }
}

impl Strategy for DiminishingStep {
    fn step_size(&self, t: usize) -> f64 {
        self.size / (self.lipschitz * as_f64(t).sqrt())
    }

    fn running_optimum(&self, trajectory: &[Point]) -> f64 {
        best_so_far(trajectory)
    }

    fn upper_bound(&self, t: usize) -> f64 {
        standard_bound(
            self.size,
            self.lipschitz,
            (1..=t).map(|i| self.step_size(i)),
        )
    }
}

/// A fixed step size with a best-so-far running optimum.
///
/// Useful for studying non-convergence: a constant step walks into a
/// neighborhood of the optimum and then oscillates, and the bound
/// `(R² + G² t η²) / (2 t η)` flattens out at `G² η / 2` instead of
/// vanishing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantStep {
    size: f64,
    lipschitz: f64,
    step: f64,
}

impl ConstantStep {
    /// Creates the schedule for a domain, a subgradient bound, and a fixed
    /// step.
    ///
    /// # Errors
    ///
    /// Returns an error if the Lipschitz bound or the step is non-finite or
    /// not positive.
    pub fn new(domain: Domain, lipschitz: f64, step: f64) -> Result<Self, StrategyError> {
        if !lipschitz.is_finite() || lipschitz <= 0.0 {
            return Err(StrategyError::Lipschitz);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(StrategyError::Step);
        }

        Ok(Self {
            size: domain.size(),
            lipschitz,
            step,
        })
    }
}

impl Strategy for ConstantStep {
    fn step_size(&self, _t: usize) -> f64 {
        self.step
    }

    fn running_optimum(&self, trajectory: &[Point]) -> f64 {
        best_so_far(trajectory)
    }

    fn upper_bound(&self, t: usize) -> f64 {
        standard_bound(
            self.size,
            self.lipschitz,
            std::iter::repeat_n(self.step, t),
        )
    }
}

/// Averaged iterates with the horizon-tuned constant step `R / (G √T)`.
///
/// The running optimum is the uniform average of the iterates after the
/// seed, so it need not coincide with any visited point. At the horizon the
/// bound collapses to `R G / √T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyakAveraging {
    size: f64,
    lipschitz: f64,
    step: f64,
}

impl PolyakAveraging {
    /// Creates the schedule tuned for a run of `horizon` iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if the Lipschitz bound is non-finite or not
    /// positive, or the horizon is zero.
    pub fn new(domain: Domain, lipschitz: f64, horizon: usize) -> Result<Self, StrategyError> {
        if !lipschitz.is_finite() || lipschitz <= 0.0 {
            return Err(StrategyError::Lipschitz);
        }
        if horizon == 0 {
            return Err(StrategyError::Horizon);
        }

        let step = domain.size() / (lipschitz * as_f64(horizon).sqrt());

        Ok(Self {
            size: domain.size(),
            lipschitz,
            step,
        })
    }
}

impl Strategy for PolyakAveraging {
    fn step_size(&self, _t: usize) -> f64 {
        self.step
    }

    fn running_optimum(&self, trajectory: &[Point]) -> f64 {
        match trajectory.split_first() {
            None => f64::NAN,
            Some((seed, [])) => seed.x,
            Some((_, rest)) => rest.iter().map(|p| p.x).sum::<f64>() / as_f64(rest.len()),
        }
    }

    fn upper_bound(&self, t: usize) -> f64 {
        standard_bound(
            self.size,
            self.lipschitz,
            std::iter::repeat_n(self.step, t),
        )
    }
}

/// Best objective seen so far; the earliest minimum wins ties.
fn best_so_far(trajectory: &[Point]) -> f64 {
    let Some((first, rest)) = trajectory.split_first() else {
        return f64::NAN;
    };

    let mut best = *first;
    for point in rest {
        if point.objective < best.objective {
            best = *point;
        }
    }

    best.x
}

/// The subgradient method guarantee `(R² + G² Σ ηᵢ²) / (2 Σ ηᵢ)`.
fn standard_bound(size: f64, lipschitz: f64, step_sizes: impl Iterator<Item = f64>) -> f64 {
    let (sum, sum_sq) = step_sizes.fold((0.0, 0.0), |(sum, sum_sq), eta| {
        (sum + eta, sum_sq + eta * eta)
    });

    (size * size + lipschitz * lipschitz * sum_sq) / (2.0 * sum)
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(t: usize) -> f64 {
    t as f64
}
