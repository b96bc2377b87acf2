use descent_core::Domain;
use thiserror::Error;

/// Configuration for a projected gradient descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    domain: Domain,
    budget: usize,
    x_star: f64,
}

/// Errors that can occur when validating a run config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("budget must be at least 1")]
    Budget,

    #[error("x_star must be finite")]
    XStar,
}

impl Config {
    /// Creates a new config with a validated iteration budget and reference
    /// point.
    ///
    /// `x_star` is only used to compute the observed error trace. It does not
    /// have to be feasible, and for diagnostic runs it does not have to be the
    /// true minimizer.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is zero or `x_star` is non-finite.
    pub fn new(domain: Domain, budget: usize, x_star: f64) -> Result<Self, ConfigError> {
        if budget == 0 {
            return Err(ConfigError::Budget);
        }
        if !x_star.is_finite() {
            return Err(ConfigError::XStar);
        }

        Ok(Self {
            domain,
            budget,
            x_star,
        })
    }

    /// Returns the feasible domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Returns the reference point used for the error trace.
    #[must_use]
    pub fn x_star(&self) -> f64 {
        self.x_star
    }
}
