use std::error::Error as StdError;

/// Errors that can occur while seeding or driving a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The seed point lies outside the feasible domain.
    #[error("seed x0={x0} is outside [{lower}, {upper}]")]
    InfeasibleSeed { x0: f64, lower: f64, upper: f64 },

    /// The strategy produced a step size that is non-finite or not positive.
    #[error("step size at iteration {t} must be finite and positive, got {eta}")]
    BadStepSize { t: usize, eta: f64 },

    /// The run was already driven to completion or aborted.
    #[error("run already driven")]
    AlreadyDriven,

    /// The objective failed to evaluate.
    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
