use std::convert::Infallible;

/// A scalar convex function paired with a subgradient selector.
///
/// Objectives must be pure, always producing the same result for a given
/// point, which lets solvers cache reference values and re-evaluate chosen
/// points freely.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type to represent
    /// domain-specific failures.
    fn value(&self, x: f64) -> Result<f64, Self::Error>;

    /// Returns a subgradient of the function at `x`.
    ///
    /// Where the function is differentiable this is the derivative; at kinks
    /// any member of the subdifferential is a valid choice.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type to represent
    /// domain-specific failures.
    fn subgradient(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Objective + ?Sized> Objective for &T {
    type Error = T::Error;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).value(x)
    }

    fn subgradient(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).subgradient(x)
    }
}

/// Wraps a pair of closures as an infallible [`Objective`].
pub struct FnObjective<V, G> {
    value: V,
    subgradient: G,
}

impl<V, G> FnObjective<V, G> {
    /// Creates an objective from a value function and a subgradient function.
    pub const fn new(value: V, subgradient: G) -> Self {
        Self { value, subgradient }
    }
}

impl<V, G> Objective for FnObjective<V, G>
where
    V: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.value)(x))
    }

    fn subgradient(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.subgradient)(x))
    }
}
