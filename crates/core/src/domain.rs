use thiserror::Error;

/// Errors that can occur when creating a [`Domain`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The size is NaN or infinite.
    #[error("non-finite size")]
    NonFinite,
    /// The size is zero or negative.
    #[error("non-positive size")]
    NonPositive,
}

/// A bounded feasible interval, symmetric about the origin.
///
/// A domain of size `R` spans `[-R/2, R/2]`, endpoints included. All solver
/// iterates are kept inside it by [`Domain::project`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    size: f64,
}

impl Domain {
    /// Creates a validated domain of the given size.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the size is non-finite or non-positive.
    pub fn new(size: f64) -> Result<Self, DomainError> {
        if !size.is_finite() {
            return Err(DomainError::NonFinite);
        }
        if size <= 0.0 {
            return Err(DomainError::NonPositive);
        }

        Ok(Self { size })
    }

    /// Returns the interval size.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lower(&self) -> f64 {
        -0.5 * self.size
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn upper(&self) -> f64 {
        0.5 * self.size
    }

    /// Maps `x` to the nearest point of the interval.
    ///
    /// Points already inside are returned unchanged, so projection is
    /// idempotent. NaN propagates; infinite input lands on the matching
    /// endpoint.
    #[must_use]
    pub fn project(&self, x: f64) -> f64 {
        x.clamp(self.lower(), self.upper())
    }

    /// Returns true if `x` lies in the closed interval. NaN is never
    /// contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower() <= x && x <= self.upper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_non_finite_size() {
        assert!(matches!(Domain::new(f64::NAN), Err(DomainError::NonFinite)));
        assert!(matches!(
            Domain::new(f64::INFINITY),
            Err(DomainError::NonFinite)
        ));
    }

    #[test]
    fn new_rejects_non_positive_size() {
        assert!(matches!(Domain::new(0.0), Err(DomainError::NonPositive)));
        assert!(matches!(Domain::new(-2.5), Err(DomainError::NonPositive)));
    }

    #[test]
    fn endpoints_are_half_the_size() {
        let domain = Domain::new(2.5).expect("valid size");
        assert_relative_eq!(domain.lower(), -1.25);
        assert_relative_eq!(domain.upper(), 1.25);
        assert_relative_eq!(domain.size(), 2.5);
    }

    #[test]
    fn project_is_identity_inside() {
        let domain = Domain::new(2.0).expect("valid size");
        assert_relative_eq!(domain.project(0.7), 0.7);
        assert_relative_eq!(domain.project(-1.0), -1.0);
        assert_relative_eq!(domain.project(1.0), 1.0);
    }

    #[test]
    fn project_clips_to_endpoints() {
        let domain = Domain::new(2.0).expect("valid size");
        assert_relative_eq!(domain.project(3.0), 1.0);
        assert_relative_eq!(domain.project(-42.0), -1.0);
    }

    #[test]
    fn project_is_idempotent() {
        let domain = Domain::new(2.5).expect("valid size");
        for x in [-10.0, -1.25, 0.0, 0.3, 1.25, 7.0] {
            let once = domain.project(x);
            assert_relative_eq!(domain.project(once), once);
        }
    }

    #[test]
    fn project_handles_non_finite_input() {
        let domain = Domain::new(2.0).expect("valid size");
        assert!(domain.project(f64::NAN).is_nan());
        assert_relative_eq!(domain.project(f64::INFINITY), 1.0);
        assert_relative_eq!(domain.project(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn contains_is_closed_and_rejects_nan() {
        let domain = Domain::new(2.5).expect("valid size");
        assert!(domain.contains(1.25));
        assert!(domain.contains(-1.25));
        assert!(domain.contains(0.0));
        assert!(!domain.contains(1.250_000_1));
        assert!(!domain.contains(f64::NAN));
    }
}
