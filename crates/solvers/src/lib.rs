//! Solvers for scalar convex problems.
//!
//! # Solvers
//!
//! - [`pgd`] — projected gradient descent over a bounded interval, with
//!   pluggable step-size, running-optimum, and upper-bound strategies

pub mod pgd;
