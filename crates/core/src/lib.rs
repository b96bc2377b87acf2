//! Core traits and types for Descent.
//!
//! This crate defines the shared vocabulary that solvers and plotting build
//! on:
//!
//! - [`Objective`] — a scalar convex function with a subgradient selector
//! - [`FnObjective`] — wraps a pair of closures as an [`Objective`]
//! - [`Domain`] — a bounded feasible interval with its projection operator

mod domain;
mod objective;

pub use domain::{Domain, DomainError};
pub use objective::{FnObjective, Objective};
