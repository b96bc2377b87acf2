//! Replay plotting for Descent runs.
//!
//! [`RunReplay`] captures a finished run together with a sampled objective
//! curve and opens an interactive egui window that steps through the run one
//! iteration at a time: the trajectory and running optima on the curve, the
//! theoretical bound and observed error as bars beside it.

mod replay;

pub use replay::{RunReplay, ShowConfig};
