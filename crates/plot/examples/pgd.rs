//! Interactive replay of projected gradient descent.
//!
//! Each mode minimizes a classic objective on the interval [-1.25, 1.25]
//! with the diminishing schedule R/(G√t), then opens a window replaying the
//! run: drag the iteration slider or hit Play.
//!
//! # Usage
//!
//! ```text
//! cargo run -p descent-plot --example pgd -- quadratic
//! cargo run -p descent-plot --example pgd -- abs
//! ```
//!
//! # Modes
//!
//! - **quadratic** — f(x) = x². Smooth descent; the running optimum settles
//!   on the minimizer within a handful of iterations.
//!
//! - **abs** — f(x) = |x|. The subgradient never shrinks near the kink, so
//!   the iterates hop across zero while the best-so-far optimum and the
//!   shrinking bound tell the real story.

use std::error::Error;

use descent_core::{Domain, FnObjective};
use descent_plot::{RunReplay, ShowConfig};
use descent_solvers::pgd::{self, Config, DiminishingStep};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "quadratic".into());
    match mode.as_str() {
        "quadratic" => {
            let objective = FnObjective::new(|x: f64| x * x, |x: f64| 2.0 * x);
            replay(objective, 2.5, "PGD: f(x) = x²  →  minimum at (0, 0)")
        }
        "abs" => {
            let objective = FnObjective::new(f64::abs, f64::signum);
            replay(objective, 1.0, "PGD: f(x) = |x|  →  minimum at (0, 0)")
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: pgd [quadratic|abs]");
            std::process::exit(1);
        }
    }
}

/// Runs 15 iterations from x0 = 1 and opens the replay window.
fn replay<V, G>(
    objective: FnObjective<V, G>,
    lipschitz: f64,
    title: &str,
) -> Result<(), Box<dyn Error>>
where
    V: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let domain = Domain::new(2.5)?;
    let strategy = DiminishingStep::new(domain, lipschitz)?;
    let config = Config::new(domain, 15, 0.0)?;

    let traces = pgd::solve(&objective, strategy, 1.0, config)?;

    let replay = RunReplay::new(&objective, domain, &traces)?;
    replay.show(ShowConfig::new().title(title).legend())?;

    Ok(())
}
