use std::time::Duration;

use descent_core::{Domain, Objective};
use descent_solvers::pgd::Traces;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

/// Sample count for the objective curve.
const CURVE_SAMPLES: u32 = 100;

/// Delay between frames while playing.
const FRAME_DELAY: Duration = Duration::from_millis(300);

/// Configuration for rendering a [`RunReplay`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A replayable view of a completed run.
///
/// Holds the objective curve sampled over the domain plus the recorded
/// traces, laid out for plotting. Create with [`RunReplay::new`] and display
/// with [`RunReplay::show`].
pub struct RunReplay {
    curve: Vec<[f64; 2]>,
    trajectory: Vec<[f64; 2]>,
    optima: Vec<[f64; 2]>,
    upper_bounds: Vec<f64>,
    errors: Vec<f64>,
    bar_ceiling: f64,
}

impl RunReplay {
    /// Samples the objective over the domain and captures the traces.
    ///
    /// # Errors
    ///
    /// Propagates the objective's error if sampling the curve fails.
    pub fn new<F: Objective>(
        objective: &F,
        domain: Domain,
        traces: &Traces,
    ) -> Result<Self, F::Error> {
        let mut curve = Vec::new();
        for i in 0..CURVE_SAMPLES {
            let x = domain.lower() + domain.size() * f64::from(i) / f64::from(CURVE_SAMPLES - 1);
            curve.push([x, objective.value(x)?]);
        }

        let trajectory: Vec<[f64; 2]> = traces
            .trajectory()
            .iter()
            .map(|p| [p.x, p.objective])
            .collect();
        let optima = traces.optima().iter().map(|p| [p.x, p.objective]).collect();

        let peak = trajectory
            .iter()
            .map(|p| p[1])
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            curve,
            trajectory,
            optima,
            upper_bounds: traces.upper_bounds().to_vec(),
            errors: traces.errors().to_vec(),
            bar_ceiling: 1.1 * peak,
        })
    }

    /// Opens a blocking egui window that replays the run.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let last_frame = self.upper_bounds.len() - 1;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(ReplayApp {
                    replay: self,
                    legend: config.legend,
                    frame: 0,
                    last_frame,
                    playing: false,
                }))
            }),
        )
    }
}

/// The egui [`eframe::App`] that steps through a replay.
struct ReplayApp {
    replay: RunReplay,
    legend: bool,
    frame: usize,
    last_frame: usize,
    playing: bool,
}

impl eframe::App for ReplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.playing {
            self.frame = if self.frame == self.last_frame {
                0
            } else {
                self.frame + 1
            };
            ctx.request_repaint_after(FRAME_DELAY);
        }

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.playing, "Play");
                ui.add(egui::Slider::new(&mut self.frame, 0..=self.last_frame).text("iteration"));
            });
        });

        egui::SidePanel::right("diagnostics")
            .default_width(240.0)
            .show(ctx, |ui| self.diagnostics_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.descent_panel(ui));
    }
}

impl ReplayApp {
    /// The objective curve with the iterates visited so far.
    fn descent_panel(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("descent").data_aspect(1.0);
        if self.legend {
            plot = plot.legend(Legend::default());
        }

        let curve: PlotPoints = self.replay.curve.iter().copied().collect();
        let visited: PlotPoints = self.replay.trajectory[..=self.frame].iter().copied().collect();
        let optima: PlotPoints = self.replay.optima[..=self.frame].iter().copied().collect();

        plot.show(ui, |plot_ui| {
            plot_ui.line(Line::new(curve).name("objective"));
            plot_ui.points(
                Points::new(visited)
                    .name("points")
                    .radius(4.0)
                    .color(egui::Color32::GREEN),
            );
            plot_ui.points(
                Points::new(optima)
                    .name("optima")
                    .shape(MarkerShape::Cross)
                    .radius(6.0)
                    .color(egui::Color32::RED),
            );
        });
    }

    /// The current frame's upper bound (outline) and observed error (fill).
    fn diagnostics_panel(&self, ui: &mut egui::Ui) {
        let bound = Bar::new(0.0, self.replay.upper_bounds[self.frame])
            .width(0.8)
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.5, egui::Color32::LIGHT_BLUE));
        let error = Bar::new(0.0, self.replay.errors[self.frame])
            .width(0.8)
            .fill(egui::Color32::GREEN);

        let mut plot = Plot::new("diagnostics")
            .include_y(0.0)
            .include_y(self.replay.bar_ceiling);
        if self.legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(vec![bound]).name("upper bound"));
            plot_ui.bar_chart(BarChart::new(vec![error]).name("optimum error"));
        });
    }
}
