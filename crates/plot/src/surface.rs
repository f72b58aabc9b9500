//! An egui window that shows report figures.
//!
//! See [`PlotSurface`] for usage.

use std::convert::Infallible;

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};

use alns_report::{
    Surface,
    chart::{OutcomePanel, OutcomesFigure, TrajectoryChart, WeightPanel, WeightsFigure},
};

use crate::{
    Error, PlotOptions, ShowConfig,
    geometry::{self, Trace},
};

/// Colours for the outcome layers, in outcome order.
const OUTCOME_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0xd6, 0x27, 0x28),
];

/// Vertical space taken by a panel's title label.
const PANEL_TITLE_HEIGHT: f32 = 24.0;

/// Smallest plot height, kept even when the window is very short.
const MIN_PLOT_HEIGHT: f32 = 40.0;

/// A figure waiting to be shown.
enum Figure {
    Trajectory(TrajectoryChart),
    Weights(WeightsFigure),
    Outcomes(OutcomesFigure),
}

impl Figure {
    fn tab_name(&self) -> &str {
        match self {
            Figure::Trajectory(chart) => &chart.title,
            Figure::Weights(figure) => figure.title.as_deref().unwrap_or("Operator weights"),
            Figure::Outcomes(figure) => figure.title.as_deref().unwrap_or("Operator outcomes"),
        }
    }
}

/// A [`Surface`] that collects report figures and displays them in a native
/// egui window.
///
/// Pass `&mut PlotSurface` to a report's plotting calls, then call
/// [`show`](PlotSurface::show) to open the window. Each figure gets its own
/// tab.
///
/// # Example
///
/// ```ignore
/// let mut surface = PlotSurface::new();
/// report.plot_objectives(&mut surface, &ObjectivesConfig::new(), &PlotOptions::new())?;
/// report.plot_operator_counts(&mut surface, &CountsConfig::new(), &PlotOptions::new())?;
/// surface.show(ShowConfig::new().title("Run 1"))?;
/// ```
#[derive(Default)]
pub struct PlotSurface {
    figures: Vec<(Figure, PlotOptions)>,
}

impl PlotSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of figures drawn so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Opens a blocking egui window displaying every figure drawn so far.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if nothing was drawn, or [`Error::Window`] if
    /// the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), Error> {
        if self.figures.is_empty() {
            return Err(Error::Empty);
        }

        let mut viewport = egui::ViewportBuilder::default().with_title(config.window_title());
        if let Some(size) = config.window_size() {
            viewport = viewport.with_inner_size(size);
        }
        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        tracing::info!(figures = self.figures.len(), "opening plot window");

        let app = ReportApp {
            figures: self.figures,
            selected: 0,
        };
        eframe::run_native(
            config.window_title(),
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )?;

        Ok(())
    }

    fn push(&mut self, figure: Figure, options: &PlotOptions) {
        tracing::debug!(figure = figure.tab_name(), "figure drawn");
        self.figures.push((figure, options.clone()));
    }
}

impl Surface for PlotSurface {
    type Options = PlotOptions;
    type Error = Infallible;

    fn draw_trajectory(
        &mut self,
        chart: &TrajectoryChart,
        options: &PlotOptions,
    ) -> Result<(), Infallible> {
        self.push(Figure::Trajectory(chart.clone()), options);
        Ok(())
    }

    fn draw_weights(
        &mut self,
        figure: &WeightsFigure,
        options: &PlotOptions,
    ) -> Result<(), Infallible> {
        self.push(Figure::Weights(figure.clone()), options);
        Ok(())
    }

    fn draw_outcomes(
        &mut self,
        figure: &OutcomesFigure,
        options: &PlotOptions,
    ) -> Result<(), Infallible> {
        self.push(Figure::Outcomes(figure.clone()), options);
        Ok(())
    }
}

/// The egui [`eframe::App`] that renders collected figures.
struct ReportApp {
    figures: Vec<(Figure, PlotOptions)>,
    selected: usize,
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.figures.len() > 1 {
            egui::TopBottomPanel::top("figure_tabs").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (i, (figure, _)) in self.figures.iter().enumerate() {
                        ui.selectable_value(&mut self.selected, i, figure.tab_name());
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some((figure, options)) = self.figures.get(self.selected) else {
                return;
            };
            match figure {
                Figure::Trajectory(chart) => show_trajectory(ui, chart, options),
                Figure::Weights(figure) => show_weights(ui, figure, options),
                Figure::Outcomes(figure) => show_outcomes(ui, figure, options),
            }
        });
    }
}

fn show_trajectory(ui: &mut egui::Ui, chart: &TrajectoryChart, options: &PlotOptions) {
    ui.heading(chart.title.as_str());
    Plot::new("trajectory")
        .legend(Legend::default().position(egui_plot::Corner::RightTop))
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show(ui, |plot_ui| {
            for trace in geometry::trajectory_traces(chart) {
                plot_ui.line(line(trace, options));
            }
        });
}

fn show_weights(ui: &mut egui::Ui, figure: &WeightsFigure, options: &PlotOptions) {
    if let Some(title) = &figure.title {
        ui.heading(title.as_str());
    }
    let height = ui.available_height() / 2.0;
    let panels = [("destroy_weights", &figure.destroy), ("repair_weights", &figure.repair)];
    for (id, panel) in panels {
        show_weight_panel(ui, id, panel, options, height);
    }
}

fn show_weight_panel(
    ui: &mut egui::Ui,
    id: &str,
    panel: &WeightPanel,
    options: &PlotOptions,
    height: f32,
) {
    ui.label(egui::RichText::new(&panel.title).strong());
    Plot::new(id)
        .height(plot_height(height))
        .legend(Legend::default())
        .x_axis_label(panel.x_label.as_str())
        .y_axis_label(panel.y_label.as_str())
        .show(ui, |plot_ui| {
            for trace in geometry::weight_traces(panel) {
                plot_ui.line(line(trace, options));
            }
        });
}

fn show_outcomes(ui: &mut egui::Ui, figure: &OutcomesFigure, options: &PlotOptions) {
    if let Some(title) = &figure.title {
        ui.heading(title.as_str());
    }

    let legend_height = 28.0;
    let height = (ui.available_height() - legend_height) / 2.0;
    let labels = figure.legend.labels();
    let panels = [
        ("destroy_outcomes", &figure.destroy),
        ("repair_outcomes", &figure.repair),
    ];
    for (id, panel) in panels {
        show_outcome_panel(ui, id, panel, labels, options, height);
    }

    // One shared legend row below both panels.
    ui.horizontal(|ui| {
        for (label, color) in labels.iter().zip(OUTCOME_COLORS) {
            ui.colored_label(color, "■");
            ui.label(label.as_str());
        }
    });
}

#[allow(clippy::cast_precision_loss)]
fn show_outcome_panel(
    ui: &mut egui::Ui,
    id: &str,
    panel: &OutcomePanel,
    labels: &[String],
    options: &PlotOptions,
    height: f32,
) {
    let layout = &panel.layout;
    let rows = layout.bars().len();
    let names: Vec<String> = layout.operator_names().map(str::to_owned).collect();
    let formatter_layout = layout.clone();

    ui.label(egui::RichText::new(&panel.title).strong());
    Plot::new(id)
        .height(plot_height(height))
        .x_axis_label(panel.x_label.as_str())
        .y_axis_label(panel.y_label.as_str())
        .include_x(0.0)
        .include_x(layout.x_max())
        .include_y(-0.5)
        .include_y(rows as f64 - 0.5)
        .y_axis_formatter(move |mark, _range| {
            geometry::row_name(&formatter_layout, mark.value)
                .unwrap_or_default()
                .to_owned()
        })
        .show(ui, |plot_ui| {
            for (layer, color) in layout.layers().iter().zip(OUTCOME_COLORS) {
                let bars = geometry::layer_rects(layer, rows)
                    .into_iter()
                    .zip(&names)
                    .map(|(rect, name)| {
                        Bar::new(rect.y, rect.width)
                            .base_offset(rect.start)
                            .width(options.bar_height_value())
                            .name(name)
                    })
                    .collect();

                let name = labels.get(layer.type_index).map_or("", String::as_str);
                plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color).name(name));

                if options.shows_counts() {
                    for label in geometry::layer_labels(layer, rows) {
                        let [x, y] = label.position;
                        plot_ui.text(Text::new(PlotPoint::new(x, y), label.text));
                    }
                }
            }
        });
}

/// Height of the plot inside a panel of the given height.
fn plot_height(panel_height: f32) -> f32 {
    (panel_height - PANEL_TITLE_HEIGHT).max(MIN_PLOT_HEIGHT)
}

fn line(trace: Trace, options: &PlotOptions) -> Line {
    let points: PlotPoints = trace.points.into_iter().collect();
    let line = Line::new(points).name(trace.name);
    match options.line_width_value() {
        Some(width) => line.width(width),
        None => line,
    }
}
