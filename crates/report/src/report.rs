use crate::{
    CountsConfig, Error, FigureConfig, ObjectivesConfig, Statistics, Surface, Telemetry,
    chart::{
        DESTROY_TITLE, OutcomePanel, OutcomesFigure, REPAIR_TITLE, TrajectoryChart, WeightPanel,
        WeightsFigure, outcomes, trajectory, weights,
    },
};

/// The outcome of a finished run: the best solution and, if they were
/// collected, the run's statistics.
///
/// A report is created once, after the run completes, and never changes.
/// The solution type `S` is stored and handed back as is.
///
/// # Example
///
/// ```
/// use alns_report::{Error, Report};
///
/// let report: Report<&str> = Report::without_telemetry("best tour");
///
/// assert_eq!(report.best(), &"best tour");
/// assert!(matches!(report.telemetry(), Err(Error::MissingData)));
/// ```
#[derive(Debug, Clone)]
pub struct Report<S, T = Statistics> {
    best: S,
    telemetry: Option<T>,
}

impl<S, T> Report<S, T> {
    /// Creates a report from the best solution and optional telemetry.
    pub fn new(best: S, telemetry: Option<T>) -> Self {
        Self { best, telemetry }
    }

    /// Creates a report for a run that did not collect telemetry.
    pub fn without_telemetry(best: S) -> Self {
        Self::new(best, None)
    }

    /// The best solution observed during the entire run.
    pub fn best(&self) -> &S {
        &self.best
    }

    /// The statistics collected during the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingData`] if the run did not collect statistics.
    pub fn telemetry(&self) -> Result<&T, Error> {
        self.telemetry.as_ref().ok_or(Error::MissingData)
    }

    pub fn has_telemetry(&self) -> bool {
        self.telemetry.is_some()
    }

    /// Splits the report into the best solution and the telemetry.
    pub fn into_parts(self) -> (S, Option<T>) {
        (self.best, self.telemetry)
    }
}

impl<S, T: Telemetry> Report<S, T> {
    /// Plots the objective value at each iteration, along with the best value
    /// found so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingData`] without touching the surface if the run
    /// did not collect statistics, or [`Error::Surface`] if drawing fails.
    pub fn plot_objectives<Sf: Surface>(
        &self,
        mut surface: Sf,
        config: &ObjectivesConfig,
        options: &Sf::Options,
    ) -> Result<(), Error> {
        let telemetry = self.plot_telemetry("objectives")?;

        let chart = TrajectoryChart::new(
            config.chart_title(),
            trajectory::build(telemetry.objectives()),
        );
        tracing::debug!(iterations = chart.series.len(), "plotting objectives");

        surface
            .draw_trajectory(&chart, options)
            .map_err(Error::surface)
    }

    /// Plots the weight of every destroy and repair operator at each
    /// iteration, one panel per category. Series are labelled with the
    /// operator names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingData`] without touching the surface if the run
    /// did not collect statistics, or [`Error::Surface`] if drawing fails.
    pub fn plot_operator_weights<Sf: Surface>(
        &self,
        mut surface: Sf,
        config: &FigureConfig,
        options: &Sf::Options,
    ) -> Result<(), Error> {
        let telemetry = self.plot_telemetry("operator weights")?;

        let figure = WeightsFigure {
            title: config.figure_title().map(str::to_owned),
            destroy: WeightPanel::new(DESTROY_TITLE, weights::build(telemetry.destroy_weights())),
            repair: WeightPanel::new(REPAIR_TITLE, weights::build(telemetry.repair_weights())),
        };
        tracing::debug!(
            destroy = figure.destroy.series.len(),
            repair = figure.repair.series.len(),
            "plotting operator weights"
        );

        surface
            .draw_weights(&figure, options)
            .map_err(Error::surface)
    }

    /// Plots how often each destroy and repair operator produced each outcome,
    /// as stacked horizontal bars.
    ///
    /// Only the outcome types named by the config's legend are shown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingData`] without touching the surface if the run
    /// did not collect statistics, or [`Error::Surface`] if drawing fails.
    pub fn plot_operator_counts<Sf: Surface>(
        &self,
        mut surface: Sf,
        config: &CountsConfig,
        options: &Sf::Options,
    ) -> Result<(), Error> {
        let telemetry = self.plot_telemetry("operator counts")?;

        let legend = config.legend_labels().clone();
        let num_types = legend.num_types();

        let figure = OutcomesFigure {
            title: config.figure_title().map(str::to_owned),
            destroy: OutcomePanel::new(
                DESTROY_TITLE,
                outcomes::build(telemetry.destroy_outcome_counts(), num_types)?,
            ),
            repair: OutcomePanel::new(
                REPAIR_TITLE,
                outcomes::build(telemetry.repair_outcome_counts(), num_types)?,
            ),
            legend,
        };
        tracing::debug!(num_types, "plotting operator counts");

        surface
            .draw_outcomes(&figure, options)
            .map_err(Error::surface)
    }

    fn plot_telemetry(&self, chart: &str) -> Result<&T, Error> {
        self.telemetry().inspect_err(|_| {
            tracing::warn!(chart, "cannot plot: no statistics collected during this run");
        })
    }
}
