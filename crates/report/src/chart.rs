//! Chart data built from run statistics.
//!
//! The builders in this module are pure functions from telemetry to chart
//! data:
//!
//! - [`trajectory::build`]: objective values and their running minimum
//! - [`weights::build`]: one weight series per operator
//! - [`outcomes::build`]: a stacked bar layout of operator outcome counts
//!
//! The figure types bundle that data with the titles and axis labels a
//! [`Surface`](crate::Surface) needs to draw it.

pub mod outcomes;
pub mod trajectory;
pub mod weights;

use outcomes::{Legend, OutcomeLayout};
use trajectory::TrajectorySeries;
use weights::WeightSeries;

/// Title of the destroy operator panel.
pub const DESTROY_TITLE: &str = "Destroy operators";

/// Title of the repair operator panel.
pub const REPAIR_TITLE: &str = "Repair operators";

pub const ITERATION_LABEL: &str = "Iteration (#)";
pub const WEIGHT_LABEL: &str = "Weight";
pub const OUTCOME_X_LABEL: &str = "Iterations where operator resulted in this outcome (#)";
pub const OUTCOME_Y_LABEL: &str = "Operator";

/// The objective trajectory chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrajectoryChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Legend entries, matching the current and best series in that order.
    pub labels: [String; 2],

    pub series: TrajectorySeries,
}

impl TrajectoryChart {
    #[must_use]
    pub fn new(title: impl Into<String>, series: TrajectorySeries) -> Self {
        Self {
            title: title.into(),
            x_label: TrajectorySeries::X_LABEL.to_owned(),
            y_label: TrajectorySeries::Y_LABEL.to_owned(),
            labels: TrajectorySeries::LABELS.map(str::to_owned),
            series,
        }
    }
}

/// Weight series of one operator category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<WeightSeries>,
}

impl WeightPanel {
    #[must_use]
    pub fn new(title: impl Into<String>, series: Vec<WeightSeries>) -> Self {
        Self {
            title: title.into(),
            x_label: ITERATION_LABEL.to_owned(),
            y_label: WEIGHT_LABEL.to_owned(),
            series,
        }
    }
}

/// Destroy and repair weight panels, stacked vertically.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightsFigure {
    /// Figure title, if one was requested.
    pub title: Option<String>,

    pub destroy: WeightPanel,
    pub repair: WeightPanel,
}

/// Outcome bars of one operator category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomePanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub layout: OutcomeLayout,
}

impl OutcomePanel {
    #[must_use]
    pub fn new(title: impl Into<String>, layout: OutcomeLayout) -> Self {
        Self {
            title: title.into(),
            x_label: OUTCOME_X_LABEL.to_owned(),
            y_label: OUTCOME_Y_LABEL.to_owned(),
            layout,
        }
    }
}

/// Destroy and repair outcome panels with a shared legend.
///
/// The legend has one entry per outcome layer and is meant to be laid out in
/// a single row below both panels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomesFigure {
    pub title: Option<String>,
    pub legend: Legend,
    pub destroy: OutcomePanel,
    pub repair: OutcomePanel,
}
