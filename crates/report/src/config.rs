//! Titles and legends for the report's plotting calls.
//!
//! Construct a config with `new` (or `Default`) and chain builder methods as
//! needed.
//!
//! ```
//! use alns_report::{CountsConfig, ObjectivesConfig};
//!
//! let objectives = ObjectivesConfig::new().title("Objective, seed 42");
//! let counts = CountsConfig::new()
//!     .title("Operator outcomes")
//!     .legend(["New best", "Improved"])?;
//! # Ok::<(), alns_report::Error>(())
//! ```

use crate::{Error, chart::outcomes::Legend};

/// Configuration for [`Report::plot_objectives`](crate::Report::plot_objectives).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectivesConfig {
    title: String,
}

impl ObjectivesConfig {
    pub const DEFAULT_TITLE: &'static str = "Objective value at each iteration";

    /// Creates a config with the default title.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_owned(),
        }
    }

    /// Sets the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn chart_title(&self) -> &str {
        &self.title
    }
}

impl Default for ObjectivesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`Report::plot_operator_weights`](crate::Report::plot_operator_weights).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureConfig {
    title: Option<String>,
}

impl FigureConfig {
    /// Creates a config without a figure title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn figure_title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Configuration for [`Report::plot_operator_counts`](crate::Report::plot_operator_counts).
///
/// Defaults to no figure title and the full four-entry legend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountsConfig {
    title: Option<String>,
    legend: Legend,
}

impl CountsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the legend.
    ///
    /// Only the first `labels.len()` outcome types are plotted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLegend`] unless there are between one and four
    /// labels.
    pub fn legend<I, L>(mut self, labels: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.legend = Legend::new(labels)?;
        Ok(self)
    }

    #[must_use]
    pub fn figure_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn legend_labels(&self) -> &Legend {
        &self.legend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objectives_default_title() {
        assert_eq!(
            ObjectivesConfig::default().chart_title(),
            "Objective value at each iteration"
        );
        assert_eq!(ObjectivesConfig::new().title("Run 7").chart_title(), "Run 7");
    }

    #[test]
    fn figure_title_is_unset_by_default() {
        assert_eq!(FigureConfig::new().figure_title(), None);
        assert_eq!(FigureConfig::new().title("W").figure_title(), Some("W"));
    }

    #[test]
    fn counts_defaults_to_full_legend() {
        let config = CountsConfig::new();
        assert_eq!(config.figure_title(), None);
        assert_eq!(config.legend_labels().num_types(), 4);
    }

    #[test]
    fn counts_rejects_long_legend() {
        let result = CountsConfig::new().legend(["1", "2", "3", "4", "5"]);
        assert!(matches!(result, Err(Error::InvalidLegend { found: 5 })));
    }
}
