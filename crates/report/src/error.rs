use thiserror::Error;

/// Errors that can occur when reading a report or building its charts.
#[derive(Debug, Error)]
pub enum Error {
    /// Telemetry was requested, but none was collected for this run.
    #[error("no statistics collected during this run")]
    MissingData,

    /// The legend (and so the number of outcome types) is outside `1..=4`.
    #[error("legend not understood: expected at most 4 items, found {found}")]
    InvalidLegend { found: usize },

    /// The rendering surface failed to draw a figure.
    #[error("surface error: {0}")]
    Surface(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a rendering surface failure.
    pub(crate) fn surface<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Surface(Box::new(error))
    }
}
