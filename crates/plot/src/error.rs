use thiserror::Error;

/// Errors that can occur when showing the plot window.
#[derive(Debug, Error)]
pub enum Error {
    /// There was nothing to show.
    #[error("no figures have been drawn")]
    Empty,

    /// The native window could not be created or run.
    #[error("plot window failed: {0}")]
    Window(String),
}

impl From<eframe::Error> for Error {
    fn from(error: eframe::Error) -> Self {
        Self::Window(error.to_string())
    }
}
