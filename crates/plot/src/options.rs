/// Per-figure styling for [`PlotSurface`](crate::PlotSurface).
///
/// These are the rendering options passed through a report's plotting calls.
/// Construct with [`PlotOptions::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```
/// use alns_plot::PlotOptions;
///
/// let options = PlotOptions::new().line_width(2.0).bar_height(0.8).hide_counts();
/// assert_eq!(options.bar_height_value(), 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    line_width: Option<f32>,
    bar_height: f64,
    show_counts: bool,
}

impl PlotOptions {
    pub const DEFAULT_BAR_HEIGHT: f64 = 0.5;

    /// Creates options with defaults: egui's line width, bars half a row
    /// high, and count labels shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_width: None,
            bar_height: Self::DEFAULT_BAR_HEIGHT,
            show_counts: true,
        }
    }

    /// Sets the stroke width of trajectory and weight lines.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Sets the thickness of outcome bars, as a fraction of one row.
    #[must_use]
    pub fn bar_height(mut self, height: f64) -> Self {
        self.bar_height = height;
        self
    }

    /// Hides the count labels drawn on outcome bar segments.
    #[must_use]
    pub fn hide_counts(mut self) -> Self {
        self.show_counts = false;
        self
    }

    #[must_use]
    pub fn line_width_value(&self) -> Option<f32> {
        self.line_width
    }

    #[must_use]
    pub fn bar_height_value(&self) -> f64 {
        self.bar_height
    }

    #[must_use]
    pub fn shows_counts(&self) -> bool {
        self.show_counts
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the window opened by [`PlotSurface::show`](crate::PlotSurface::show).
#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    title: Option<String>,
    size: Option<[f32; 2]>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: a generic title and the
    /// platform's default window size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            size: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the initial window size in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some([width, height]);
        self
    }

    pub(crate) fn window_title(&self) -> &str {
        self.title.as_deref().unwrap_or("ALNS report")
    }

    pub(crate) fn window_size(&self) -> Option<[f32; 2]> {
        self.size
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}
