//! A native egui rendering surface for ALNS run reports.
//!
//! [`PlotSurface`] implements [`alns_report::Surface`]. Lend it to a report's
//! plotting calls, then [`show`](PlotSurface::show) the collected figures in
//! a window (one tab per figure):
//!
//! - objective trajectories as two lines, current and best
//! - operator weights as one named line per operator, destroy and repair
//!   panels stacked
//! - operator outcomes as stacked horizontal bars with centred counts and one
//!   shared legend row
//!
//! [`PlotOptions`] are the per-figure rendering options passed through the
//! report; [`ShowConfig`] configures the window itself.

mod error;
mod geometry;
mod options;
mod surface;

pub use error::Error;
pub use options::{PlotOptions, ShowConfig};
pub use surface::PlotSurface;
