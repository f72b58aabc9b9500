//! Result reporting for adaptive large neighbourhood search (ALNS) runs.
//!
//! Once a run finishes, its best solution and (optionally) the statistics it
//! collected are stored in a [`Report`]. The report turns those statistics
//! into chart data and hands it to a rendering [`Surface`]:
//!
//! - [`Report::plot_objectives`] — objective value per iteration and the best
//!   value so far
//! - [`Report::plot_operator_weights`] — weight of each destroy and repair
//!   operator per iteration
//! - [`Report::plot_operator_counts`] — how often each operator produced a new
//!   best, a better, an accepted, or a rejected solution, as stacked bars
//!
//! The builders behind these calls live in [`chart`] and can be used on their
//! own. This crate never draws anything itself; see the `alns-plot` crate for
//! an egui surface.
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for the statistics and chart data, so they
//!   can be exported to an external renderer.

pub mod chart;

mod config;
mod error;
mod operators;
mod outcome;
mod report;
mod surface;
mod telemetry;

pub use config::{CountsConfig, FigureConfig, ObjectivesConfig};
pub use error::Error;
pub use operators::OperatorMap;
pub use outcome::{Outcome, OutcomeCounts};
pub use report::Report;
pub use surface::Surface;
pub use telemetry::{Statistics, Telemetry};
