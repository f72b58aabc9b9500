use crate::chart::{OutcomesFigure, TrajectoryChart, WeightsFigure};

/// A rendering backend that draws report figures.
///
/// A surface is passed explicitly to each plotting call on
/// [`Report`](crate::Report); nothing in this crate keeps a global "current"
/// surface. Each plotting call builds its figure completely and then calls
/// the surface exactly once.
///
/// The surface owns everything about drawing: windows or files, colours,
/// layout, and redraws. [`Options`](Surface::Options) are whatever extra
/// styling the backend understands; they are passed through unchanged and
/// never looked at by this crate.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use alns_report::{
///     Surface,
///     chart::{OutcomesFigure, TrajectoryChart, WeightsFigure},
/// };
///
/// /// Prints figure titles instead of drawing anything.
/// struct Titles;
///
/// impl Surface for Titles {
///     type Options = ();
///     type Error = Infallible;
///
///     fn draw_trajectory(&mut self, chart: &TrajectoryChart, _: &()) -> Result<(), Infallible> {
///         println!("{}", chart.title);
///         Ok(())
///     }
///
///     fn draw_weights(&mut self, figure: &WeightsFigure, _: &()) -> Result<(), Infallible> {
///         println!("{} / {}", figure.destroy.title, figure.repair.title);
///         Ok(())
///     }
///
///     fn draw_outcomes(&mut self, figure: &OutcomesFigure, _: &()) -> Result<(), Infallible> {
///         println!("{} / {}", figure.destroy.title, figure.repair.title);
///         Ok(())
///     }
/// }
/// ```
pub trait Surface {
    /// Backend-specific rendering options.
    type Options;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws the objective trajectory chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to draw.
    fn draw_trajectory(
        &mut self,
        chart: &TrajectoryChart,
        options: &Self::Options,
    ) -> Result<(), Self::Error>;

    /// Draws the destroy and repair weight panels.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to draw.
    fn draw_weights(
        &mut self,
        figure: &WeightsFigure,
        options: &Self::Options,
    ) -> Result<(), Self::Error>;

    /// Draws the destroy and repair outcome panels and their legend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to draw.
    fn draw_outcomes(
        &mut self,
        figure: &OutcomesFigure,
        options: &Self::Options,
    ) -> Result<(), Self::Error>;
}

/// Allows a surface to be lent to a plotting call and reused afterwards.
impl<S: Surface + ?Sized> Surface for &mut S {
    type Options = S::Options;
    type Error = S::Error;

    fn draw_trajectory(
        &mut self,
        chart: &TrajectoryChart,
        options: &Self::Options,
    ) -> Result<(), Self::Error> {
        (**self).draw_trajectory(chart, options)
    }

    fn draw_weights(
        &mut self,
        figure: &WeightsFigure,
        options: &Self::Options,
    ) -> Result<(), Self::Error> {
        (**self).draw_weights(figure, options)
    }

    fn draw_outcomes(
        &mut self,
        figure: &OutcomesFigure,
        options: &Self::Options,
    ) -> Result<(), Self::Error> {
        (**self).draw_outcomes(figure, options)
    }
}
