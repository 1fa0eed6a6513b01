//! The charting surface a reward plot is drawn onto.
//!
//! A surface accumulates line series and axis labels, then renders them all
//! in one blocking [`ChartSurface::present`] call. Coordinates are `f64`
//! regardless of the float type the curve was computed in.

// Internal dependencies
use crate::primitives::errors::CurveError;
use crate::render::style::LineStyle;

/// A 2D chart that draws connected line series.
pub trait ChartSurface {
    /// Queue an ordered sequence of `(x, y)` points as a connected line.
    fn draw_line(&mut self, points: &[(f64, f64)], style: LineStyle) -> Result<(), CurveError>;

    /// Set the horizontal axis label.
    fn set_x_label(&mut self, label: &str);

    /// Set the vertical axis label.
    fn set_y_label(&mut self, label: &str);

    /// Set the chart title. Surfaces without titles ignore it.
    fn set_caption(&mut self, _caption: &str) {}

    /// Render everything queued so far and finalize the output.
    ///
    /// Blocks until the chart is fully written. Drawing surfaces start a
    /// fresh chart afterwards.
    fn present(&mut self) -> Result<(), CurveError>;
}
