//! A surface that records every call instead of drawing.
//!
//! Useful for inspecting exactly what a plotter would draw, and for callers
//! that want the plotted series without producing an image.

// Internal dependencies
use crate::primitives::errors::CurveError;
use crate::render::style::LineStyle;
use crate::render::surface::ChartSurface;

/// One line series as it was handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSeries {
    /// Points in draw order.
    pub points: Vec<(f64, f64)>,

    /// Style the series was drawn with.
    pub style: LineStyle,
}

impl RecordedSeries {
    /// x-coordinates of the series.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// y-coordinates of the series.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

/// In-memory [`ChartSurface`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    series: Vec<RecordedSeries>,
    x_label: Option<String>,
    y_label: Option<String>,
    caption: Option<String>,
    presented: usize,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Series in the order they were drawn.
    pub fn series(&self) -> &[RecordedSeries] {
        &self.series
    }

    /// Horizontal axis label, if set.
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Vertical axis label, if set.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Chart title, if set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Number of times `present` was called.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl ChartSurface for RecordingSurface {
    fn draw_line(&mut self, points: &[(f64, f64)], style: LineStyle) -> Result<(), CurveError> {
        self.series.push(RecordedSeries {
            points: points.to_vec(),
            style,
        });
        Ok(())
    }

    fn set_x_label(&mut self, label: &str) {
        self.x_label = Some(label.to_owned());
    }

    fn set_y_label(&mut self, label: &str) {
        self.y_label = Some(label.to_owned());
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_owned());
    }

    fn present(&mut self) -> Result<(), CurveError> {
        self.presented += 1;
        Ok(())
    }
}
