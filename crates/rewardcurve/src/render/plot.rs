//! Reward-curve plotter.
//!
//! ## Purpose
//!
//! This module draws a reward sequence and its running mean onto any
//! [`ChartSurface`]: the smoothed trend in front, the raw rewards behind it
//! as a muted, translucent backdrop.
//!
//! ## Design notes
//!
//! * **Fail before drawing**: Input and window errors are raised before the
//!   surface is touched, so a failed call never presents a chart.
//! * **Alignment**: The smoothed series is drawn against the last
//!   `N - window + 1` episodes.
//! * **Builder**: Same fluent style and duplicate-parameter checks as the
//!   smoothing builder.
//!
//! ## Key concepts
//!
//! 1. Smoothed series (trend, drawn first)
//! 2. Raw series (context, drawn second)
//! 3. Axis labels `Episode` / `Total Reward`
//! 4. Blocking `present`

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::DEFAULT_WINDOW;
use crate::engine::executor::CurveExecutor;
use crate::engine::output::RewardCurve;
use crate::engine::validator::Validator;
use crate::primitives::errors::CurveError;
use crate::primitives::input::RewardInput;
use crate::render::style::LineStyle;
use crate::render::surface::ChartSurface;

/// Default horizontal axis label.
pub const X_LABEL: &str = "Episode";

/// Default vertical axis label.
pub const Y_LABEL: &str = "Total Reward";

// ============================================================================
// Plot Builder
// ============================================================================

/// Fluent builder for a [`RewardPlotter`].
#[derive(Debug, Clone)]
pub struct RewardPlotBuilder {
    /// Smoothing window.
    pub window: Option<usize>,

    /// Chart title.
    pub caption: Option<String>,

    /// Horizontal axis label.
    pub x_label: Option<String>,

    /// Vertical axis label.
    pub y_label: Option<String>,

    /// Style of the smoothed series.
    pub smoothed_style: Option<LineStyle>,

    /// Style of the raw series.
    pub raw_style: Option<LineStyle>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for RewardPlotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardPlotBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            caption: None,
            x_label: None,
            y_label: None,
            smoothed_style: None,
            raw_style: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing window (default 10).
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the chart title.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        if self.caption.is_some() {
            self.duplicate_param = Some("caption");
        }
        self.caption = Some(caption.into());
        self
    }

    /// Override the horizontal axis label.
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        if self.x_label.is_some() {
            self.duplicate_param = Some("x_label");
        }
        self.x_label = Some(label.into());
        self
    }

    /// Override the vertical axis label.
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        if self.y_label.is_some() {
            self.duplicate_param = Some("y_label");
        }
        self.y_label = Some(label.into());
        self
    }

    /// Override the style of the smoothed series.
    pub fn smoothed_style(mut self, style: LineStyle) -> Self {
        if self.smoothed_style.is_some() {
            self.duplicate_param = Some("smoothed_style");
        }
        self.smoothed_style = Some(style);
        self
    }

    /// Override the style of the raw series.
    pub fn raw_style(mut self, style: LineStyle) -> Self {
        if self.raw_style.is_some() {
            self.duplicate_param = Some("raw_style");
        }
        self.raw_style = Some(style);
        self
    }

    /// Validate the configuration and build the plotter.
    pub fn build(self) -> Result<RewardPlotter, CurveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let window = self.window.unwrap_or(DEFAULT_WINDOW);
        Validator::validate_window_size(window)?;

        let smoothed_style = self.smoothed_style.unwrap_or_else(LineStyle::smoothed);
        let raw_style = self.raw_style.unwrap_or_else(LineStyle::raw);
        Validator::validate_alpha(smoothed_style.alpha)?;
        Validator::validate_alpha(raw_style.alpha)?;

        Ok(RewardPlotter {
            window,
            caption: self.caption,
            x_label: self.x_label.unwrap_or_else(|| X_LABEL.to_owned()),
            y_label: self.y_label.unwrap_or_else(|| Y_LABEL.to_owned()),
            smoothed_style,
            raw_style,
        })
    }
}

// ============================================================================
// Plotter
// ============================================================================

/// Draws reward curves onto a [`ChartSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct RewardPlotter {
    window: usize,
    caption: Option<String>,
    x_label: String,
    y_label: String,
    smoothed_style: LineStyle,
    raw_style: LineStyle,
}

impl RewardPlotter {
    /// Configured smoothing window.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Smooth `input` and present it on `surface`.
    ///
    /// Returns the plotted curve.
    pub fn plot<T, I, S>(&self, input: &I, surface: &mut S) -> Result<RewardCurve<T>, CurveError>
    where
        T: Float,
        I: RewardInput<T> + ?Sized,
        S: ChartSurface + ?Sized,
    {
        let curve = CurveExecutor::fit(input, self.window)?;
        self.render(&curve, surface)?;
        Ok(curve)
    }

    /// Present an already smoothed curve on `surface`.
    pub fn render<T, S>(&self, curve: &RewardCurve<T>, surface: &mut S) -> Result<(), CurveError>
    where
        T: Float,
        S: ChartSurface + ?Sized,
    {
        let smoothed = to_points(curve.smoothed_points())?;
        let raw = to_points(curve.raw_points())?;

        if let Some(caption) = &self.caption {
            surface.set_caption(caption);
        }
        surface.draw_line(&smoothed, self.smoothed_style)?;
        surface.draw_line(&raw, self.raw_style)?;
        surface.set_x_label(&self.x_label);
        surface.set_y_label(&self.y_label);

        log::debug!(
            "plotting {} raw and {} smoothed points (window {})",
            raw.len(),
            smoothed.len(),
            curve.window
        );
        surface.present()
    }
}

fn to_points<T: Float>(points: impl Iterator<Item = (T, T)>) -> Result<Vec<(f64, f64)>, CurveError> {
    points
        .enumerate()
        .map(|(i, (x, y))| match (x.to_f64(), y.to_f64()) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(CurveError::InvalidNumericValue(format!(
                "point[{i}] cannot be drawn as f64"
            ))),
        })
        .collect()
}
