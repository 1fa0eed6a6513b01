//! SVG charting surface backed by `plotters`.
//!
//! ## Purpose
//!
//! This module renders queued line series into an SVG document, written
//! either to a file or kept in memory.
//!
//! ## Design notes
//!
//! * **Deferred drawing**: Series are buffered until `present`, because the
//!   axis ranges depend on every series.
//! * **Font-free**: Uses the SVG backend, which emits `<text>` elements and
//!   needs no system font library.
//!
//! ## Invariants
//!
//! * Axis ranges are finite and have positive width, even for a single point
//!   or values near `f64::MAX`.
//! * `present` starts a fresh chart: queued series, labels and caption are
//!   dropped once the document is produced.
//! * A file target is fully written before `present` returns.

// External dependencies
use core::fmt::Display;
use core::ops::Range;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

// Internal dependencies
use crate::primitives::errors::CurveError;
use crate::render::style::LineStyle;
use crate::render::surface::ChartSurface;

/// Default canvas size in pixels.
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Fraction of the data span added above and below the y-range.
const Y_PADDING: f64 = 0.05;

#[derive(Debug, Clone)]
enum SvgTarget {
    File(PathBuf),
    Memory,
}

/// [`ChartSurface`] that renders an SVG line chart.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    target: SvgTarget,
    size: (u32, u32),
    caption: Option<String>,
    x_label: String,
    y_label: String,
    series: Vec<(Vec<(f64, f64)>, LineStyle)>,
    document: Option<String>,
}

fn render_err<E: Display>(err: E) -> CurveError {
    CurveError::Render(err.to_string())
}

impl SvgSurface {
    fn with_target(target: SvgTarget) -> Self {
        Self {
            target,
            size: DEFAULT_SIZE,
            caption: None,
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            document: None,
        }
    }

    /// Surface that writes its SVG document to `path` on `present`.
    pub fn to_file<P: AsRef<Path>>(path: P) -> Self {
        Self::with_target(SvgTarget::File(path.as_ref().to_path_buf()))
    }

    /// Surface that keeps its SVG document in memory.
    pub fn in_memory() -> Self {
        Self::with_target(SvgTarget::Memory)
    }

    /// Set the canvas size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// The most recently presented SVG document.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of series queued since the last `present`.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Drop all queued series and the last document.
    pub fn clear(&mut self) {
        self.series.clear();
        self.document = None;
    }

    fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let mut points = self.series.iter().flat_map(|(pts, _)| pts.iter().copied());
        let Some((x0, y0)) = points.next() else {
            return (0.0..1.0, 0.0..1.0);
        };

        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
        for (x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let pad = finite((y_max - y_min) * Y_PADDING);
        (
            widen(x_min, x_max),
            widen(finite(y_min - pad), finite(y_max + pad)),
        )
    }

    fn render(&self) -> Result<String, CurveError> {
        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let (x_range, y_range) = self.ranges();
            let mut builder = ChartBuilder::on(&root);
            builder
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60);
            if let Some(caption) = &self.caption {
                builder.caption(caption, ("sans-serif", 24).into_font());
            }
            let mut chart = builder
                .build_cartesian_2d(x_range, y_range)
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .draw()
                .map_err(render_err)?;

            for (points, style) in &self.series {
                let stroke = RGBColor(style.color.0, style.color.1, style.color.2)
                    .mix(style.alpha)
                    .stroke_width(style.stroke_width);
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), stroke))
                    .map_err(render_err)?;
            }

            root.present().map_err(render_err)?;
        }
        Ok(buf)
    }
}

// Saturate overflowed bounds at the largest finite values.
fn finite(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}

// Range over `[lo, hi]`, widened around the midpoint when it is degenerate.
fn widen(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo {
        return lo..hi;
    }
    // 0.5 is lost in rounding for large magnitudes
    let half = 0.5_f64.max(lo.abs() * 1e-6);
    finite(lo - half)..finite(hi + half)
}

impl ChartSurface for SvgSurface {
    fn draw_line(&mut self, points: &[(f64, f64)], style: LineStyle) -> Result<(), CurveError> {
        self.series.push((points.to_vec(), style));
        Ok(())
    }

    fn set_x_label(&mut self, label: &str) {
        self.x_label = label.to_owned();
    }

    fn set_y_label(&mut self, label: &str) {
        self.y_label = label.to_owned();
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = Some(caption.to_owned());
    }

    fn present(&mut self) -> Result<(), CurveError> {
        let document = self.render()?;
        let presented = std::mem::take(&mut self.series).len();
        self.x_label.clear();
        self.y_label.clear();
        self.caption = None;

        if let SvgTarget::File(path) = &self.target {
            fs::write(path, &document).map_err(render_err)?;
            log::info!("wrote reward chart to {}", path.display());
        }
        log::debug!(
            "presented {} series on a {}x{} svg surface",
            presented,
            self.size.0,
            self.size.1
        );

        self.document = Some(document);
        Ok(())
    }
}
