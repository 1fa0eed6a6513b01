//! Rendering: reward curves onto a 2D charting surface.
//!
//! # Purpose
//!
//! This module sits beside the smoothing layers and consumes their output.
//! It defines the [`surface::ChartSurface`] collaborator trait, line styles,
//! the reward-curve plotter, and two surfaces: an SVG chart backed by
//! `plotters` (feature `plot`) and an in-memory recorder.
//!
//! # Architecture
//!
//! ```text
//! RewardPlotter ──uses──▶ Engine (RewardCurve)
//!      │
//!      ▼
//! ChartSurface ◀── SvgSurface | RecordingSurface
//! ```

/// Colors and line styles.
pub mod style;

/// Charting surface trait.
pub mod surface;

/// Surface that records calls instead of drawing.
pub mod recorder;

/// SVG surface backed by `plotters`.
#[cfg(feature = "plot")]
pub mod svg;

/// Reward-curve plotter.
pub mod plot;
