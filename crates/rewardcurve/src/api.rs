//! High-level API for reward-curve smoothing and plotting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the two
//! one-call functions [`running_mean`] and [`plot_rewards`], and a fluent
//! builder for choosing an execution adapter (Batch or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RunningMeanBuilder`] via `RunningMean::new()`.
//! 2. Set the window with `.window()`.
//! 3. Select an adapter via `.adapter(Batch)` or `.adapter(Online)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CurveExecutor;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchRunningMean, BatchRunningMeanBuilder, DEFAULT_WINDOW};
pub use crate::adapters::online::{OnlineOutput, OnlineRunningMean, OnlineRunningMeanBuilder};
pub use crate::engine::output::RewardCurve;
pub use crate::primitives::errors::CurveError;
pub use crate::primitives::input::RewardInput;

#[cfg(feature = "std")]
pub use crate::render::{
    plot::{RewardPlotBuilder, RewardPlotter},
    recorder::{RecordedSeries, RecordingSurface},
    style::{LineStyle, Rgb},
    surface::ChartSurface,
};

#[cfg(feature = "plot")]
pub use crate::render::svg::SvgSurface;

// ============================================================================
// One-call functions
// ============================================================================

/// Running mean of `values` over windows of `window` consecutive elements.
///
/// Returns `values.len() - window + 1` averages, where element `i` is the
/// mean of `values[i..i + window]`. A window of 1 returns the values
/// unchanged, for finite input only: NaN and infinite values are rejected
/// rather than passed through.
///
/// # Errors
///
/// * [`CurveError::EmptyInput`] if `values` is empty.
/// * [`CurveError::InvalidWindow`] if `window == 0` or `window > values.len()`.
/// * [`CurveError::InvalidNumericValue`] if any value is NaN or infinite.
pub fn running_mean<T: Float>(values: &[T], window: usize) -> Result<Vec<T>, CurveError> {
    CurveExecutor::smooth(values, window)
}

/// Plot a reward sequence and its running mean on `surface`.
///
/// The smoothed curve is right-aligned to the episodes; the raw rewards are
/// drawn behind it in translucent grey. Nothing is presented on error.
#[cfg(feature = "std")]
pub fn plot_rewards<T, I, S>(rewards: &I, window: usize, surface: &mut S) -> Result<(), CurveError>
where
    T: Float,
    I: RewardInput<T> + ?Sized,
    S: ChartSurface + ?Sized,
{
    RewardPlotBuilder::new()
        .window(window)
        .build()?
        .plot(rewards, surface)
        .map(|_| ())
}

/// [`plot_rewards`] with the default window of 10.
#[cfg(feature = "std")]
pub fn plot_rewards_default<T, I, S>(rewards: &I, surface: &mut S) -> Result<(), CurveError>
where
    T: Float,
    I: RewardInput<T> + ?Sized,
    S: ChartSurface + ?Sized,
{
    plot_rewards(rewards, DEFAULT_WINDOW, surface)
}

// ============================================================================
// Fluent builder
// ============================================================================

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online};
}

/// Fluent builder for configuring a running mean and its execution mode.
#[derive(Debug, Clone)]
pub struct RunningMeanBuilder<T> {
    /// Smoothing window.
    pub window: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for RunningMeanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RunningMeanBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: CurveAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the smoothing window.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait CurveAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`RunningMeanBuilder`] into a specialized execution builder.
    fn convert(builder: RunningMeanBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> CurveAdapter<T> for Batch {
    type Output = BatchRunningMeanBuilder<T>;

    fn convert(builder: RunningMeanBuilder<T>) -> Self::Output {
        let mut result = BatchRunningMeanBuilder::default();

        if let Some(window) = builder.window {
            result = result.window(window);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> CurveAdapter<T> for Online {
    type Output = OnlineRunningMeanBuilder<T>;

    fn convert(builder: RunningMeanBuilder<T>) -> Self::Output {
        let mut result = OnlineRunningMeanBuilder::default();

        if let Some(window) = builder.window {
            result = result.window(window);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
