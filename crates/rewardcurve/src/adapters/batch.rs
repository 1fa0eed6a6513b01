//! Batch adapter for running-mean smoothing.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: complete reward
//! sequences held in memory, smoothed in a single pass.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sequence in a single pass.
//! * **Order**: Preserves input order; episodes are never re-sorted.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built processor can smooth any number of sequences.
//!
//! ## Invariants
//!
//! * The window is validated against each input's length.
//! * All values must be finite.
//!
//! ## Non-goals
//!
//! * This adapter does not handle incremental updates (use online adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CurveExecutor;
use crate::engine::output::RewardCurve;
use crate::engine::validator::Validator;
use crate::primitives::errors::CurveError;
use crate::primitives::input::RewardInput;

/// Window used when none is configured.
pub const DEFAULT_WINDOW: usize = 10;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch running-mean processor.
#[derive(Debug, Clone)]
pub struct BatchRunningMeanBuilder<T> {
    /// Number of consecutive values averaged per output.
    pub window: usize,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for BatchRunningMeanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchRunningMeanBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the smoothing window.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchRunningMean<T>, CurveError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Window bounds against the data are checked per call
        Validator::validate_window_size(self.window)?;

        Ok(BatchRunningMean { config: self })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch running-mean processor.
#[derive(Debug, Clone)]
pub struct BatchRunningMean<T> {
    config: BatchRunningMeanBuilder<T>,
}

impl<T: Float> BatchRunningMean<T> {
    /// Configured window size.
    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Running mean of a plain value sequence.
    pub fn smooth(&self, values: &[T]) -> Result<Vec<T>, CurveError> {
        CurveExecutor::smooth(values, self.config.window)
    }

    /// Smooth a reward sequence and align the result to its episodes.
    pub fn fit<I>(&self, input: &I) -> Result<RewardCurve<T>, CurveError>
    where
        I: RewardInput<T> + ?Sized,
    {
        CurveExecutor::fit(input, self.config.window)
    }
}
