//! Execution engine for running-mean smoothing.
//!
//! ## Purpose
//!
//! This module is the single entry point through which every adapter and
//! the top-level functions run the smoothing pipeline: validate, smooth,
//! align.
//!
//! ## Invariants
//!
//! * Nothing is computed unless every check passes.
//! * A window wider than the data is an error, never an empty result.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::running_mean::running_mean_unchecked;
use crate::engine::output::RewardCurve;
use crate::engine::validator::Validator;
use crate::primitives::errors::CurveError;
use crate::primitives::input::RewardInput;

/// Stateless executor for the smoothing pipeline.
pub struct CurveExecutor;

impl CurveExecutor {
    /// Validate `values` and `window`, then compute the running mean.
    pub fn smooth<T: Float>(values: &[T], window: usize) -> Result<Vec<T>, CurveError> {
        Validator::validate_values(values)?;
        Validator::validate_window(window, values.len())?;

        Ok(running_mean_unchecked(values, window))
    }

    /// Smooth the reward column of already-unzipped samples.
    pub fn fit_columns<T: Float>(
        episodes: Vec<T>,
        rewards: Vec<T>,
        window: usize,
    ) -> Result<RewardCurve<T>, CurveError> {
        Validator::validate_columns(&episodes, &rewards)?;
        Validator::validate_window(window, rewards.len())?;

        let smoothed = running_mean_unchecked(&rewards, window);
        log::debug!(
            "smoothed {} episodes with window {} into {} points",
            rewards.len(),
            window,
            smoothed.len()
        );

        Ok(RewardCurve::from_parts(episodes, rewards, smoothed, window))
    }

    /// Unzip a reward sequence and smooth it.
    pub fn fit<T, I>(input: &I, window: usize) -> Result<RewardCurve<T>, CurveError>
    where
        T: Float,
        I: RewardInput<T> + ?Sized,
    {
        let (episodes, rewards) = input.unzip_samples()?;
        Self::fit_columns(episodes, rewards, window)
    }
}
