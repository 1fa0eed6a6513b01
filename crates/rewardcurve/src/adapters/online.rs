//! Online adapter for incremental running-mean smoothing.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. Rewards
//! arrive one episode at a time, as a training loop produces them, and each
//! new episode yields the mean of the latest `window` rewards.
//!
//! ## Design notes
//!
//! * **Storage**: A deque of the last `window + 1` prefix-sum entries.
//! * **Exactness**: The cumulative total is built with the same additions as
//!   the batch prefix array, so online means equal batch means exactly.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Warm-up**: Returns `None` until `window` rewards have arrived.
//! * **Alignment**: Each mean is reported against the episode that completed
//!   its window.
//!
//! ## Invariants
//!
//! * The deque never holds more than `window + 1` entries.
//! * All accepted values are finite.
//!
//! ## Non-goals
//!
//! * This adapter does not reorder out-of-order episodes.
//! * This adapter does not retain the raw reward history.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::DEFAULT_WINDOW;
use crate::algorithms::running_mean::window_divisor;
use crate::engine::validator::Validator;
use crate::math::prefix::CumulativeSum;
use crate::primitives::errors::CurveError;
use crate::primitives::input::RewardInput;

// ============================================================================
// Online Builder
// ============================================================================

/// Builder for the online running-mean processor.
#[derive(Debug, Clone)]
pub struct OnlineRunningMeanBuilder<T> {
    /// Number of consecutive rewards averaged per output.
    pub window: usize,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for OnlineRunningMeanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineRunningMeanBuilder<T> {
    /// Create a new online builder with default parameters.
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

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineRunningMean<T>, CurveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window_size(self.window)?;
        Validator::validate_window_span(self.window)?;

        // Grows with the data, up to `window + 1` entries
        let mut prefix = VecDeque::new();
        prefix.push_back(T::zero());

        Ok(OnlineRunningMean {
            window: self.window,
            span: self.window + 1,
            divisor: window_divisor(self.window),
            total: CumulativeSum::new(),
            prefix,
            seen: 0,
        })
    }
}

// ============================================================================
// Online Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnlineOutput<T> {
    /// Episode that completed the window.
    pub episode: T,

    /// Raw reward of that episode.
    pub reward: T,

    /// Mean reward over the last `window` episodes.
    pub smoothed: T,
}

// ============================================================================
// Online Processor
// ============================================================================

/// Online running-mean processor for rewards arriving one at a time.
#[derive(Debug, Clone)]
pub struct OnlineRunningMean<T> {
    window: usize,
    span: usize,
    divisor: T,
    total: CumulativeSum<T>,
    /// Last `span` prefix-sum entries, oldest first.
    prefix: VecDeque<T>,
    seen: usize,
}

impl<T: Float> OnlineRunningMean<T> {
    /// Add the reward of a new episode and get the current running mean.
    ///
    /// Returns `Ok(None)` until `window` rewards have been added.
    pub fn add_point(&mut self, episode: T, reward: T) -> Result<Option<OnlineOutput<T>>, CurveError> {
        Validator::validate_scalar(episode, "episode")?;
        Validator::validate_scalar(reward, "reward")?;

        self.prefix.push_back(self.total.push(reward));
        if self.prefix.len() > self.span {
            self.prefix.pop_front();
        }
        self.seen += 1;

        if self.seen < self.window {
            return Ok(None);
        }

        let (Some(&oldest), Some(&newest)) = (self.prefix.front(), self.prefix.back()) else {
            return Ok(None);
        };

        Ok(Some(OnlineOutput {
            episode,
            reward,
            smoothed: (newest - oldest) / self.divisor,
        }))
    }

    /// Feed a whole reward sequence and collect every emitted mean.
    pub fn add_points<I>(&mut self, input: &I) -> Result<Vec<OnlineOutput<T>>, CurveError>
    where
        I: RewardInput<T> + ?Sized,
    {
        let (episodes, rewards) = input.unzip_samples()?;
        let mut out = Vec::with_capacity(rewards.len());
        for (episode, reward) in episodes.into_iter().zip(rewards) {
            if let Some(point) = self.add_point(episode, reward)? {
                out.push(point);
            }
        }
        Ok(out)
    }

    /// Configured window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of rewards added since creation or the last reset.
    pub fn len(&self) -> usize {
        self.seen
    }

    /// Whether no rewards have been added yet.
    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    /// Whether enough rewards have arrived to emit a mean.
    pub fn is_warm(&self) -> bool {
        self.seen >= self.window
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.total = CumulativeSum::new();
        self.prefix.clear();
        self.prefix.push_back(T::zero());
        self.seen = 0;
    }
}
