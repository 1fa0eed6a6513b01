//! Output types for reward-curve smoothing.
//!
//! ## Purpose
//!
//! This module defines the `RewardCurve` struct which holds the raw reward
//! series together with its running mean, already aligned for plotting.
//!
//! ## Design notes
//!
//! * **Right alignment**: Smoothed value `i` covers episodes `[i, i + W - 1]`
//!   and is stored against the last of them.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `episodes` and `rewards` have the same length `N`.
//! * `smoothed_episodes` and `smoothed` have length `N - window + 1`.
//! * `smoothed_episodes` equals the last `N - window + 1` entries of `episodes`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

// ============================================================================
// Result Structure
// ============================================================================

/// Raw and smoothed reward series for one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCurve<T> {
    /// Episode indices, in input order.
    pub episodes: Vec<T>,

    /// Total reward per episode, in input order.
    pub rewards: Vec<T>,

    /// Episodes the smoothed values are plotted against (the tail of `episodes`).
    pub smoothed_episodes: Vec<T>,

    /// Running mean of `rewards`.
    pub smoothed: Vec<T>,

    /// Window size used for smoothing.
    pub window: usize,
}

impl<T: Float> RewardCurve<T> {
    /// Assemble a curve from raw columns and their running mean.
    ///
    /// The smoothed values are right-aligned against `episodes`.
    pub fn from_parts(episodes: Vec<T>, rewards: Vec<T>, smoothed: Vec<T>, window: usize) -> Self {
        let offset = Window::alignment_offset(episodes.len(), smoothed.len());
        let smoothed_episodes = episodes[offset..].to_vec();
        Self {
            episodes,
            rewards,
            smoothed_episodes,
            smoothed,
            window,
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of raw samples.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Raw `(episode, reward)` points.
    pub fn raw_points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.episodes.iter().copied().zip(self.rewards.iter().copied())
    }

    /// Smoothed `(episode, mean_reward)` points.
    pub fn smoothed_points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.smoothed_episodes
            .iter()
            .copied()
            .zip(self.smoothed.iter().copied())
    }

    /// Most recent smoothed reward, if any.
    pub fn latest_smoothed(&self) -> Option<T> {
        self.smoothed.last().copied()
    }

    /// Highest smoothed reward and the episode it was reached at.
    pub fn best_smoothed(&self) -> Option<(T, T)> {
        self.smoothed_points()
            .fold(None, |best: Option<(T, T)>, (ep, val)| match best {
                Some((_, b)) if b >= val => best,
                _ => Some((ep, val)),
            })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for RewardCurve<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Episodes: {}", self.len())?;
        writeln!(f, "  Window:   {}", self.window)?;
        if let Some((episode, best)) = self.best_smoothed() {
            writeln!(f, "  Best mean: {:.4} (episode {})", best, episode)?;
        }
        writeln!(f)?;

        writeln!(f, "Reward Curve:")?;
        writeln!(f, "{:>10} {:>14} {:>14}", "Episode", "Reward", "Running_Mean")?;
        writeln!(f, "{:-<width$}", "", width = 40)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let offset = Window::alignment_offset(n, self.smoothed.len());
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>10.2} {:>14.6}", self.episodes[idx], self.rewards[idx])?;
            if idx >= offset {
                write!(f, " {:>14.6}", self.smoothed[idx - offset])?;
            } else {
                write!(f, " {:>14}", "-")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
