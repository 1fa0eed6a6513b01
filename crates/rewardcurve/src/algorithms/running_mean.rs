//! Windowed running mean over prefix sums.
//!
//! ## Purpose
//!
//! This module computes the unweighted mean of every contiguous window of
//! `window` values, advancing one value per step.
//!
//! ## Design notes
//!
//! * **Linear time**: One prefix-sum pass, then one subtraction per output,
//!   instead of re-summing each window.
//! * **Exact recipe**: `out[i] = (P[i + window] - P[i]) / window`. The online
//!   adapter replays the same arithmetic so both paths agree bit for bit.
//!
//! ## Invariants
//!
//! * Output length is `values.len() - window + 1`.
//! * Callers guarantee `1 <= window <= values.len()`.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs.
//! * This module does not handle weighted or exponential averages.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::prefix::{prefix_sums, window_sum};
use crate::primitives::window::Window;

/// Running mean of `values` over windows of `window` consecutive elements.
///
/// The caller must ensure `1 <= window <= values.len()`.
pub fn running_mean_unchecked<T: Float>(values: &[T], window: usize) -> Vec<T> {
    debug_assert!(
        window >= 1 && window <= values.len(),
        "running_mean_unchecked: window out of range"
    );

    let prefix = prefix_sums(values);
    let divisor = window_divisor::<T>(window);
    let count = Window::count(values.len(), window).unwrap_or(0);

    (0..count)
        .map(|i| window_sum(&prefix, Window::starting_at(i, window)) / divisor)
        .collect()
}

/// Window size converted to the float type used for averaging.
#[inline]
pub fn window_divisor<T: Float>(window: usize) -> T {
    T::from(window).unwrap_or_else(T::nan)
}
