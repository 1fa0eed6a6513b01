//! Prefix sums for constant-time range sums.
//!
//! `P[0] = 0` and `P[k] = P[k - 1] + values[k - 1]`, so the sum of any
//! inclusive window `[l, r]` is `P[r + 1] - P[l]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

// Compute the prefix-sum array of `values` (length `values.len() + 1`).
pub fn prefix_sums<T: Float>(values: &[T]) -> Vec<T> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    let mut total = CumulativeSum::new();
    prefix.push(total.value());
    for &v in values {
        prefix.push(total.push(v));
    }
    prefix
}

// Sum of the values covered by `window`, read off a prefix-sum array.
#[inline]
pub fn window_sum<T: Float>(prefix: &[T], window: Window) -> T {
    debug_assert!(
        window.right + 1 < prefix.len(),
        "window_sum: window exceeds prefix array"
    );
    prefix[window.right + 1] - prefix[window.left]
}

// Running total that yields successive prefix-sum entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CumulativeSum<T> {
    total: T,
}

impl<T: Float> Default for CumulativeSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CumulativeSum<T> {
    // Start from `P[0] = 0`.
    pub fn new() -> Self {
        Self { total: T::zero() }
    }

    // Add `value` and return the new prefix entry.
    #[inline]
    pub fn push(&mut self, value: T) -> T {
        self.total = self.total + value;
        self.total
    }

    // Current prefix entry.
    #[inline]
    pub fn value(&self) -> T {
        self.total
    }
}
