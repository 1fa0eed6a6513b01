//! Windowing primitives for running-mean smoothing.
//!
//! A trailing window of size `W` ending at index `j` covers the samples
//! `[j + 1 - W, j]`. Smoothed value `i` is the mean of the window that starts
//! at `i`, and it is plotted at that window's last episode.

// Inclusive window bounds `[left, right]` for one smoothed value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Window of `size` samples starting at `start`.
    #[inline]
    pub fn starting_at(start: usize, size: usize) -> Self {
        debug_assert!(size >= 1, "starting_at: size must be at least 1");
        Self {
            left: start,
            right: start + size - 1,
        }
    }

    // Number of full windows of `size` that fit into `n` values.
    //
    // Returns `None` when no window fits (`size == 0` or `size > n`).
    #[inline]
    pub fn count(n: usize, size: usize) -> Option<usize> {
        if size == 0 || size > n {
            None
        } else {
            Some(n - size + 1)
        }
    }

    // Index of the first sample a smoothed series is aligned to.
    //
    // A series of `count` values drawn from `n` samples is right-aligned,
    // so it starts at `n - count`.
    #[inline]
    pub fn alignment_offset(n: usize, count: usize) -> usize {
        n.saturating_sub(count)
    }
}
