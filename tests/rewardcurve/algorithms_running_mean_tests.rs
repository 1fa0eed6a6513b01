#![cfg(feature = "dev")]
//! Tests for the running-mean algorithm.
//!
//! These tests verify the prefix-sum running mean used for reward smoothing:
//! - Concrete reference values
//! - Window-size edge cases (1 and N)
//! - Agreement with a direct per-window average
//!
//! ## Test Organization
//!
//! 1. **Reference Values** - Known inputs and outputs
//! 2. **Window Edge Cases** - Identity and full reduction
//! 3. **Consistency** - Prefix-sum vs. direct averaging, f32 support

use approx::assert_relative_eq;

use rewardcurve::internals::algorithms::running_mean::{running_mean_unchecked, window_divisor};

// ============================================================================
// Helper Functions
// ============================================================================

fn naive_mean(values: &[f64], window: usize) -> Vec<f64> {
    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

// ============================================================================
// Reference Values
// ============================================================================

/// Test pairwise averaging.
///
/// Verifies the window-2 mean of 1..=5.
#[test]
fn test_running_mean_window_two() {
    let out = running_mean_unchecked(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
    assert_eq!(out, vec![1.5, 2.5, 3.5, 4.5]);
}

/// Test averaging over three values.
///
/// Verifies a single full-width window.
#[test]
fn test_running_mean_single_window() {
    let out = running_mean_unchecked(&[10.0, 20.0, 30.0], 3);
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0], 20.0, epsilon = 1e-12);
}

/// Test integral input yields fractional means.
///
/// Verifies division is floating point.
#[test]
fn test_running_mean_fractional_result() {
    let out = running_mean_unchecked(&[1.0, 2.0], 2);
    assert_relative_eq!(out[0], 1.5, epsilon = 1e-12);
}

// ============================================================================
// Window Edge Cases
// ============================================================================

/// Test window of one is the identity.
#[test]
fn test_running_mean_identity() {
    let values = vec![3.0, -1.0, 4.5, 0.0, 9.25];
    let out = running_mean_unchecked(&values, 1);
    assert_eq!(out, values);
}

/// Test window equal to the length reduces to the overall mean.
#[test]
fn test_running_mean_full_window() {
    let values = vec![2.0, 4.0, 6.0, 8.0];
    let out = running_mean_unchecked(&values, values.len());
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0], 5.0, epsilon = 1e-12);
}

/// Test a single value with window one.
#[test]
fn test_running_mean_single_value() {
    let out = running_mean_unchecked(&[7.0], 1);
    assert_eq!(out, vec![7.0]);
}

// ============================================================================
// Consistency
// ============================================================================

/// Test agreement with direct per-window averaging.
#[test]
fn test_running_mean_matches_naive() {
    let values: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 - 50.0).collect();
    for window in [1, 2, 7, 10, 50, 200] {
        let fast = running_mean_unchecked(&values, window);
        let slow = naive_mean(&values, window);
        assert_eq!(fast.len(), values.len() - window + 1);
        for (a, b) in fast.iter().zip(slow.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

/// Test f32 support.
#[test]
fn test_running_mean_f32() {
    let out = running_mean_unchecked(&[1.0_f32, 3.0, 5.0, 7.0], 2);
    assert_eq!(out, vec![2.0_f32, 4.0, 6.0]);
}

/// Test the divisor conversion.
#[test]
fn test_window_divisor() {
    assert_eq!(window_divisor::<f64>(10), 10.0);
    assert_eq!(window_divisor::<f32>(3), 3.0);
}
