#![cfg(feature = "dev")]
//! Tests for the reward curve output type.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Right alignment of the smoothed series
//! 2. **Queries** - Points, latest and best means
//! 3. **Display** - Summary and table formatting

use rewardcurve::internals::engine::output::RewardCurve;

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_curve() -> RewardCurve<f64> {
    RewardCurve::from_parts(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![1.0, 5.0, 3.0, 9.0, 1.0],
        vec![3.0, 4.0, 6.0, 5.0],
        2,
    )
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test smoothed values are aligned to the tail of the episodes.
#[test]
fn test_curve_alignment() {
    let curve = sample_curve();
    assert_eq!(curve.smoothed_episodes, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(curve.len(), 5);
    assert!(!curve.is_empty());
}

/// Test window of one aligns every point.
#[test]
fn test_curve_alignment_identity() {
    let curve = RewardCurve::from_parts(vec![7.0, 8.0], vec![1.0, 2.0], vec![1.0, 2.0], 1);
    assert_eq!(curve.smoothed_episodes, curve.episodes);
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test point iterators.
#[test]
fn test_curve_points() {
    let curve = sample_curve();
    let raw: Vec<_> = curve.raw_points().collect();
    let smoothed: Vec<_> = curve.smoothed_points().collect();

    assert_eq!(raw[1], (1.0, 5.0));
    assert_eq!(smoothed, vec![(1.0, 3.0), (2.0, 4.0), (3.0, 6.0), (4.0, 5.0)]);
}

/// Test latest and best smoothed values.
#[test]
fn test_curve_latest_and_best() {
    let curve = sample_curve();
    assert_eq!(curve.latest_smoothed(), Some(5.0));
    assert_eq!(curve.best_smoothed(), Some((3.0, 6.0)));
}

/// Test ties keep the earliest episode.
#[test]
fn test_curve_best_tie() {
    let curve = RewardCurve::from_parts(
        vec![0.0, 1.0, 2.0],
        vec![2.0, 2.0, 2.0],
        vec![2.0, 2.0, 2.0],
        1,
    );
    assert_eq!(curve.best_smoothed(), Some((0.0, 2.0)));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary and the warm-up placeholder.
#[test]
fn test_curve_display() {
    let text = sample_curve().to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("Episodes: 5"));
    assert!(text.contains("Window:   2"));
    assert!(text.contains("Best mean: 6.0000 (episode 3)"));
    assert!(text.contains("Running_Mean"));

    // The first row has no mean yet
    let first_row = text
        .lines()
        .find(|line| line.trim_start().starts_with("0.00"))
        .unwrap();
    assert!(first_row.trim_end().ends_with('-'));
}

/// Test long curves are abbreviated.
#[test]
fn test_curve_display_truncates() {
    let n = 30;
    let episodes: Vec<f64> = (0..n).map(f64::from).collect();
    let rewards = episodes.clone();
    let curve = RewardCurve::from_parts(episodes, rewards.clone(), rewards, 1);
    let text = curve.to_string();

    assert!(text.contains("..."));
    assert!(text.contains("29.00"));
    assert!(!text.contains("   15.00"));
}
