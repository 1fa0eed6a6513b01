//! Tests for the high-level API.
//!
//! These tests exercise the public entry points only:
//! - `running_mean` on plain value sequences
//! - `plot_rewards` / `plot_rewards_default` onto a recording surface
//! - The fluent builder's adapter transitions
//!
//! ## Test Organization
//!
//! 1. **Running Mean** - Reference scenarios and rejection
//! 2. **Plotting** - Alignment, labels, styles and presentation
//! 3. **Plot Errors** - Nothing is presented on failure
//! 4. **Builder** - Adapter selection

use approx::assert_relative_eq;
use rewardcurve::prelude::*;

// ============================================================================
// Running Mean Tests
// ============================================================================

/// Test pairwise averaging of 1..=5.
#[test]
fn test_running_mean_pairs() {
    let out = running_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
    assert_eq!(out, vec![1.5, 2.5, 3.5, 4.5]);
}

/// Test one window over the whole input.
#[test]
fn test_running_mean_whole() {
    let out = running_mean(&[10.0, 20.0, 30.0], 3).unwrap();
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0], 20.0);
}

/// Test windows outside `1..=N` are errors, never empty results.
#[test]
fn test_running_mean_rejects_bad_windows() {
    assert_eq!(
        running_mean(&[1.0, 2.0, 3.0], 5),
        Err(CurveError::InvalidWindow { window: 5, len: 3 })
    );
    assert_eq!(
        running_mean(&[1.0, 2.0, 3.0], 0),
        Err(CurveError::InvalidWindow { window: 0, len: 3 })
    );
}

/// Test a window of one returns finite input unchanged.
///
/// Non-finite values are rejected even though the window would not mix them.
#[test]
fn test_running_mean_window_one_finite_only() {
    let values = [2.5, -7.0, 0.0];
    assert_eq!(running_mean(&values, 1).unwrap(), values.to_vec());
    assert!(matches!(
        running_mean(&[1.0, f64::NAN, 3.0], 1),
        Err(CurveError::InvalidNumericValue(_))
    ));
}

/// Test empty and non-finite input.
#[test]
fn test_running_mean_rejects_bad_values() {
    let empty: [f64; 0] = [];
    assert_eq!(running_mean(&empty, 1), Err(CurveError::EmptyInput));
    assert!(matches!(
        running_mean(&[1.0, f64::INFINITY], 1),
        Err(CurveError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Plotting Tests
// ============================================================================

/// Test the four-episode end-to-end scenario.
///
/// Verifies:
/// - Smoothed `[2, 4, 6]` at episodes `[1, 2, 3]`
/// - Raw `[1, 3, 5, 7]` at episodes `[0, 1, 2, 3]`
/// - Axis labels and a single presentation
#[test]
fn test_plot_rewards_end_to_end() {
    let rewards = vec![(0, 1.0), (1, 3.0), (2, 5.0), (3, 7.0)];
    let mut surface = RecordingSurface::new();

    plot_rewards(&rewards, 2, &mut surface).unwrap();

    let series = surface.series();
    assert_eq!(series.len(), 2);

    let smoothed = &series[0];
    assert_eq!(smoothed.xs(), vec![1.0, 2.0, 3.0]);
    assert_eq!(smoothed.ys(), vec![2.0, 4.0, 6.0]);

    let raw = &series[1];
    assert_eq!(raw.xs(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(raw.ys(), vec![1.0, 3.0, 5.0, 7.0]);

    assert_eq!(surface.x_label(), Some("Episode"));
    assert_eq!(surface.y_label(), Some("Total Reward"));
    assert_eq!(surface.caption(), None);
    assert_eq!(surface.presented(), 1);
}

/// Test the smoothed curve follows the tail of the episodes in input order.
///
/// Episodes here are neither sorted nor contiguous.
#[test]
fn test_plot_rewards_alignment_unsorted() {
    let rewards = vec![(40, 1.0), (10, 2.0), (30, 3.0), (20, 4.0), (50, 5.0)];
    let mut surface = RecordingSurface::new();

    plot_rewards(&rewards, 3, &mut surface).unwrap();

    assert_eq!(surface.series()[0].xs(), vec![30.0, 20.0, 50.0]);
    assert_eq!(surface.series()[1].xs(), vec![40.0, 10.0, 30.0, 20.0, 50.0]);
}

/// Test default styles: blue trend, translucent grey backdrop.
#[test]
fn test_plot_rewards_styles() {
    let rewards: Vec<(usize, f64)> = (0..20).map(|ep| (ep, ep as f64)).collect();
    let mut surface = RecordingSurface::new();

    plot_rewards_default(&rewards, &mut surface).unwrap();

    let smoothed = surface.series()[0].style;
    let raw = surface.series()[1].style;
    assert_eq!(smoothed.color, Rgb(0x1f, 0x77, 0xb4));
    assert_relative_eq!(smoothed.alpha, 1.0);
    assert_eq!(raw.color.to_hex(), "#808080");
    assert_relative_eq!(raw.alpha, 0.3);
    assert_eq!(surface.series()[0].points.len(), 11);
}

/// Test a window of one draws identical series.
#[test]
fn test_plot_rewards_window_one() {
    let rewards = [[0.0, 5.0], [1.0, 6.0]];
    let mut surface = RecordingSurface::new();

    plot_rewards(&rewards[..], 1, &mut surface).unwrap();

    assert_eq!(surface.series()[0].points, surface.series()[1].points);
}

/// Test the plot builder's overrides.
#[test]
fn test_reward_plot_builder() {
    let plotter = RewardPlot::new()
        .window(2)
        .caption("Run 7")
        .x_label("Step")
        .y_label("Return")
        .raw_style(LineStyle::new(Rgb::BLACK).alpha(0.5))
        .build()
        .unwrap();
    assert_eq!(plotter.window(), 2);

    let mut surface = RecordingSurface::new();
    let curve = plotter
        .plot(&vec![(0, 1.0), (1, 3.0), (2, 5.0)], &mut surface)
        .unwrap();

    assert_eq!(curve.smoothed, vec![2.0, 4.0]);
    assert_eq!(surface.caption(), Some("Run 7"));
    assert_eq!(surface.x_label(), Some("Step"));
    assert_eq!(surface.y_label(), Some("Return"));
    assert_eq!(surface.series()[1].style.color, Rgb::BLACK);
    assert_eq!(surface.series()[0].style, LineStyle::smoothed());
}

/// Test rendering an already smoothed curve.
#[test]
fn test_reward_plot_render_curve() {
    let curve = RunningMean::new()
        .window(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&[(0, 2.0), (1, 4.0)])
        .unwrap();

    let plotter = RewardPlot::new().window(2).build().unwrap();
    let mut surface = RecordingSurface::new();
    plotter.render(&curve, &mut surface).unwrap();

    assert_eq!(surface.series()[0].points, vec![(1.0, 3.0)]);
    assert_eq!(surface.presented(), 1);
}

// ============================================================================
// Plot Error Tests
// ============================================================================

/// Test a window wider than the data presents nothing.
#[test]
fn test_plot_rewards_window_too_wide() {
    let rewards = vec![(0, 1.0), (1, 2.0)];
    let mut surface = RecordingSurface::new();

    let res = plot_rewards(&rewards, 3, &mut surface);

    assert_eq!(res, Err(CurveError::InvalidWindow { window: 3, len: 2 }));
    assert!(surface.series().is_empty());
    assert_eq!(surface.presented(), 0);
}

/// Test rows that are not pairs present nothing.
#[test]
fn test_plot_rewards_malformed_rows() {
    let rewards = vec![vec![0.0, 1.0], vec![1.0, 2.0, 9.0], vec![2.0, 3.0]];
    let mut surface = RecordingSurface::new();

    let res = plot_rewards(&rewards, 1, &mut surface);

    assert_eq!(res, Err(CurveError::MalformedSample { index: 1, len: 3 }));
    assert_eq!(surface.presented(), 0);
}

/// Test empty and non-finite input present nothing.
#[test]
fn test_plot_rewards_bad_values() {
    let mut surface = RecordingSurface::new();

    let empty: Vec<(u32, f64)> = Vec::new();
    assert_eq!(
        plot_rewards_default(&empty, &mut surface),
        Err(CurveError::EmptyInput)
    );

    let nan = vec![(0, 1.0), (1, f64::NAN)];
    assert!(matches!(
        plot_rewards(&nan, 1, &mut surface),
        Err(CurveError::InvalidNumericValue(_))
    ));
    assert_eq!(surface.presented(), 0);
}

/// Test invalid plot configuration is rejected at build time.
#[test]
fn test_reward_plot_builder_errors() {
    assert_eq!(
        RewardPlot::new().window(0).build().err(),
        Some(CurveError::InvalidWindow { window: 0, len: 0 })
    );
    assert_eq!(
        RewardPlot::new()
            .smoothed_style(LineStyle::smoothed().alpha(2.0))
            .build()
            .err(),
        Some(CurveError::InvalidAlpha(2.0))
    );
    assert_eq!(
        RewardPlot::new().caption("a").caption("b").build().err(),
        Some(CurveError::DuplicateParameter { parameter: "caption" })
    );
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test both adapters agree through the generic builder.
#[test]
fn test_builder_adapters_agree() {
    let rewards: Vec<(usize, f64)> = (0..50).map(|ep| (ep, (ep % 7) as f64)).collect();

    let curve = RunningMean::new().window(5).adapter(Batch).build().unwrap().fit(&rewards).unwrap();
    let online = RunningMean::new()
        .window(5)
        .adapter(Online)
        .build()
        .unwrap()
        .add_points(&rewards)
        .unwrap();

    assert_eq!(online.len(), curve.smoothed.len());
    assert_eq!(online.last().map(|o| o.smoothed), curve.latest_smoothed());
}
