//! Reward Curve Examples
//!
//! This example simulates a noisy training run and demonstrates:
//! - Smoothing a reward column with `running_mean`
//! - Plotting raw and smoothed rewards to an SVG file
//! - Customizing the chart through the plot builder
//! - Tracking the running mean online while "training"
//!
//! Charts are written to the current directory.

use rand::prelude::*;
use rand_distr::Normal;
use rewardcurve::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=".repeat(80));
    println!("Reward Curve - Examples");
    println!("{}", "=".repeat(80));
    println!();

    let rewards = simulate_training(300, 42)?;

    example_1_running_mean(&rewards)?;
    example_2_default_plot(&rewards)?;
    example_3_custom_plot(&rewards)?;
    example_4_online(&rewards)?;

    Ok(())
}

/// Learning curve that saturates around 200 with Gaussian noise.
fn simulate_training(episodes: usize, seed: u64) -> Result<Vec<(usize, f64)>, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 25.0)?;

    Ok((0..episodes)
        .map(|ep| {
            let progress = 1.0 - (-(ep as f64) / 80.0).exp();
            (ep, 200.0 * progress + noise.sample(&mut rng))
        })
        .collect())
}

/// Example 1: Running Mean
/// Smooths the reward column directly
fn example_1_running_mean(rewards: &[(usize, f64)]) -> Result<(), CurveError> {
    println!("Example 1: Running Mean");
    println!("{}", "-".repeat(80));

    let values: Vec<f64> = rewards.iter().map(|&(_, r)| r).collect();
    let smoothed = running_mean(&values, 10)?;

    println!("Episodes: {}", values.len());
    println!("Smoothed points: {}", smoothed.len());
    if let (Some(first), Some(last)) = (smoothed.first(), smoothed.last()) {
        println!("First mean: {first:.2}, last mean: {last:.2}");
    }

    /* Expected Output:
    Episodes: 300
    Smoothed points: 291
    */

    println!();
    Ok(())
}

/// Example 2: Default Plot
/// Window of 10, default labels and styles
fn example_2_default_plot(rewards: &[(usize, f64)]) -> Result<(), CurveError> {
    println!("Example 2: Default Plot");
    println!("{}", "-".repeat(80));

    let mut surface = SvgSurface::to_file("reward_curve.svg");
    plot_rewards_default(rewards, &mut surface)?;
    println!("Wrote reward_curve.svg");

    println!();
    Ok(())
}

/// Example 3: Custom Plot
/// Wider window, a title, and a red trend line
fn example_3_custom_plot(rewards: &[(usize, f64)]) -> Result<(), CurveError> {
    println!("Example 3: Custom Plot");
    println!("{}", "-".repeat(80));

    let plotter = RewardPlot::new()
        .window(25)
        .caption("CartPole training")
        .smoothed_style(LineStyle::new(Rgb(0xd6, 0x27, 0x28)).stroke_width(3))
        .build()?;

    let mut surface = SvgSurface::to_file("reward_curve_custom.svg").size(1024, 640);
    let curve = plotter.plot(rewards, &mut surface)?;
    println!("{}", curve);
    println!("Wrote reward_curve_custom.svg");

    println!();
    Ok(())
}

/// Example 4: Online Tracking
/// Running mean reported every 50 episodes as rewards arrive
fn example_4_online(rewards: &[(usize, f64)]) -> Result<(), CurveError> {
    println!("Example 4: Online Tracking");
    println!("{}", "-".repeat(80));

    let mut tracker = RunningMean::new().window(20).adapter(Online).build()?;
    for &(ep, reward) in rewards {
        if let Some(out) = tracker.add_point(ep as f64, reward)? {
            if ep % 50 == 0 {
                println!("episode {:>4}: mean reward {:>8.2}", ep, out.smoothed);
            }
        }
    }

    println!();
    Ok(())
}
