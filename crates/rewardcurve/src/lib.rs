//! # rewardcurve — Reward curves for reinforcement learning
//!
//! Smooth per-episode training rewards with a running mean and plot the raw
//! and smoothed curves together.
//!
//! ## What is a running mean?
//!
//! A running (moving) mean replaces each value with the average of a fixed
//! window of consecutive values. Over `N` rewards and a window of `W`, it
//! yields `N - W + 1` averages; average `i` covers episodes `[i, i + W - 1]`
//! and is plotted at the last of them. The crate computes all of them in
//! `O(N)` from a single prefix-sum array.
//!
//! ## Quick Start
//!
//! ### Smoothing
//!
//! ```rust
//! use rewardcurve::prelude::*;
//!
//! let smoothed = running_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 2)?;
//! assert_eq!(smoothed, vec![1.5, 2.5, 3.5, 4.5]);
//! # Result::<(), CurveError>::Ok(())
//! ```
//!
//! ### Plotting
//!
//! ```rust
//! # #[cfg(feature = "plot")] {
//! use rewardcurve::prelude::*;
//!
//! let rewards: Vec<(usize, f64)> = (0..50).map(|ep| (ep, (ep as f64).sqrt())).collect();
//!
//! let mut surface = SvgSurface::in_memory();
//! plot_rewards(&rewards, 10, &mut surface)?;
//!
//! let svg = surface.document().unwrap();
//! assert!(svg.contains("Episode"));
//! # }
//! # Result::<(), rewardcurve::prelude::CurveError>::Ok(())
//! ```
//!
//! ### Builder and adapters
//!
//! ```rust
//! use rewardcurve::prelude::*;
//!
//! let rewards = vec![(0, 1.0), (1, 3.0), (2, 5.0), (3, 7.0)];
//!
//! // Whole sequence at once
//! let model = RunningMean::new().window(2).adapter(Batch).build()?;
//! let curve = model.fit(&rewards)?;
//! assert_eq!(curve.smoothed, vec![2.0, 4.0, 6.0]);
//! assert_eq!(curve.smoothed_episodes, vec![1.0, 2.0, 3.0]);
//!
//! // One episode at a time, as training runs
//! let mut online = RunningMean::new().window(2).adapter(Online).build()?;
//! assert!(online.add_point(0.0, 1.0)?.is_none());
//! assert_eq!(online.add_point(1.0, 3.0)?.map(|o| o.smoothed), Some(2.0));
//! # Result::<(), CurveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, CurveError>`. A window of zero or one
//! wider than the data is always an error; it never yields an empty result.
//!
//! ```rust
//! use rewardcurve::prelude::*;
//!
//! match running_mean(&[1.0, 2.0, 3.0], 5) {
//!     Err(CurveError::InvalidWindow { window: 5, len: 3 }) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The smoothing layers work without the standard library; plotting needs
//! the `std` and `plot` features:
//!
//! ```toml
//! [dependencies]
//! rewardcurve = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - running-mean computation.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// Rendering onto charting surfaces.
#[cfg(feature = "std")]
mod render;

// High-level API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        running_mean,
        Adapter::{Batch, Online},
        CurveError, OnlineOutput, RewardCurve, RewardInput, RunningMeanBuilder as RunningMean,
        DEFAULT_WINDOW,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{
        plot_rewards, plot_rewards_default, ChartSurface, LineStyle, RecordingSurface,
        RewardPlotBuilder as RewardPlot, Rgb,
    };

    #[cfg(feature = "plot")]
    pub use crate::api::SvgSurface;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    #[cfg(feature = "std")]
    pub mod render {
        pub use crate::render::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
