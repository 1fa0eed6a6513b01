//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the smoothing algorithms themselves. Inputs are
//! assumed to be validated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Windowed running mean.
pub mod running_mean;
