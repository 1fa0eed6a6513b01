//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates smoothing: it validates inputs, runs the
//! running-mean algorithm, and assembles aligned output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated execution of the smoothing pipeline.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing operations.
pub mod output;
