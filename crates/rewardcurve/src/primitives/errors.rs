//! Error types for reward-curve operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while smoothing and
//! plotting reward curves, including input validation, window constraints,
//! builder misuse, and charting backend failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., window vs. length).
//! * **Deferred**: Builder misuse is recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Invalid window**: Zero, or wider than the data.
//! 2. **Malformed input**: Empty sequences, rows that are not pairs, non-finite values.
//! 3. **Rendering**: Failures reported by the charting surface.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for reward-curve operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Input sequence is empty; smoothing requires at least 1 value.
    EmptyInput,

    /// Window must satisfy `1 <= window <= len`.
    InvalidWindow {
        /// The window size provided.
        window: usize,
        /// Number of values available.
        len: usize,
    },

    /// A reward sample is not an (episode, reward) pair.
    MalformedSample {
        /// Position of the offending sample.
        index: usize,
        /// Number of fields found in the sample.
        len: usize,
    },

    /// Input data contains NaN, infinite, or unrepresentable values.
    InvalidNumericValue(String),

    /// Line opacity must lie in `[0, 1]`.
    InvalidAlpha(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The charting backend failed to draw or present the chart.
    Render(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CurveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidWindow { window, len } => {
                write!(
                    f,
                    "Invalid window: {window} (must be between 1 and the number of values {len})"
                )
            }
            Self::MalformedSample { index, len } => {
                write!(
                    f,
                    "Malformed sample at index {index}: expected an (episode, reward) pair, got {len} field(s)"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {alpha} (must be >= 0 and <= 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Render(msg) => write!(f, "Rendering failed: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CurveError {}
