//! Input validation for smoothing configuration and reward data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for running-mean
//! parameters and reward data: sequence lengths, finite values, window
//! bounds, and styling parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Window Bounds**: Enforces `1 <= window <= len`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CurveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for running-mean configuration and input data.
///
/// All methods return `Result<(), CurveError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sequence of values to be smoothed.
    pub fn validate_values<T: Float>(values: &[T]) -> Result<(), CurveError> {
        if values.is_empty() {
            return Err(CurveError::EmptyInput);
        }
        Self::validate_finite(values, "values")
    }

    /// Validate unzipped `episodes` and `rewards` columns.
    pub fn validate_columns<T: Float>(episodes: &[T], rewards: &[T]) -> Result<(), CurveError> {
        if episodes.is_empty() || rewards.is_empty() {
            return Err(CurveError::EmptyInput);
        }
        debug_assert_eq!(episodes.len(), rewards.len());

        Self::validate_finite(episodes, "episode")?;
        Self::validate_finite(rewards, "reward")
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), CurveError> {
        if !val.is_finite() {
            return Err(CurveError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), CurveError> {
        match vals.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(CurveError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                vals[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing window against the number of values.
    pub fn validate_window(window: usize, len: usize) -> Result<(), CurveError> {
        if window == 0 || window > len {
            return Err(CurveError::InvalidWindow { window, len });
        }
        Ok(())
    }

    /// Validate the configured window before any data is seen.
    pub fn validate_window_size(window: usize) -> Result<(), CurveError> {
        if window == 0 {
            return Err(CurveError::InvalidWindow { window, len: 0 });
        }
        Ok(())
    }

    /// Validate that a rolling buffer of `window + 1` entries is addressable.
    pub fn validate_window_span(window: usize) -> Result<(), CurveError> {
        if window.checked_add(1).is_none() {
            return Err(CurveError::InvalidWindow { window, len: 0 });
        }
        Ok(())
    }

    /// Validate a line opacity.
    pub fn validate_alpha(alpha: f64) -> Result<(), CurveError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(CurveError::InvalidAlpha(alpha));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CurveError> {
        if let Some(param) = duplicate_param {
            return Err(CurveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
