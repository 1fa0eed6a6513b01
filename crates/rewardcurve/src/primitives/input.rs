//! Input abstractions for reward sequences.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for reward-curve inputs, so the
//! renderer and the batch adapter accept several row layouts (tuples, arrays,
//! vectors) through a single interface that unzips them into parallel
//! `episodes` and `rewards` columns.
//!
//! ## Design notes
//!
//! * **Integer episodes**: Tuple rows accept any `ToPrimitive` episode index.
//! * **Fail-fast**: The first malformed row aborts the conversion.
//! * **Order-preserving**: Columns keep the caller's sample order.
//!
//! ## Invariants
//!
//! * Both returned columns have the same length as the input.
//! * Every row of a `Vec<T>` layout holds exactly two fields.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness (see the validator).
//! * This module does not sort or deduplicate episodes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::CurveError;

/// Parallel `episodes` and `rewards` columns.
pub type Columns<T> = (Vec<T>, Vec<T>);

/// Trait for types that can be used as a reward sequence.
pub trait RewardInput<T: Float> {
    /// Split the samples into `(episodes, rewards)` columns.
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError>;
}

fn cast_episode<T: Float, E: ToPrimitive>(index: usize, episode: &E) -> Result<T, CurveError> {
    episode.to_f64().and_then(|v| T::from(v)).ok_or_else(|| {
        CurveError::InvalidNumericValue(format!(
            "episode[{index}] is not representable as a float"
        ))
    })
}

fn unzip_rows<T, R, F>(rows: R, mut split: F) -> Result<Columns<T>, CurveError>
where
    T: Float,
    R: ExactSizeIterator,
    F: FnMut(usize, R::Item) -> Result<(T, T), CurveError>,
{
    let mut episodes = Vec::with_capacity(rows.len());
    let mut rewards = Vec::with_capacity(rows.len());
    for (i, row) in rows.enumerate() {
        let (episode, reward) = split(i, row)?;
        episodes.push(episode);
        rewards.push(reward);
    }
    Ok((episodes, rewards))
}

// ============================================================================
// Tuple rows
// ============================================================================

impl<T: Float, E: ToPrimitive> RewardInput<T> for [(E, T)] {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        unzip_rows(self.iter(), |i, (episode, reward)| {
            Ok((cast_episode(i, episode)?, *reward))
        })
    }
}

impl<T: Float, E: ToPrimitive> RewardInput<T> for Vec<(E, T)> {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        self.as_slice().unzip_samples()
    }
}

impl<T: Float, E: ToPrimitive, const N: usize> RewardInput<T> for [(E, T); N] {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        self.as_slice().unzip_samples()
    }
}

// ============================================================================
// Array rows
// ============================================================================

impl<T: Float> RewardInput<T> for [[T; 2]] {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        unzip_rows(self.iter(), |_, row| Ok((row[0], row[1])))
    }
}

impl<T: Float> RewardInput<T> for Vec<[T; 2]> {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        self.as_slice().unzip_samples()
    }
}

// ============================================================================
// Vector rows
// ============================================================================

impl<T: Float> RewardInput<T> for [Vec<T>] {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        unzip_rows(self.iter(), |index, row| match row.as_slice() {
            [episode, reward] => Ok((*episode, *reward)),
            other => Err(CurveError::MalformedSample {
                index,
                len: other.len(),
            }),
        })
    }
}

impl<T: Float> RewardInput<T> for Vec<Vec<T>> {
    fn unzip_samples(&self) -> Result<Columns<T>, CurveError> {
        self.as_slice().unzip_samples()
    }
}
