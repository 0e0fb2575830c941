//! The review score value domain.
//!
//! A score is an integer in [0, 400] or unset. Unset is not zero: zero is an
//! explicit lowest rating, unset means no rating was given. The type system
//! carries that distinction as `Option<ReviewScore>`.

use crate::errors::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest valid score.
pub const MIN_SCORE: u16 = 0;
/// Highest valid score.
pub const MAX_SCORE: u16 = 400;

/// A score that may be unset.
pub type Score = Option<ReviewScore>;

/// A defined review score, guaranteed to lie in [0, 400].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct ReviewScore(u16);

impl ReviewScore {
    pub const MIN: ReviewScore = ReviewScore(MIN_SCORE);
    pub const MAX: ReviewScore = ReviewScore(MAX_SCORE);

    /// Validate a raw value.
    pub fn new(value: u16) -> Result<Self, ScoreError> {
        if value > MAX_SCORE {
            return Err(ScoreError::OutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Saturate any integer into range.
    pub fn from_clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE));
        Self(clamped as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// A spread-out sample score for fixtures and benchmarks. The same seed
    /// always gives the same score.
    pub fn sample(seed: u64) -> Self {
        let mixed = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 32;
        Self((mixed % (u64::from(MAX_SCORE) + 1)) as u16)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for ReviewScore {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        (MIN_SCORE..=MAX_SCORE).prop_map(ReviewScore).boxed()
    }
}

impl TryFrom<i64> for ReviewScore {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            return Err(ScoreError::OutOfRange { value });
        }
        Ok(Self(value as u16))
    }
}

impl From<ReviewScore> for u16 {
    fn from(score: ReviewScore) -> Self {
        score.0
    }
}

impl fmt::Display for ReviewScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse the form/storage representation of a score.
///
/// The empty string (after trimming) is unset; anything else must be an
/// integer in range.
pub fn parse_stored(input: &str) -> Result<Score, ScoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let raw: i64 = trimmed.parse().map_err(|_| ScoreError::NotANumber {
        input: trimmed.to_string(),
    })?;
    ReviewScore::try_from(raw).map(Some)
}

/// Inverse of [`parse_stored`]: unset becomes the empty string.
pub fn to_stored(score: Score) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// An item is empty only when no rating was given.
pub fn is_empty(score: Score) -> bool {
    score.is_none()
}
