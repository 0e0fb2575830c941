//! Score math: pure mappings between scores, star fills, pointer positions
//! and keyboard adjustments.
//!
//! Nothing here does I/O or holds state. Every function is total over its
//! input domain; out-of-domain inputs are clamped rather than rejected.
//!
//! Fills are computed per star rather than as one global percentage so each
//! star can be drawn independently as full, empty, or partial with an exact
//! percentage.

use crate::score::{ReviewScore, Score, MAX_SCORE};

/// Number of stars in a row.
pub const STAR_COUNT: usize = 5;

/// Score change per arrow key press.
pub const STEP: i64 = 16;

/// Score units represented by one full star.
pub const SCORE_PER_STAR: f64 = MAX_SCORE as f64 / STAR_COUNT as f64;

/// Keyboard intent, independent of which physical key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Increment,
    Decrement,
    ToMin,
    ToMax,
    NoOp,
}

/// Saturate `value` into `[min, max]`.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Per-star fill fractions for a score; all zero when unset.
pub fn fills_for_score(score: Score) -> [f64; STAR_COUNT] {
    let Some(score) = score else {
        return [0.0; STAR_COUNT];
    };
    let stars = score.as_f64() / SCORE_PER_STAR;
    std::array::from_fn(|i| clamp(0.0, 1.0, stars - i as f64))
}

/// Map a horizontal position within the star row to a score.
///
/// The fraction is clamped to [0, 1] first; NaN counts as 0. Pointer input
/// always yields a defined score.
pub fn position_to_score(fraction: f64) -> ReviewScore {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        clamp(0.0, 1.0, fraction)
    };
    ReviewScore::from_clamped((fraction * f64::from(MAX_SCORE)).round() as i64)
}

/// Normalize a pointer x coordinate against the row's bounding box.
pub fn pointer_fraction(x: f64, left: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 {
        return 0.0;
    }
    let fraction = (x - left) / width;
    if fraction.is_nan() {
        0.0
    } else {
        clamp(0.0, 1.0, fraction)
    }
}

/// Apply a keyboard action to a score. Unset counts as 0.
pub fn adjust_score(current: Score, action: KeyAction) -> ReviewScore {
    let base = current.map(|s| i64::from(s.value())).unwrap_or(0);
    match action {
        KeyAction::Increment => ReviewScore::from_clamped(base + STEP),
        KeyAction::Decrement => ReviewScore::from_clamped(base - STEP),
        KeyAction::ToMin => ReviewScore::MIN,
        KeyAction::ToMax => ReviewScore::MAX,
        KeyAction::NoOp => ReviewScore::from_clamped(base),
    }
}

/// Rating out of five, rounded to one decimal place.
pub fn rating_label_value(score: ReviewScore) -> f64 {
    round_to(score.as_f64() / SCORE_PER_STAR, 1)
}

/// Percentage lit for a partial star, rounded to two decimal places.
pub fn partial_percent(fill: f64) -> f64 {
    round_to(fill * 100.0, 2)
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: u16) -> Score {
        Some(ReviewScore::new(v).unwrap())
    }

    #[test]
    fn test_clamp_basic() {
        assert_eq!(clamp(0, 400, -5), 0);
        assert_eq!(clamp(0, 400, 405), 400);
        assert_eq!(clamp(0.0, 1.0, 0.25), 0.25);
    }

    #[test]
    fn test_fills_unset_all_empty() {
        assert_eq!(fills_for_score(None), [0.0; 5]);
    }

    #[test]
    fn test_fills_boundary_scores() {
        assert_eq!(fills_for_score(s(0)), [0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(fills_for_score(s(400)), [1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(fills_for_score(s(80)), [1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(fills_for_score(s(200)), [1.0, 1.0, 0.5, 0.0, 0.0]);
        assert_eq!(fills_for_score(s(320)), [1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_position_to_score_edges() {
        assert_eq!(position_to_score(-0.1).value(), 0);
        assert_eq!(position_to_score(1.5).value(), 400);
        assert_eq!(position_to_score(0.5).value(), 200);
        assert_eq!(position_to_score(f64::NAN).value(), 0);
        assert_eq!(position_to_score(f64::INFINITY).value(), 400);
    }

    #[test]
    fn test_pointer_fraction() {
        assert_eq!(pointer_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(pointer_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(pointer_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(pointer_fraction(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_adjust_score_at_bounds() {
        assert_eq!(adjust_score(s(0), KeyAction::Decrement).value(), 0);
        assert_eq!(adjust_score(s(400), KeyAction::Increment).value(), 400);
        assert_eq!(adjust_score(s(200), KeyAction::ToMin).value(), 0);
        assert_eq!(adjust_score(s(200), KeyAction::ToMax).value(), 400);
        assert_eq!(adjust_score(s(150), KeyAction::NoOp).value(), 150);
    }

    #[test]
    fn test_adjust_score_unset_treated_as_zero() {
        assert_eq!(adjust_score(None, KeyAction::Increment).value(), 16);
        assert_eq!(adjust_score(None, KeyAction::Decrement).value(), 0);
        assert_eq!(adjust_score(None, KeyAction::NoOp).value(), 0);
    }

    #[test]
    fn test_rating_label_value() {
        assert_eq!(rating_label_value(ReviewScore::new(200).unwrap()), 2.5);
        assert_eq!(rating_label_value(ReviewScore::new(400).unwrap()), 5.0);
        assert_eq!(rating_label_value(ReviewScore::new(104).unwrap()), 1.3);
        assert_eq!(rating_label_value(ReviewScore::new(0).unwrap()), 0.0);
    }

    #[test]
    fn test_partial_percent_rounds_two_places() {
        assert_eq!(partial_percent(0.5), 50.0);
        assert_eq!(partial_percent(0.123456), 12.35);
    }
}
