//! Angle folding into one full turn.
//!
//! Orientation angles are cyclic: 450 degrees points the same way as
//! 90 degrees. [`fold_perigon`] reduces any finite angle into a single turn,
//! with a choice of range:
//!
//! | `include_perigon` | Range |
//! |-------------------|-----------|
//! | `false`           | `[0, 2pi)` |
//! | `true`            | `[0, 2pi]` |
//!
//! The inclusive variant exists for callers that want "exactly one full turn"
//! to survive folding instead of collapsing to zero: an input within 1e-10
//! radians of 2*pi is returned unchanged.
//!
//! Negative angles fold upward, preserving the direction on the circle:
//! -90 degrees and 270 degrees are the same heading.
//!
//! # Algorithm Notes
//!
//! The reduction uses `libm::fmod` (via [`crate::math::fmod`]) rather than the
//! `%` operator because Rust's `%` is a remainder, not a modulo. For negative
//! numbers the two differ:
//!
//! - `-1.0 % TWOPI` = `-1.0` (remainder, keeps sign of dividend)
//! - `fmod(-1.0, TWOPI)` = `-1.0` (same value, but well-defined for floats)
//!
//! After `fmod`, a negative result gets one turn added to land in `[0, 2pi)`.

use super::core::Angle;
use crate::constants::TWOPI;
use crate::math::fmod;

/// Tolerance for recognizing "exactly one full turn" in the inclusive fold.
const PERIGON_TOLERANCE: f64 = 1e-10;

/// Folds an angle into one full turn.
///
/// With `include_perigon == false` the result lies in `[0, 2pi)`. With
/// `include_perigon == true`, an input within [`1e-10`](PERIGON_TOLERANCE)
/// radians of exactly 2*pi is returned unchanged, so the range becomes
/// `[0, 2pi]`.
///
/// NaN and infinite inputs propagate: `fmod` of a non-finite value is NaN.
///
/// # Examples
///
/// ```
/// use attitude_core::Angle;
/// use attitude_core::angle::fold_perigon;
///
/// // 450° -> 90°
/// let a = fold_perigon(Angle::from_degrees(450.0), false);
/// assert!((a.degrees() - 90.0).abs() < 1e-10);
///
/// // Negative angles fold upward: -90° -> 270°
/// let b = fold_perigon(Angle::from_degrees(-90.0), false);
/// assert!((b.degrees() - 270.0).abs() < 1e-10);
///
/// // A full turn survives only the inclusive fold
/// assert!(fold_perigon(Angle::PERIGON, false).is_zero());
/// assert_eq!(fold_perigon(Angle::PERIGON, true), Angle::PERIGON);
/// ```
pub fn fold_perigon(angle: Angle, include_perigon: bool) -> Angle {
    if include_perigon && (angle.radians() - TWOPI).abs() < PERIGON_TOLERANCE {
        return angle;
    }

    let folded = fmod(angle.radians(), TWOPI);
    if folded < 0.0 {
        Angle::from_radians(folded + TWOPI)
    } else {
        Angle::from_radians(folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_unchanged() {
        let a = fold_perigon(Angle::from_radians(1.0), false);
        assert_eq!(a.radians(), 1.0);
    }

    #[test]
    fn test_overflow_folds_down() {
        let a = fold_perigon(Angle::from_degrees(450.0), false);
        assert!((a.degrees() - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_folds_upward() {
        let a = fold_perigon(Angle::from_degrees(-90.0), false);
        assert!((a.degrees() - 270.0).abs() < 1e-10);
    }

    #[test]
    fn test_full_turn_exclusive_collapses() {
        let a = fold_perigon(Angle::from_degrees(360.0), false);
        assert!(a.radians().abs() < 1e-10);
    }

    #[test]
    fn test_full_turn_inclusive_survives() {
        let a = fold_perigon(Angle::from_degrees(360.0), true);
        assert!((a.degrees() - 360.0).abs() < 1e-10);
    }

    #[test]
    fn test_inclusive_only_near_exactly_one_turn() {
        // Two full turns still collapse, even inclusively
        let a = fold_perigon(Angle::from_degrees(720.0), true);
        assert!(a.radians().abs() < 1e-10);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(fold_perigon(Angle::NAN, false).is_nan());
        assert!(fold_perigon(Angle::INFINITY, false).is_nan());
    }
}
