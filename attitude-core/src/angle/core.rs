//! Core angle type for orientation calculations.
//!
//! This module provides [`Angle`], the scalar angular measurement used
//! throughout the crate. Angles are stored internally as radians (f64) and can
//! be constructed from and converted to degrees.
//!
//! # Design Rationale
//!
//! **Why radians internally?** All trigonometric functions in Rust operate on
//! radians. Storing radians avoids repeated conversions during calculations;
//! the degree-based constructor and accessor exist for human-readable values.
//!
//! **Why associated constants?** [`Angle::PI`], [`Angle::HALF_PI`] and
//! [`Angle::PERIGON`] exist because angles are not just numbers. While
//! `std::f64::consts::PI` gives you a raw float, `Angle::PI` gives you a typed
//! angle and catches unit mix-ups at compile time.
//!
//! # Quick Start
//!
//! ```
//! use attitude_core::Angle;
//!
//! let a = Angle::from_degrees(45.0);
//! let b = Angle::from_radians(0.785398);
//!
//! assert!((a.radians() - 0.785398).abs() < 1e-5);
//! assert!((b.degrees() - 45.0).abs() < 1e-3);
//!
//! // Trigonometry - no conversion needed
//! let (sin, cos) = a.sin_cos();
//! ```
//!
//! # Special Values
//!
//! NaN and the infinities are legal angle values and propagate through
//! arithmetic exactly as IEEE-754 prescribes. They are states to observe, not
//! errors to catch:
//!
//! ```
//! use attitude_core::Angle;
//!
//! let undefined = Angle::NAN + Angle::PI;
//! assert!(undefined.is_nan());
//!
//! let saturated = Angle::from_degrees(90.0) / 0.0;
//! assert!(saturated.is_infinite());
//! ```
//!
//! # Folding
//!
//! [`fold_perigon`](Angle::fold_perigon) reduces an angle into one full turn.
//! Negative angles fold upward, so -90 degrees becomes 270 degrees:
//!
//! ```
//! use attitude_core::Angle;
//!
//! let folded = Angle::from_degrees(-90.0).fold_perigon(false);
//! assert!((folded.degrees() - 270.0).abs() < 1e-10);
//! ```

use crate::constants::{DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG, TWOPI};
use std::fmt;

/// An angular measurement stored as radians.
///
/// `Angle` is the scalar building block of the orientation types: a single
/// rotation magnitude, or one component of an Euler angle triple. It is not
/// itself a rotation.
///
/// # Internal Representation
///
/// Angles are stored as radians (`f64`). Equality and ordering compare the
/// radian value exactly - there is no tolerance; callers that need a fuzzy
/// comparison subtract and test the difference.
///
/// # Derives
///
/// - `Copy`, `Clone`: angles are 8 bytes and cheap to copy
/// - `PartialEq`, `PartialOrd`: exact radian comparison
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle (0 radians).
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Pi/2 radians (90 degrees).
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Pi radians (180 degrees).
    pub const PI: Self = Self { rad: PI };

    /// One full turn: 2*pi radians (360 degrees).
    pub const PERIGON: Self = Self { rad: TWOPI };

    /// The not-a-number angle.
    pub const NAN: Self = Self { rad: f64::NAN };

    /// Positive infinity.
    pub const INFINITY: Self = Self { rad: f64::INFINITY };

    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self {
        rad: f64::NEG_INFINITY,
    };

    /// Creates an angle from radians.
    ///
    /// Total: any f64 is accepted, including NaN and the infinities.
    ///
    /// # Example
    ///
    /// ```
    /// use attitude_core::Angle;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let angle = Angle::from_radians(FRAC_PI_4);
    /// assert!((angle.degrees() - 45.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// Total: any f64 is accepted, including NaN and the infinities.
    ///
    /// # Example
    ///
    /// ```
    /// use attitude_core::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Returns the angle in radians.
    ///
    /// This is the internal representation, so no conversion occurs.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns the tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Returns both sine and cosine of the angle.
    ///
    /// # Returns
    ///
    /// A tuple `(sin, cos)`.
    ///
    /// # Example
    ///
    /// ```
    /// use attitude_core::Angle;
    ///
    /// let (sin, cos) = Angle::from_degrees(30.0).sin_cos();
    /// assert!((sin - 0.5).abs() < 1e-10);
    /// assert!((cos - 0.866025).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Returns the absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Returns `true` if the angle is exactly zero radians.
    ///
    /// No tolerance is applied; an angle of 1e-300 radians is not zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.rad == 0.0
    }

    /// Returns `true` if the angle is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.rad.is_nan()
    }

    /// Returns `true` if the angle is positive or negative infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.rad.is_infinite()
    }

    /// Folds the angle into one full turn.
    ///
    /// With `include_perigon == false` the result lies in `[0, 2*pi)`.
    /// With `include_perigon == true` an angle within 1e-10 radians of exactly
    /// one full turn is returned unchanged, extending the range to `[0, 2*pi]`.
    ///
    /// Negative angles fold upward: -90 degrees becomes 270 degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use attitude_core::Angle;
    ///
    /// let a = Angle::from_degrees(450.0).fold_perigon(false);
    /// assert!((a.degrees() - 90.0).abs() < 1e-10);
    ///
    /// let full_turn = Angle::from_degrees(360.0).fold_perigon(true);
    /// assert!((full_turn.degrees() - 360.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn fold_perigon(self, include_perigon: bool) -> Self {
        super::normalize::fold_perigon(self, include_perigon)
    }
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(degrees: f64) -> Angle {
    Angle::from_degrees(degrees)
}

/// Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(radians: f64) -> Angle {
    Angle::from_radians(radians)
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees() {
        let alpha = Angle::from_degrees(10.0);
        assert!((alpha.degrees() - 10.0).abs() < 1e-12);
        assert!((alpha.radians() - 10.0 * PI / 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_radians_is_left_inverse() {
        for d in [-720.0, -90.0, 0.0, 33.3, 359.9, 1234.5] {
            let a = Angle::from_degrees(d);
            let back = Angle::from_radians(a.radians());
            assert!((back.degrees() - d).abs() < 1e-10);
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(Angle::ZERO.radians(), 0.0);
        assert!((Angle::HALF_PI.degrees() - 90.0).abs() < 1e-12);
        assert!((Angle::PI.degrees() - 180.0).abs() < 1e-12);
        assert!((Angle::PERIGON.degrees() - 360.0).abs() < 1e-12);
    }

    #[test]
    fn test_special_values() {
        assert!(Angle::NAN.is_nan());
        assert!(Angle::INFINITY.is_infinite());
        assert!(Angle::NEG_INFINITY.is_infinite());
        assert!(!Angle::NAN.is_infinite());
        assert!(!Angle::INFINITY.is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        assert!((Angle::NAN + Angle::PI).is_nan());
        assert!((Angle::NAN * 2.0).is_nan());
        assert!((-Angle::NAN).is_nan());
    }

    #[test]
    fn test_infinity_saturates() {
        assert!((Angle::INFINITY + Angle::PI).is_infinite());
        assert_eq!((Angle::INFINITY + Angle::PI).radians(), f64::INFINITY);
        assert_eq!((Angle::NEG_INFINITY - Angle::PI).radians(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_is_zero_is_exact() {
        assert!(Angle::ZERO.is_zero());
        assert!(Angle::from_radians(-0.0).is_zero());
        assert!(!Angle::from_radians(1e-300).is_zero());
    }

    #[test]
    fn test_trig() {
        let a = Angle::from_degrees(30.0);
        assert!((a.sin() - 0.5).abs() < 1e-12);
        assert!((a.cos() - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((a.tan() - a.sin() / a.cos()).abs() < 1e-12);
        let (s, c) = a.sin_cos();
        assert_eq!(s, a.sin());
        assert_eq!(c, a.cos());
    }

    #[test]
    fn test_ordering() {
        let small = Angle::from_degrees(10.0);
        let large = Angle::from_degrees(20.0);
        assert!(small < large);
        assert!(large > small);
        assert!(small <= small);
        assert!(small >= small);
    }

    #[test]
    fn test_exact_equality() {
        assert_eq!(Angle::from_degrees(90.0), Angle::from_degrees(90.0));
        assert_ne!(
            Angle::from_radians(1.0),
            Angle::from_radians(1.0 + f64::EPSILON)
        );
    }

    #[test]
    fn test_abs() {
        assert_eq!(Angle::from_degrees(-45.0).abs(), Angle::from_degrees(45.0));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Angle::from_degrees(45.123456789));
        assert_eq!(s, "45.123457°");
    }

    #[test]
    fn test_shorthands() {
        assert_eq!(deg(45.0), Angle::from_degrees(45.0));
        assert_eq!(rad(1.0), Angle::from_radians(1.0));
    }
}
