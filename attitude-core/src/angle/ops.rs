//! Arithmetic operators for [`Angle`].
//!
//! Implements `+`, `-` (binary and unary), `*` by a scalar on either side,
//! `/` by a scalar, `/` by another angle (the dimensionless ratio), and `%`.
//!
//! Division by zero follows IEEE-754 and yields an infinite angle rather than
//! an error; NaN propagates through every operator.

use super::core::Angle;
use core::ops::*;

/// Angle + Angle → Angle
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

/// Angle - Angle → Angle
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

/// Angle * scalar → Angle
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

/// scalar * Angle → Angle
impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, a: Angle) -> Angle {
        Angle::from_radians(self * a.radians())
    }
}

/// Angle / scalar → Angle
impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_radians(self.radians() / k)
    }
}

/// Angle / Angle → dimensionless ratio
impl Div<Angle> for Angle {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Angle) -> f64 {
        self.radians() / rhs.radians()
    }
}

/// Angle % Angle → Angle (radian remainder)
impl Rem for Angle {
    type Output = Angle;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() % rhs.radians())
    }
}

/// -Angle → Angle
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.radians())
    }
}
