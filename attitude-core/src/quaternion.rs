//! Hamilton quaternions for representing 3D rotations.
//!
//! A quaternion is a 4-component number `w + x*i + y*j + z*k` with the scalar
//! part first. Unit quaternions represent rotations without gimbal lock and
//! compose via the (non-commutative) Hamilton product:
//!
//! ```
//! use attitude_core::Quaternion;
//!
//! // i * j = k
//! let k = Quaternion::I * Quaternion::J;
//! assert_eq!(k, Quaternion::K);
//!
//! // Hamilton product is not commutative
//! assert_eq!(Quaternion::J * Quaternion::I, -Quaternion::K);
//! ```
//!
//! # No Unit-Norm Invariant
//!
//! Nothing forces a quaternion to be unit length; arithmetic results such as
//! sums are routinely non-unit. [`is_normalized`](Quaternion::is_normalized)
//! is a query, not a guarantee. Conversions to a rotation matrix are only
//! meaningful for unit quaternions - see
//! [`DirectionCosineMatrix::from_quaternion`](crate::DirectionCosineMatrix::from_quaternion).
//!
//! # Norm Convention
//!
//! [`norm`](Quaternion::norm) returns the **squared** magnitude, not its
//! square root. This matches the algebraic convention where
//! `inverse = conjugate / norm`; callers needing the Euclidean length take
//! the square root themselves.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A Hamilton quaternion with scalar-first component order (w, x, y, z).
///
/// Plain value type: `Copy`, no construction invariant, exact `PartialEq`.
/// For tolerance-based comparison use [`approx_eq`](Self::approx_eq).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar part.
    pub w: f64,
    /// First vector component (i).
    pub x: f64,
    /// Second vector component (j).
    pub y: f64,
    /// Third vector component (k).
    pub z: f64,
}

impl Quaternion {
    /// Tolerance used by [`is_normalized`](Self::is_normalized) and as the
    /// default for [`approx_eq`](Self::approx_eq).
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    /// The zero quaternion (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity (1, 0, 0, 0), also the no-rotation unit
    /// quaternion.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The basis quaternion i = (0, 1, 0, 0).
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The basis quaternion j = (0, 0, 1, 0).
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The basis quaternion k = (0, 0, 0, 1).
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its four components, scalar first.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Returns the scalar part `w`.
    #[inline]
    pub fn scalar_part(self) -> f64 {
        self.w
    }

    /// Returns the vector part as a pure quaternion (0, x, y, z).
    #[inline]
    pub fn vector_part(self) -> Self {
        Self::new(0.0, self.x, self.y, self.z)
    }

    /// Returns the conjugate: the vector part negated.
    ///
    /// For a unit quaternion the conjugate is the inverse rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the **squared** magnitude `w² + x² + y² + z²`.
    ///
    /// Deliberately not the Euclidean length; see the module docs.
    #[inline]
    pub fn norm(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the multiplicative inverse `conjugate / norm`.
    ///
    /// The inverse of the zero quaternion has all components NaN, per
    /// IEEE-754 (0/0); no error is raised.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.norm()
    }

    /// Returns `true` if the squared magnitude is within
    /// [`DEFAULT_TOLERANCE`](Self::DEFAULT_TOLERANCE) of one.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (self.norm() - 1.0).abs() < Self::DEFAULT_TOLERANCE
    }

    /// Componentwise comparison with the default tolerance
    /// ([`DEFAULT_TOLERANCE`](Self::DEFAULT_TOLERANCE)).
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_with(other, Self::DEFAULT_TOLERANCE)
    }

    /// Componentwise comparison with an explicit tolerance.
    #[inline]
    pub fn approx_eq_with(self, other: Self, tolerance: f64) -> bool {
        (self.w - other.w).abs() < tolerance
            && (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
    }
}

/// A scalar lifts to a quaternion with zero vector part.
impl From<f64> for Quaternion {
    #[inline]
    fn from(w: f64) -> Self {
        Self::new(w, 0.0, 0.0, 0.0)
    }
}

impl Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Hamilton product.
///
/// Non-commutative; composing rotations applies the right operand first.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
            self.w * q.x + self.x * q.w + self.y * q.z - self.z * q.y,
            self.w * q.y + self.y * q.w + self.z * q.x - self.x * q.z,
            self.w * q.z + self.z * q.w + self.x * q.y - self.y * q.x,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Self::new(self.w * k, self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

/// Division by a scalar.
///
/// Division by zero follows IEEE-754: components become infinite or NaN, no
/// error is raised.
impl Div<f64> for Quaternion {
    type Output = Self;
    #[inline]
    fn div(self, d: f64) -> Self {
        let m = 1.0 / d;
        Self::new(self.w * m, self.x * m, self.y * m, self.z * m)
    }
}

/// Component access by index: 0 = w, 1 = x, 2 = y, 3 = z.
///
/// # Panics
///
/// Panics if `index > 3`.
impl Index<usize> for Quaternion {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("quaternion index out of range: {index} (expected 0..=3)"),
        }
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}
