//! Direction cosine matrices for rigid-body orientation.
//!
//! A direction cosine matrix (DCM) is a 3x3 orthonormal matrix with
//! determinant +1 representing the rotation that carries a vector from the
//! body frame to the reference frame. Composing attitudes, transforming
//! sensor vectors between frames, and interfacing with Euler angle or
//! quaternion parametrizations all go through this type.
//!
//! # Convention
//!
//! One convention is used throughout: **body frame to reference frame**,
//! row-major storage, column vectors on the right. Element `(i, j)` is the
//! projection of body axis `j` onto reference axis `i`, so the columns of the
//! matrix are the body axes expressed in the reference frame.
//!
//! ```text
//! | r11 r12 r13 |   | x |   reference-frame
//! | r21 r22 r23 | * | y | = components of the
//! | r31 r32 r33 |   | z |   body-frame vector
//! ```
//!
//! # Composing Rotations
//!
//! Matrices compose by multiplication with the rightmost factor acting first:
//! `b * a` applies rotation `a`, then rotation `b`.
//!
//! ```
//! use attitude_core::{Angle, DirectionCosineMatrix};
//!
//! let yaw = DirectionCosineMatrix::from_euler_zyx(
//!     Angle::from_degrees(30.0), Angle::ZERO, Angle::ZERO);
//! let pitch = DirectionCosineMatrix::from_euler_zyx(
//!     Angle::ZERO, Angle::from_degrees(20.0), Angle::ZERO);
//!
//! // Pitch first, then yaw
//! let combined = yaw * pitch;
//! assert!(combined.is_orthonormal(1e-9));
//! ```
//!
//! # The Orthonormality Invariant
//!
//! Rotation matrices must stay orthonormal; a matrix with scale or shear is
//! not a rotation. The validating constructors ([`from_rows`], [`from_elements`])
//! reject input whose rows deviate from orthonormality by more than
//! [`ORTHONORMALITY_TOLERANCE`]. Repair is available but **opt-in**: call
//! [`orthonormalized`] to run a Gram-Schmidt pass before retrying, so silent
//! correction never masks bad data upstream.
//!
//! ```
//! use attitude_core::DirectionCosineMatrix;
//!
//! let skewed = [
//!     [1.0, 0.001, 0.0],
//!     [0.0, 1.0,   0.0],
//!     [0.0, 0.0,   1.0],
//! ];
//! assert!(DirectionCosineMatrix::from_rows(skewed).is_err());
//!
//! let repaired = DirectionCosineMatrix::orthonormalized(skewed);
//! assert!(repaired.is_orthonormal(1e-12));
//! ```
//!
//! # Inverting Rotations
//!
//! For an orthonormal matrix the inverse equals the transpose, which is both
//! cheaper and numerically stable:
//!
//! ```
//! use attitude_core::{Angle, DirectionCosineMatrix};
//!
//! let m = DirectionCosineMatrix::from_euler_zyx(
//!     Angle::from_degrees(30.0),
//!     Angle::from_degrees(20.0),
//!     Angle::from_degrees(10.0),
//! );
//! assert_eq!(m.transpose() * m, DirectionCosineMatrix::IDENTITY);
//! ```
//!
//! # Quaternion Interchange
//!
//! [`from_quaternion`] expands the standard quadratic form and is only a
//! rotation for unit quaternions - a non-unit input silently yields a scaled,
//! non-orthonormal matrix, observable through [`is_orthonormal`].
//! [`to_quaternion`] uses Shepperd's method: when the trace is positive the
//! scalar component is recovered first; otherwise the branch keyed by the
//! largest diagonal element avoids dividing by a near-zero quantity. That
//! branch selection is what keeps the extraction stable near 180-degree
//! rotations, where `trace + 1` vanishes.
//!
//! [`from_rows`]: DirectionCosineMatrix::from_rows
//! [`from_elements`]: DirectionCosineMatrix::from_elements
//! [`orthonormalized`]: DirectionCosineMatrix::orthonormalized
//! [`from_quaternion`]: DirectionCosineMatrix::from_quaternion
//! [`to_quaternion`]: DirectionCosineMatrix::to_quaternion
//! [`is_orthonormal`]: DirectionCosineMatrix::is_orthonormal
//! [`ORTHONORMALITY_TOLERANCE`]: DirectionCosineMatrix::ORTHONORMALITY_TOLERANCE

use crate::angle::Angle;
use crate::errors::{OrientationError, OrientationResult};
use crate::quaternion::Quaternion;
use std::fmt;

use super::Vector3;

/// A 3x3 direction cosine matrix carrying body-frame vectors into the
/// reference frame.
///
/// Row-major storage. Validated construction via [`from_rows`](Self::from_rows)
/// or [`from_elements`](Self::from_elements); closed-form builders
/// ([`from_quaternion`](Self::from_quaternion), [`from_euler_zyx`](Self::from_euler_zyx),
/// [`from_euler_zxz`](Self::from_euler_zxz)) assemble their result directly.
///
/// Equality is tolerance-based: two matrices compare equal when every element
/// pair differs by less than [`EQ_TOLERANCE`](Self::EQ_TOLERANCE). This is
/// part of the type's contract (rotation math legitimately accumulates
/// last-digit noise); use [`max_difference`](Self::max_difference) when the
/// actual deviation matters.
#[derive(Debug, Clone, Copy)]
pub struct DirectionCosineMatrix {
    elements: [[f64; 3]; 3],
}

impl DirectionCosineMatrix {
    /// Tolerance of the orthonormality check applied by the validating
    /// constructors.
    pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-6;

    /// Per-element tolerance of the `PartialEq` implementation.
    pub const EQ_TOLERANCE: f64 = 1e-9;

    /// Gimbal-lock detection threshold for [`to_euler_zyx`](Self::to_euler_zyx)
    /// (`|r31|` within this distance of 1).
    pub const GIMBAL_LOCK_TOLERANCE_ZYX: f64 = 1e-9;

    /// Singularity detection threshold for [`to_euler_zxz`](Self::to_euler_zxz)
    /// (`|sin theta|` below this value).
    pub const SINGULARITY_TOLERANCE_ZXZ: f64 = 1e-12;

    /// The identity matrix: no rotation.
    pub const IDENTITY: Self = Self {
        elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a matrix from a row-major 3x3 array, validating orthonormality.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::NotOrthonormal`] when any row norm or
    /// pairwise row dot product deviates from orthonormality by more than
    /// [`ORTHONORMALITY_TOLERANCE`](Self::ORTHONORMALITY_TOLERANCE). The input
    /// can be repaired explicitly with [`orthonormalized`](Self::orthonormalized).
    pub fn from_rows(elements: [[f64; 3]; 3]) -> OrientationResult<Self> {
        let candidate = Self { elements };
        let deviation = candidate.orthonormality_deviation();
        if deviation > Self::ORTHONORMALITY_TOLERANCE {
            return Err(OrientationError::not_orthonormal(
                deviation,
                Self::ORTHONORMALITY_TOLERANCE,
            ));
        }
        Ok(candidate)
    }

    /// Creates a matrix from nine scalars in row-major order, validating
    /// orthonormality.
    ///
    /// # Errors
    ///
    /// Same as [`from_rows`](Self::from_rows).
    #[allow(clippy::too_many_arguments)]
    pub fn from_elements(
        r11: f64,
        r12: f64,
        r13: f64,
        r21: f64,
        r22: f64,
        r23: f64,
        r31: f64,
        r32: f64,
        r33: f64,
    ) -> OrientationResult<Self> {
        Self::from_rows([[r11, r12, r13], [r21, r22, r23], [r31, r32, r33]])
    }

    /// Unvalidated construction for closed forms that are orthonormal by
    /// construction (or, for `from_quaternion`, deliberately unchecked).
    #[inline]
    pub(crate) const fn raw(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Runs a Gram-Schmidt pass over the columns of `elements` and returns the
    /// resulting rotation matrix.
    ///
    /// The first column is normalized, the second is orthogonalized against it
    /// and normalized, and the third is rebuilt as their cross product. This
    /// is the explicit repair path for input rejected by
    /// [`from_rows`](Self::from_rows); it assumes the first two columns are
    /// linearly independent and not near-zero.
    pub fn orthonormalized(elements: [[f64; 3]; 3]) -> Self {
        let mut col0 = Vector3::new(elements[0][0], elements[1][0], elements[2][0]);
        let mut col1 = Vector3::new(elements[0][1], elements[1][1], elements[2][1]);

        col0 = col0 * (1.0 / col0.magnitude());
        col1 = col1 - col0 * col0.dot(col1);
        col1 = col1 * (1.0 / col1.magnitude());
        let col2 = col0.cross(col1);

        Self::raw([
            [col0.x, col1.x, col2.x],
            [col0.y, col1.y, col2.y],
            [col0.z, col1.z, col2.z],
        ])
    }

    /// Checks orthonormality of the rows within `tolerance`: each row must be
    /// unit length and the rows mutually perpendicular.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        self.orthonormality_deviation() <= tolerance
    }

    /// The largest deviation from orthonormality across row norms and row
    /// dot products.
    fn orthonormality_deviation(&self) -> f64 {
        let rows = [self.row(0), self.row(1), self.row(2)];

        let mut deviation: f64 = 0.0;
        for i in 0..3 {
            deviation = deviation.max((rows[i].dot(rows[i]) - 1.0).abs());
            for j in (i + 1)..3 {
                deviation = deviation.max(rows[i].dot(rows[j]).abs());
            }
        }

        deviation
    }

    #[inline]
    fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self.elements[i])
    }

    /// Returns the elements as a row-major 3x3 array (a copy).
    pub fn to_rows(&self) -> [[f64; 3]; 3] {
        self.elements
    }

    /// Element (1,1): projection of body X onto reference X.
    #[inline]
    pub fn r11(&self) -> f64 {
        self.elements[0][0]
    }

    /// Element (1,2): projection of body Y onto reference X.
    #[inline]
    pub fn r12(&self) -> f64 {
        self.elements[0][1]
    }

    /// Element (1,3): projection of body Z onto reference X.
    #[inline]
    pub fn r13(&self) -> f64 {
        self.elements[0][2]
    }

    /// Element (2,1): projection of body X onto reference Y.
    #[inline]
    pub fn r21(&self) -> f64 {
        self.elements[1][0]
    }

    /// Element (2,2): projection of body Y onto reference Y.
    #[inline]
    pub fn r22(&self) -> f64 {
        self.elements[1][1]
    }

    /// Element (2,3): projection of body Z onto reference Y.
    #[inline]
    pub fn r23(&self) -> f64 {
        self.elements[1][2]
    }

    /// Element (3,1): projection of body X onto reference Z.
    #[inline]
    pub fn r31(&self) -> f64 {
        self.elements[2][0]
    }

    /// Element (3,2): projection of body Y onto reference Z.
    #[inline]
    pub fn r32(&self) -> f64 {
        self.elements[2][1]
    }

    /// Element (3,3): projection of body Z onto reference Z.
    #[inline]
    pub fn r33(&self) -> f64 {
        self.elements[2][2]
    }

    /// Returns the transpose, which for an orthonormal matrix is the inverse
    /// rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::raw([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Multiplies this matrix by another, returning the composition where
    /// `other` is applied first, then `self`.
    ///
    /// Also available as the `*` operator.
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += a[i][k] * b[k][j];
                }
            }
        }

        Self::raw(result)
    }

    /// Computes the determinant. +1 for a proper rotation, -1 for a
    /// reflection.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Transforms a body-frame vector into the reference frame.
    ///
    /// Also available as `matrix * vector`.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Transforms a reference-frame vector into the body frame by applying
    /// the transpose.
    pub fn inverse_transform_vector(&self, v: Vector3) -> Vector3 {
        self.transpose().transform_vector(v)
    }

    /// The body X axis expressed in the reference frame (first column).
    pub fn x_axis(&self) -> Vector3 {
        Vector3::new(self.r11(), self.r21(), self.r31())
    }

    /// The body Y axis expressed in the reference frame (second column).
    pub fn y_axis(&self) -> Vector3 {
        Vector3::new(self.r12(), self.r22(), self.r32())
    }

    /// The body Z axis expressed in the reference frame (third column).
    pub fn z_axis(&self) -> Vector3 {
        Vector3::new(self.r13(), self.r23(), self.r33())
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements of two matrices.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    /// Builds the matrix of the rotation a unit quaternion represents, via the
    /// standard quadratic-form expansion.
    ///
    /// Only meaningful for unit quaternions: a non-unit input silently yields
    /// a matrix scaled by the squared magnitude, which is not orthonormal.
    /// Query with [`is_orthonormal`](Self::is_orthonormal) when the input is
    /// not known to be normalized.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);

        let w2 = w * w;
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;

        Self::raw([
            [
                w2 + x2 - y2 - z2,
                2.0 * (x * y - w * z),
                2.0 * (x * z + w * y),
            ],
            [
                2.0 * (x * y + w * z),
                w2 - x2 + y2 - z2,
                2.0 * (y * z - w * x),
            ],
            [
                2.0 * (x * z - w * y),
                2.0 * (y * z + w * x),
                w2 - x2 - y2 + z2,
            ],
        ])
    }

    /// Extracts the unit quaternion of this rotation using Shepperd's method.
    ///
    /// When the trace is positive the scalar component is recovered first.
    /// Otherwise the branch keyed by the largest diagonal element is taken, so
    /// the division is always by a quantity bounded away from zero. Near
    /// 180-degree rotations `trace + 1` vanishes and the naive formula loses
    /// all precision; the branch selection is load-bearing and must not be
    /// simplified away.
    ///
    /// The returned quaternion has scalar-first component order; for the
    /// identity matrix it is `(1, 0, 0, 0)`. The sign is fixed by the branch
    /// taken (`q` and `-q` encode the same rotation).
    pub fn to_quaternion(&self) -> Quaternion {
        let (r11, r12, r13) = (self.r11(), self.r12(), self.r13());
        let (r21, r22, r23) = (self.r21(), self.r22(), self.r23());
        let (r31, r32, r33) = (self.r31(), self.r32(), self.r33());

        let trace = r11 + r22 + r33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Quaternion::new(
                0.25 / s,
                (r32 - r23) * s,
                (r13 - r31) * s,
                (r21 - r12) * s,
            )
        } else if r11 > r22 && r11 > r33 {
            let s = 2.0 * (1.0 + r11 - r22 - r33).sqrt();
            Quaternion::new(
                (r32 - r23) / s,
                0.25 * s,
                (r12 + r21) / s,
                (r13 + r31) / s,
            )
        } else if r22 > r33 {
            let s = 2.0 * (1.0 + r22 - r11 - r33).sqrt();
            Quaternion::new(
                (r13 - r31) / s,
                (r12 + r21) / s,
                0.25 * s,
                (r23 + r32) / s,
            )
        } else {
            let s = 2.0 * (1.0 + r33 - r11 - r22).sqrt();
            Quaternion::new(
                (r21 - r12) / s,
                (r13 + r31) / s,
                (r23 + r32) / s,
                0.25 * s,
            )
        }
    }

    /// Builds the matrix of an intrinsic Z-Y-X (yaw, pitch, roll) rotation.
    pub fn from_euler_zyx(yaw: Angle, pitch: Angle, roll: Angle) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();

        Self::raw([
            [cy * cp, cy * sp * sr - sy * cr, cy * sp * cr + sy * sr],
            [sy * cp, sy * sp * sr + cy * cr, sy * sp * cr - cy * sr],
            [-sp, cp * sr, cp * cr],
        ])
    }

    /// Extracts intrinsic Z-Y-X angles as `(yaw, pitch, roll)`.
    ///
    /// Away from gimbal lock: `pitch = asin(-r31)`, `yaw = atan2(r21, r11)`,
    /// `roll = atan2(r32, r33)`. At gimbal lock (`|r31|` within
    /// [`GIMBAL_LOCK_TOLERANCE_ZYX`](Self::GIMBAL_LOCK_TOLERANCE_ZYX) of 1,
    /// i.e. pitch at +/-90 degrees) yaw and roll rotate about the same axis
    /// and only their combination is observable; roll collapses to zero and
    /// yaw is recomputed from the degenerate `(r12, r22)` pair so that
    /// rebuilding a matrix from the result reproduces the input.
    pub fn to_euler_zyx(&self) -> (Angle, Angle, Angle) {
        let r31 = self.r31();

        if (r31.abs() - 1.0).abs() < Self::GIMBAL_LOCK_TOLERANCE_ZYX {
            let pitch = (-r31.clamp(-1.0, 1.0)).asin();
            let yaw = (-self.r12()).atan2(self.r22());
            return (
                Angle::from_radians(yaw),
                Angle::from_radians(pitch),
                Angle::ZERO,
            );
        }

        let yaw = self.r21().atan2(self.r11());
        let pitch = (-r31).asin();
        let roll = self.r32().atan2(self.r33());

        (
            Angle::from_radians(yaw),
            Angle::from_radians(pitch),
            Angle::from_radians(roll),
        )
    }

    /// Builds the matrix of an intrinsic Z-X-Z (psi, theta, phi) rotation.
    pub fn from_euler_zxz(psi: Angle, theta: Angle, phi: Angle) -> Self {
        let (s1, c1) = psi.sin_cos();
        let (s2, c2) = theta.sin_cos();
        let (s3, c3) = phi.sin_cos();

        Self::raw([
            [c1 * c3 - s1 * c2 * s3, -c1 * s3 - s1 * c2 * c3, s1 * s2],
            [s1 * c3 + c1 * c2 * s3, -s1 * s3 + c1 * c2 * c3, -c1 * s2],
            [s2 * s3, s2 * c3, c2],
        ])
    }

    /// Extracts intrinsic Z-X-Z angles as `(psi, theta, phi)`.
    ///
    /// `theta = acos(r33)` (clamped against rounding past +/-1). Away from the
    /// singularity: `psi = atan2(r13, -r23)`, `phi = atan2(r31, r32)`. When
    /// `|sin theta|` falls below
    /// [`SINGULARITY_TOLERANCE_ZXZ`](Self::SINGULARITY_TOLERANCE_ZXZ) the two
    /// Z rotations are indistinguishable; psi collapses to zero and phi is
    /// recomputed from the degenerate `(r12, r11)` pair so that rebuilding a
    /// matrix from the result reproduces the input.
    pub fn to_euler_zxz(&self) -> (Angle, Angle, Angle) {
        let theta = self.r33().clamp(-1.0, 1.0).acos();

        let sin_theta = theta.sin();
        let (psi, phi) = if sin_theta.abs() > Self::SINGULARITY_TOLERANCE_ZXZ {
            (
                self.r13().atan2(-self.r23()),
                self.r31().atan2(self.r32()),
            )
        } else {
            (0.0, (-self.r12()).atan2(self.r11()))
        };

        (
            Angle::from_radians(psi),
            Angle::from_radians(theta),
            Angle::from_radians(phi),
        )
    }
}

/// Tolerance-based equality: every element pair within
/// [`EQ_TOLERANCE`](DirectionCosineMatrix::EQ_TOLERANCE).
impl PartialEq for DirectionCosineMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.max_difference(other) <= Self::EQ_TOLERANCE
    }
}

impl std::ops::Mul for DirectionCosineMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&DirectionCosineMatrix> for DirectionCosineMatrix {
    type Output = DirectionCosineMatrix;

    fn mul(self, rhs: &DirectionCosineMatrix) -> DirectionCosineMatrix {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<DirectionCosineMatrix> for &DirectionCosineMatrix {
    type Output = DirectionCosineMatrix;

    fn mul(self, rhs: DirectionCosineMatrix) -> DirectionCosineMatrix {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&DirectionCosineMatrix> for &DirectionCosineMatrix {
    type Output = DirectionCosineMatrix;

    fn mul(self, rhs: &DirectionCosineMatrix) -> DirectionCosineMatrix {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for DirectionCosineMatrix {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.transform_vector(v)
    }
}

impl std::ops::Mul<Vector3> for &DirectionCosineMatrix {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.transform_vector(v)
    }
}

/// Element access by `(row, col)`, both 0-based.
///
/// # Panics
///
/// Panics if either index is outside `[0, 2]`.
impl std::ops::Index<(usize, usize)> for DirectionCosineMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

/// Fallible construction from a flat row-major slice.
///
/// The slice must contain exactly nine elements; anything else is rejected
/// with [`OrientationError::InvalidDimensions`] before the orthonormality
/// check runs.
impl TryFrom<&[f64]> for DirectionCosineMatrix {
    type Error = OrientationError;

    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        if slice.len() != 9 {
            return Err(OrientationError::invalid_dimensions(9, slice.len()));
        }

        Self::from_rows([
            [slice[0], slice[1], slice[2]],
            [slice[3], slice[4], slice[5]],
            [slice[6], slice[7], slice[8]],
        ])
    }
}

impl fmt::Display for DirectionCosineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DCM:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
