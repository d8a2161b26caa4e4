//! Conversions between Euler angle sequences, quaternions, and direction
//! cosine matrices.
//!
//! All conversions here dispatch on the [`EulerSequence`] tag and share one
//! set of conventions with [`DirectionCosineMatrix`](crate::DirectionCosineMatrix):
//! rotations carry body-frame vectors into the reference frame, and every
//! path between two representations of the same rotation agrees. Converting
//! Euler angles to a matrix directly, or via a quaternion, yields the same
//! matrix.
//!
//! # Sequences
//!
//! - **Classic** (Z-X-Z): `q = q_z(psi) * q_x(theta) * q_z(phi)`.
//! - **Krylov** (Y-Z-X): `q = q_y(psi) * q_z(theta) * q_x(phi)`.
//!
//! The half-angle expansions below are those products multiplied out; the
//! whole-angle matrix forms are the corresponding quadratic expansions.
//!
//! ```
//! use attitude_core::{deg, EulerAngles};
//!
//! let q = EulerAngles::krylov(deg(30.0), deg(45.0), deg(60.0)).to_quaternion();
//! let recovered = q.to_krylov_angles();
//! assert!((recovered.psi().degrees() - 30.0).abs() < 1e-10);
//! ```
//!
//! # The Missing Conversion
//!
//! [`Quaternion::to_classic_angles`] is a permanent, documented gap: the
//! closed form for extracting Z-X-Z angles from a quaternion is singular at
//! `theta = 0`, and no formula that stays stable through the singularity has
//! been finalized. The operation fails with
//! [`OrientationError::NotImplemented`] rather than return a value that is
//! wrong near the singularity.

use crate::angle::Angle;
use crate::errors::{OrientationError, OrientationResult};
use crate::euler::{EulerAngles, EulerSequence};
use crate::matrix::DirectionCosineMatrix;
use crate::quaternion::Quaternion;

impl EulerAngles {
    /// Converts this angle triple into the unit quaternion of the same
    /// rotation, using the half-angle product expansion of its sequence.
    pub fn to_quaternion(self) -> Quaternion {
        match self.sequence() {
            EulerSequence::Classic => {
                classic_to_quaternion(self.psi(), self.theta(), self.phi())
            }
            EulerSequence::Krylov => krylov_to_quaternion(self.psi(), self.theta(), self.phi()),
        }
    }

    /// Converts this angle triple into the direction cosine matrix of the
    /// same rotation.
    ///
    /// Consistent with going through a quaternion:
    /// `angles.to_dcm()` equals
    /// `DirectionCosineMatrix::from_quaternion(angles.to_quaternion())`.
    pub fn to_dcm(self) -> DirectionCosineMatrix {
        match self.sequence() {
            EulerSequence::Classic => {
                DirectionCosineMatrix::from_euler_zxz(self.psi(), self.theta(), self.phi())
            }
            EulerSequence::Krylov => krylov_to_dcm(self.psi(), self.theta(), self.phi()),
        }
    }
}

impl Quaternion {
    /// Converts this (unit) quaternion into an angle triple of the requested
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::NotImplemented`] for
    /// [`EulerSequence::Classic`]; see
    /// [`to_classic_angles`](Self::to_classic_angles).
    pub fn to_euler_angles(self, sequence: EulerSequence) -> OrientationResult<EulerAngles> {
        match sequence {
            EulerSequence::Classic => self.to_classic_angles(),
            EulerSequence::Krylov => Ok(self.to_krylov_angles()),
        }
    }

    /// Extracts Krylov (Y-Z-X yaw, pitch, roll) angles from this unit
    /// quaternion.
    ///
    /// The atan2/asin closed form is numerically reliable away from the
    /// Krylov gimbal-lock condition `theta = +/-90 degrees`; approaching it,
    /// yaw and roll become individually indeterminate. The result is only
    /// meaningful for unit quaternions.
    pub fn to_krylov_angles(self) -> EulerAngles {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let psi = (w * y - x * z).atan2(w * w + x * x - 0.5);
        let theta = (2.0 * (x * y + w * z)).clamp(-1.0, 1.0).asin();
        let phi = (w * x - y * z).atan2(w * w + y * y - 0.5);

        EulerAngles::krylov(
            Angle::from_radians(psi),
            Angle::from_radians(theta),
            Angle::from_radians(phi),
        )
    }

    /// Extracts classic (Z-X-Z) Euler angles from this quaternion.
    ///
    /// # Errors
    ///
    /// Always returns [`OrientationError::NotImplemented`]. The closed form
    /// is singular at `theta = 0` and no stable formula has been finalized;
    /// failing explicitly is preferred over returning an incorrect value.
    pub fn to_classic_angles(self) -> OrientationResult<EulerAngles> {
        Err(OrientationError::not_implemented(
            "to_classic_angles",
            "closed form is singular at theta = 0; no stable formula finalized",
        ))
    }
}

/// `q_z(psi) * q_x(theta) * q_z(phi)` multiplied out in half angles.
fn classic_to_quaternion(psi: Angle, theta: Angle, phi: Angle) -> Quaternion {
    let (sin_half_psi, cos_half_psi) = (psi * 0.5).sin_cos();
    let (sin_half_theta, cos_half_theta) = (theta * 0.5).sin_cos();
    let (sin_half_phi, cos_half_phi) = (phi * 0.5).sin_cos();

    Quaternion::new(
        cos_half_psi * cos_half_theta * cos_half_phi
            - sin_half_psi * cos_half_theta * sin_half_phi,
        cos_half_psi * sin_half_theta * cos_half_phi
            + sin_half_psi * sin_half_theta * sin_half_phi,
        sin_half_psi * sin_half_theta * cos_half_phi
            - cos_half_psi * sin_half_theta * sin_half_phi,
        cos_half_psi * cos_half_theta * sin_half_phi
            + sin_half_psi * cos_half_theta * cos_half_phi,
    )
}

/// `q_y(psi) * q_z(theta) * q_x(phi)` multiplied out in half angles.
fn krylov_to_quaternion(psi: Angle, theta: Angle, phi: Angle) -> Quaternion {
    let (sin_half_psi, cos_half_psi) = (psi * 0.5).sin_cos();
    let (sin_half_theta, cos_half_theta) = (theta * 0.5).sin_cos();
    let (sin_half_phi, cos_half_phi) = (phi * 0.5).sin_cos();

    Quaternion::new(
        cos_half_psi * cos_half_theta * cos_half_phi
            - sin_half_psi * sin_half_theta * sin_half_phi,
        sin_half_psi * sin_half_theta * cos_half_phi
            + cos_half_psi * cos_half_theta * sin_half_phi,
        sin_half_psi * cos_half_theta * cos_half_phi
            + cos_half_psi * sin_half_theta * sin_half_phi,
        cos_half_psi * sin_half_theta * cos_half_phi
            - sin_half_psi * cos_half_theta * sin_half_phi,
    )
}

/// The Y-Z-X whole-angle matrix: `Ry(psi) * Rz(theta) * Rx(phi)`.
fn krylov_to_dcm(psi: Angle, theta: Angle, phi: Angle) -> DirectionCosineMatrix {
    let (sin_psi, cos_psi) = psi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    DirectionCosineMatrix::raw([
        [
            cos_psi * cos_theta,
            sin_psi * sin_phi - cos_psi * sin_theta * cos_phi,
            sin_psi * cos_phi + cos_psi * sin_theta * sin_phi,
        ],
        [sin_theta, cos_theta * cos_phi, -cos_theta * sin_phi],
        [
            -sin_psi * cos_theta,
            sin_psi * sin_theta * cos_phi + cos_psi * sin_phi,
            cos_psi * cos_phi - sin_psi * sin_theta * sin_phi,
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::deg;

    /// Unit quaternion of a rotation by `angle` about a single body axis
    /// (1 = x, 2 = y, 3 = z).
    fn rotation_quaternion(angle: Angle, axis: usize) -> Quaternion {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        match axis {
            1 => Quaternion::new(cos_half, sin_half, 0.0, 0.0),
            2 => Quaternion::new(cos_half, 0.0, sin_half, 0.0),
            3 => Quaternion::new(cos_half, 0.0, 0.0, sin_half),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_classic_to_quaternion_matches_elementary_product() {
        for (p, t, f) in [(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (30.0, 45.0, 60.0)] {
            let angles = EulerAngles::classic(deg(p), deg(t), deg(f));
            let expected = rotation_quaternion(deg(p), 3)
                * rotation_quaternion(deg(t), 1)
                * rotation_quaternion(deg(f), 3);
            assert!(angles.to_quaternion().approx_eq(expected));
        }
    }

    #[test]
    fn test_krylov_to_quaternion_matches_elementary_product() {
        for (p, t, f) in [(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (30.0, 45.0, 60.0)] {
            let angles = EulerAngles::krylov(deg(p), deg(t), deg(f));
            let expected = rotation_quaternion(deg(p), 2)
                * rotation_quaternion(deg(t), 3)
                * rotation_quaternion(deg(f), 1);
            assert!(angles.to_quaternion().approx_eq(expected));
        }
    }

    #[test]
    fn test_euler_to_quaternion_is_unit() {
        let q = EulerAngles::classic(deg(12.0), deg(105.0), deg(-77.0)).to_quaternion();
        assert!(q.is_normalized());
        let q = EulerAngles::krylov(deg(-160.0), deg(80.0), deg(33.0)).to_quaternion();
        assert!(q.is_normalized());
    }

    #[test]
    fn test_krylov_round_trip() {
        for (p, t, f) in [(0.0, 0.0, 0.0), (30.0, 0.0, 0.0), (30.0, 45.0, 60.0)] {
            let recovered = EulerAngles::krylov(deg(p), deg(t), deg(f))
                .to_quaternion()
                .to_krylov_angles();
            assert!((recovered.psi().degrees() - p).abs() < 1e-10);
            assert!((recovered.theta().degrees() - t).abs() < 1e-10);
            assert!((recovered.phi().degrees() - f).abs() < 1e-10);
            assert_eq!(recovered.sequence(), EulerSequence::Krylov);
        }
    }

    #[test]
    fn test_krylov_round_trip_negative_angles() {
        let recovered = EulerAngles::krylov(deg(-120.0), deg(-45.0), deg(170.0))
            .to_quaternion()
            .to_krylov_angles();
        assert!((recovered.psi().degrees() + 120.0).abs() < 1e-10);
        assert!((recovered.theta().degrees() + 45.0).abs() < 1e-10);
        assert!((recovered.phi().degrees() - 170.0).abs() < 1e-10);
    }

    #[test]
    fn test_to_dcm_agrees_with_quaternion_path() {
        let cases = [
            EulerAngles::classic(deg(45.0), deg(60.0), deg(30.0)),
            EulerAngles::classic(deg(-10.0), deg(170.0), deg(95.0)),
            EulerAngles::krylov(deg(30.0), deg(45.0), deg(60.0)),
            EulerAngles::krylov(deg(-75.0), deg(20.0), deg(140.0)),
        ];

        for angles in cases {
            let direct = angles.to_dcm();
            let via_quaternion = DirectionCosineMatrix::from_quaternion(angles.to_quaternion());
            assert!(
                direct.max_difference(&via_quaternion) < 1e-12,
                "paths diverge for {angles:?}"
            );
            assert!(direct.is_orthonormal(1e-12));
        }
    }

    #[test]
    fn test_to_dcm_identity() {
        let angles = EulerAngles::krylov(Angle::ZERO, Angle::ZERO, Angle::ZERO);
        assert_eq!(angles.to_dcm(), DirectionCosineMatrix::IDENTITY);
    }

    #[test]
    fn test_to_classic_angles_is_not_implemented() {
        let q = EulerAngles::classic(deg(30.0), deg(45.0), deg(60.0)).to_quaternion();
        let err = q.to_classic_angles().unwrap_err();
        assert!(matches!(err, OrientationError::NotImplemented { .. }));
    }

    #[test]
    fn test_to_euler_angles_dispatch() {
        let q = EulerAngles::krylov(deg(30.0), deg(45.0), deg(60.0)).to_quaternion();

        let krylov = q.to_euler_angles(EulerSequence::Krylov).unwrap();
        assert_eq!(krylov.sequence(), EulerSequence::Krylov);
        assert!((krylov.theta().degrees() - 45.0).abs() < 1e-10);

        assert!(q.to_euler_angles(EulerSequence::Classic).is_err());
    }

    #[test]
    fn test_krylov_extraction_tolerates_rounding_at_full_pitch() {
        // asin argument may land just outside [-1, 1] after rounding; the
        // extraction must stay finite close to the gimbal-lock condition.
        let q = EulerAngles::krylov(deg(0.0), deg(90.0), deg(0.0)).to_quaternion();
        let recovered = q.to_krylov_angles();
        assert!((recovered.theta().degrees() - 90.0).abs() < 1e-6);
        assert!(!recovered.psi().is_nan());
        assert!(!recovered.phi().is_nan());
    }
}
