//! Euler angle triples tagged with their rotation sequence.
//!
//! The same three numbers mean different physical rotations under different
//! axis sequences, so [`EulerAngles`] carries an explicit [`EulerSequence`]
//! tag fixed by its factory. The converters in [`crate::convert`] dispatch on
//! the tag.

use crate::angle::Angle;

/// The axis sequence an [`EulerAngles`] triple is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerSequence {
    /// Classic Euler angles: intrinsic Z-X-Z (precession, nutation, spin).
    Classic,
    /// Krylov angles: yaw, pitch, roll with intrinsic axis order Y-Z-X.
    Krylov,
}

/// An immutable triple of angles tagged with its rotation sequence.
///
/// Construct through [`classic`](Self::classic) or [`krylov`](Self::krylov);
/// the factory fixes the [`EulerSequence`] discriminant that the converters
/// dispatch on.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    psi: Angle,
    theta: Angle,
    phi: Angle,
    sequence: EulerSequence,
}

impl EulerAngles {
    /// Creates a classic Euler angle sequence (intrinsic Z-X-Z).
    ///
    /// # Arguments
    ///
    /// * `psi` - precession
    /// * `theta` - nutation
    /// * `phi` - spin (intrinsic rotation)
    pub fn classic(psi: Angle, theta: Angle, phi: Angle) -> Self {
        Self {
            psi,
            theta,
            phi,
            sequence: EulerSequence::Classic,
        }
    }

    /// Creates a Krylov angle sequence (intrinsic Y-Z-X).
    ///
    /// # Arguments
    ///
    /// * `psi` - yaw
    /// * `theta` - pitch
    /// * `phi` - roll
    pub fn krylov(psi: Angle, theta: Angle, phi: Angle) -> Self {
        Self {
            psi,
            theta,
            phi,
            sequence: EulerSequence::Krylov,
        }
    }

    /// Precession or yaw.
    #[inline]
    pub fn psi(self) -> Angle {
        self.psi
    }

    /// Nutation or pitch.
    #[inline]
    pub fn theta(self) -> Angle {
        self.theta
    }

    /// Spin (intrinsic rotation) or roll.
    #[inline]
    pub fn phi(self) -> Angle {
        self.phi
    }

    /// The axis sequence this triple is expressed in.
    #[inline]
    pub fn sequence(self) -> EulerSequence {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_factory() {
        let a = EulerAngles::classic(Angle::ZERO, Angle::HALF_PI, Angle::PI);
        assert_eq!(a.sequence(), EulerSequence::Classic);
        assert_eq!(a.psi(), Angle::ZERO);
        assert_eq!(a.theta(), Angle::HALF_PI);
        assert_eq!(a.phi(), Angle::PI);
    }

    #[test]
    fn test_krylov_factory() {
        let a = EulerAngles::krylov(Angle::ZERO, Angle::HALF_PI, Angle::PI);
        assert_eq!(a.sequence(), EulerSequence::Krylov);
        assert_eq!(a.psi(), Angle::ZERO);
        assert_eq!(a.theta(), Angle::HALF_PI);
        assert_eq!(a.phi(), Angle::PI);
    }

    #[test]
    fn test_same_numbers_different_sequences_are_not_equal() {
        let c = EulerAngles::classic(Angle::ZERO, Angle::HALF_PI, Angle::PI);
        let k = EulerAngles::krylov(Angle::ZERO, Angle::HALF_PI, Angle::PI);
        assert_ne!(c, k);
    }
}
