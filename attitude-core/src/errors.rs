//! Error types for orientation calculations.
//!
//! This module provides [`OrientationError`], the unified error type for the
//! failure modes of this crate: malformed matrix input, orthonormality
//! violations at construction, and the one conversion that has no stable
//! closed form.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidDimensions`](OrientationError::InvalidDimensions) | Slice of the wrong length fed to a matrix constructor | No |
//! | [`NotOrthonormal`](OrientationError::NotOrthonormal) | Matrix rows/columns fail the orthonormality check | Yes, via [`orthonormalized`](crate::DirectionCosineMatrix::orthonormalized) |
//! | [`NotImplemented`](OrientationError::NotImplemented) | Conversion with a known mathematical singularity and no finalized formula | No |
//!
//! Floating-point edge cases (NaN, infinities, scalar division by zero) are
//! never errors here. They propagate through arithmetic per IEEE-754 and are
//! observable through predicates such as [`Angle::is_nan`](crate::Angle::is_nan).

use thiserror::Error;

/// Unified error type for orientation calculations.
///
/// Use the constructor methods ([`invalid_dimensions`](Self::invalid_dimensions),
/// [`not_orthonormal`](Self::not_orthonormal), [`not_implemented`](Self::not_implemented))
/// for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrientationError {
    /// Input data has the wrong shape for a 3x3 matrix.
    #[error("Invalid dimensions: expected {expected} elements, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },

    /// Matrix rows/columns are not orthonormal within the construction tolerance.
    ///
    /// The matrix can be repaired explicitly with
    /// [`DirectionCosineMatrix::orthonormalized`](crate::DirectionCosineMatrix::orthonormalized).
    #[error(
        "Matrix is not orthonormal: deviation {deviation:.3e} exceeds tolerance {tolerance:.1e}"
    )]
    NotOrthonormal { deviation: f64, tolerance: f64 },

    /// The requested operation has no finalized implementation.
    ///
    /// This is a permanent, documented gap, not a transient failure.
    #[error("Not implemented: {operation} ({reason})")]
    NotImplemented {
        operation: &'static str,
        reason: &'static str,
    },
}

/// Convenience alias for `Result<T, OrientationError>`.
pub type OrientationResult<T> = Result<T, OrientationError>;

impl OrientationError {
    /// Creates an [`InvalidDimensions`](Self::InvalidDimensions) error.
    pub fn invalid_dimensions(expected: usize, actual: usize) -> Self {
        Self::InvalidDimensions { expected, actual }
    }

    /// Creates a [`NotOrthonormal`](Self::NotOrthonormal) error.
    pub fn not_orthonormal(deviation: f64, tolerance: f64) -> Self {
        Self::NotOrthonormal {
            deviation,
            tolerance,
        }
    }

    /// Creates a [`NotImplemented`](Self::NotImplemented) error.
    pub fn not_implemented(operation: &'static str, reason: &'static str) -> Self {
        Self::NotImplemented { operation, reason }
    }

    /// Returns `true` if the failed input could be salvaged by an explicit
    /// repair step.
    ///
    /// Only [`NotOrthonormal`](Self::NotOrthonormal) qualifies: the caller may
    /// opt in to Gram-Schmidt repair and retry.
    pub fn is_repairable(&self) -> bool {
        matches!(self, Self::NotOrthonormal { .. })
    }
}
