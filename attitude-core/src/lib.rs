//! Rigid-body orientation math: interconvertible rotation representations.
//!
//! `attitude-core` provides the building blocks for moving a 3D rotation
//! between representations repeatedly - without accumulating drift, losing
//! precision near singularities, or silently producing an invalid rotation:
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Unit-aware [`Angle`] scalar: radian storage, degree view, folding, trig |
//! | [`quaternion`] | Hamilton [`Quaternion`] algebra |
//! | [`euler`] | [`EulerAngles`] triples tagged with their [`EulerSequence`] |
//! | [`matrix`] | [`DirectionCosineMatrix`] with its orthonormality invariant, and [`Vector3`] |
//! | [`convert`] | Sequence-dispatched conversions among the representations |
//! | [`constants`] | The pi family and degree/radian factors |
//! | [`errors`] | [`OrientationError`] and [`OrientationResult`] |
//!
//! # Typical Flow
//!
//! Build a rotation in whichever representation is natural (three sensor
//! angles, say), convert to a quaternion or matrix for composition and
//! storage, and convert back to angles for reporting:
//!
//! ```
//! use attitude_core::{deg, DirectionCosineMatrix, EulerAngles};
//!
//! // Sensor angles in, quaternion for composition
//! let attitude = EulerAngles::krylov(deg(30.0), deg(45.0), deg(60.0));
//! let q = attitude.to_quaternion();
//!
//! // Matrix for transforming vectors
//! let dcm = DirectionCosineMatrix::from_quaternion(q);
//! assert!(dcm.is_orthonormal(1e-9));
//!
//! // Angles back out for reporting
//! let report = q.to_krylov_angles();
//! assert!((report.psi().degrees() - 30.0).abs() < 1e-10);
//! ```
//!
//! # Design Notes
//!
//! - **Immutable values**: every type is a `Copy` value with no identity;
//!   every "mutating" operation returns a new value. All operations are pure,
//!   so everything can be used concurrently without synchronization.
//!
//! - **IEEE-754 edge cases are states, not errors**: NaN and the infinities
//!   propagate through arithmetic and are observable via predicates
//!   ([`Angle::is_nan`], [`Angle::is_infinite`]); scalar division by zero
//!   saturates instead of failing.
//!
//! - **Validation over silent repair**: the matrix constructors reject
//!   non-orthonormal input; Gram-Schmidt repair is the explicit, opt-in
//!   [`DirectionCosineMatrix::orthonormalized`].
//!
//! - **Named functions are the contract**: arithmetic is available through
//!   operators (`a * b`) and through named methods
//!   ([`Quaternion::conjugate`], [`DirectionCosineMatrix::multiply`], ...);
//!   the named forms carry the documentation.
//!
//! # Re-exports
//!
//! Common types are re-exported at the crate root:
//!
//! ```
//! use attitude_core::{Angle, Quaternion, EulerAngles, EulerSequence};
//! use attitude_core::{DirectionCosineMatrix, Vector3};
//! use attitude_core::{OrientationError, OrientationResult};
//! ```

pub mod angle;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod euler;
pub mod math;
pub mod matrix;
pub mod quaternion;

pub use angle::{deg, rad, Angle};
pub use errors::{OrientationError, OrientationResult};
pub use euler::{EulerAngles, EulerSequence};
pub use matrix::{DirectionCosineMatrix, Vector3};
pub use quaternion::Quaternion;
