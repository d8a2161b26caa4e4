//! Direction cosine matrices and the 3D vectors they act on.
//!
//! - [`DirectionCosineMatrix`]: 3x3 orthonormal body-to-reference rotation
//! - [`Vector3`]: 3D Cartesian vector

mod dcm;
mod vector3;

pub use dcm::DirectionCosineMatrix;
pub use vector3::Vector3;
