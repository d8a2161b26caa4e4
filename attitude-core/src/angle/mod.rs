mod core;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::Angle;
pub use normalize::fold_perigon;

pub use self::core::{deg, rad};
