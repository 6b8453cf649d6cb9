#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for transform operations.
pub mod error;

/// Points that can be mapped by a homogeneous transform.
pub mod point;

/// The 4x4 homogeneous transform.
pub mod transform;

/// Numeric tolerances.
pub mod types;

pub use error::TransformError;
pub use point::HomogeneousPoint;
pub use transform::Transform;
pub use types::NumericTol;

pub use euklid_vector::{Vector2D, Vector3D};
