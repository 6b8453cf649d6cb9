#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[macro_use]
mod macros;

/// Error types for vector operations.
pub mod error;

mod vector2;
mod vector3;

pub use error::VectorError;
pub use vector2::Vector2D;
pub use vector3::Vector3D;
