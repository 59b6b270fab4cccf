//! Fixed-dimension `f32` vectors
//!
//! ```
//! use vector_maths::{vector, Vector2, Vector3};
//!
//! let v = Vector2::from_xy(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let up = Vector3::X_AXIS.cross(&Vector3::Y_AXIS);
//! assert_eq!(up, vector![0, 0, 1]);
//! ```
pub mod log;
pub mod maths;

pub use maths::errors::{Result, VectorError};
pub use maths::vector::Vector;
pub use maths::vector2::Vector2;
pub use maths::vector3::Vector3;

/// Builds a [`Vector`] from any number of numeric components, each converted with `as f32`
#[macro_export]
macro_rules! vector {
    ($($component: expr),+ $(,)?) => {
        $crate::Vector::new([$(($component) as f32),+])
    };
}
