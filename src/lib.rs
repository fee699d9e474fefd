//! Conversions between 3D rotation representations.
//!
//! This crate provides conversions between 3x3 rotation matrices
//! ([`nalgebra::Matrix3`]), unit quaternions ([`nalgebra::Quaternion`]),
//! and Euler angles under the six axis orderings ([`EulerOrder`]).
//!
//! All functions are pure and stateless; inputs are trusted to be valid
//! rotations (orthonormal matrices, unit quaternions) and are not
//! validated. Degenerate inputs propagate NaN/Inf rather than raising
//! errors.

pub mod matrix;
pub mod order;
pub mod quat;

#[cfg(test)]
mod test_utils;

pub use matrix::{matrix_to_euler, normalize_rotation_matrix};
pub use order::EulerOrder;
pub use quat::{euler_to_quaternion, quaternion_to_matrix};
