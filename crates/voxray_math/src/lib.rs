//! 3D Mathematics Library
//!
//! Vector, matrix and quaternion types come from `glam` (column-major,
//! right-handed). This crate adds what the ray-casting kernels need on top:
//!
//! - [`Axis`] - names a coordinate axis and indexes [`Vec3`]/[`IVec3`] by it
//! - [`lattice`] - world point to cell mapping and chunk bounds checks
//! - [`transform`] - matrix inversion that reports singular input

mod axis;
pub mod lattice;
pub mod transform;

pub use axis::Axis;
pub use glam::{IVec3, Mat4, Quat, Vec2, Vec3, Vec4};
pub use lattice::{cell_of, in_cube};
pub use transform::try_inverse;
