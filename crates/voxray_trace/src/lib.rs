//! Ray tracing kernels for voxray
//!
//! This crate holds the per-pixel geometry work, all of it pure and
//! side-effect free:
//! - Rays and the shapes they are tested against
//! - Analytical ray/box and ray/sphere intersection
//! - DDA traversal of a bounded voxel grid
//! - Fixed-step raymarching of a small SDF scene
//!
//! Every loop in here has a fixed trip count ([`MAX_DDA_STEPS`],
//! [`SDF_MAX_STEPS`]) so a kernel can never hang.

pub mod dda;
pub mod hit;
pub mod intersect;
pub mod ray;
pub mod sdf;
pub mod shapes;

// Re-export commonly used types
pub use dda::{
    full_crossings, traverse, traverse_with_budget, FlatGrid, VoxelGrid, VoxelHit, MAX_DDA_STEPS,
};
pub use hit::HitRecord;
pub use intersect::{box_hit, ray_box, ray_sphere, slabs, sphere_hit, SlabSpan, Span, SpanSide};
pub use ray::Ray;
pub use sdf::{march, SdfHit, SdfScene, SDF_MAX_STEPS, SDF_STEP};
pub use shapes::{Aabb, Plane, Shape, Sphere};
