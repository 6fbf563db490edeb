//! Resolved per-pixel hit

use voxray_math::{Axis, Vec2, Vec3};

/// The resolved result of any of the intersection strategies.
///
/// Produced once per pixel and consumed right away by shading and depth
/// reconstruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Axis of the face that was hit, if the surface has axis-aligned faces
    pub face: Option<Axis>,
    /// Outward surface normal
    pub normal: Vec3,
    /// Voxel id, or primitive index for analytical and SDF hits
    pub id: u32,
    /// Local face coordinates in `[0, 1]²`
    pub uv: Vec2,
}
