//! Depth reconstruction and visualization

use voxray_math::Vec3;

use crate::uniforms::GlobalUniform;

/// Smallest depth a surface hit can report
pub const MIN_DEPTH: f32 = 0.1;

/// Depth of a pixel nothing was drawn to; also the depth buffer clear value
pub const BACKGROUND_DEPTH: f32 = 1.0;

/// Device depth of a world-space hit point.
///
/// Clamped to [`MIN_DEPTH`] so hits behind the near plane never produce a
/// zero or negative depth.
pub fn hit_depth(globals: &GlobalUniform, point: Vec3) -> f32 {
    let clip = globals.clip_from_world * point.extend(1.0);
    (clip.z / clip.w).max(MIN_DEPTH)
}

/// Near and far plane distances encoded in the projection.
///
/// Inverts the `[0, 1]`-depth right-handed perspective layout, where
/// `col(2).z = far / (near - far)` and `col(3).z = near * col(2).z`.
pub fn clip_planes(globals: &GlobalUniform) -> (f32, f32) {
    let r = globals.clip_from_view.col(2).z;
    let near = globals.clip_from_view.col(3).z / r;
    let far = r * near / (1.0 + r);
    (near, far)
}

/// Map a `[0, 1]` device depth back to view distance, normalized by `far`.
pub fn linearize_depth(depth: f32, near: f32, far: f32) -> f32 {
    near * far / (far - depth * (far - near)) / far
}
