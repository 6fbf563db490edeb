//! Per-pixel camera ray reconstruction

use voxray_math::{Vec2, Vec3};
use voxray_trace::Ray;

use crate::uniforms::GlobalUniform;

/// Clip-space depth of the near unprojection point
const NEAR_CLIP_Z: f32 = 0.1;
/// Clip-space depth of the far unprojection point
const FAR_CLIP_Z: f32 = 1.0;

/// Normalized screen coordinate of the center of pixel `(x, y)`.
///
/// `(0, 0)` is the top-left corner of the viewport.
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32,
        (y as f32 + 0.5) / height as f32,
    )
}

/// World-space ray through screen coordinate `uv ∈ [0, 1]²`.
///
/// Two points on the pixel's line of sight are unprojected through
/// `world_from_clip`; the direction is the normalized difference and the
/// origin is the eye position. Screen `v` grows downward, clip `y` upward.
pub fn screen_ray(globals: &GlobalUniform, uv: Vec2) -> Ray {
    let x = uv.x * 2.0 - 1.0;
    let y = 1.0 - uv.y * 2.0;
    let near = globals.world_from_clip.project_point3(Vec3::new(x, y, NEAR_CLIP_Z));
    let far = globals.world_from_clip.project_point3(Vec3::new(x, y, FAR_CLIP_Z));
    Ray::new(globals.eye(), far - near)
}
