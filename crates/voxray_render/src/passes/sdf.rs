//! Raymarched SDF scene pass

use voxray_trace::march;

use super::{FrameContext, Fragment, Pass, PixelInput};
use crate::depth::hit_depth;
use crate::framebuffer::Color;
use crate::ray_gen::screen_ray;

/// Base colors, indexed by primitive
const PALETTE: [Color; 4] = [
    [0.45, 0.45, 0.5, 1.0],
    [0.9, 0.35, 0.3, 1.0],
    [0.3, 0.75, 0.4, 1.0],
    [0.3, 0.45, 0.9, 1.0],
];

/// Fixed-step raymarch of the scene's SDF primitives.
///
/// Color is the primitive's palette entry darkened by the fog factor, so
/// surfaces found late in the march fade out.
pub struct SdfPass;

impl Pass for SdfPass {
    fn name(&self) -> &'static str {
        "sdf"
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let ray = screen_ray(ctx.globals, pixel.uv);
        let Some(hit) = march(&ray, &ctx.scene.sdf) else {
            return Fragment::BACKGROUND;
        };
        let base = PALETTE[hit.primitive % PALETTE.len()];
        let color = [base[0] * hit.fog, base[1] * hit.fog, base[2] * hit.fog, 1.0];
        Fragment::new(color, hit_depth(ctx.globals, hit.point))
    }
}
