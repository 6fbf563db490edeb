//! Voxel chunk traversal pass

use voxray_trace::traverse;

use super::{face_shade, FrameContext, Fragment, Pass, PixelInput};
use crate::depth::hit_depth;
use crate::ray_gen::screen_ray;

/// DDA traversal of the chunk at `scene.chunk_origin`, textured from the atlas
pub struct VoxelGridPass;

impl Pass for VoxelGridPass {
    fn name(&self) -> &'static str {
        "voxel_grid"
    }

    fn begin_frame(&self, ctx: &FrameContext) {
        if ctx.chunk.is_none() {
            log::warn!("no chunk at {:?}", ctx.scene.chunk_origin);
        }
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let Some(chunk) = ctx.chunk else {
            return Fragment::BACKGROUND;
        };
        let origin = ctx.scene.chunk_origin.as_vec3();
        let ray = screen_ray(ctx.globals, pixel.uv);
        let local = ray.with_origin(ray.origin - origin);

        let Some(hit) = traverse(&local, chunk) else {
            return Fragment::BACKGROUND;
        };
        if !hit.t.is_finite() {
            return Fragment::BACKGROUND;
        }

        let texel = ctx.scene.atlas.sample_block(hit.id, hit.uv);
        let shade = face_shade(hit.face);
        let color = [texel[0] * shade, texel[1] * shade, texel[2] * shade, texel[3]];
        Fragment::new(color, hit_depth(ctx.globals, hit.point + origin))
    }
}
