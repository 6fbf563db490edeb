//! Textured unit quads for every solid block of every loaded chunk

use voxray_core::CHUNK_SIDE;
use voxray_math::IVec3;
use voxray_trace::{full_crossings, traverse_with_budget, VoxelHit};

use super::{face_shade, FrameContext, Fragment, Pass, PixelInput};
use crate::depth::hit_depth;
use crate::ray_gen::screen_ray;

/// Draws the front faces of all non-empty blocks in the universe.
///
/// Each block is a unit cube at `chunk origin + local position`, textured
/// from the atlas cell of its id. Only faces turned toward the eye are
/// visible, so a block the eye sits inside contributes nothing.
pub struct InstancedQuadsPass;

impl Pass for InstancedQuadsPass {
    fn name(&self) -> &'static str {
        "instanced_quads"
    }

    fn begin_frame(&self, ctx: &FrameContext) {
        let instances: usize = ctx.scene.universe.chunks.values().map(|c| c.solid_count()).sum();
        log::debug!(
            "{} block instances in {} chunks",
            instances,
            ctx.scene.universe.chunk_count()
        );
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let ray = screen_ray(ctx.globals, pixel.uv);
        let budget = full_crossings(CHUNK_SIDE as i32);

        let mut nearest: Option<(VoxelHit, IVec3)> = None;
        for (origin, chunk) in &ctx.scene.universe.chunks {
            if chunk.solid_count() == 0 {
                continue;
            }
            let local = ray.with_origin(ray.origin - origin.as_vec3());
            let Some(hit) = traverse_with_budget(&local, chunk, budget) else {
                continue;
            };
            if !hit.t.is_finite() {
                continue;
            }
            // Equal distances resolve by chunk origin so the frame does not
            // depend on map iteration order
            let closer = match &nearest {
                None => true,
                Some((best, best_origin)) => {
                    hit.t < best.t
                        || (hit.t == best.t && origin.to_array() < best_origin.to_array())
                }
            };
            if closer {
                nearest = Some((hit, *origin));
            }
        }

        let Some((hit, origin)) = nearest else {
            return Fragment::BACKGROUND;
        };
        let world_point = hit.point + origin.as_vec3();
        let texel = ctx.scene.atlas.sample_block(hit.id, hit.uv);
        let shade = face_shade(hit.face);
        let color = [texel[0] * shade, texel[1] * shade, texel[2] * shade, texel[3]];
        Fragment::new(color, hit_depth(ctx.globals, world_point))
    }
}
