//! Analytical cube and sphere passes

use voxray_trace::{box_hit, sphere_hit, HitRecord};

use super::{normal_color, FrameContext, Fragment, Pass, PixelInput};
use crate::depth::hit_depth;
use crate::ray_gen::screen_ray;

fn hit_fragment(ctx: &FrameContext, hit: Option<HitRecord>) -> Fragment {
    match hit {
        Some(hit) if hit.t.is_finite() => {
            Fragment::new(normal_color(hit.normal), hit_depth(ctx.globals, hit.point))
        }
        _ => Fragment::BACKGROUND,
    }
}

/// Ray-traced axis-aligned box, shaded by face normal
pub struct CubePass;

impl Pass for CubePass {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let ray = screen_ray(ctx.globals, pixel.uv);
        hit_fragment(ctx, box_hit(&ray, &ctx.scene.cube))
    }
}

/// Ray-traced sphere, shaded by surface normal
pub struct SpherePass;

impl Pass for SpherePass {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let ray = screen_ray(ctx.globals, pixel.uv);
        hit_fragment(ctx, sphere_hit(&ray, &ctx.scene.sphere))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::Scene;
    use crate::uniforms::{GlobalUniform, UiUniform};
    use voxray_core::Universe;
    use voxray_math::{Vec2, Vec3};

    fn setup() -> (GlobalUniform, UiUniform, Scene) {
        let camera = Camera::new().with_position(Vec3::new(16.0, 16.0, 40.0));
        let globals = GlobalUniform::from_camera(&camera, 64, 64).unwrap();
        (globals, UiUniform::default(), Scene::new(Universe::new()))
    }

    fn center() -> PixelInput {
        PixelInput {
            uv: Vec2::new(0.5, 0.5),
            depth: 1.0,
        }
    }

    #[test]
    fn test_cube_center_hits_front_face() {
        let (globals, ui, scene) = setup();
        let ctx = FrameContext::new(&globals, &ui, &scene);
        let frag = CubePass.shade(&ctx, center());
        assert!(!frag.is_background());
        // +Z face normal
        assert_eq!(frag.color, normal_color(Vec3::Z));
        assert!(frag.depth >= 0.1 && frag.depth < 1.0);
    }

    #[test]
    fn test_sphere_corner_misses() {
        let (globals, ui, scene) = setup();
        let ctx = FrameContext::new(&globals, &ui, &scene);
        let corner = PixelInput {
            uv: Vec2::new(0.0, 0.0),
            depth: 1.0,
        };
        assert!(SpherePass.shade(&ctx, corner).is_background());
        assert!(!SpherePass.shade(&ctx, center()).is_background());
    }

    #[test]
    fn test_sphere_is_nearer_than_cube_at_center() {
        // Sphere radius 8 reaches z = 24, cube half-size 4 only z = 20
        let (globals, ui, scene) = setup();
        let ctx = FrameContext::new(&globals, &ui, &scene);
        let sphere = SpherePass.shade(&ctx, center());
        let cube = CubePass.shade(&ctx, center());
        assert!(sphere.depth < cube.depth);
    }
}
