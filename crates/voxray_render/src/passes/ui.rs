//! Pass toggle overlay

use super::{FrameContext, Fragment, Pass, PixelInput};
use crate::framebuffer::Color;

/// Edge length of one indicator box, in pixels
pub const UI_BOX_SIZE: f32 = 20.0;
/// Distance between the left edges of neighbouring boxes
pub const UI_BOX_SPACING: f32 = 24.0;
/// Offset of the first box from the top-left corner
pub const UI_MARGIN: f32 = 4.0;

const ENABLED: Color = [0.1, 0.8, 0.2, 1.0];
const SKIPPED: Color = [0.9, 0.15, 0.1, 1.0];

/// One box per pass along the top-left edge: green when the pass runs,
/// red when it is skipped. Drawn at depth 0 so it covers everything.
pub struct UiPass;

impl Pass for UiPass {
    fn name(&self) -> &'static str {
        "ui"
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        let (width, height) = ctx.globals.viewport();
        let x = pixel.uv.x * width - UI_MARGIN;
        let y = pixel.uv.y * height - UI_MARGIN;
        if x < 0.0 || !(0.0..UI_BOX_SIZE).contains(&y) {
            return Fragment::BACKGROUND;
        }

        let index = (x / UI_BOX_SPACING) as usize;
        if x - index as f32 * UI_BOX_SPACING >= UI_BOX_SIZE {
            return Fragment::BACKGROUND;
        }
        match ctx.ui.is_skipped(index) {
            Some(true) => Fragment::new(SKIPPED, 0.0),
            Some(false) => Fragment::new(ENABLED, 0.0),
            None => Fragment::BACKGROUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::ray_gen::pixel_uv;
    use crate::scene::Scene;
    use crate::uniforms::{GlobalUniform, UiUniform};
    use voxray_core::Universe;

    fn shade_px(ui: &UiUniform, x: u32, y: u32) -> Fragment {
        let globals = GlobalUniform::from_camera(&Camera::new(), 200, 100).unwrap();
        let scene = Scene::new(Universe::new());
        let ctx = FrameContext::new(&globals, ui, &scene);
        UiPass.shade(
            &ctx,
            PixelInput {
                uv: pixel_uv(x, y, 200, 100),
                depth: 1.0,
            },
        )
    }

    #[test]
    fn test_boxes_follow_skip_state() {
        let ui = UiUniform::from_skips([false, true]);
        assert_eq!(shade_px(&ui, 10, 10), Fragment::new(ENABLED, 0.0));
        assert_eq!(shade_px(&ui, 34, 10), Fragment::new(SKIPPED, 0.0));
        // Third box does not exist
        assert!(shade_px(&ui, 58, 10).is_background());
    }

    #[test]
    fn test_gaps_and_margins_are_empty() {
        let ui = UiUniform::from_skips([false, false]);
        assert!(shade_px(&ui, 1, 10).is_background());
        assert!(shade_px(&ui, 25, 10).is_background());
        assert!(shade_px(&ui, 10, 30).is_background());
        assert!(shade_px(&ui, 10, 1).is_background());
    }
}
