//! Depth buffer visualization

use super::{DepthMode, FrameContext, Fragment, Pass, PixelInput};
use crate::depth::{clip_planes, linearize_depth, BACKGROUND_DEPTH};

/// Replaces color with linearized depth as grayscale.
///
/// Pixels nothing was drawn to stay untouched; the depth buffer is never
/// written.
pub struct DepthViewPass;

impl Pass for DepthViewPass {
    fn name(&self) -> &'static str {
        "depth_view"
    }

    fn depth_mode(&self) -> DepthMode {
        DepthMode::Overlay
    }

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment {
        if !(pixel.depth < BACKGROUND_DEPTH) {
            return Fragment::BACKGROUND;
        }
        let (near, far) = clip_planes(ctx.globals);
        let v = linearize_depth(pixel.depth, near, far).clamp(0.0, 1.0);
        Fragment::new([v, v, v, 1.0], pixel.depth)
    }
}
