//! Fullscreen per-pixel passes
//!
//! Every pass is a pure function from (frame context, pixel) to a
//! [`Fragment`]. The frame renderer runs enabled passes in order and
//! composites their fragments with a `Less` depth test (or color-only for
//! [`DepthMode::Overlay`] passes).

mod analytic;
mod depth_view;
mod instanced;
mod sdf;
mod ui;
mod voxel;

pub use analytic::{CubePass, SpherePass};
pub use depth_view::DepthViewPass;
pub use instanced::InstancedQuadsPass;
pub use sdf::SdfPass;
pub use ui::{UiPass, UI_BOX_SIZE, UI_BOX_SPACING, UI_MARGIN};
pub use voxel::VoxelGridPass;

use serde::{Deserialize, Serialize};
use voxray_core::Chunk;
use voxray_math::{Axis, Vec2, Vec3};

use crate::depth::BACKGROUND_DEPTH;
use crate::framebuffer::{Color, TRANSPARENT};
use crate::scene::Scene;
use crate::uniforms::{GlobalUniform, UiUniform};

/// Per-frame state shared by every pixel
pub struct FrameContext<'a> {
    pub globals: &'a GlobalUniform,
    pub ui: &'a UiUniform,
    pub scene: &'a Scene,
    /// The chunk at `scene.chunk_origin`, resolved once per frame
    pub chunk: Option<&'a Chunk>,
}

impl<'a> FrameContext<'a> {
    pub fn new(globals: &'a GlobalUniform, ui: &'a UiUniform, scene: &'a Scene) -> Self {
        Self {
            globals,
            ui,
            scene,
            chunk: scene.chunk(),
        }
    }
}

/// What a pass sees of one pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelInput {
    /// Normalized screen coordinate, `(0, 0)` top-left
    pub uv: Vec2,
    /// Depth buffer value before this pass
    pub depth: f32,
}

/// Output of a pass for one pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub color: Color,
    pub depth: f32,
}

impl Fragment {
    /// No hit: transparent at the depth sentinel, never written
    pub const BACKGROUND: Self = Self {
        color: TRANSPARENT,
        depth: BACKGROUND_DEPTH,
    };

    pub fn new(color: Color, depth: f32) -> Self {
        Self { color, depth }
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        !(self.depth < BACKGROUND_DEPTH)
    }
}

/// How a pass's fragments are composited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthMode {
    /// Write color and depth when the fragment is nearer than the buffer
    Test,
    /// Replace color only, leave depth untouched
    Overlay,
}

/// A fullscreen pass
pub trait Pass: Send + Sync {
    fn name(&self) -> &'static str;

    fn depth_mode(&self) -> DepthMode {
        DepthMode::Test
    }

    /// Called once per frame before any pixel is shaded
    fn begin_frame(&self, _ctx: &FrameContext) {}

    fn shade(&self, ctx: &FrameContext, pixel: PixelInput) -> Fragment;
}

/// The available passes, as named in configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Sdf,
    Cube,
    Sphere,
    VoxelGrid,
    InstancedQuads,
    DepthView,
    Ui,
}

impl PassKind {
    pub const ALL: [PassKind; 7] = [
        PassKind::Sdf,
        PassKind::Cube,
        PassKind::Sphere,
        PassKind::VoxelGrid,
        PassKind::InstancedQuads,
        PassKind::DepthView,
        PassKind::Ui,
    ];

    pub fn create(self) -> Box<dyn Pass> {
        match self {
            PassKind::Sdf => Box::new(SdfPass),
            PassKind::Cube => Box::new(CubePass),
            PassKind::Sphere => Box::new(SpherePass),
            PassKind::VoxelGrid => Box::new(VoxelGridPass),
            PassKind::InstancedQuads => Box::new(InstancedQuadsPass),
            PassKind::DepthView => Box::new(DepthViewPass),
            PassKind::Ui => Box::new(UiPass),
        }
    }
}

/// A pass entry in configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassConfig {
    pub kind: PassKind,
    /// Start with the pass disabled
    #[serde(default)]
    pub skip: bool,
}

impl PassConfig {
    pub fn new(kind: PassKind, skip: bool) -> Self {
        Self { kind, skip }
    }
}

/// The default pass chain: both voxel passes and the UI overlay on, the rest off
pub fn default_passes() -> Vec<PassConfig> {
    vec![
        PassConfig::new(PassKind::Sdf, true),
        PassConfig::new(PassKind::Sphere, true),
        PassConfig::new(PassKind::Cube, true),
        PassConfig::new(PassKind::VoxelGrid, false),
        PassConfig::new(PassKind::InstancedQuads, false),
        PassConfig::new(PassKind::DepthView, true),
        PassConfig::new(PassKind::Ui, false),
    ]
}

/// Brightness per face axis, so adjacent faces of one block read apart
pub(crate) fn face_shade(face: Axis) -> f32 {
    match face {
        Axis::X => 0.8,
        Axis::Y => 1.0,
        Axis::Z => 0.9,
    }
}

/// Map a unit normal to a visible color
pub(crate) fn normal_color(normal: Vec3) -> Color {
    [
        normal.x * 0.5 + 0.5,
        normal.y * 0.5 + 0.5,
        normal.z * 0.5 + 0.5,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_fragment() {
        assert!(Fragment::BACKGROUND.is_background());
        assert!(Fragment::new([1.0; 4], f32::NAN).is_background());
        assert!(!Fragment::new([1.0; 4], 0.5).is_background());
    }

    #[test]
    fn test_pass_names_are_unique() {
        let mut names: Vec<_> = PassKind::ALL.iter().map(|k| k.create().name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PassKind::ALL.len());
    }

    #[test]
    fn test_default_chain_enables_voxel_passes_and_ui() {
        let enabled: Vec<_> = default_passes()
            .into_iter()
            .filter(|p| !p.skip)
            .map(|p| p.kind)
            .collect();
        assert_eq!(
            enabled,
            vec![PassKind::VoxelGrid, PassKind::InstancedQuads, PassKind::Ui]
        );
    }

    #[test]
    fn test_normal_color() {
        assert_eq!(normal_color(Vec3::Y), [0.5, 1.0, 0.5, 1.0]);
    }
}
