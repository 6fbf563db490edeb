//! Per-frame uniform blocks
//!
//! Both blocks are `#[repr(C)]` and `Pod`, so the host can hand them to a
//! GPU buffer byte-for-byte. The CPU passes read them by reference.

use bytemuck::{Pod, Zeroable};
use voxray_math::{try_inverse, Mat4, Vec3, Vec4};

use crate::camera::Camera;

/// Camera and projection state shared by every pass.
///
/// The three pairs `world/clip`, `view/clip` and `world/view` are mutual
/// inverses. The block is built once per frame and never mutated by a pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlobalUniform {
    /// Viewport size in pixels (xy; zw unused)
    pub viewport_size: Vec4,
    /// Eye position (xyz; w unused)
    pub view_world_position: Vec4,
    pub world_from_clip: Mat4,
    pub clip_from_world: Mat4,
    pub view_from_clip: Mat4,
    pub clip_from_view: Mat4,
    pub view_from_world: Mat4,
    pub world_from_view: Mat4,
}

impl GlobalUniform {
    /// Build the block from a camera transform and a projection.
    ///
    /// Returns `None` when either matrix is singular.
    pub fn new(width: u32, height: u32, world_from_view: Mat4, clip_from_view: Mat4) -> Option<Self> {
        let view_from_world = try_inverse(&world_from_view)?;
        let view_from_clip = try_inverse(&clip_from_view)?;
        let clip_from_world = clip_from_view * view_from_world;
        let world_from_clip = try_inverse(&clip_from_world)?;
        let eye = world_from_view.transform_point3(Vec3::ZERO);

        Some(Self {
            viewport_size: Vec4::new(width as f32, height as f32, 0.0, 0.0),
            view_world_position: eye.extend(0.0),
            world_from_clip,
            clip_from_world,
            view_from_clip,
            clip_from_view,
            view_from_world,
            world_from_view,
        })
    }

    /// Uniform block for `camera` rendering into a `width`×`height` viewport
    pub fn from_camera(camera: &Camera, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let aspect = width as f32 / height as f32;
        Self::new(width, height, camera.world_from_view(), camera.clip_from_view(aspect))
    }

    /// World-space eye position
    pub fn eye(&self) -> Vec3 {
        self.view_world_position.truncate()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_size.x, self.viewport_size.y)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Maximum number of passes the UI block can describe
pub const MAX_UI_PASSES: usize = 256;

/// Pass skip state for the UI overlay.
///
/// Each entry is padded to 16 bytes to satisfy uniform array stride rules;
/// only `pipelines_skip[i][0]` is meaningful (1 = skipped).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct UiUniform {
    pub pipelines_skip: [[u32; 4]; MAX_UI_PASSES],
    pub pipelines_num: u32,
}

impl Default for UiUniform {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl UiUniform {
    /// Build from per-pass skip flags; passes past [`MAX_UI_PASSES`] are dropped
    pub fn from_skips<I: IntoIterator<Item = bool>>(skips: I) -> Self {
        let mut ui = Self::default();
        for (i, skip) in skips.into_iter().take(MAX_UI_PASSES).enumerate() {
            ui.pipelines_skip[i] = [skip as u32, 0, 0, 0];
            ui.pipelines_num = i as u32 + 1;
        }
        ui
    }

    pub fn pass_count(&self) -> usize {
        self.pipelines_num as usize
    }

    /// Skip flag for pass `index`, `None` past the last pass
    pub fn is_skipped(&self, index: usize) -> Option<bool> {
        (index < self.pass_count()).then(|| self.pipelines_skip[index][0] != 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
