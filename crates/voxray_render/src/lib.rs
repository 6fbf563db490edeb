//! Per-pixel rendering for voxray
//!
//! This crate turns a camera and a scene into a framebuffer:
//!
//! - [`Camera`] and the per-frame [`GlobalUniform`] block
//! - Camera ray generation ([`screen_ray`]) and depth reconstruction ([`hit_depth`])
//! - Texture atlas lookup ([`AtlasSampler`], [`atlas_coord`])
//! - Fullscreen passes ([`passes`]) composited by the [`FrameRenderer`]

pub mod atlas;
pub mod camera;
pub mod depth;
pub mod framebuffer;
pub mod passes;
pub mod ray_gen;
pub mod renderer;
pub mod scene;
pub mod uniforms;

// Re-export commonly used types
pub use atlas::{atlas_cell, atlas_coord, AtlasError, AtlasSampler, ImageAtlas, ProceduralAtlas, ATLAS_CELLS};
pub use camera::Camera;
pub use depth::{hit_depth, linearize_depth, BACKGROUND_DEPTH, MIN_DEPTH};
pub use framebuffer::{Color, Framebuffer};
pub use passes::{default_passes, DepthMode, Fragment, FrameContext, Pass, PassConfig, PassKind, PixelInput};
pub use ray_gen::{pixel_uv, screen_ray};
pub use renderer::{FrameRenderer, FrameStats};
pub use scene::Scene;
pub use uniforms::{GlobalUniform, UiUniform, MAX_UI_PASSES};
