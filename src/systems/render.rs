//! Frame rendering system
//!
//! Owns the pass chain, the camera and the framebuffer:
//! - builds the uniform block from the camera each frame
//! - runs the pass chain over the framebuffer
//! - reports frame timing

use std::time::{Duration, Instant};

use voxray_render::{Camera, FrameRenderer, FrameStats, Framebuffer, GlobalUniform, PassConfig, Scene};

use crate::config::{CameraConfig, RenderingConfig, ViewportConfig};

/// Frames faster than this log at info
const FAST_FRAME: Duration = Duration::from_millis(10);
/// Frames slower than this log at error
const SLOW_FRAME: Duration = Duration::from_millis(100);

/// Render error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No uniform block can be built for a zero-sized viewport
    EmptyViewport { width: u32, height: u32 },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EmptyViewport { width, height } => {
                write!(f, "Cannot render into a {}x{} viewport", width, height)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Log level for a frame that took `elapsed`
pub fn frame_time_level(elapsed: Duration) -> log::Level {
    if elapsed < FAST_FRAME {
        log::Level::Info
    } else if elapsed < SLOW_FRAME {
        log::Level::Warn
    } else {
        log::Level::Error
    }
}

/// Manages frame rendering
pub struct RenderSystem {
    renderer: FrameRenderer,
    framebuffer: Framebuffer,
    camera: Camera,
}

impl RenderSystem {
    /// Create render system from config
    pub fn new(
        viewport: &ViewportConfig,
        camera_config: &CameraConfig,
        render_config: &RenderingConfig,
        passes: &[PassConfig],
    ) -> Self {
        let renderer =
            FrameRenderer::from_configs(passes).with_clear_color(render_config.background_color);
        log::info!("Pass chain: {:?}", renderer.names());
        Self {
            renderer,
            framebuffer: Framebuffer::new(viewport.width, viewport.height),
            camera: camera_config.to_camera(),
        }
    }

    /// Resize the framebuffer; its contents are discarded
    pub fn resize(&mut self, width: u32, height: u32) {
        self.framebuffer = Framebuffer::new(width, height);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, scene: &Scene) -> Result<FrameStats, RenderError> {
        let (width, height) = self.size();
        let globals = GlobalUniform::from_camera(&self.camera, width, height)
            .ok_or(RenderError::EmptyViewport { width, height })?;

        let start = Instant::now();
        let stats = self.renderer.render(&globals, scene, &mut self.framebuffer);
        let elapsed = start.elapsed();

        log::log!(
            target: "timing",
            frame_time_level(elapsed),
            "Frame {}x{}: {:.2} ms, {} passes, {} fragments",
            width,
            height,
            elapsed.as_secs_f64() * 1000.0,
            stats.passes_run,
            stats.fragments_written
        );
        Ok(stats)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The pass chain, for toggling passes between frames
    pub fn renderer_mut(&mut self) -> &mut FrameRenderer {
        &mut self.renderer
    }

    /// Get current framebuffer size
    pub fn size(&self) -> (u32, u32) {
        (self.framebuffer.width(), self.framebuffer.height())
    }
}
