//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`VOXRAY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use voxray_core::UniverseKind;
use voxray_math::Vec3;
use voxray_render::{default_passes, Camera, PassConfig, PassKind, ATLAS_CELLS};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output image size
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// What the passes trace against
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`VOXRAY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // VOXRAY_VIEWPORT__WIDTH=640 -> viewport.width = 640
        figment = figment.merge(Env::prefixed("VOXRAY_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(ConfigError::invalid(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::invalid(format!(
                "camera.fov_degrees out of range: {}",
                camera.fov_degrees
            )));
        }
        if self.rendering.atlas_cells == 0 {
            return Err(ConfigError::invalid("rendering.atlas_cells must be at least 1"));
        }
        Ok(())
    }

    /// Pass chain with the debug switches applied on top of `rendering.passes`
    pub fn pass_chain(&self) -> Vec<PassConfig> {
        self.rendering
            .passes
            .iter()
            .map(|pass| {
                let forced = match pass.kind {
                    PassKind::Ui => self.debug.show_overlay,
                    PassKind::DepthView => self.debug.depth_view,
                    _ => None,
                };
                match forced {
                    Some(enabled) => PassConfig::new(pass.kind, !enabled),
                    None => *pass,
                }
            })
            .collect()
    }
}

/// Output size configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub position: [f32; 3],
    /// Rotation about world Y in degrees
    pub yaw: f32,
    /// Rotation about camera X in degrees (clamped)
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [16.0, 16.0, 60.0],
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera {
        Camera::new()
            .with_position(Vec3::from_array(self.position))
            .with_projection(self.fov_degrees.to_radians(), self.near, self.far)
            .with_orientation(self.yaw.to_radians(), self.pitch.to_radians())
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Voxel content
    pub universe: UniverseKind,
    /// Origin of the chunk the voxel pass traces
    pub chunk_origin: [i32; 3],
    /// Analytical cube corners
    pub cube_min: [f32; 3],
    pub cube_max: [f32; 3],
    /// Analytical sphere
    pub sphere_center: [f32; 3],
    pub sphere_radius: f32,
    /// Where the SDF demo scene is laid out
    pub sdf_origin: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            universe: UniverseKind::Sphere,
            chunk_origin: [0, 0, 0],
            cube_min: [12.0, 12.0, 12.0],
            cube_max: [20.0, 20.0, 20.0],
            sphere_center: [16.0, 16.0, 16.0],
            sphere_radius: 8.0,
            sdf_origin: [16.0, 12.0, 50.0],
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Clear color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Pass chain in execution order
    pub passes: Vec<PassConfig>,
    /// Block texture atlas; a procedural one is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atlas_path: Option<PathBuf>,
    /// Cells along one atlas edge
    pub atlas_cells: u32,
    /// Where the rendered frame is written
    pub output_path: PathBuf,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            passes: default_passes(),
            atlas_path: None,
            atlas_cells: ATLAS_CELLS,
            output_path: PathBuf::from("frame.png"),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins when set
    pub log_level: String,
    /// Force the pass overlay on or off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_overlay: Option<bool>,
    /// Force the depth visualization on or off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_view: Option<bool>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_overlay: None,
            depth_view: None,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
