//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the scene snapshot the passes read.

use std::path::Path;

use voxray_core::{IVec3, Universe, UniverseKind};
use voxray_math::Vec3;
use voxray_render::{AtlasSampler, ImageAtlas, ProceduralAtlas, Scene};
use voxray_trace::{Aabb, SdfScene, Sphere};

use crate::config::SceneConfig;

/// Builder for a render [`Scene`]
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_universe(UniverseKind::Sphere)
///     .with_sphere(Vec3::splat(16.0), 8.0)
///     .load_atlas(Some(Path::new("atlas.png")), 16)
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Empty universe with the default shapes and a procedural atlas
    pub fn new() -> Self {
        Self {
            scene: Scene::new(Universe::new()),
        }
    }

    /// Builder seeded from the `[scene]` configuration section
    pub fn from_config(config: &SceneConfig) -> Self {
        let [x, y, z] = config.chunk_origin;
        Self::new()
            .with_universe(config.universe)
            .with_chunk_origin(IVec3::new(x, y, z))
            .with_cube(Vec3::from_array(config.cube_min), Vec3::from_array(config.cube_max))
            .with_sphere(Vec3::from_array(config.sphere_center), config.sphere_radius)
            .with_sdf_origin(Vec3::from_array(config.sdf_origin))
    }

    /// Replace the voxel content with a generated universe
    pub fn with_universe(mut self, kind: UniverseKind) -> Self {
        self.scene.universe = kind.build();
        log::debug!(
            "Universe {:?}: {} chunk(s)",
            kind,
            self.scene.universe.chunk_count()
        );
        self
    }

    pub fn with_chunk_origin(mut self, origin: IVec3) -> Self {
        self.scene.chunk_origin = origin;
        self
    }

    /// Cube spanning `min`..`max`; the corners may be given in any order
    pub fn with_cube(mut self, min: Vec3, max: Vec3) -> Self {
        self.scene.cube = Aabb::new(min.min(max), min.max(max));
        self
    }

    pub fn with_sphere(mut self, center: Vec3, radius: f32) -> Self {
        self.scene.sphere = Sphere::new(center, radius.abs());
        self
    }

    /// Lay the SDF demo scene out around `origin`
    pub fn with_sdf_origin(mut self, origin: Vec3) -> Self {
        self.scene.sdf = SdfScene::demo_at(origin);
        self
    }

    pub fn with_atlas(mut self, atlas: Box<dyn AtlasSampler>) -> Self {
        self.scene.atlas = atlas;
        self
    }

    /// Use the atlas image at `path`, or a procedural atlas with `cells`
    /// cells per edge when no path is given or the image cannot be used
    pub fn load_atlas(self, path: Option<&Path>, cells: u32) -> Self {
        let atlas: Box<dyn AtlasSampler> = match path {
            Some(path) => match ImageAtlas::load(path, cells) {
                Ok(atlas) => Box::new(atlas),
                Err(e) => {
                    log::warn!("Failed to load atlas {:?}: {}. Using procedural atlas.", path, e);
                    Box::new(ProceduralAtlas::new(cells))
                }
            },
            None => Box::new(ProceduralAtlas::new(cells)),
        };
        self.with_atlas(atlas)
    }

    /// Mutable access to the voxel content before building
    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.scene.universe
    }

    pub fn build(self) -> Scene {
        self.scene
    }
}
