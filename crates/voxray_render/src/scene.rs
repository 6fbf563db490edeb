//! Scene snapshot read by the passes

use voxray_core::{Chunk, Universe};
use voxray_math::{IVec3, Vec3};
use voxray_trace::{Aabb, SdfScene, Sphere};

use crate::atlas::{AtlasSampler, ProceduralAtlas};

/// Everything the passes trace against.
///
/// Borrowed immutably for the whole frame; edits go through `&mut` between
/// frames.
pub struct Scene {
    pub universe: Universe,
    /// Origin of the chunk the voxel pass traces
    pub chunk_origin: IVec3,
    pub sdf: SdfScene,
    pub cube: Aabb,
    pub sphere: Sphere,
    pub atlas: Box<dyn AtlasSampler>,
}

impl Scene {
    /// Scene around `universe` with the analytical shapes centered on the
    /// first chunk and a procedural atlas
    pub fn new(universe: Universe) -> Self {
        let center = Vec3::splat(16.0);
        Self {
            universe,
            chunk_origin: IVec3::ZERO,
            sdf: SdfScene::demo_at(Vec3::new(16.0, 12.0, 50.0)),
            cube: Aabb::from_center_half_extents(center, Vec3::splat(4.0)),
            sphere: Sphere::new(center, 8.0),
            atlas: Box::new(ProceduralAtlas::default()),
        }
    }

    pub fn with_atlas(mut self, atlas: Box<dyn AtlasSampler>) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn with_sdf(mut self, sdf: SdfScene) -> Self {
        self.sdf = sdf;
        self
    }

    pub fn with_cube(mut self, cube: Aabb) -> Self {
        self.cube = cube;
        self
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.sphere = sphere;
        self
    }

    pub fn with_chunk_origin(mut self, origin: IVec3) -> Self {
        self.chunk_origin = origin;
        self
    }

    /// The chunk the voxel pass traces, if loaded
    pub fn chunk(&self) -> Option<&Chunk> {
        self.universe.chunk(self.chunk_origin)
    }
}
