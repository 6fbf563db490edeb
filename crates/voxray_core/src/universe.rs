//! Sparse voxel universe
//!
//! The universe is a map from chunk origin (a multiple of [`CHUNK_SIDE`] on
//! every axis) to [`Chunk`]. Block positions are world-space integer
//! coordinates; negative positions resolve with Euclidean division so that
//! block -1 lives in the chunk at -32.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use voxray_math::IVec3;

use crate::{Block, Chunk, CHUNK_SIDE};

/// Sparse map of chunks keyed by chunk origin
#[derive(Clone, Debug, Default)]
pub struct Universe {
    pub chunks: HashMap<IVec3, Chunk>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a world block position into (chunk origin, position inside the chunk)
    pub fn split_position(pos: IVec3) -> (IVec3, IVec3) {
        let side = IVec3::splat(CHUNK_SIDE as i32);
        let chunk_origin = pos.div_euclid(side) * side;
        let inner = pos.rem_euclid(side);
        (chunk_origin, inner)
    }

    /// Block at a world position, `None` if no chunk covers it
    pub fn read_block(&self, pos: IVec3) -> Option<Block> {
        let (origin, inner) = Self::split_position(pos);
        self.chunks.get(&origin).and_then(|chunk| chunk.read_block(inner))
    }

    /// Set a block at a world position, creating its chunk if needed.
    ///
    /// The touched chunk is marked `dirty_render`.
    pub fn set_block(&mut self, pos: IVec3, block: Block) {
        let (origin, inner) = Self::split_position(pos);
        let chunk = self.chunks.entry(origin).or_insert_with(|| {
            log::debug!("Creating chunk at {:?}", origin);
            Chunk::empty()
        });
        chunk.set_block(inner, block);
        chunk.dirty_render = true;
    }

    pub fn chunk(&self, origin: IVec3) -> Option<&Chunk> {
        self.chunks.get(&origin)
    }

    pub fn chunk_mut(&mut self, origin: IVec3) -> Option<&mut Chunk> {
        self.chunks.get_mut(&origin)
    }

    /// Insert a chunk at `origin`, replacing any existing one
    pub fn insert_chunk(&mut self, origin: IVec3, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(origin, chunk)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Origins of chunks whose blocks changed since the last [`Self::clear_dirty`]
    pub fn dirty_chunks(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.chunks
            .iter()
            .filter(|(_, chunk)| chunk.dirty_render)
            .map(|(origin, _)| *origin)
    }

    /// Clear every chunk's `dirty_render` flag, returning how many were set
    pub fn clear_dirty(&mut self) -> usize {
        let mut cleared = 0;
        for chunk in self.chunks.values_mut() {
            if chunk.dirty_render {
                chunk.dirty_render = false;
                cleared += 1;
            }
        }
        cleared
    }
}

/// Ball of radius 16 centered in the chunk at the origin.
///
/// Each block's id is its x coordinate, so the ball shows a gradient of
/// atlas cells along x.
pub fn sphere_universe() -> Universe {
    let center = IVec3::splat((CHUNK_SIDE as i32) / 2);
    let radius = (CHUNK_SIDE as i32) / 2;

    let mut chunk = Chunk::empty();
    for xyz in Chunk::positions() {
        let d = xyz - center;
        if d.dot(d) < radius * radius {
            chunk.set_block(xyz, Block::from_id(xyz.x as u8));
        }
    }
    log::debug!("Sphere universe: {} solid blocks", chunk.solid_count());

    let mut universe = Universe::new();
    universe.insert_chunk(IVec3::ZERO, chunk);
    universe
}

/// Selectable demo universes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniverseKind {
    /// See [`sphere_universe`]
    #[default]
    Sphere,
    /// No chunks at all
    Empty,
}

impl UniverseKind {
    pub fn build(self) -> Universe {
        match self {
            UniverseKind::Sphere => sphere_universe(),
            UniverseKind::Empty => Universe::new(),
        }
    }
}
