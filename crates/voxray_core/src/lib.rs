//! Voxel world types for voxray
//!
//! This crate provides the data the voxel renderer traces against:
//!
//! - [`Block`] - A single voxel, laid out for direct upload
//! - [`Chunk`] - A 32³ cube of blocks
//! - [`Universe`] - Sparse map of chunks addressed by world block position
//! - [`UniverseKind`] - Named demo universes that can be selected from config

mod block;
mod chunk;
mod universe;

pub use block::Block;
pub use chunk::{Chunk, CHUNK_AREA, CHUNK_SIDE, CHUNK_VOLUME};
pub use universe::{sphere_universe, Universe, UniverseKind};

// Re-export the lattice coordinate type for convenience
pub use voxray_math::IVec3;
