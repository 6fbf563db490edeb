//! voxray: CPU ray-scene intersection and voxel traversal renderer
//!
//! The root crate is the host layer: configuration, scene assembly, the
//! render system and image output. The kernels live in the member crates.

pub mod config;
pub mod output;
pub mod scene;
pub mod systems;
