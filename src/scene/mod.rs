//! Scene construction utilities
//!
//! This module turns configuration into the scene snapshot the passes trace.

mod scene_builder;

pub use scene_builder::SceneBuilder;
