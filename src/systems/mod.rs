//! Application systems
//!
//! Modular systems kept out of main.rs for better organization and testability.

mod render;

pub use render::{frame_time_level, RenderError, RenderSystem};
