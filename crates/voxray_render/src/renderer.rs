//! Frame renderer
//!
//! Runs the enabled passes in order over a [`Framebuffer`]. Pixels inside a
//! pass are shaded in parallel, one framebuffer row per rayon task; passes
//! themselves run one after another so later passes see earlier depth.

use rayon::prelude::*;

use crate::framebuffer::{Color, Framebuffer};
use crate::passes::{DepthMode, FrameContext, Fragment, Pass, PassConfig, PixelInput};
use crate::ray_gen::pixel_uv;
use crate::scene::Scene;
use crate::uniforms::{GlobalUniform, UiUniform};

struct PassSlot {
    pass: Box<dyn Pass>,
    skip: bool,
}

/// Counters from one rendered frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Passes that were not skipped
    pub passes_run: usize,
    /// Fragments that survived compositing, summed over passes
    pub fragments_written: usize,
}

/// Ordered chain of passes with per-pass skip toggles
pub struct FrameRenderer {
    passes: Vec<PassSlot>,
    clear_color: Color,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer {
    /// Empty chain clearing to transparent black
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            clear_color: [0.0; 4],
        }
    }

    /// Chain built from configuration entries, in order
    pub fn from_configs(configs: &[PassConfig]) -> Self {
        let mut renderer = Self::new();
        for config in configs {
            renderer.push(config.kind.create(), config.skip);
        }
        renderer
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Append a pass to the end of the chain
    pub fn push(&mut self, pass: Box<dyn Pass>, skip: bool) {
        log::debug!("Registered pass '{}' (skip: {})", pass.name(), skip);
        self.passes.push(PassSlot { pass, skip });
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|slot| slot.pass.name()).collect()
    }

    /// Index of the first pass called `name`
    pub fn find(&self, name: &str) -> Option<usize> {
        self.passes.iter().position(|slot| slot.pass.name() == name)
    }

    pub fn get_skip(&self, index: usize) -> Option<bool> {
        self.passes.get(index).map(|slot| slot.skip)
    }

    /// Set the skip flag of pass `index`; false if there is no such pass
    pub fn set_skip(&mut self, index: usize, skip: bool) -> bool {
        let Some(slot) = self.passes.get_mut(index) else {
            return false;
        };
        slot.skip = skip;
        log::info!(
            "Pass '{}' {}",
            slot.pass.name(),
            if skip { "disabled" } else { "enabled" }
        );
        true
    }

    /// Flip the skip flag of pass `index`, returning the new value
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let skip = !self.get_skip(index)?;
        self.set_skip(index, skip);
        Some(skip)
    }

    /// Skip state of the chain as the UI overlay reads it
    pub fn ui_uniform(&self) -> UiUniform {
        UiUniform::from_skips(self.passes.iter().map(|slot| slot.skip))
    }

    /// Render one frame into `target`.
    ///
    /// The target is cleared first; depth starts at the background sentinel.
    pub fn render(&self, globals: &GlobalUniform, scene: &Scene, target: &mut Framebuffer) -> FrameStats {
        target.clear(self.clear_color);
        let mut stats = FrameStats::default();

        let (width, height) = (target.width(), target.height());
        if width == 0 || height == 0 {
            return stats;
        }

        let ui = self.ui_uniform();
        let ctx = FrameContext::new(globals, &ui, scene);

        for slot in self.passes.iter().filter(|slot| !slot.skip) {
            let pass = slot.pass.as_ref();
            pass.begin_frame(&ctx);
            let mode = pass.depth_mode();

            let (colors, depths) = target.planes_mut();
            let written: usize = colors
                .par_chunks_mut(width as usize)
                .zip(depths.par_chunks_mut(width as usize))
                .enumerate()
                .map(|(y, (color_row, depth_row))| {
                    let mut written = 0;
                    for (x, (color, depth)) in color_row.iter_mut().zip(depth_row.iter_mut()).enumerate() {
                        let pixel = PixelInput {
                            uv: pixel_uv(x as u32, y as u32, width, height),
                            depth: *depth,
                        };
                        let fragment = pass.shade(&ctx, pixel);
                        if composite(mode, fragment, color, depth) {
                            written += 1;
                        }
                    }
                    written
                })
                .sum();

            log::debug!("Pass '{}' wrote {} fragments", pass.name(), written);
            stats.passes_run += 1;
            stats.fragments_written += written;
        }

        stats
    }
}

/// Apply one fragment to a pixel, returning whether anything was written
fn composite(mode: DepthMode, fragment: Fragment, color: &mut Color, depth: &mut f32) -> bool {
    if fragment.is_background() {
        return false;
    }
    match mode {
        DepthMode::Test => {
            if fragment.depth < *depth {
                *color = fragment.color;
                *depth = fragment.depth;
                true
            } else {
                false
            }
        }
        DepthMode::Overlay => {
            *color = fragment.color;
            true
        }
    }
}
