//! CPU color + depth target

use image::{Rgba, RgbaImage};

use crate::depth::BACKGROUND_DEPTH;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Fully transparent black
pub const TRANSPARENT: Color = [0.0; 4];

/// Row-major color and depth buffers of equal size
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<Color>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Transparent framebuffer with depth cleared to [`BACKGROUND_DEPTH`]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![TRANSPARENT; len],
            depth: vec![BACKGROUND_DEPTH; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset color to `clear_color` and depth to [`BACKGROUND_DEPTH`]
    pub fn clear(&mut self, clear_color: Color) {
        self.color.fill(clear_color);
        self.depth.fill(BACKGROUND_DEPTH);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.color[i])
    }

    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Mutable color and depth planes, for row-parallel shading
    pub fn planes_mut(&mut self) -> (&mut [Color], &mut [f32]) {
        (&mut self.color, &mut self.depth)
    }

    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn depths(&self) -> &[f32] {
        &self.depth
    }

    /// Quantize to 8-bit RGBA
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.color[y as usize * self.width as usize + x as usize];
            Rgba(c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
        })
    }
}
