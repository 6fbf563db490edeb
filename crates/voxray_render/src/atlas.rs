//! Block texture atlas
//!
//! The atlas is one square texture split into `cells × cells` sub-images.
//! Block id `n` uses the cell at column `n % cells`, row `n / cells`.

use std::fmt;
use std::path::Path;

use image::RgbaImage;
use voxray_math::Vec2;

/// Cells per atlas edge for the shipped block atlas
pub const ATLAS_CELLS: u32 = 16;

/// Atlas cell (column, row) of a block id
pub fn atlas_cell(id: u32, cells: u32) -> (u32, u32) {
    (id % cells, id / cells)
}

/// Atlas-space sample coordinate for face coordinates `uv` of block `id`
pub fn atlas_coord(id: u32, uv: Vec2, cells: u32) -> Vec2 {
    let (col, row) = atlas_cell(id, cells);
    Vec2::new(col as f32 + uv.x, row as f32 + uv.y) / cells as f32
}

/// Something that can be sampled at atlas-space coordinates
pub trait AtlasSampler: Send + Sync {
    /// Cells per atlas edge
    fn cells(&self) -> u32;

    /// RGBA color at `coord ∈ [0, 1]²`
    fn sample(&self, coord: Vec2) -> [f32; 4];

    /// Color of block `id` at face coordinates `uv`
    fn sample_block(&self, id: u32, uv: Vec2) -> [f32; 4] {
        self.sample(atlas_coord(id, uv, self.cells()))
    }
}

/// Atlas loading error
#[derive(Debug)]
pub enum AtlasError {
    /// Decoding or reading the image failed
    Image(image::ImageError),
    /// The atlas must be square
    NotSquare { width: u32, height: u32 },
    /// The edge length must split evenly into cells
    NotDivisible { size: u32, cells: u32 },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::Image(err) => write!(f, "Atlas image error: {}", err),
            AtlasError::NotSquare { width, height } => {
                write!(f, "Atlas must be square, got {}x{}", width, height)
            }
            AtlasError::NotDivisible { size, cells } => {
                write!(f, "Atlas size {} is not divisible into {} cells", size, cells)
            }
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlasError::Image(err) => Some(err),
            AtlasError::NotSquare { .. } => None,
            AtlasError::NotDivisible { .. } => None,
        }
    }
}

impl From<image::ImageError> for AtlasError {
    fn from(err: image::ImageError) -> Self {
        AtlasError::Image(err)
    }
}

/// Atlas backed by an RGBA image, sampled with nearest filtering
#[derive(Clone, Debug)]
pub struct ImageAtlas {
    image: RgbaImage,
    cells: u32,
}

impl ImageAtlas {
    /// Load an atlas image from disk
    pub fn load<P: AsRef<Path>>(path: P, cells: u32) -> Result<Self, AtlasError> {
        let image = image::open(path.as_ref())?.to_rgba8();
        log::info!(
            "Loaded atlas {} ({}x{}, {} cells per edge)",
            path.as_ref().display(),
            image.width(),
            image.height(),
            cells
        );
        Self::from_image(image, cells)
    }

    /// Wrap an already decoded image
    pub fn from_image(image: RgbaImage, cells: u32) -> Result<Self, AtlasError> {
        let (width, height) = image.dimensions();
        if width != height {
            return Err(AtlasError::NotSquare { width, height });
        }
        if cells == 0 || width % cells != 0 {
            return Err(AtlasError::NotDivisible { size: width, cells });
        }
        Ok(Self { image, cells })
    }
}

impl AtlasSampler for ImageAtlas {
    fn cells(&self) -> u32 {
        self.cells
    }

    fn sample(&self, coord: Vec2) -> [f32; 4] {
        let (width, height) = self.image.dimensions();
        let x = ((coord.x * width as f32) as u32).min(width - 1);
        let y = ((coord.y * height as f32) as u32).min(height - 1);
        let p = self.image.get_pixel(x, y).0;
        [
            p[0] as f32 / 255.0,
            p[1] as f32 / 255.0,
            p[2] as f32 / 255.0,
            p[3] as f32 / 255.0,
        ]
    }
}

/// Generated atlas used when no atlas image is configured.
///
/// Every cell gets its own hue with a darker 4×4 checker on top, so faces
/// and ids stay distinguishable without any assets.
#[derive(Clone, Copy, Debug)]
pub struct ProceduralAtlas {
    cells: u32,
}

impl Default for ProceduralAtlas {
    fn default() -> Self {
        Self::new(ATLAS_CELLS)
    }
}

impl ProceduralAtlas {
    pub fn new(cells: u32) -> Self {
        Self { cells: cells.max(1) }
    }

    fn cell_color(id: u32) -> [f32; 3] {
        // Golden-ratio hue walk keeps neighbouring ids apart
        let hue = (id as f32 * 0.618_034).fract();
        hsv_to_rgb(hue, 0.6, 0.9)
    }
}

impl AtlasSampler for ProceduralAtlas {
    fn cells(&self) -> u32 {
        self.cells
    }

    fn sample(&self, coord: Vec2) -> [f32; 4] {
        let cells = self.cells as f32;
        let gx = (coord.x * cells).clamp(0.0, cells - 1e-4);
        let gy = (coord.y * cells).clamp(0.0, cells - 1e-4);
        let id = gy as u32 * self.cells + gx as u32;

        let checker = ((gx.fract() * 4.0) as u32 + (gy.fract() * 4.0) as u32) % 2;
        let shade = if checker == 0 { 1.0 } else { 0.8 };
        let [r, g, b] = Self::cell_color(id);
        [r * shade, g * shade, b * shade, 1.0]
    }
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = h * 6.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_atlas_cell() {
        assert_eq!(atlas_cell(0, ATLAS_CELLS), (0, 0));
        assert_eq!(atlas_cell(17, ATLAS_CELLS), (1, 1));
        assert_eq!(atlas_cell(15, ATLAS_CELLS), (15, 0));
        assert_eq!(atlas_cell(255, ATLAS_CELLS), (15, 15));
    }

    #[test]
    fn test_atlas_coord() {
        let c = atlas_coord(17, Vec2::new(0.5, 0.25), ATLAS_CELLS);
        assert_abs_diff_eq!(c.x, 1.5 / 16.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, 1.25 / 16.0, epsilon = 1e-6);
    }

    #[test]
    fn test_image_atlas_validation() {
        let err = ImageAtlas::from_image(RgbaImage::new(32, 16), 16).unwrap_err();
        assert!(matches!(err, AtlasError::NotSquare { width: 32, height: 16 }));
        let err = ImageAtlas::from_image(RgbaImage::new(20, 20), 16).unwrap_err();
        assert!(matches!(err, AtlasError::NotDivisible { size: 20, cells: 16 }));
        assert!(format!("{}", err).contains("divisible"));
    }

    #[test]
    fn test_image_atlas_samples_cell() {
        // 2x2 cells of 2px; paint cell (1, 1) red
        let mut image = RgbaImage::new(4, 4);
        for y in 2..4 {
            for x in 2..4 {
                image.put_pixel(x, y, image::Rgba([255, 0, 0, 255]));
            }
        }
        let atlas = ImageAtlas::from_image(image, 2).unwrap();
        assert_eq!(atlas.sample_block(3, Vec2::new(0.5, 0.5)), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(atlas.sample_block(0, Vec2::new(0.5, 0.5)), [0.0, 0.0, 0.0, 0.0]);
        // uv = 1 stays inside the image
        assert_eq!(atlas.sample_block(3, Vec2::new(1.0, 1.0)), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_procedural_atlas_distinguishes_ids() {
        let atlas = ProceduralAtlas::default();
        let a = atlas.sample_block(1, Vec2::new(0.1, 0.1));
        let b = atlas.sample_block(2, Vec2::new(0.1, 0.1));
        assert_ne!(a, b);
        assert_eq!(a[3], 1.0);
    }
}
