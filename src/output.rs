//! Frame output
//!
//! Writes a rendered [`Framebuffer`] to disk as 8-bit RGBA PNG.

use std::path::Path;

use voxray_render::Framebuffer;

/// Image output error
#[derive(Debug)]
pub enum OutputError {
    /// Creating the parent directory failed
    Io(std::io::Error),
    /// Encoding or writing the image failed
    Image(image::ImageError),
    /// Nothing to write
    EmptyFrame,
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "Output I/O error: {}", e),
            OutputError::Image(e) => write!(f, "Image encoding error: {}", e),
            OutputError::EmptyFrame => write!(f, "Frame has no pixels"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
            OutputError::EmptyFrame => None,
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Save `framebuffer` as a PNG at `path`, creating parent directories
pub fn save_png<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    if framebuffer.width() == 0 || framebuffer.height() == 0 {
        return Err(OutputError::EmptyFrame);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    framebuffer
        .to_image()
        .save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "Wrote {}x{} frame to {}",
        framebuffer.width(),
        framebuffer.height(),
        path.display()
    );
    Ok(())
}
