//! Raster file loading.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// Extensions accepted by the load dialog and [`load_image`].
pub const LOAD_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "bmp"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Decode the file at `path` into an RGB buffer.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] when the extension is outside
/// [`LOAD_EXTENSIONS`], [`Error::Decode`] when the file cannot be read
/// or parsed as an image.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    match extension_of(path) {
        Some(ext) if LOAD_EXTENSIONS.contains(&ext.as_str()) => {}
        other => {
            return Err(Error::UnsupportedFormat {
                extension: other.unwrap_or_default(),
            })
        }
    }

    let decoded = image::open(path).map_err(Error::Decode)?;
    Ok(decoded.to_rgb8())
}
