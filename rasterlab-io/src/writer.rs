//! Raster file saving.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{Error, Result};

/// Extensions offered by the save dialog and accepted by [`save_image`].
pub const SAVE_EXTENSIONS: &[&str] = &["png", "jpg", "bmp"];

/// Extension appended when the chosen path has none.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

/// Return `path`, appending the default extension when it has none.
#[must_use]
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    }
}

/// Encode `img` to `path`, with the format chosen by extension.
///
/// An extensionless path gets [`DEFAULT_SAVE_EXTENSION`] appended.
/// Returns the path actually written.
///
/// # Errors
///
/// [`Error::UnsupportedFormat`] for extensions outside
/// [`SAVE_EXTENSIONS`], [`Error::Encode`] when encoding or writing
/// fails.
pub fn save_image(path: &Path, img: &RgbImage) -> Result<PathBuf> {
    let path = with_default_extension(path);

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !SAVE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(Error::UnsupportedFormat { extension: ext });
    }

    img.save(&path).map_err(Error::Encode)?;
    Ok(path)
}
