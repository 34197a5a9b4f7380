//! I/O error types.

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded as a raster image.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// The buffer could not be encoded to the requested format.
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    /// The path's extension is not in the supported set.
    #[error("unsupported image format: .{extension}")]
    UnsupportedFormat {
        /// The offending extension (lowercased, without the dot).
        extension: String,
    },
}
