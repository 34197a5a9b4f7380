//! rasterlab-io: Raster file loading and saving.
//!
//! Decoding and encoding go through the `image` crate; this crate adds
//! the format whitelists, the default save extension, and typed errors
//! for every failure mode.
//!

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::{load_image, LOAD_EXTENSIONS};
pub use writer::{save_image, with_default_extension, DEFAULT_SAVE_EXTENSION, SAVE_EXTENSIONS};
