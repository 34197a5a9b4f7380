//! rasterlab-ops: Implementations of the operation catalog.
//!
//! Each module wraps one family of transformations:
//! - **color** - grayscale, inversion, brightness
//! - **threshold** - global binarization
//! - **filter** - sharpen, Gaussian blur, Sobel edges
//! - **morphology** - structuring-element erosion and dilation
//! - **histogram** - intensity histogram and its chart rendering
//!
//! [`apply`] dispatches a [`rasterlab_core::Operation`] to the right
//! implementation.
#![warn(missing_docs)]

pub mod color;
pub mod dispatch;
pub mod filter;
pub mod histogram;
pub mod morphology;
pub mod threshold;
mod util;

pub use dispatch::apply;

// Re-export the operation vocabulary alongside its implementations.
pub use rasterlab_core::{ElementShape, MorphOp, Operation};
