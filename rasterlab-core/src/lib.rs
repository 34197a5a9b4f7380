//! rasterlab-core: Core types for raster image processing.
//!
//! This crate provides the shared vocabulary of the workspace: the
//! two-slot image store, the operation catalog with its parameters,
//! and the error types.
//!

pub mod error;
pub mod operation;
pub mod store;

pub use error::{Error, Result};
pub use operation::{ElementShape, MorphOp, Operation};
pub use store::ImageStore;
