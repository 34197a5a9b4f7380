//! Error types for rasterlab-core.

use thiserror::Error;

/// Result type alias for rasterlab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for rasterlab operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation was requested before any image was loaded.
    #[error("no image loaded")]
    NoImage,

    /// An operation parameter is outside its documented range.
    #[error("parameter {name} out of range: {value} (expected {min}..={max})")]
    ParameterOutOfRange {
        /// Parameter name as shown to the user.
        name: &'static str,
        /// Rejected value.
        value: i64,
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
    },
}
