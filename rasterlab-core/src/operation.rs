//! The operation catalog.
//!
//! Each variant of [`Operation`] describes one transformation of the
//! original image, with any scalar parameter embedded. The variants are
//! plain data; the implementations live in `rasterlab-ops`.

use std::fmt;

use crate::error::{Error, Result};

/// Inclusive lower bound for the brightness offset.
pub const BRIGHTNESS_MIN: i32 = -100;
/// Inclusive upper bound for the brightness offset.
pub const BRIGHTNESS_MAX: i32 = 100;
/// Default binarization cutoff, also used by the morphology pre-step.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Morphological operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Neighborhood minimum over the structuring element.
    Erode,
    /// Neighborhood maximum over the structuring element.
    Dilate,
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphOp::Erode => write!(f, "Erosion"),
            MorphOp::Dilate => write!(f, "Dilation"),
        }
    }
}

/// Structuring element shape for morphology.
///
/// The sizes are fixed: the rectangle is 5x5, the ellipse 7x7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementShape {
    /// 5x5 rectangular neighborhood.
    Rect,
    /// 7x7 elliptical neighborhood.
    Ellipse,
}

impl ElementShape {
    /// Side length of the square bounding box for this shape.
    #[must_use]
    pub fn size(self) -> u32 {
        match self {
            ElementShape::Rect => 5,
            ElementShape::Ellipse => 7,
        }
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementShape::Rect => write!(f, "Rectangular 5x5"),
            ElementShape::Ellipse => write!(f, "Elliptical 7x7"),
        }
    }
}

/// One user-selectable transformation of the original image.
///
/// Every operation consumes the original image and produces a new buffer
/// of the same dimensions, except [`Operation::Histogram`] which yields a
/// fixed-size chart image. Operations never compose: selecting a new one
/// always starts again from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Luma-weighted grayscale, re-expanded to three channels.
    Grayscale,
    /// Grayscale followed by a global threshold: pixels >= cutoff become
    /// 255, the rest 0.
    Binary {
        /// Cutoff intensity in 0..=255.
        threshold: u8,
    },
    /// Per-pixel additive offset, clamped to 0..=255.
    Brightness {
        /// Offset in [`BRIGHTNESS_MIN`]..=[`BRIGHTNESS_MAX`].
        offset: i32,
    },
    /// Per-pixel bitwise complement.
    Invert,
    /// 256-bin intensity histogram of the grayscale version, rendered as
    /// a 400x300 line chart.
    Histogram,
    /// Fixed 3x3 sharpening kernel, applied per channel.
    Sharpen,
    /// Gaussian blur equivalent to a 15x15 kernel with automatic sigma.
    Blur,
    /// Sobel gradient magnitude of the grayscale version.
    EdgeDetect,
    /// Binarize at the default cutoff, then erode or dilate once.
    Morphology {
        /// Erode or dilate.
        op: MorphOp,
        /// Structuring element shape (which fixes its size).
        shape: ElementShape,
    },
}

impl Operation {
    /// Check embedded parameters against their documented ranges.
    ///
    /// The GUI sliders are bounded so they always pass; this guards the
    /// CLI and any programmatic callers.
    pub fn validate(&self) -> Result<()> {
        if let Operation::Brightness { offset } = self {
            if !(BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(offset) {
                return Err(Error::ParameterOutOfRange {
                    name: "offset",
                    value: i64::from(*offset),
                    min: i64::from(BRIGHTNESS_MIN),
                    max: i64::from(BRIGHTNESS_MAX),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Grayscale => write!(f, "Grayscale"),
            Operation::Binary { threshold } => write!(f, "Binary (cutoff {threshold})"),
            Operation::Brightness { offset } => write!(f, "Brightness ({offset:+})"),
            Operation::Invert => write!(f, "Invert"),
            Operation::Histogram => write!(f, "Histogram"),
            Operation::Sharpen => write!(f, "Sharpen"),
            Operation::Blur => write!(f, "Gaussian Blur"),
            Operation::EdgeDetect => write!(f, "Edge Detection"),
            Operation::Morphology { op, shape } => write!(f, "{op} ({shape})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_range_is_enforced() {
        assert!(Operation::Brightness { offset: 100 }.validate().is_ok());
        assert!(Operation::Brightness { offset: -100 }.validate().is_ok());
        assert!(Operation::Brightness { offset: 101 }.validate().is_err());
        assert!(Operation::Brightness { offset: -101 }.validate().is_err());
    }

    #[test]
    fn parameterless_operations_always_validate() {
        for op in [
            Operation::Grayscale,
            Operation::Invert,
            Operation::Histogram,
            Operation::Sharpen,
            Operation::Blur,
            Operation::EdgeDetect,
        ] {
            assert!(op.validate().is_ok(), "{op} should validate");
        }
    }

    #[test]
    fn element_shapes_have_fixed_sizes() {
        assert_eq!(ElementShape::Rect.size(), 5);
        assert_eq!(ElementShape::Ellipse.size(), 7);
    }
}
