//! Maps an [`Operation`] to its implementation.

use image::RgbImage;

use rasterlab_core::Operation;

use crate::{color, filter, histogram, morphology, threshold};

/// Apply one operation to `image`, producing a new buffer.
///
/// The result has the input's dimensions, except for
/// [`Operation::Histogram`] which yields the fixed-size chart. The input
/// is never modified.
#[must_use]
pub fn apply(image: &RgbImage, operation: &Operation) -> RgbImage {
    match *operation {
        Operation::Grayscale => color::to_grayscale(image),
        Operation::Binary { threshold } => threshold::binarize(image, threshold),
        Operation::Brightness { offset } => color::adjust_brightness(image, offset),
        Operation::Invert => color::invert(image),
        Operation::Histogram => histogram::histogram_chart(image),
        Operation::Sharpen => filter::sharpen(image),
        Operation::Blur => filter::gaussian_blur(image),
        Operation::EdgeDetect => filter::edge_detect(image),
        Operation::Morphology { op, shape } => morphology::morphology(image, op, shape),
    }
}
