//! Global binarization.

use image::{imageops, GrayImage, RgbImage};

use crate::color::expand_gray;

/// Threshold a grayscale buffer: samples >= `cutoff` become 255, the
/// rest 0.
#[must_use]
pub fn threshold_gray(gray: &GrayImage, cutoff: u8) -> GrayImage {
    let mut out = gray.clone();
    let samples: &mut [u8] = &mut out;
    for v in samples {
        *v = if *v >= cutoff { 255 } else { 0 };
    }
    out
}

/// Grayscale an RGB image, binarize it at `cutoff`, and expand back to
/// three channels for display.
#[must_use]
pub fn binarize(rgb: &RgbImage, cutoff: u8) -> RgbImage {
    expand_gray(&threshold_gray(&imageops::grayscale(rgb), cutoff))
}
