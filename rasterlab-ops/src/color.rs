//! Grayscale conversion, channel expansion, inversion, and brightness.

use image::{imageops, GrayImage, RgbImage};
use rayon::prelude::*;

/// Luma-weighted grayscale conversion, re-expanded to three channels so
/// the result displays through the same RGB pipeline as every other
/// operation.
#[must_use]
pub fn to_grayscale(rgb: &RgbImage) -> RgbImage {
    expand_gray(&imageops::grayscale(rgb))
}

/// Replicate a single-channel image into an RGB buffer.
#[must_use]
pub fn expand_gray(gray: &GrayImage) -> RgbImage {
    let (w, h) = gray.dimensions();
    let mut out = RgbImage::new(w, h);
    let samples: &mut [u8] = &mut out;
    samples
        .par_chunks_mut(3)
        .zip(gray.as_raw().par_iter())
        .for_each(|(rgb_pixel, &g)| {
            rgb_pixel[0] = g;
            rgb_pixel[1] = g;
            rgb_pixel[2] = g;
        });
    out
}

/// Per-pixel bitwise complement.
#[must_use]
pub fn invert(rgb: &RgbImage) -> RgbImage {
    let mut out = rgb.clone();
    imageops::invert(&mut out);
    out
}

/// Per-pixel additive offset, clamped to [0, 255].
#[must_use]
pub fn adjust_brightness(rgb: &RgbImage, offset: i32) -> RgbImage {
    map_samples(rgb, |v| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shifted = (i32::from(v) + offset).clamp(0, 255) as u8;
        shifted
    })
}

/// Apply `f` to every sample of every channel in parallel.
fn map_samples<F>(src: &RgbImage, f: F) -> RgbImage
where
    F: Fn(u8) -> u8 + Sync,
{
    let mut out = src.clone();
    let samples: &mut [u8] = &mut out;
    samples.par_iter_mut().for_each(|v| *v = f(*v));
    out
}
