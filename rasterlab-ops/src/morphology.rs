//! Structuring-element erosion and dilation.
//!
//! Morphology runs on a binarized version of the input: grayscale,
//! fixed threshold at [`DEFAULT_THRESHOLD`], then one pass of the
//! selected operation. Structuring-element taps outside the image are
//! ignored, so an all-white image survives erosion intact.

use image::{imageops, GrayImage, Luma, RgbImage};

use rasterlab_core::operation::DEFAULT_THRESHOLD;
use rasterlab_core::{ElementShape, MorphOp};

use crate::color::expand_gray;
use crate::threshold::threshold_gray;

/// Neighborhood offsets for a structuring element.
///
/// The rectangle covers its full bounding box; the ellipse keeps the
/// offsets inside `dx^2/r^2 + dy^2/r^2 <= 1` with `r` half the box side.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn element_offsets(shape: ElementShape) -> Vec<(i32, i32)> {
    let size = shape.size() as i32;
    let half = size / 2;

    let mut offsets = Vec::new();
    match shape {
        ElementShape::Rect => {
            for dy in -half..=half {
                for dx in -half..=half {
                    offsets.push((dx, dy));
                }
            }
        }
        ElementShape::Ellipse => {
            let r = size as f32 / 2.0;
            for dy in -half..=half {
                for dx in -half..=half {
                    let (fx, fy) = (dx as f32, dy as f32);
                    if (fx * fx) / (r * r) + (fy * fy) / (r * r) <= 1.0 {
                        offsets.push((dx, dy));
                    }
                }
            }
        }
    }
    offsets
}

/// Neighborhood minimum over the structuring element.
#[must_use]
pub fn erode(src: &GrayImage, offsets: &[(i32, i32)]) -> GrayImage {
    reduce(src, offsets, 255, u8::min)
}

/// Neighborhood maximum over the structuring element.
#[must_use]
pub fn dilate(src: &GrayImage, offsets: &[(i32, i32)]) -> GrayImage {
    reduce(src, offsets, 0, u8::max)
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn reduce(
    src: &GrayImage,
    offsets: &[(i32, i32)],
    identity: u8,
    combine: fn(u8, u8) -> u8,
) -> GrayImage {
    let width = src.width() as i32;
    let height = src.height() as i32;
    let mut out = GrayImage::new(src.width(), src.height());

    for y in 0..height {
        for x in 0..width {
            let mut acc = identity;
            for &(dx, dy) in offsets {
                let px = x + dx;
                let py = y + dy;
                if px >= 0 && px < width && py >= 0 && py < height {
                    acc = combine(acc, src.get_pixel(px as u32, py as u32)[0]);
                }
            }
            out.put_pixel(x as u32, y as u32, Luma([acc]));
        }
    }

    out
}

/// Binarize at the default cutoff, apply one pass of `op`, and expand
/// back to three channels.
#[must_use]
pub fn morphology(rgb: &RgbImage, op: MorphOp, shape: ElementShape) -> RgbImage {
    let binary = threshold_gray(&imageops::grayscale(rgb), DEFAULT_THRESHOLD);
    let offsets = element_offsets(shape);
    let result = match op {
        MorphOp::Erode => erode(&binary, &offsets),
        MorphOp::Dilate => dilate(&binary, &offsets),
    };
    expand_gray(&result)
}
