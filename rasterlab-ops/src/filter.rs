//! Convolution-based filters: sharpen, Gaussian blur, Sobel edges.

use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::filter::{filter3x3, gaussian_blur_f32};
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

use crate::color::expand_gray;
use crate::util::f32_to_u8;

/// Fixed sharpening kernel, applied per channel.
const SHARPEN_KERNEL: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

/// Sigma matching a 15x15 Gaussian kernel: 0.3 * ((15 - 1) * 0.5 - 1) + 0.8.
const BLUR_SIGMA: f32 = 2.6;

/// Sharpen with the fixed 3x3 kernel.
#[must_use]
pub fn sharpen(rgb: &RgbImage) -> RgbImage {
    filter3x3::<Rgb<u8>, i32, u8>(rgb, &SHARPEN_KERNEL)
}

/// Gaussian blur with [`BLUR_SIGMA`].
#[must_use]
pub fn gaussian_blur(rgb: &RgbImage) -> RgbImage {
    gaussian_blur_f32(rgb, BLUR_SIGMA)
}

/// Sobel edge magnitude of the grayscale version.
///
/// Horizontal and vertical 3x3 gradients are combined as the Euclidean
/// magnitude and clamped to [0, 255].
#[must_use]
pub fn edge_detect(rgb: &RgbImage) -> RgbImage {
    let gray = imageops::grayscale(rgb);
    let gx = horizontal_sobel(&gray);
    let gy = vertical_sobel(&gray);

    let (w, h) = gray.dimensions();
    let mut magnitude = GrayImage::new(w, h);
    for (x, y, px) in magnitude.enumerate_pixels_mut() {
        let dx = f32::from(gx.get_pixel(x, y)[0]);
        let dy = f32::from(gy.get_pixel(x, y)[0]);
        px[0] = f32_to_u8(dx.hypot(dy));
    }

    expand_gray(&magnitude)
}
