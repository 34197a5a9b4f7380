//! Buffer to display-texture conversion.

use egui::ColorImage;
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Fixed width of each display pane.
pub const PANE_WIDTH: u32 = 480;
/// Fixed height of each display pane.
pub const PANE_HEIGHT: u32 = 360;

/// Convert a buffer into a pane-sized color image.
///
/// The image is stretched to the pane box; aspect ratio is not
/// preserved.
#[must_use]
pub fn preview_image(img: &RgbImage) -> ColorImage {
    let resized = imageops::resize(img, PANE_WIDTH, PANE_HEIGHT, FilterType::Triangle);

    let mut rgba = Vec::with_capacity((PANE_WIDTH * PANE_HEIGHT * 4) as usize);
    for pixel in resized.pixels() {
        rgba.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
    }

    ColorImage::from_rgba_unmultiplied([PANE_WIDTH as usize, PANE_HEIGHT as usize], &rgba)
}
