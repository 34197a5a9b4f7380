//! Intensity histogram and its chart rendering.

use image::{imageops, GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::util::u32_to_f32;

/// Chart canvas width in pixels.
pub const CHART_WIDTH: u32 = 400;
/// Chart canvas height in pixels; the tallest bin spans this many rows.
pub const CHART_HEIGHT: u32 = 300;
/// Left margin before the first bin column.
pub const CHART_MARGIN_LEFT: u32 = 70;

/// 256-bin intensity histogram of a grayscale buffer.
#[must_use]
pub fn intensity_histogram(gray: &GrayImage) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for pixel in gray.pixels() {
        hist[pixel[0] as usize] += 1;
    }
    hist
}

/// 256-bin intensity histogram of the grayscale version of `rgb`.
#[must_use]
pub fn histogram_of(rgb: &RgbImage) -> [u32; 256] {
    intensity_histogram(&imageops::grayscale(rgb))
}

/// Render a histogram as a line chart image.
///
/// White canvas, one black vertical column per bin starting at
/// [`CHART_MARGIN_LEFT`], scaled so the tallest bin spans the full
/// canvas height.
#[must_use]
pub fn render_chart(hist: &[u32; 256]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, Rgb([255, 255, 255]));
    let max = hist.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return canvas;
    }

    let bottom = u32_to_f32(CHART_HEIGHT - 1);
    for (bin, &count) in hist.iter().enumerate() {
        let height = (u32_to_f32(count) / u32_to_f32(max) * u32_to_f32(CHART_HEIGHT)).round();
        if height < 1.0 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation)]
        let x = u32_to_f32(CHART_MARGIN_LEFT + bin as u32);
        let top = (u32_to_f32(CHART_HEIGHT) - height).max(0.0);
        draw_line_segment_mut(&mut canvas, (x, bottom), (x, top), Rgb([0, 0, 0]));
    }

    canvas
}

/// The histogram operation: chart of the grayscale intensity histogram.
#[must_use]
pub fn histogram_chart(rgb: &RgbImage) -> RgbImage {
    render_chart(&histogram_of(rgb))
}
