#![allow(clippy::uninlined_format_args)]
use approx::assert_abs_diff_eq;
use image::{Rgb, RgbImage};
use rasterlab_ops::{apply, ElementShape, MorphOp, Operation};

fn solid(w: u32, h: u32, value: u8) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb([value, value, value]))
}

/// 256x1 strip where column x has intensity x.
#[allow(clippy::cast_possible_truncation)]
fn gradient_strip() -> RgbImage {
    RgbImage::from_fn(256, 1, |x, _| {
        let v = x as u8;
        Rgb([v, v, v])
    })
}

#[test]
fn grayscale_of_pure_red_is_uniform_luma() {
    let red = RgbImage::from_pixel(10, 10, Rgb([255, 0, 0]));
    let gray = apply(&red, &Operation::Grayscale);

    let first = gray.get_pixel(0, 0).0;
    assert_eq!(first[0], first[1]);
    assert_eq!(first[1], first[2]);
    // Red luma weight of the image crate's conversion.
    assert_abs_diff_eq!(f64::from(first[0]), 0.2126 * 255.0, epsilon = 1.0);

    for pixel in gray.pixels() {
        assert_eq!(pixel.0, first, "grayscale of a flat image must be flat");
    }
}

#[test]
fn binary_cutoff_is_inclusive() {
    let out = apply(&gradient_strip(), &Operation::Binary { threshold: 127 });
    for x in 0..256 {
        let expected = if x >= 127 { 255 } else { 0 };
        let got = out.get_pixel(x, 0).0;
        assert_eq!(
            got,
            [expected; 3],
            "column {} should binarize to {}",
            x,
            expected
        );
    }
}

#[test]
fn binary_extremes() {
    let strip = gradient_strip();
    let all_white = apply(&strip, &Operation::Binary { threshold: 0 });
    assert!(all_white.pixels().all(|p| p.0 == [255, 255, 255]));

    let out = apply(&strip, &Operation::Binary { threshold: 255 });
    assert_eq!(out.get_pixel(255, 0).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(254, 0).0, [0, 0, 0]);
}

#[test]
fn brightness_clamps_instead_of_wrapping() {
    let bright = apply(&solid(4, 4, 240), &Operation::Brightness { offset: 50 });
    assert!(bright.pixels().all(|p| p.0 == [255, 255, 255]));

    let dark = apply(&solid(4, 4, 10), &Operation::Brightness { offset: -100 });
    assert!(dark.pixels().all(|p| p.0 == [0, 0, 0]));

    let mid = apply(&solid(4, 4, 100), &Operation::Brightness { offset: 50 });
    assert!(mid.pixels().all(|p| p.0 == [150, 150, 150]));
}

#[test]
fn invert_is_an_involution() {
    let img = RgbImage::from_fn(16, 16, |x, y| {
        #[allow(clippy::cast_possible_truncation)]
        let px = [(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8];
        Rgb(px)
    });
    let once = apply(&img, &Operation::Invert);
    let twice = apply(&once, &Operation::Invert);
    assert_eq!(img, twice);

    let black = apply(&solid(2, 2, 0), &Operation::Invert);
    assert!(black.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn sharpen_is_identity_on_flat_interior() {
    let flat = solid(10, 10, 90);
    let out = apply(&flat, &Operation::Sharpen);
    assert_eq!(out.dimensions(), (10, 10));
    for y in 1..9 {
        for x in 1..9 {
            assert_eq!(out.get_pixel(x, y).0, [90, 90, 90]);
        }
    }
}

#[test]
fn blur_preserves_flat_images_and_dimensions() {
    let flat = solid(20, 14, 120);
    let out = apply(&flat, &Operation::Blur);
    assert_eq!(out.dimensions(), (20, 14));
    for pixel in out.pixels() {
        for channel in pixel.0 {
            assert!(
                (119..=121).contains(&channel),
                "blurred flat value {} drifted",
                channel
            );
        }
    }
}

#[test]
fn edges_of_flat_image_are_black() {
    let out = apply(&solid(12, 12, 200), &Operation::EdgeDetect);
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn edges_fire_on_a_vertical_step() {
    let step = RgbImage::from_fn(20, 20, |x, _| {
        if x < 10 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    let out = apply(&step, &Operation::EdgeDetect);
    // The gradient magnitude saturates at the step.
    assert_eq!(out.get_pixel(10, 10).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(3, 10).0, [0, 0, 0]);
}

#[test]
fn erosion_keeps_an_all_white_image() {
    let white = solid(10, 10, 255);
    let out = apply(
        &white,
        &Operation::Morphology {
            op: MorphOp::Erode,
            shape: ElementShape::Rect,
        },
    );
    assert!(out.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn erosion_removes_an_isolated_pixel() {
    let mut img = solid(11, 11, 0);
    img.put_pixel(5, 5, Rgb([255, 255, 255]));
    let out = apply(
        &img,
        &Operation::Morphology {
            op: MorphOp::Erode,
            shape: ElementShape::Rect,
        },
    );
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn dilation_grows_an_isolated_pixel_to_the_element() {
    let mut img = solid(11, 11, 0);
    img.put_pixel(5, 5, Rgb([255, 255, 255]));
    let out = apply(
        &img,
        &Operation::Morphology {
            op: MorphOp::Dilate,
            shape: ElementShape::Rect,
        },
    );
    // 5x5 block centered on the seed pixel.
    for y in 0..11 {
        for x in 0..11 {
            let inside = (3..=7).contains(&x) && (3..=7).contains(&y);
            let expected = if inside { 255 } else { 0 };
            assert_eq!(out.get_pixel(x, y).0, [expected; 3], "at ({}, {})", x, y);
        }
    }
}

#[test]
fn elliptical_element_rounds_the_corners() {
    let mut img = solid(11, 11, 0);
    img.put_pixel(5, 5, Rgb([255, 255, 255]));
    let out = apply(
        &img,
        &Operation::Morphology {
            op: MorphOp::Dilate,
            shape: ElementShape::Ellipse,
        },
    );
    // Axis tips of the 7x7 ellipse are reached...
    assert_eq!(out.get_pixel(5, 2).0, [255, 255, 255]);
    assert_eq!(out.get_pixel(8, 5).0, [255, 255, 255]);
    // ...but the bounding-box corners are not.
    assert_eq!(out.get_pixel(2, 2).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(8, 8).0, [0, 0, 0]);
}

#[test]
fn morphology_binarizes_before_operating() {
    // Below the fixed cutoff everything thresholds to black.
    let dim = solid(9, 9, 100);
    let out = apply(
        &dim,
        &Operation::Morphology {
            op: MorphOp::Dilate,
            shape: ElementShape::Rect,
        },
    );
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));

    // Above it, to white.
    let lit = solid(9, 9, 200);
    let out = apply(
        &lit,
        &Operation::Morphology {
            op: MorphOp::Erode,
            shape: ElementShape::Rect,
        },
    );
    assert!(out.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn histogram_chart_has_fixed_geometry() {
    let flat = solid(10, 10, 128);
    let chart = apply(&flat, &Operation::Histogram);
    assert_eq!(chart.dimensions(), (400, 300));

    // Single full-height column at margin + intensity.
    assert_eq!(chart.get_pixel(70 + 128, 0).0, [0, 0, 0]);
    assert_eq!(chart.get_pixel(70 + 128, 299).0, [0, 0, 0]);
    assert_eq!(chart.get_pixel(70 + 127, 150).0, [255, 255, 255]);
    assert_eq!(chart.get_pixel(10, 150).0, [255, 255, 255]);
}

#[test]
fn operations_preserve_input_dimensions() {
    let img = solid(17, 23, 99);
    for op in [
        Operation::Grayscale,
        Operation::Binary { threshold: 127 },
        Operation::Brightness { offset: 25 },
        Operation::Invert,
        Operation::Sharpen,
        Operation::Blur,
        Operation::EdgeDetect,
        Operation::Morphology {
            op: MorphOp::Dilate,
            shape: ElementShape::Ellipse,
        },
    ] {
        assert_eq!(apply(&img, &op).dimensions(), (17, 23), "{} resized", op);
    }
}
