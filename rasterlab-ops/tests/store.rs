//! Store invariants exercised through the operation dispatcher.

use image::{Rgb, RgbImage};
use rasterlab_core::{ElementShape, ImageStore, MorphOp, Operation};
use rasterlab_ops::apply;

fn checkerboard(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([220, 40, 40])
        } else {
            Rgb([20, 20, 200])
        }
    })
}

#[test]
fn reset_after_any_operation_restores_the_original() {
    let operations = [
        Operation::Grayscale,
        Operation::Binary { threshold: 90 },
        Operation::Brightness { offset: -60 },
        Operation::Invert,
        Operation::Histogram,
        Operation::Sharpen,
        Operation::Blur,
        Operation::EdgeDetect,
        Operation::Morphology {
            op: MorphOp::Erode,
            shape: ElementShape::Ellipse,
        },
    ];

    for operation in operations {
        let mut store = ImageStore::new();
        store.load(checkerboard(12, 12));

        let result = apply(store.original().unwrap(), &operation);
        store.set_processed(result).unwrap();
        store.reset().unwrap();

        assert_eq!(
            store.original(),
            store.processed(),
            "reset after {operation} left residue"
        );
    }
}

#[test]
fn operations_never_touch_the_original() {
    let mut store = ImageStore::new();
    let reference = checkerboard(12, 12);
    store.load(reference.clone());

    let result = apply(store.original().unwrap(), &Operation::Invert);
    store.set_processed(result).unwrap();

    assert_eq!(store.original().unwrap(), &reference);
    assert_ne!(store.processed().unwrap(), &reference);
}

#[test]
fn each_operation_replaces_rather_than_composes() {
    let mut store = ImageStore::new();
    store.load(checkerboard(12, 12));

    // Grayscale first...
    let gray = apply(store.original().unwrap(), &Operation::Grayscale);
    store.set_processed(gray).unwrap();

    // ...then invert: the result must equal invert of the *original*,
    // not of the grayscale intermediate.
    let inverted = apply(store.original().unwrap(), &Operation::Invert);
    store.set_processed(inverted.clone()).unwrap();

    let direct = apply(&checkerboard(12, 12), &Operation::Invert);
    assert_eq!(store.processed().unwrap(), &direct);
    assert_eq!(inverted, direct);
}
