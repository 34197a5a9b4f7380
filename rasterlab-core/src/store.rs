//! The two-slot image store.

use image::RgbImage;

use crate::error::{Error, Result};

/// Holds the currently loaded original image and the processed result.
///
/// `original` is set on load and never mutated afterwards; every operation
/// replaces `processed` wholesale with a buffer derived from `original`.
/// Both slots live until the next load or application exit.
#[derive(Debug, Default)]
pub struct ImageStore {
    original: Option<RgbImage>,
    processed: Option<RgbImage>,
}

impl ImageStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.original.is_some()
    }

    /// The original image, if loaded.
    #[must_use]
    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    /// The processed image, if loaded.
    #[must_use]
    pub fn processed(&self) -> Option<&RgbImage> {
        self.processed.as_ref()
    }

    /// Install a newly loaded image, replacing any previous pair.
    ///
    /// The processed slot starts as a copy of the original.
    pub fn load(&mut self, img: RgbImage) {
        self.processed = Some(img.clone());
        self.original = Some(img);
    }

    /// Replace the processed image with an operation result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] when nothing has been loaded.
    pub fn set_processed(&mut self, img: RgbImage) -> Result<()> {
        if self.original.is_none() {
            return Err(Error::NoImage);
        }
        self.processed = Some(img);
        Ok(())
    }

    /// Restore the processed image to a copy of the original.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImage`] when nothing has been loaded.
    pub fn reset(&mut self) -> Result<()> {
        match &self.original {
            Some(img) => {
                self.processed = Some(img.clone());
                Ok(())
            }
            None => Err(Error::NoImage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([value, value, value]))
    }

    #[test]
    fn load_fills_both_slots() {
        let mut store = ImageStore::new();
        assert!(!store.is_loaded());
        store.load(solid(4, 4, 10));
        assert!(store.is_loaded());
        assert_eq!(store.original(), store.processed());
    }

    #[test]
    fn set_processed_leaves_original_untouched() {
        let mut store = ImageStore::new();
        store.load(solid(4, 4, 10));
        store.set_processed(solid(4, 4, 200)).unwrap();
        assert_eq!(store.original().unwrap().get_pixel(0, 0).0, [10, 10, 10]);
        assert_eq!(store.processed().unwrap().get_pixel(0, 0).0, [200, 200, 200]);
    }

    #[test]
    fn reset_restores_the_original_copy() {
        let mut store = ImageStore::new();
        store.load(solid(4, 4, 10));
        store.set_processed(solid(4, 4, 200)).unwrap();
        store.reset().unwrap();
        assert_eq!(store.original(), store.processed());
    }

    #[test]
    fn empty_store_rejects_mutation() {
        let mut store = ImageStore::new();
        assert!(matches!(store.reset(), Err(Error::NoImage)));
        assert!(matches!(
            store.set_processed(solid(1, 1, 0)),
            Err(Error::NoImage)
        ));
    }

    #[test]
    fn reload_replaces_the_previous_pair() {
        let mut store = ImageStore::new();
        store.load(solid(4, 4, 10));
        store.set_processed(solid(4, 4, 200)).unwrap();
        store.load(solid(2, 2, 30));
        assert_eq!(store.original().unwrap().dimensions(), (2, 2));
        assert_eq!(store.original(), store.processed());
    }
}
