//! Preview rendering for the two image panes.

mod texture;

pub use texture::{preview_image, PANE_HEIGHT, PANE_WIDTH};
