//! Main application state and logic.
//!
//! Contains the `RasterlabApp` struct which owns the image store, the
//! pane textures, and the UI state, and dispatches operations.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use eframe::egui;

use rasterlab_core::{ImageStore, Operation};
use rasterlab_ops::histogram::histogram_of;

use crate::state::UiState;
use crate::viewer::preview_image;

/// Main application state.
#[derive(Default)]
pub struct RasterlabApp {
    /// Original and processed image pair.
    pub(crate) store: ImageStore,
    /// Path of the currently loaded file.
    pub(crate) selected_file: Option<PathBuf>,

    /// UI display state.
    pub(crate) ui_state: UiState,

    /// Pane texture for the original image; retained for the pane's
    /// lifetime so egui keeps the upload alive.
    pub(crate) original_texture: Option<egui::TextureHandle>,
    /// Pane texture for the processed image.
    pub(crate) result_texture: Option<egui::TextureHandle>,

    /// Cached intensity histogram of the processed image.
    pub(crate) histogram_cache: Option<[u32; 256]>,
}

impl RasterlabApp {
    /// Load an image file into the store, replacing any previous pair.
    pub fn load_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        match self.try_load(ctx, &path) {
            Ok(()) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                self.ui_state.status_text = format!("Loaded {name}");
                log::info!("loaded {}", path.display());
                self.selected_file = Some(path);
            }
            Err(err) => {
                log::error!("load failed: {err:#}");
                self.ui_state.warning = Some(format!("{err:#}"));
            }
        }
    }

    fn try_load(&mut self, ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
        let img = rasterlab_io::load_image(path)
            .with_context(|| format!("could not load {}", path.display()))?;
        self.store.load(img);
        self.histogram_cache = None;
        self.refresh_original_texture(ctx);
        self.refresh_result_texture(ctx);
        Ok(())
    }

    /// Run one operation on the original image and show the result.
    ///
    /// Without a loaded image this is a no-op; the control panel keeps
    /// the plain operation buttons disabled in that state.
    pub fn apply_operation(&mut self, ctx: &egui::Context, operation: Operation) {
        let Some(original) = self.store.original() else {
            return;
        };
        let result = rasterlab_ops::apply(original, &operation);

        if self.store.set_processed(result).is_ok() {
            self.histogram_cache = None;
            self.refresh_result_texture(ctx);
            self.ui_state.status_text = format!("Applied {operation}");
            log::info!("applied {operation}");
        }
    }

    /// Restore the result pane to the original image.
    pub fn reset(&mut self, ctx: &egui::Context) {
        if self.store.reset().is_ok() {
            self.histogram_cache = None;
            self.refresh_result_texture(ctx);
            self.ui_state.status_text = "Reset to original".to_string();
        }
    }

    /// Write the processed image to `path`, confirming on success.
    pub fn save_processed(&mut self, path: &Path) {
        match self.try_save(path) {
            Ok(written) => {
                self.ui_state.status_text =
                    format!("Saved {}", written.file_name().unwrap_or_default().to_string_lossy());
                log::info!("saved {}", written.display());
                self.ui_state.saved_to = Some(written);
            }
            Err(err) => {
                log::error!("save failed: {err:#}");
                self.ui_state.warning = Some(format!("{err:#}"));
            }
        }
    }

    fn try_save(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let processed = self.store.processed().context("no image loaded")?;
        let written = rasterlab_io::save_image(path, processed)
            .with_context(|| format!("could not save {}", path.display()))?;
        Ok(written)
    }

    /// Intensity histogram of the processed image, cached between
    /// repaints and invalidated by every store mutation.
    pub fn histogram(&mut self) -> Option<[u32; 256]> {
        if self.histogram_cache.is_none() {
            self.histogram_cache = self.store.processed().map(histogram_of);
        }
        self.histogram_cache
    }

    fn refresh_original_texture(&mut self, ctx: &egui::Context) {
        self.original_texture = self.store.original().map(|img| {
            ctx.load_texture("original", preview_image(img), egui::TextureOptions::LINEAR)
        });
    }

    fn refresh_result_texture(&mut self, ctx: &egui::Context) {
        self.result_texture = self.store.processed().map(|img| {
            ctx.load_texture("result", preview_image(img), egui::TextureOptions::LINEAR)
        });
    }
}

impl eframe::App for RasterlabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_side_panel(ctx);
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
        self.render_dialogs(ctx);
        self.render_histogram_window(ctx);
    }
}
