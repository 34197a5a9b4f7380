//! Control panel (left sidebar) and bottom status bar rendering.

use eframe::egui::{self, RichText};
use rfd::FileDialog;

use super::theme::{accent, form_label, primary_button, ThemeColors};
use crate::app::RasterlabApp;
use rasterlab_core::Operation;
use rasterlab_io::LOAD_EXTENSIONS;

impl RasterlabApp {
    /// Render the left control panel with the three command groups.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::SidePanel::left("ctrl")
            .default_width(240.0)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_panel)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                self.render_image_group(ui, ctx);
                Self::group_separator(ui);
                self.render_analysis_group(ui, ctx);
                Self::group_separator(ui);
                self.render_utility_group(ui, ctx);
            });
    }

    fn render_image_group(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label(form_label("Image Operations"));
        ui.add_space(4.0);

        if ui
            .add(primary_button("Open Image…").min_size(egui::vec2(ui.available_width(), 0.0)))
            .clicked()
        {
            if let Some(path) = FileDialog::new()
                .add_filter("Image files", LOAD_EXTENSIONS)
                .pick_file()
            {
                self.load_image(ctx, path);
            }
        }

        let loaded = self.store.is_loaded();

        if Self::group_button(ui, "Grayscale", loaded) {
            self.apply_operation(ctx, Operation::Grayscale);
        }
        if Self::group_button(ui, "Binary…", loaded) {
            self.ui_state.show_threshold_dialog = true;
            let threshold = self.ui_state.threshold;
            self.apply_operation(ctx, Operation::Binary { threshold });
        }
        if Self::group_button(ui, "Brightness…", loaded) {
            self.ui_state.show_brightness_dialog = true;
            let offset = self.ui_state.brightness;
            self.apply_operation(ctx, Operation::Brightness { offset });
        }
        if Self::group_button(ui, "Invert", loaded) {
            self.apply_operation(ctx, Operation::Invert);
        }
    }

    fn render_analysis_group(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label(form_label("Analysis & Filters"));
        ui.add_space(4.0);

        let loaded = self.store.is_loaded();

        if Self::group_button(ui, "Histogram", loaded) {
            self.apply_operation(ctx, Operation::Histogram);
        }

        // The sub-menus stay clickable without an image and warn
        // instead of silently doing nothing.
        if Self::group_button(ui, "Convolution…", true) {
            if loaded {
                self.ui_state.show_convolution_menu = true;
            } else {
                self.ui_state.warning = Some("Load an image first!".to_string());
            }
        }
        if Self::group_button(ui, "Morphology…", true) {
            if loaded {
                self.ui_state.show_morphology_menu = true;
            } else {
                self.ui_state.warning = Some("Load an image first!".to_string());
            }
        }

        ui.add_space(4.0);
        ui.checkbox(&mut self.ui_state.show_histogram_window, "Live histogram");
    }

    fn render_utility_group(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label(form_label("Utilities"));
        ui.add_space(4.0);

        if Self::group_button(ui, "Reset Image", self.store.is_loaded()) {
            self.reset(ctx);
        }

        if Self::group_button(ui, "Save Result…", self.store.processed().is_some()) {
            if let Some(path) = FileDialog::new()
                .add_filter("PNG", &["png"])
                .add_filter("JPEG", &["jpg"])
                .add_filter("BMP", &["bmp"])
                .set_file_name("result.png")
                .save_file()
            {
                self.save_processed(&path);
            }
        }
    }

    /// Full-width command button, disabled while `enabled` is false.
    fn group_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> bool {
        ui.add_enabled(
            enabled,
            egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 0.0)),
        )
        .clicked()
    }

    fn group_separator(ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);
    }

    /// Render the bottom status bar.
    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(colors.bg_header)
                    .inner_margin(egui::Margin::symmetric(16.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(11.0).color(accent::GREEN));
                    ui.label(
                        RichText::new(&self.ui_state.status_text)
                            .size(11.0)
                            .color(colors.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match (&self.selected_file, self.store.original()) {
                            (Some(path), Some(img)) => {
                                let name = path.file_name().unwrap_or_default().to_string_lossy();
                                let (w, h) = img.dimensions();
                                ui.label(
                                    RichText::new(format!("{name} • {w}x{h}"))
                                        .size(11.0)
                                        .color(colors.text_primary),
                                );
                            }
                            _ => {
                                ui.label(
                                    RichText::new("No file loaded")
                                        .size(11.0)
                                        .color(colors.text_muted),
                                );
                            }
                        }
                    });
                });
            });
    }
}
