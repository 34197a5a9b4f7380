//! Auxiliary windows: parameter sliders, sub-menus, and modals.

use eframe::egui::{self, RichText};

use super::theme::accent;
use crate::app::RasterlabApp;
use rasterlab_core::operation::{BRIGHTNESS_MAX, BRIGHTNESS_MIN};
use rasterlab_core::{ElementShape, MorphOp, Operation};

impl RasterlabApp {
    /// Render whichever auxiliary windows are currently open.
    pub(crate) fn render_dialogs(&mut self, ctx: &egui::Context) {
        self.render_threshold_dialog(ctx);
        self.render_brightness_dialog(ctx);
        self.render_convolution_menu(ctx);
        self.render_morphology_menu(ctx);
        self.render_warning_modal(ctx);
        self.render_save_confirmation(ctx);
    }

    /// Binarization cutoff slider; reapplies on every drag movement.
    fn render_threshold_dialog(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_threshold_dialog {
            return;
        }

        let mut open = true;
        egui::Window::new("Binary Threshold")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::Slider::new(&mut self.ui_state.threshold, 0..=255).text("cutoff"),
                );
                if response.changed() {
                    let threshold = self.ui_state.threshold;
                    self.apply_operation(ctx, Operation::Binary { threshold });
                }

                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.ui_state.show_threshold_dialog = false;
                }
            });

        // The close button leaves the last-applied value in effect.
        self.ui_state.show_threshold_dialog &= open;
    }

    /// Brightness offset slider; reapplies on every drag movement.
    fn render_brightness_dialog(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_brightness_dialog {
            return;
        }

        let mut open = true;
        egui::Window::new("Brightness")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::Slider::new(&mut self.ui_state.brightness, BRIGHTNESS_MIN..=BRIGHTNESS_MAX)
                        .text("offset"),
                );
                if response.changed() {
                    let offset = self.ui_state.brightness;
                    self.apply_operation(ctx, Operation::Brightness { offset });
                }

                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.ui_state.show_brightness_dialog = false;
                }
            });

        self.ui_state.show_brightness_dialog &= open;
    }

    /// Convolution filter menu: one choice, applied and closed.
    fn render_convolution_menu(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_convolution_menu {
            return;
        }

        let mut open = true;
        egui::Window::new("Convolution Filters")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Select a filter:");
                ui.add_space(4.0);

                for operation in [Operation::Sharpen, Operation::Blur, Operation::EdgeDetect] {
                    if Self::menu_button(ui, &operation.to_string()) {
                        self.apply_operation(ctx, operation);
                        self.ui_state.show_convolution_menu = false;
                    }
                }
            });

        self.ui_state.show_convolution_menu &= open;
    }

    /// Morphology menu: operation x structuring element, applied and
    /// closed.
    fn render_morphology_menu(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_morphology_menu {
            return;
        }

        let mut open = true;
        egui::Window::new("Morphology")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Select operation & structuring element:");
                ui.add_space(4.0);

                let choices = [
                    (MorphOp::Erode, ElementShape::Rect),
                    (MorphOp::Erode, ElementShape::Ellipse),
                    (MorphOp::Dilate, ElementShape::Rect),
                    (MorphOp::Dilate, ElementShape::Ellipse),
                ];
                for (op, shape) in choices {
                    let operation = Operation::Morphology { op, shape };
                    if Self::menu_button(ui, &operation.to_string()) {
                        self.apply_operation(ctx, operation);
                        self.ui_state.show_morphology_menu = false;
                    }
                }
            });

        self.ui_state.show_morphology_menu &= open;
    }

    fn render_warning_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.ui_state.warning.clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Warning")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(accent::RED));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.ui_state.warning = None;
                }
            });

        if !open {
            self.ui_state.warning = None;
        }
    }

    fn render_save_confirmation(&mut self, ctx: &egui::Context) {
        let Some(path) = self.ui_state.saved_to.clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Saved")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Image saved to {}", path.display()));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.ui_state.saved_to = None;
                }
            });

        if !open {
            self.ui_state.saved_to = None;
        }
    }

    fn menu_button(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add(egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 0.0)))
            .clicked()
    }
}
