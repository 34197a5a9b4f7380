//! Central panel with the original and result panes.

use eframe::egui::{self, Align2, FontFamily, FontId, RichText, Rounding, Sense, Stroke};

use super::theme::ThemeColors;
use crate::app::RasterlabApp;
use crate::viewer::{PANE_HEIGHT, PANE_WIDTH};

impl RasterlabApp {
    /// Render the two fixed-size image panes side by side.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let colors = ThemeColors::from_ctx(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                ui.add_space(16.0);
                render_pane(ui, "Original", self.original_texture.as_ref(), colors);
                ui.add_space(24.0);
                render_pane(ui, "Result", self.result_texture.as_ref(), colors);
            });
        });
    }
}

#[allow(clippy::cast_precision_loss)]
fn render_pane(
    ui: &mut egui::Ui,
    title: &str,
    texture: Option<&egui::TextureHandle>,
    colors: ThemeColors,
) {
    let size = egui::vec2(PANE_WIDTH as f32, PANE_HEIGHT as f32);

    ui.vertical(|ui| {
        ui.set_width(size.x);
        ui.label(RichText::new(title).strong());
        ui.add_space(4.0);

        match texture {
            Some(texture) => {
                ui.image(texture);
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
                ui.painter()
                    .rect_filled(rect, Rounding::same(4.0), colors.bg_input);
                ui.painter().rect_stroke(
                    rect,
                    Rounding::same(4.0),
                    Stroke::new(1.0, colors.border),
                );
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "No image loaded",
                    FontId::new(12.0, FontFamily::Monospace),
                    colors.text_muted,
                );
            }
        }
    });
}
