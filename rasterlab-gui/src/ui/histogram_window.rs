//! Live intensity-histogram window rendering.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use crate::app::RasterlabApp;

impl RasterlabApp {
    /// Render the intensity histogram window (if visible).
    pub(crate) fn render_histogram_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_histogram_window {
            return;
        }

        let hist = self.histogram();

        let mut open = true;
        egui::Window::new("Intensity Histogram")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                let Some(hist) = hist else {
                    ui.label("No Data");
                    return;
                };

                ui.checkbox(&mut self.ui_state.log_plot, "Log Scale");
                let log_plot = self.ui_state.log_plot;

                Plot::new("intensity_hist")
                    .x_axis_label("Intensity")
                    .y_axis_label(if log_plot { "Log10(Counts)" } else { "Counts" })
                    .include_x(0.0)
                    .include_x(255.0)
                    .include_y(0.0)
                    .height(240.0)
                    .show(ui, |plot_ui| {
                        let bars: Vec<Bar> = hist
                            .iter()
                            .enumerate()
                            .map(|(bin, &count)| {
                                #[allow(clippy::cast_precision_loss)]
                                let x = bin as f64;
                                let value = if log_plot {
                                    if count > 0 {
                                        f64::from(count).log10()
                                    } else {
                                        0.0
                                    }
                                } else {
                                    f64::from(count)
                                };
                                Bar::new(x, value).width(1.0)
                            })
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).name("Intensity"));
                    });
            });

        self.ui_state.show_histogram_window &= open;
    }
}
