use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::sim::Telemetry;

/// Floating window with altitude and velocity history.
pub fn telemetry_window(ctx: &egui::Context, open: &mut bool, telemetry: &Telemetry) {
    egui::Window::new("Telemetry")
        .open(open)
        .default_size([320.0, 360.0])
        .show(ctx, |ui| {
            // Thin out long histories; a few hundred points are plenty on screen
            let step = (telemetry.len() / 600).max(1);

            ui.label("Altitude");
            let points: PlotPoints = telemetry
                .iter()
                .step_by(step)
                .map(|s| [s.time, s.position])
                .collect();
            Plot::new("altitude")
                .height(140.0)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Altitude", points));
                });

            ui.label("Velocity");
            let points: PlotPoints = telemetry
                .iter()
                .step_by(step)
                .map(|s| [s.time, s.velocity])
                .collect();
            Plot::new("velocity")
                .height(140.0)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Velocity", points));
                });
        });
}
