//! Top bar UI: app title, status message, and frame stats.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Geoviz Workbench")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(state.frame_stats.format_frame_stats())
                            .monospace()
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(format!("{} points", state.points.len()))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
            });
        });
}
