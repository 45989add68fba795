//! Bottom panel UI: playback controls.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};

pub fn render_bottom_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("bottom_panel")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                render_playback_controls(ui, state);
            });
        });
}

fn render_playback_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let play_icon = if state.playback.playing {
        egui_phosphor::regular::PAUSE
    } else {
        egui_phosphor::regular::PLAY
    };

    if ui
        .button(RichText::new(play_icon).size(14.0))
        .on_hover_text("Play/pause the animation")
        .clicked()
    {
        state.playback.toggle_playback();
        log::debug!("Playback toggled: playing={}", state.playback.playing);
    }

    if ui
        .button(RichText::new(egui_phosphor::regular::REWIND).size(14.0))
        .on_hover_text("Slower")
        .clicked()
    {
        state.playback.adjust_speed(-1.0);
    }

    if ui
        .button(RichText::new(egui_phosphor::regular::FAST_FORWARD).size(14.0))
        .on_hover_text("Faster")
        .clicked()
    {
        state.playback.adjust_speed(1.0);
    }

    ui.label(
        RichText::new(state.playback.speed_label())
            .monospace()
            .size(12.0)
            .color(Color32::from_rgb(200, 200, 220)),
    );

    ui.separator();

    if ui
        .button(RichText::new(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE).size(14.0))
        .on_hover_text("Reset view")
        .clicked()
    {
        state.reset_view();
    }

    ui.separator();

    ui.label(
        RichText::new(format!("Hour {:02}:00", state.camera.hour()))
            .monospace()
            .size(12.0)
            .color(Color32::GRAY),
    );
}
