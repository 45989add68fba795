//! Left panel UI: add-location form and the point list.

use crate::state::{AppState, CUSTOM_LOCATION_VALUE};
use eframe::egui::{self, Color32, RichText};

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("left_panel")
        .exact_width(200.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("Add Location").strong().size(13.0));
            ui.add_space(4.0);

            ui.label(RichText::new("Latitude").size(11.0).color(Color32::GRAY));
            ui.text_edit_singleline(&mut state.location_form.lat);

            ui.label(RichText::new("Longitude").size(11.0).color(Color32::GRAY));
            ui.text_edit_singleline(&mut state.location_form.lng);

            ui.label(RichText::new("Value").size(11.0).color(Color32::GRAY));
            ui.text_edit_singleline(&mut state.location_form.value);

            // Numeric validation gates the buttons; nothing is mutated
            // until both coordinates parse to finite values.
            let lat = parse_coordinate(&state.location_form.lat);
            let lng = parse_coordinate(&state.location_form.lng);
            let value = parse_optional_value(&state.location_form.value);

            let coords_valid = lat.is_some() && lng.is_some();
            let input_valid = coords_valid && value.is_some();

            let has_input = !state.location_form.lat.trim().is_empty()
                || !state.location_form.lng.trim().is_empty();
            if has_input && !input_valid {
                ui.label(
                    RichText::new("Enter numeric coordinates")
                        .size(10.0)
                        .color(Color32::from_rgb(220, 120, 120)),
                );
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(input_valid, egui::Button::new("Add Point"))
                    .clicked()
                {
                    // input_valid guarantees the parses succeeded
                    if let (Some(lat), Some(lng), Some(value)) = (lat, lng, value) {
                        state.add_location(lat, lng, value);
                    }
                }

                if ui
                    .add_enabled(coords_valid, egui::Button::new("Jump To"))
                    .clicked()
                {
                    if let (Some(lat), Some(lng)) = (lat, lng) {
                        state.jump_to(lat, lng);
                    }
                }
            });

            ui.add_space(8.0);
            ui.separator();

            ui.label(RichText::new("Points").strong().size(13.0));
            ui.add_space(2.0);

            render_point_list(ui, state);
        });
}

/// A coordinate must parse to a finite number; "NaN" and "inf" parse
/// successfully but would poison clamping and dedup downstream.
fn parse_coordinate(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Empty value means "use the default"; anything else must parse finite.
fn parse_optional_value(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(CUSTOM_LOCATION_VALUE);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn render_point_list(ui: &mut egui::Ui, state: &mut AppState) {
    let mut clicked = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, point) in state.points.points().iter().enumerate() {
            let selected = state.selected_point == Some(index);
            let label = format!("{} · {:.1}M", point.name, point.value / 1_000_000.0);

            if ui.selectable_label(selected, label).clicked() {
                clicked = Some((index, selected));
            }
        }
    });

    if let Some((index, was_selected)) = clicked {
        state.selected_point = if was_selected { None } else { Some(index) };
        if let Some(point) = state.selected_point.and_then(|i| state.points.get(i)) {
            state.status_message = format!("Selected {}", point.name);
        }
    }
}
