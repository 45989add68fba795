//! Central canvas UI: the projected point-cloud visualization.
//!
//! Each frame builds a [`Projector`] from the camera state, paints the
//! reference grid, connection lines, point glyphs, time bar, and info
//! overlay, then feeds pointer input back into the camera.

use crate::chart::{hit_test, DataPoint, Projector, CONNECTION_DISTANCE};
use crate::state::AppState;
use crate::ui::colors;
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind};
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

/// Extent and spacing of the reference grid on the z=0 plane.
const GRID_EXTENT: i32 = 200;
const GRID_STEP: i32 = 50;

/// Decorative radial stream lines per point.
const STREAM_COUNT: usize = 8;

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();

        // Allocate the full available space for the canvas
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        // Draw background
        painter.rect_filled(rect, 0.0, colors::BG_DARK);

        let center = DVec2::new(rect.center().x as f64, rect.center().y as f64);
        let projector = Projector::new(
            state.camera.rotation_x,
            state.camera.rotation_y,
            state.camera.zoom,
            state.camera.time_slice,
            center,
        );

        draw_grid(&painter, &projector);
        draw_connections(&painter, &projector, state.points.points());

        let hour = state.camera.hour();
        let time_slice = state.camera.time_slice;
        for (index, point) in state.points.points().iter().enumerate() {
            let selected = state.selected_point == Some(index);
            draw_point(&painter, &projector, point, index, hour, time_slice, selected);
        }

        draw_time_bar(&painter, &rect, state);
        draw_overlay_info(&painter, &rect, state);

        handle_canvas_interaction(&response, state, &projector);
    });
}

/// Reference grid: projected cell corners on the z=0 plane, each corner
/// connected to its +x and +y neighbors.
fn draw_grid(painter: &Painter, projector: &Projector) {
    let stroke = Stroke::new(1.0, colors::gold_alpha(0.1));

    for i in (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_STEP as usize) {
        for j in (-GRID_EXTENT..=GRID_EXTENT).step_by(GRID_STEP as usize) {
            let p1 = projector.project(DVec3::new(i as f64, j as f64, 0.0));
            let p2 = projector.project(DVec3::new((i + GRID_STEP) as f64, j as f64, 0.0));
            let p3 = projector.project(DVec3::new(i as f64, (j + GRID_STEP) as f64, 0.0));

            painter.line_segment([to_pos2(p1.pos), to_pos2(p2.pos)], stroke);
            painter.line_segment([to_pos2(p1.pos), to_pos2(p3.pos)], stroke);
        }
    }
}

/// Connection lines between point pairs whose planar (pre-projection)
/// distance is under the threshold, fading with distance.
fn draw_connections(painter: &Painter, projector: &Projector, points: &[DataPoint]) {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let distance = points[i].position.distance(points[j].position);
            if distance >= CONNECTION_DISTANCE {
                continue;
            }

            let opacity = (CONNECTION_DISTANCE - distance) / CONNECTION_DISTANCE * 0.3;
            let a = projector.project(points[i].position);
            let b = projector.project(points[j].position);

            painter.line_segment(
                [to_pos2(a.pos), to_pos2(b.pos)],
                Stroke::new(1.0, colors::gold_alpha(opacity as f32)),
            );
        }
    }
}

/// One point: layered glow, core disc, rotating stream rays, and labels.
///
/// The glyph is drawn with its depth modulated by the current intensity,
/// so points bob toward and away from the viewer through the day cycle.
fn draw_point(
    painter: &Painter,
    projector: &Projector,
    point: &DataPoint,
    index: usize,
    hour: usize,
    time_slice: f64,
    selected: bool,
) {
    let intensity = point.intensity(hour);
    let warped = DVec3::new(
        point.position.x,
        point.position.y,
        point.position.z * intensity,
    );
    let projected = projector.project(warped);
    let pos = to_pos2(projected.pos);

    let size = (5.0 + projected.scale * 15.0 * intensity) as f32;
    let hue = colors::point_hue(intensity, index);

    // Layered glow standing in for a radial gradient
    painter.circle_filled(pos, size * 2.0, colors::hsv(hue, 0.7, 0.5, 0.15));
    painter.circle_filled(pos, size * 1.4, colors::hsv(hue, 0.75, 0.55, 0.3));

    // Core disc
    painter.circle_filled(pos, size, colors::hsv(hue, 0.9, 0.7, 1.0));

    if selected {
        painter.circle_stroke(pos, size + 4.0, Stroke::new(1.5, colors::GOLD_LIGHT));
    }

    draw_streams(painter, pos, projected.scale, intensity, time_slice);

    // Labels: name and the time-indexed value in millions
    let font_size = (10.0 * projected.scale as f32).max(6.0);
    let label_pos = pos + egui::Vec2::new(size + 5.0, -5.0);
    painter.text(
        label_pos,
        Align2::LEFT_BOTTOM,
        &point.name,
        FontId::proportional(font_size),
        colors::GOLD_LIGHT,
    );
    painter.text(
        label_pos + egui::Vec2::new(0.0, 15.0),
        Align2::LEFT_BOTTOM,
        format!("{:.1}M", point.sample(hour) / 1_000_000.0),
        FontId::proportional(font_size),
        colors::GOLD_LIGHT,
    );
}

/// Evenly spaced radial rays that rotate with the time slice; their
/// length tracks intensity and perspective scale. Drawn in two segments
/// to fade out toward the tip.
fn draw_streams(painter: &Painter, pos: Pos2, scale: f64, intensity: f64, time_slice: f64) {
    let length = (30.0 * intensity * scale) as f32;
    if length <= 0.0 {
        return;
    }

    for i in 0..STREAM_COUNT {
        let angle = (i as f64 / STREAM_COUNT as f64) * TAU + time_slice * 0.05;
        let dir = egui::Vec2::new(angle.cos() as f32, angle.sin() as f32);
        let mid = pos + dir * (length * 0.5);
        let end = pos + dir * length;

        painter.line_segment(
            [pos, mid],
            Stroke::new(2.0 * scale as f32, colors::gold_alpha(0.8)),
        );
        painter.line_segment(
            [mid, end],
            Stroke::new(scale as f32, colors::gold_alpha(0.25)),
        );
    }
}

/// Progress bar through the 24-hour display cycle, along the bottom of
/// the canvas.
fn draw_time_bar(painter: &Painter, rect: &Rect, state: &AppState) {
    let bar_width = rect.width() - 100.0;
    if bar_width <= 0.0 {
        return;
    }

    let bar_height = 20.0;
    let bar_min = Pos2::new(rect.left() + 50.0, rect.bottom() - 50.0);
    let bar_rect = Rect::from_min_size(bar_min, egui::Vec2::new(bar_width, bar_height));

    painter.rect_filled(bar_rect, 2.0, colors::navy_alpha(0.8));

    let progress = state.camera.cycle_progress() as f32;
    if progress > 0.0 {
        let fill = Rect::from_min_size(bar_min, egui::Vec2::new(bar_width * progress, bar_height));
        painter.rect_filled(fill, 2.0, colors::GOLD);
    }

    painter.rect_stroke(
        bar_rect,
        2.0,
        Stroke::new(1.0, colors::gold_alpha(0.4)),
        StrokeKind::Outside,
    );

    painter.text(
        bar_min + egui::Vec2::new(0.0, -5.0),
        Align2::LEFT_BOTTOM,
        "Time Dimension",
        FontId::proportional(12.0),
        colors::GOLD_LIGHT,
    );
    painter.text(
        Pos2::new(bar_rect.right(), bar_min.y - 5.0),
        Align2::RIGHT_BOTTOM,
        format!("Hour: {:02}:00", state.camera.hour()),
        FontId::monospace(12.0),
        colors::GOLD_LIGHT,
    );
}

/// Info overlay in the top-left corner: view parameters plus details of
/// the selected point.
fn draw_overlay_info(painter: &Painter, rect: &Rect, state: &AppState) {
    let selected = state
        .selected_point
        .and_then(|index| state.points.get(index));

    let height = if selected.is_some() { 150.0 } else { 105.0 };
    let panel = Rect::from_min_size(
        rect.left_top() + egui::Vec2::new(10.0, 10.0),
        egui::Vec2::new(220.0, height),
    );

    painter.rect_filled(panel, 4.0, colors::navy_alpha(0.95));
    painter.rect_stroke(panel, 4.0, Stroke::new(2.0, colors::GOLD), StrokeKind::Outside);

    let mut cursor = panel.left_top() + egui::Vec2::new(10.0, 10.0);
    let mut line = |painter: &Painter, text: String, color: Color32| {
        painter.text(
            cursor,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(11.0),
            color,
        );
        cursor.y += 15.0;
    };

    line(
        painter,
        "4D GEOSPATIAL ANALYSIS".to_string(),
        colors::GOLD_LIGHT,
    );
    line(
        painter,
        "Drag: rotate · Wheel: zoom".to_string(),
        colors::TEXT_DIM,
    );
    line(
        painter,
        "Click points for details".to_string(),
        colors::TEXT_DIM,
    );
    line(
        painter,
        format!(
            "Speed: {}  Zoom: {:.1}x",
            state.playback.speed_label(),
            state.camera.zoom
        ),
        colors::TEXT_DIM,
    );
    line(
        painter,
        format!("Time: {:02}:00", state.camera.hour()),
        colors::TEXT_DIM,
    );

    if let Some(point) = selected {
        line(painter, format!("▸ {}", point.name), colors::GOLD);
        line(
            painter,
            format!("{:.4}, {:.4}", point.lat, point.lng),
            colors::TEXT_DIM,
        );
        line(
            painter,
            format!("{:.1}M people", point.value / 1_000_000.0),
            colors::TEXT_DIM,
        );
    }
}

fn handle_canvas_interaction(
    response: &egui::Response,
    state: &mut AppState,
    projector: &Projector,
) {
    // Drag rotates the camera and suspends the animation for the
    // duration of the drag.
    if response.drag_started() {
        state.camera.dragging = true;
    }
    if response.dragged() {
        let delta = response.drag_delta();
        state.camera.apply_drag(delta.x as f64, delta.y as f64);
    }
    if response.drag_stopped() {
        state.camera.dragging = false;
    }

    // Click selects the nearest point under the pointer; a miss clears
    // the selection.
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let pointer = DVec2::new(pos.x as f64, pos.y as f64);
            match hit_test(projector, state.points.points(), pointer) {
                Some(index) => {
                    state.status_message =
                        format!("Selected {}", state.points.points()[index].name);
                    state.selected_point = Some(index);
                    log::debug!("Selected point {}", index);
                }
                None => {
                    state.selected_point = None;
                }
            }
        }
    }

    // Wheel zooms around the canvas center.
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let factor = if scroll_delta.y > 0.0 {
                crate::state::camera::ZOOM_IN_FACTOR
            } else {
                crate::state::camera::ZOOM_OUT_FACTOR
            };
            state.camera.zoom_by(factor);
        }
    }

    // Reset view on double-click
    if response.double_clicked() {
        state.reset_view();
    }
}

fn to_pos2(v: DVec2) -> Pos2 {
    Pos2::new(v.x as f32, v.y as f32)
}
