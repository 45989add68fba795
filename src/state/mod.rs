//! Application state management.
//!
//! State is organized into logical groupings: camera transform, playback
//! controls, the point collection, and transient UI state (selection,
//! form inputs, status message).

pub mod camera;
mod playback;
mod stats;

pub use camera::CameraState;
pub use playback::PlaybackState;
pub use stats::FrameStats;

use crate::chart::{AddOutcome, PointSet};

/// Default magnitude for user-added locations (the seed values are city
/// populations, so one million keeps custom points in scale).
pub const CUSTOM_LOCATION_VALUE: f64 = 1_000_000.0;

/// Text inputs for the add-location form. Parsed and validated by the
/// left panel before any of them touch the point set.
#[derive(Default)]
pub struct LocationForm {
    pub lat: String,
    pub lng: String,
    pub value: String,
}

/// Root application state containing all sub-states.
pub struct AppState {
    /// View transform parameters
    pub camera: CameraState,

    /// Playback controls state
    pub playback: PlaybackState,

    /// The chart's data points
    pub points: PointSet,

    /// Index of the selected point, if any. Set by a hit test on click,
    /// cleared on the next miss.
    pub selected_point: Option<usize>,

    /// Add-location form inputs
    pub location_form: LocationForm,

    /// Application status message displayed in the top bar
    pub status_message: String,

    /// Frame timing statistics
    pub frame_stats: FrameStats,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            camera: CameraState::default(),
            playback: PlaybackState::default(),
            points: PointSet::seeded(),
            selected_point: None,
            location_form: LocationForm::default(),
            status_message: "Ready".to_string(),
            frame_stats: FrameStats::new(),
        }
    }

    /// Advances the animation by `dt` seconds. No-op while paused; the
    /// camera itself ignores the call while a drag is in progress.
    pub fn advance(&mut self, dt: f64) {
        if !self.playback.playing {
            return;
        }
        self.camera.advance(dt, self.playback.speed);
    }

    /// Resets the camera to its initial view.
    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.status_message = "View reset".to_string();
        log::info!("View reset to defaults");
    }

    /// Adds a point from validated numeric input. Coordinates are
    /// clamped, duplicates select the existing point instead of
    /// appending.
    pub fn add_location(&mut self, lat: f64, lng: f64, value: f64) {
        match self.points.add("Custom Location", lat, lng, value) {
            AddOutcome::Added(index) => {
                self.selected_point = Some(index);
                let point = &self.points.points()[index];
                self.status_message =
                    format!("Added point at {:.4}, {:.4}", point.lat, point.lng);
                log::info!(
                    "Added point {} at ({:.4}, {:.4}) value {}",
                    index,
                    point.lat,
                    point.lng,
                    value
                );
            }
            AddOutcome::Duplicate(index) => {
                self.selected_point = Some(index);
                self.status_message = format!(
                    "Point already exists: {}",
                    self.points.points()[index].name
                );
                log::debug!("Duplicate add ignored, selected point {}", index);
            }
        }
    }

    /// Jumps the view to a location: finds (or adds) the point there,
    /// selects it, and re-centers by resetting the rotations. Zoom and
    /// time are left alone so the jump does not disturb playback.
    pub fn jump_to(&mut self, lat: f64, lng: f64) {
        let lat = lat.clamp(-90.0, 90.0);
        let lng = lng.clamp(-180.0, 180.0);

        let index = match self.points.find_near(lat, lng) {
            Some(index) => index,
            None => self
                .points
                .add("Custom Location", lat, lng, CUSTOM_LOCATION_VALUE)
                .index(),
        };

        self.selected_point = Some(index);
        self.camera.rotation_x = 0.0;
        self.camera.rotation_y = 0.0;
        self.status_message = format!("Centered on {:.4}, {:.4}", lat, lng);
        log::info!("Jumped to ({:.4}, {:.4}), point {}", lat, lng, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_then_reset_restores_initial_camera() {
        let mut state = AppState::new();
        state.advance(2.5);
        state.advance(0.7);
        assert!(state.camera.time_slice > 0.0);

        state.reset_view();

        assert_eq!(state.camera.rotation_x, 0.0);
        assert_eq!(state.camera.rotation_y, 0.0);
        assert_eq!(state.camera.zoom, 1.0);
        assert_eq!(state.camera.time_slice, 0.0);
    }

    #[test]
    fn advance_is_noop_while_paused() {
        let mut state = AppState::new();
        state.playback.playing = false;
        state.advance(1.0);
        assert_eq!(state.camera.time_slice, 0.0);
        assert_eq!(state.camera.rotation_x, 0.0);
    }

    #[test]
    fn advance_is_noop_while_dragging() {
        let mut state = AppState::new();
        state.camera.dragging = true;
        state.advance(1.0);
        assert_eq!(state.camera.time_slice, 0.0);
    }

    #[test]
    fn add_location_selects_the_new_point() {
        let mut state = AppState::new();
        let before = state.points.len();

        state.add_location(48.8566, 2.3522, 2_100_000.0);

        assert_eq!(state.points.len(), before + 1);
        assert_eq!(state.selected_point, Some(before));
    }

    #[test]
    fn duplicate_add_selects_existing_point() {
        let mut state = AppState::new();
        let before = state.points.len();

        // NYC already exists in the seed list.
        state.add_location(40.7128, -74.006, 1.0);

        assert_eq!(state.points.len(), before);
        assert_eq!(state.selected_point, Some(0));
    }

    #[test]
    fn jump_to_resets_rotation_but_keeps_zoom_and_time() {
        let mut state = AppState::new();
        state.advance(2.0);
        state.camera.zoom_by(crate::state::camera::ZOOM_IN_FACTOR);
        let time = state.camera.time_slice;
        let zoom = state.camera.zoom;

        state.jump_to(51.5074, -0.1278);

        assert_eq!(state.camera.rotation_x, 0.0);
        assert_eq!(state.camera.rotation_y, 0.0);
        assert_eq!(state.camera.zoom, zoom);
        assert_eq!(state.camera.time_slice, time);
        assert!(state.selected_point.is_some());
    }

    #[test]
    fn jump_to_existing_point_does_not_duplicate() {
        let mut state = AppState::new();
        let before = state.points.len();

        state.jump_to(25.7617, -80.1918); // Miami

        assert_eq!(state.points.len(), before);
        assert_eq!(state.selected_point, Some(5));
    }
}
