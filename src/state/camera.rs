//! Camera state: rotation, zoom, and the time slice.

/// Inclusive zoom bounds.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;

/// Wheel zoom factors (one notch in / out).
pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Screen pixels of drag to radians of rotation.
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Auto-rotation rates in radians per second at 1x speed.
pub const AUTO_ROTATE_X_RATE: f64 = 0.12;
pub const AUTO_ROTATE_Y_RATE: f64 = 0.06;

/// Time-slice advance rate per second at 1x speed.
pub const TIME_RATE: f64 = 30.0;

/// Slices per displayed hour and per full display cycle (24 hours).
pub const SLICES_PER_HOUR: f64 = 10.0;
pub const CYCLE_LENGTH: f64 = 240.0;

/// The view transform parameters, mutated by the animation tick and by
/// pointer input.
///
/// Rotations are unbounded reals (they wrap through trigonometric
/// periodicity in the projection); the time slice only ever grows, and
/// wraps modulo [`CYCLE_LENGTH`] for display purposes only.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// Rotation about the X axis, radians.
    pub rotation_x: f64,
    /// Rotation about the Y axis, radians.
    pub rotation_y: f64,
    /// View scale, clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub zoom: f64,
    /// Monotonic time accumulator driving the depth warp and the hour
    /// readout.
    pub time_slice: f64,
    /// True while a pointer drag is in progress; suspends auto-rotation
    /// and time advance.
    pub dragging: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: 1.0,
            time_slice: 0.0,
            dragging: false,
        }
    }
}

impl CameraState {
    /// Advances auto-rotation and time by `dt` seconds at the given speed
    /// factor. No-op while dragging; the caller gates on play state.
    pub fn advance(&mut self, dt: f64, speed: f64) {
        if self.dragging {
            return;
        }
        self.rotation_x += AUTO_ROTATE_X_RATE * speed * dt;
        self.rotation_y += AUTO_ROTATE_Y_RATE * speed * dt;
        self.time_slice += TIME_RATE * speed * dt;
    }

    /// Applies a pointer drag delta in screen pixels.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.rotation_y += dx * DRAG_SENSITIVITY;
        self.rotation_x += dy * DRAG_SENSITIVITY;
    }

    /// Multiplies the zoom by `factor` and clamps to the valid range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restores rotations, zoom, and time to their exact initial values.
    /// The dragging flag is left alone; it tracks the pointer, not the
    /// view.
    pub fn reset(&mut self) {
        self.rotation_x = 0.0;
        self.rotation_y = 0.0;
        self.zoom = 1.0;
        self.time_slice = 0.0;
    }

    /// Displayed hour of the synthetic day, 0..24.
    pub fn hour(&self) -> usize {
        (self.time_slice / SLICES_PER_HOUR) as usize % 24
    }

    /// Progress through the current display cycle, in [0, 1).
    pub fn cycle_progress(&self) -> f64 {
        (self.time_slice % CYCLE_LENGTH) / CYCLE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_rotation_and_time() {
        let mut camera = CameraState::default();
        camera.advance(1.0, 1.0);

        assert!((camera.rotation_x - AUTO_ROTATE_X_RATE).abs() < 1e-12);
        assert!((camera.rotation_y - AUTO_ROTATE_Y_RATE).abs() < 1e-12);
        assert!((camera.time_slice - TIME_RATE).abs() < 1e-12);
    }

    #[test]
    fn advance_scales_with_speed() {
        let mut camera = CameraState::default();
        camera.advance(0.5, 2.0);
        assert!((camera.time_slice - TIME_RATE).abs() < 1e-12);
    }

    #[test]
    fn advance_is_noop_while_dragging() {
        let mut camera = CameraState::default();
        camera.dragging = true;
        camera.advance(1.0, 1.0);
        assert_eq!(camera, CameraState { dragging: true, ..Default::default() });
    }

    #[test]
    fn zoom_stays_in_bounds() {
        let mut camera = CameraState::default();
        for _ in 0..100 {
            camera.zoom_by(ZOOM_IN_FACTOR);
        }
        assert_eq!(camera.zoom, ZOOM_MAX);

        for _ in 0..100 {
            camera.zoom_by(ZOOM_OUT_FACTOR);
        }
        assert_eq!(camera.zoom, ZOOM_MIN);
    }

    #[test]
    fn reset_restores_exact_initial_values() {
        let mut camera = CameraState::default();
        camera.advance(3.7, 2.5);
        camera.apply_drag(42.0, -17.0);
        camera.zoom_by(ZOOM_IN_FACTOR);

        camera.reset();

        assert_eq!(camera.rotation_x, 0.0);
        assert_eq!(camera.rotation_y, 0.0);
        assert_eq!(camera.zoom, 1.0);
        assert_eq!(camera.time_slice, 0.0);
    }

    #[test]
    fn hour_readout_wraps_every_cycle() {
        let mut camera = CameraState::default();
        assert_eq!(camera.hour(), 0);

        camera.time_slice = 65.0;
        assert_eq!(camera.hour(), 6);

        camera.time_slice = CYCLE_LENGTH + 65.0;
        assert_eq!(camera.hour(), 6);
        assert!((camera.cycle_progress() - 65.0 / CYCLE_LENGTH).abs() < 1e-12);
    }

    #[test]
    fn drag_maps_screen_delta_to_rotation() {
        let mut camera = CameraState::default();
        camera.apply_drag(10.0, -5.0);
        assert!((camera.rotation_y - 0.1).abs() < 1e-12);
        assert!((camera.rotation_x + 0.05).abs() < 1e-12);
    }
}
