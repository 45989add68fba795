//! Playback controls state.

/// Speed factor bounds and the per-click adjustment step.
pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.5;

/// State for the playback controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the animation is currently advancing.
    pub playing: bool,

    /// Speed factor applied to auto-rotation and time advance.
    pub speed: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        // The chart starts animating as soon as it is shown.
        Self {
            playing: true,
            speed: 1.0,
        }
    }
}

impl PlaybackState {
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Nudges the speed by `direction` steps (negative slows down),
    /// clamped to [`SPEED_MIN`]..=[`SPEED_MAX`].
    pub fn adjust_speed(&mut self, direction: f64) {
        self.speed = (self.speed + direction * SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn speed_label(&self) -> String {
        format!("{:.1}x", self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_clamps_at_maximum() {
        let mut playback = PlaybackState::default();
        for _ in 0..50 {
            playback.adjust_speed(3.0);
        }
        assert_eq!(playback.speed, SPEED_MAX);

        // One more large nudge has no effect.
        playback.adjust_speed(100.0);
        assert_eq!(playback.speed, SPEED_MAX);
    }

    #[test]
    fn speed_clamps_at_minimum() {
        let mut playback = PlaybackState::default();
        for _ in 0..50 {
            playback.adjust_speed(-1.0);
        }
        assert_eq!(playback.speed, SPEED_MIN);
    }

    #[test]
    fn toggle_flips_playing() {
        let mut playback = PlaybackState::default();
        assert!(playback.playing);
        playback.toggle_playback();
        assert!(!playback.playing);
        playback.toggle_playback();
        assert!(playback.playing);
    }

    #[test]
    fn speed_label_formats_one_decimal() {
        let mut playback = PlaybackState::default();
        assert_eq!(playback.speed_label(), "1.0x");
        playback.adjust_speed(1.0);
        assert_eq!(playback.speed_label(), "1.5x");
    }
}
