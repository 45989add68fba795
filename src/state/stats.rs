//! Frame timing statistics for the top bar.

/// Smoothing factor for the frame-time moving average.
const EMA_ALPHA: f64 = 0.1;

/// Statistics displayed in the top bar.
#[derive(Default, Clone)]
pub struct FrameStats {
    /// Exponential moving average of frame time in milliseconds.
    frame_time_ema_ms: Option<f64>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame of `dt` seconds.
    pub fn record_frame(&mut self, dt: f64) {
        let ms = dt * 1000.0;
        self.frame_time_ema_ms = Some(match self.frame_time_ema_ms {
            Some(ema) => ema + EMA_ALPHA * (ms - ema),
            None => ms,
        });
    }

    /// Smoothed frames per second, if any frames have been recorded.
    pub fn fps(&self) -> Option<f64> {
        self.frame_time_ema_ms
            .filter(|&ms| ms > 0.0)
            .map(|ms| 1000.0 / ms)
    }

    /// Format timing for display (e.g., "16.7 ms · 60 fps").
    pub fn format_frame_stats(&self) -> String {
        match (self.frame_time_ema_ms, self.fps()) {
            (Some(ms), Some(fps)) => format!("{:.1} ms · {:.0} fps", ms, fps),
            _ => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_format_as_dash() {
        let stats = FrameStats::new();
        assert_eq!(stats.format_frame_stats(), "—");
        assert_eq!(stats.fps(), None);
    }

    #[test]
    fn single_frame_sets_the_average() {
        let mut stats = FrameStats::new();
        stats.record_frame(0.020);
        assert!((stats.fps().unwrap() - 50.0).abs() < 1e-9);
        assert_eq!(stats.format_frame_stats(), "20.0 ms · 50 fps");
    }

    #[test]
    fn average_converges_toward_steady_rate() {
        let mut stats = FrameStats::new();
        for _ in 0..200 {
            stats.record_frame(1.0 / 60.0);
        }
        assert!((stats.fps().unwrap() - 60.0).abs() < 0.5);
    }
}
