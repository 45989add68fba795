//! Chart palette: gold chrome on deep navy, plus the intensity-driven
//! point coloring.

use eframe::egui::ecolor::Hsva;
use eframe::egui::Color32;

/// Primary chrome color for grid, connections, and bar fills.
pub const GOLD: Color32 = Color32::from_rgb(229, 184, 11);

/// Highlight variant used for labels and the progress bar tip.
pub const GOLD_LIGHT: Color32 = Color32::from_rgb(245, 216, 53);

/// Canvas background.
pub const BG_DARK: Color32 = Color32::from_rgb(5, 17, 34);

/// Secondary text.
pub const TEXT_DIM: Color32 = Color32::from_rgb(200, 200, 220);

/// GOLD with the given opacity.
pub fn gold_alpha(alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(229, 184, 11, a)
}

/// Navy panel fill with the given opacity.
pub fn navy_alpha(alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(10, 34, 64, a)
}

/// Hue for a data point in degrees: warmer with intensity, offset per
/// point so neighbors stay distinguishable.
pub fn point_hue(intensity: f64, index: usize) -> f32 {
    (intensity * 60.0) as f32 + (index as f32) * 30.0
}

/// HSV to Color32 with hue in degrees (wraps past 360).
pub fn hsv(hue_deg: f32, saturation: f32, value: f32, alpha: f32) -> Color32 {
    let h = (hue_deg.rem_euclid(360.0)) / 360.0;
    Color32::from(Hsva::new(h, saturation, value, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_offsets_by_index() {
        assert_eq!(point_hue(1.0, 0), 60.0);
        assert_eq!(point_hue(1.0, 2), 120.0);
    }

    #[test]
    fn hsv_wraps_hue_degrees() {
        assert_eq!(hsv(380.0, 0.8, 0.6, 1.0), hsv(20.0, 0.8, 0.6, 1.0));
    }

    #[test]
    fn gold_alpha_clamps() {
        assert_eq!(gold_alpha(2.0), gold_alpha(1.0));
        assert_eq!(gold_alpha(-1.0), gold_alpha(0.0));
    }
}
