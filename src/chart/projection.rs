//! Camera transform: rotation, time warp, and perspective projection.
//!
//! The "4D" effect is a scalar time warp folded into the depth coordinate
//! during projection, not a literal fourth spatial axis. Each frame the
//! UI builds a [`Projector`] from the current camera state and maps every
//! point through it.

use glam::{DVec2, DVec3};

use super::point::DataPoint;

/// Perspective focal constant: `scale = F / (F + depth)`.
pub const FOCAL_LENGTH: f64 = 400.0;

/// Lower bound on the perspective divisor. Points rotated behind the
/// focal plane would otherwise blow up the divide (or flip sign); they
/// are clamped to a large-but-finite scale instead.
pub const MIN_PERSPECTIVE_DEPTH: f64 = 1.0;

/// Screen-space radius for point picking, in pixels.
pub const HIT_RADIUS: f64 = 20.0;

/// Points whose planar positions are closer than this get a connection
/// line drawn between them.
pub const CONNECTION_DISTANCE: f64 = 200.0;

/// A point mapped to screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position in pixels.
    pub pos: DVec2,
    /// Perspective factor in (0, F]; closer points have larger scale and
    /// render with larger glyphs and text.
    pub scale: f64,
}

/// Snapshot of the view transform for one frame.
///
/// Rotation terms are precomputed once per frame since every point, grid
/// corner, and hit test shares them.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    cos_x: f64,
    sin_x: f64,
    cos_y: f64,
    sin_y: f64,
    /// Bounded sinusoidal depth perturbation derived from the time slice.
    time_warp: f64,
    zoom: f64,
    /// Canvas midpoint in screen pixels.
    center: DVec2,
}

impl Projector {
    pub fn new(
        rotation_x: f64,
        rotation_y: f64,
        zoom: f64,
        time_slice: f64,
        center: DVec2,
    ) -> Self {
        Self {
            cos_x: rotation_x.cos(),
            sin_x: rotation_x.sin(),
            cos_y: rotation_y.cos(),
            sin_y: rotation_y.sin(),
            time_warp: (time_slice * 0.1).sin() * 0.2,
            zoom,
            center,
        }
    }

    /// Projects a chart-space point to screen space.
    ///
    /// Order of operations: rotate about X, perturb depth by the time
    /// warp, rotate about Y, perspective-divide, then zoom and center.
    pub fn project(&self, p: DVec3) -> Projected {
        // Rotate around X axis; the time warp rides on the depth that
        // comes out of this rotation.
        let y1 = p.y * self.cos_x - p.z * self.sin_x;
        let z1 = p.y * self.sin_x + p.z * self.cos_x + self.time_warp;

        // Rotate around Y axis.
        let x2 = p.x * self.cos_y + z1 * self.sin_y;
        let z2 = -p.x * self.sin_y + z1 * self.cos_y;

        // Perspective divide, guarded against the divisor approaching
        // zero for points rotated up against the focal plane.
        let depth = (FOCAL_LENGTH + z2).max(MIN_PERSPECTIVE_DEPTH);
        let scale = FOCAL_LENGTH / depth;

        Projected {
            pos: self.center + DVec2::new(x2, y1) * scale * self.zoom,
            scale,
        }
    }
}

/// Finds the point whose projection is nearest the pointer, within
/// [`HIT_RADIUS`]. Nearest distance wins when projections overlap.
pub fn hit_test(projector: &Projector, points: &[DataPoint], pointer: DVec2) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, point) in points.iter().enumerate() {
        let projected = projector.project(point.position);
        let distance = projected.pos.distance(pointer);
        if distance < HIT_RADIUS && best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::point::PointSet;

    fn identity_projector() -> Projector {
        Projector::new(0.0, 0.0, 1.0, 0.0, DVec2::new(400.0, 300.0))
    }

    #[test]
    fn nyc_at_identity_camera() {
        // NYC planar position is (63.976, 12.8616, 8.5). With no rotation,
        // no time warp, and zoom 1, the projection is the canvas center
        // offset by the base (x, y) scaled by 400 / (400 + 8.5).
        let set = PointSet::seeded();
        let nyc = &set.points()[0];

        let projected = identity_projector().project(nyc.position);

        let expected_scale = 400.0 / 408.5;
        assert!((projected.scale - expected_scale).abs() < 1e-12);
        assert!((projected.pos.x - (400.0 + 63.976 * expected_scale)).abs() < 1e-9);
        assert!((projected.pos.y - (300.0 + 12.8616 * expected_scale)).abs() < 1e-9);

        // Hand-computed: (462.6448, 312.5940).
        assert!((projected.pos.x - 462.6448).abs() < 1e-3);
        assert!((projected.pos.y - 312.5940).abs() < 1e-3);
    }

    #[test]
    fn origin_projects_to_center() {
        let projected = identity_projector().project(DVec3::ZERO);
        assert!((projected.pos.x - 400.0).abs() < 1e-12);
        assert!((projected.pos.y - 300.0).abs() < 1e-12);
        assert!((projected.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn projection_is_continuous_in_camera_parameters() {
        let p = DVec3::new(63.976, 12.8616, 8.5);
        let center = DVec2::new(400.0, 300.0);

        let a = Projector::new(0.3, 0.7, 1.5, 5.0, center).project(p);
        let b = Projector::new(0.3001, 0.7001, 1.5, 5.001, center).project(p);

        assert!(a.pos.distance(b.pos) < 1.0);
        assert!((a.scale - b.scale).abs() < 0.01);
    }

    #[test]
    fn perspective_divisor_is_clamped() {
        // Depth of -450 would put the raw divisor at -50; the clamp keeps
        // scale finite and positive instead of exploding or flipping.
        let projected = identity_projector().project(DVec3::new(10.0, 10.0, -450.0));
        assert!(projected.scale.is_finite());
        assert!((projected.scale - FOCAL_LENGTH / MIN_PERSPECTIVE_DEPTH).abs() < 1e-12);
        assert!(projected.pos.x.is_finite() && projected.pos.y.is_finite());
    }

    #[test]
    fn zoom_scales_screen_offset() {
        let p = DVec3::new(50.0, 0.0, 0.0);
        let center = DVec2::new(400.0, 300.0);

        let base = Projector::new(0.0, 0.0, 1.0, 0.0, center).project(p);
        let zoomed = Projector::new(0.0, 0.0, 2.0, 0.0, center).project(p);

        assert!(((zoomed.pos.x - 400.0) - 2.0 * (base.pos.x - 400.0)).abs() < 1e-9);
    }

    #[test]
    fn hit_test_misses_beyond_radius() {
        let set = PointSet::seeded();
        let projector = identity_projector();

        assert_eq!(
            hit_test(&projector, set.points(), DVec2::new(-1000.0, -1000.0)),
            None
        );
    }

    #[test]
    fn hit_test_finds_point_at_exact_center() {
        let set = PointSet::seeded();
        let projector = identity_projector();

        let nyc = projector.project(set.points()[0].position);
        assert_eq!(hit_test(&projector, set.points(), nyc.pos), Some(0));
    }

    #[test]
    fn hit_test_prefers_nearest_of_overlapping_points() {
        let mut set = PointSet::empty();
        // Two points a few pixels apart on screen, both within the hit
        // radius of a pointer placed between them but nearer the second.
        set.add("a", 0.0, 0.0, 0.0);
        set.add("b", 0.0, 0.5, 0.0); // 2 planar units east => ~2 px

        let projector = identity_projector();
        let a = projector.project(set.points()[0].position).pos;
        let b = projector.project(set.points()[1].position).pos;

        let near_b = (a + b * 3.0) / 4.0;
        assert_eq!(hit_test(&projector, set.points(), near_b), Some(1));
    }
}
