//! Geo-tagged data points and the synthetic time dimension.
//!
//! Points carry a fixed planar position derived once from lat/lng and a
//! 24-sample diurnal series derived once from the base value. Both are
//! immutable after construction; only the camera changes between frames.

use geo_types::Coord;
use glam::DVec3;
use serde::Deserialize;

/// Samples in one synthetic day of data.
pub const SAMPLES_PER_CYCLE: usize = 24;

/// Coordinates closer than this (after clamping) are treated as the same
/// location when adding points.
pub const DEDUP_EPSILON: f64 = 1e-4;

/// Seed data embedded at compile time.
static SEED_CITIES: &str = include_str!("../../assets/cities.json");

#[derive(Deserialize)]
struct SeedCity {
    name: String,
    lat: f64,
    lng: f64,
    value: f64,
}

/// A single geo-tagged, time-varying data point.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Display name (city or "Custom Location").
    pub name: String,
    /// Latitude in degrees, clamped to [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, clamped to [-180, 180].
    pub lng: f64,
    /// Base magnitude (population for the seed cities).
    pub value: f64,
    /// Planar position derived from (lat, lng, value), origin at the
    /// chart center. Immutable once created.
    pub position: DVec3,
    /// Synthetic 24-sample cycle derived from `value`. Immutable.
    pub time_series: [f64; SAMPLES_PER_CYCLE],
}

impl DataPoint {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, value: f64) -> Self {
        let lat = lat.clamp(-90.0, 90.0);
        let lng = lng.clamp(-180.0, 180.0);

        let mut time_series = [0.0; SAMPLES_PER_CYCLE];
        for (i, sample) in time_series.iter_mut().enumerate() {
            *sample = value * (0.8 + (i as f64 * std::f64::consts::PI / 12.0).sin() * 0.3);
        }

        Self {
            name: name.into(),
            lat,
            lng,
            value,
            position: planar_position(Coord { x: lng, y: lat }, value),
            time_series,
        }
    }

    /// Ratio of the time-indexed sample to the base value, in roughly
    /// [0.5, 1.1]. Drives glyph size, hue, and stream length.
    pub fn intensity(&self, hour: usize) -> f64 {
        if self.value == 0.0 {
            return 0.0;
        }
        self.time_series[hour % SAMPLES_PER_CYCLE] / self.value
    }

    /// Time-indexed sample value.
    pub fn sample(&self, hour: usize) -> f64 {
        self.time_series[hour % SAMPLES_PER_CYCLE]
    }
}

/// Maps geographic coordinates onto the chart plane.
///
/// Longitude spans x in [-360, 360] at 4 units/degree, latitude spans
/// y in [-135, 405] at 3 units/degree (y grows southward, matching screen
/// space), and the value becomes depth in millions.
pub fn planar_position(coord: Coord<f64>, value: f64) -> DVec3 {
    DVec3::new(
        (coord.x + 180.0) * 4.0 - 360.0,
        (90.0 - coord.y) * 3.0 - 135.0,
        value / 1_000_000.0,
    )
}

/// Outcome of an [`PointSet::add`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new point was appended at this index.
    Added(usize),
    /// An existing point already occupies these coordinates.
    Duplicate(usize),
}

impl AddOutcome {
    pub fn index(&self) -> usize {
        match self {
            AddOutcome::Added(i) | AddOutcome::Duplicate(i) => *i,
        }
    }
}

/// The chart's point collection.
///
/// Seeded from the embedded city list; user-added points are appended
/// with coordinate clamping and deduplication.
pub struct PointSet {
    points: Vec<DataPoint>,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PointSet {
    /// An empty set, for building collections point by point.
    #[allow(dead_code)] // Used by tests
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// The six-city seed list from the embedded asset.
    pub fn seeded() -> Self {
        let cities: Vec<SeedCity> =
            serde_json::from_str(SEED_CITIES).expect("embedded city list is valid JSON");

        let points = cities
            .into_iter()
            .map(|c| DataPoint::new(c.name, c.lat, c.lng, c.value))
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[allow(dead_code)] // Counterpart to len()
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point, clamping out-of-range coordinates.
    ///
    /// Idempotent: a second add within [`DEDUP_EPSILON`] of an existing
    /// point returns the existing index without mutating the set.
    pub fn add(&mut self, name: impl Into<String>, lat: f64, lng: f64, value: f64) -> AddOutcome {
        let lat = lat.clamp(-90.0, 90.0);
        let lng = lng.clamp(-180.0, 180.0);

        if let Some(existing) = self.find_near(lat, lng) {
            return AddOutcome::Duplicate(existing);
        }

        self.points.push(DataPoint::new(name, lat, lng, value));
        AddOutcome::Added(self.points.len() - 1)
    }

    /// Index of a point within the dedup epsilon of (lat, lng), if any.
    pub fn find_near(&self, lat: f64, lng: f64) -> Option<usize> {
        self.points.iter().position(|p| {
            (p.lat - lat).abs() < DEDUP_EPSILON && (p.lng - lng).abs() < DEDUP_EPSILON
        })
    }
}
