//! Chart core: data points and the projected point renderer's math.
//!
//! This module is egui-free; the `ui` module turns projected points into
//! painter calls.

pub mod point;
pub mod projection;

pub use point::{AddOutcome, DataPoint, PointSet};
pub use projection::{hit_test, Projector, CONNECTION_DISTANCE};
