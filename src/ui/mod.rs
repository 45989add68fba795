//! UI modules for the Geoviz Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, status, and frame stats
//! - Left panel: Add-location form and point list
//! - Central canvas: The projected point-cloud visualization
//! - Bottom panel: Playback controls

mod bottom_panel;
mod canvas;
mod colors;
mod left_panel;
mod top_bar;

pub use bottom_panel::render_bottom_panel;
pub use canvas::render_canvas;
pub use left_panel::render_left_panel;
pub use top_bar::render_top_bar;
