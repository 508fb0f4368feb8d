//! Ports between the render worker and the rest of the application.

pub mod render_trigger;
pub mod tile_sink;
