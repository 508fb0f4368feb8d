//! Background rendering for interactive exploration.
//!
//! The controller owns a single worker thread. Each request gets a new
//! generation id; the worker renders it pass by pass through the
//! [`scheduler::ProgressiveScheduler`] and streams tiles to a
//! [`ports::tile_sink::TileSink`], dropping everything that belongs to a
//! superseded generation.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
pub mod scheduler;

pub use controller::InteractiveController;
