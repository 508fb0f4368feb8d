//! Progressive, tiled escape-time fractal rendering.
//!
//! A [`ViewportController`] turns user actions into render requests for an
//! [`InteractiveController`], whose worker streams tiles, coarse pass
//! first, into any [`TileSink`] such as a [`SharedSurface`].

pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::data::engine_config::EngineConfig;
pub use controllers::interactive::data::tile_data::TileData;
pub use controllers::interactive::errors::render_error::RenderError;
pub use controllers::interactive::events::render_event::RenderEvent;
pub use controllers::interactive::ports::render_trigger::RenderTrigger;
pub use controllers::interactive::ports::tile_sink::TileSink;
pub use controllers::interactive::scheduler::{Delivery, ProgressiveScheduler, ScheduleOutcome};
pub use controllers::viewport::viewport_controller::{ControlError, ViewportController};
pub use crate::core::actions::render_tile::render_tile::{TileError, render_tile, render_tile_parallel};
pub use crate::core::colour::hsl_rotation::{HslRotation, colour_of};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::tile::Tile;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::errors::config::ConfigError;
pub use crate::core::fractals::escape::{EscapeKernel, EscapeParams};
pub use crate::core::fractals::formula_kind::FormulaKind;
pub use crate::core::fractals::kernel::FractalKernel;
pub use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;
pub use presenters::surface::channel_sink::ChannelTileSink;
pub use presenters::surface::shared_surface::SharedSurface;
pub use presenters::surface::surface::Surface;
