use log::{debug, trace};
use std::num::NonZeroU32;
use std::time::Instant;

use crate::controllers::interactive::data::engine_config::EngineConfig;
use crate::controllers::interactive::data::tile_data::TileData;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_tile::render_tile::{
    TileError, render_tile_parallel, render_tile_with_params,
};
use crate::core::colour::hsl_rotation::HslRotation;
use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::config::ConfigError;
use crate::core::fractals::escape::EscapeParams;
use crate::core::fractals::kernel::FractalKernel;
use crate::core::util::tile_layout::{PassPlan, plan_passes};

/// What happened to a tile handed to the emit callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The generation was superseded before the tile could be delivered.
    Stale,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Completed { tiles: usize },
    Cancelled,
}

/// Renders a request as a series of passes, coarse to fine, one tile at a time.
#[derive(Debug, Clone)]
pub struct ProgressiveScheduler {
    scales: Vec<NonZeroU32>,
    tile_size: NonZeroU32,
    julia_constant: Complex,
    periodicity_check: bool,
    parallel_tiles: bool,
}

impl ProgressiveScheduler {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            scales: config.pass_scales()?,
            tile_size: config.tile_size()?,
            julia_constant: config.julia_constant,
            periodicity_check: config.periodicity_check,
            parallel_tiles: config.parallel_tiles,
        })
    }

    #[must_use]
    pub fn plan(&self, request: &RenderRequest) -> Vec<PassPlan> {
        plan_passes(
            request.pixel_width(),
            request.pixel_height(),
            &self.scales,
            self.tile_size,
        )
    }

    /// Renders every tile of every pass and hands each to `emit`.
    ///
    /// `cancel` is checked before a tile is started and again before it is
    /// emitted. Cancellation, or a [`Delivery::Stale`] answer from `emit`,
    /// abandons all remaining tiles.
    pub fn run<C, F>(
        &self,
        request: &RenderRequest,
        cancel: &C,
        mut emit: F,
    ) -> Result<ScheduleOutcome, TileError>
    where
        C: CancelToken,
        F: FnMut(TileData) -> Delivery,
    {
        let generation = request.generation();
        let viewport = request.viewport();
        let kernel = FractalKernel::new(request.formula(), self.julia_constant);
        let colour_map = HslRotation::new(request.max_iterations());
        let plans = self.plan(request);
        let pass_count = plans.len();
        let mut delivered = 0;

        for (pass_index, pass) in plans.iter().enumerate() {
            let is_final_pass = pass_index + 1 == pass_count;
            let mut params = EscapeParams::new(request.max_iterations());
            if self.periodicity_check {
                params = params.with_bailout_for_pixel_size(viewport.width(), pass.frame_width);
            }

            debug!(
                "generation {generation}: pass {}/{pass_count} at 1/{} scale, {}x{} frame, {} tiles",
                pass_index + 1,
                pass.scale,
                pass.frame_width,
                pass.frame_height,
                pass.tiles.len()
            );

            for (tile_index, tile) in pass.tiles.iter().enumerate() {
                if cancel.is_cancelled() {
                    debug!("generation {generation}: cancelled before tile {tile_index} of pass {}", pass_index + 1);
                    return Ok(ScheduleOutcome::Cancelled);
                }

                let start = Instant::now();
                let frame = (pass.frame_width, pass.frame_height);
                let pixel_buffer = if self.parallel_tiles {
                    render_tile_parallel(tile, frame, &viewport, &params, &kernel, &colour_map)?
                } else {
                    render_tile_with_params(tile, frame, &viewport, &params, &kernel, &colour_map)?
                };
                let render_duration = start.elapsed();

                if cancel.is_cancelled() {
                    debug!("generation {generation}: dropped finished tile {tile_index}");
                    return Ok(ScheduleOutcome::Cancelled);
                }

                trace!(
                    "generation {generation}: tile ({}, {}) {}x{} in {render_duration:?}",
                    tile.origin_x, tile.origin_y, tile.width, tile.height
                );

                let tile_data = TileData {
                    generation,
                    tile: *tile,
                    pixel_buffer,
                    is_final_tile_of_final_pass: is_final_pass
                        && tile_index + 1 == pass.tiles.len(),
                    render_duration,
                };

                match emit(tile_data) {
                    Delivery::Delivered => delivered += 1,
                    Delivery::Stale => {
                        debug!("generation {generation}: superseded during delivery");
                        return Ok(ScheduleOutcome::Cancelled);
                    }
                }
            }
        }

        Ok(ScheduleOutcome::Completed { tiles: delivered })
    }
}
