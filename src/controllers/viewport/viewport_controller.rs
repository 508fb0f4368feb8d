use log::info;
use thiserror::Error;

use crate::controllers::interactive::data::engine_config::EngineConfig;
use crate::controllers::interactive::ports::render_trigger::RenderTrigger;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::errors::config::ConfigError;
use crate::core::fractals::formula_kind::FormulaKind;
use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Foreground view state. Every successful change starts a new render
/// generation and returns its id; a rejected change leaves the view as it was.
pub struct ViewportController<R: RenderTrigger> {
    trigger: R,
    viewport: Viewport,
    initial: Viewport,
    pixel_width: u32,
    pixel_height: u32,
    max_iterations: u32,
    formula: FormulaKind,
    min_zoom_factor: f64,
    max_zoom_factor: f64,
}

impl<R: RenderTrigger> ViewportController<R> {
    pub fn new(
        trigger: R,
        initial: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        config: &EngineConfig,
    ) -> Result<Self, ControlError> {
        check_dimensions(pixel_width, pixel_height)?;
        config.validate()?;

        Ok(Self {
            trigger,
            viewport: initial,
            initial,
            pixel_width,
            pixel_height,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            formula: FormulaKind::default(),
            min_zoom_factor: config.min_zoom_factor,
            max_zoom_factor: config.max_zoom_factor,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn initial_viewport(&self) -> Viewport {
        self.initial
    }

    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn formula(&self) -> FormulaKind {
        self.formula
    }

    /// How far the view is zoomed in relative to the initial bounds.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        self.initial.width() / self.viewport.width()
    }

    #[must_use]
    pub fn trigger(&self) -> &R {
        &self.trigger
    }

    /// Renders the current state without changing it.
    pub fn render(&self) -> Result<u64, ControlError> {
        Ok(self.trigger.request_render(
            self.viewport,
            self.pixel_width,
            self.pixel_height,
            self.max_iterations,
            self.formula,
        )?)
    }

    /// Zooms about the centre. `factor < 1` zooms in; zooming out stops at
    /// the initial width and height.
    pub fn zoom(&mut self, factor: f64) -> Result<u64, ControlError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor }.into());
        }

        let mut width = self.viewport.width() * factor;
        let mut height = self.viewport.height() * factor;
        if factor > 1.0 {
            width = width.min(self.initial.width());
            height = height.min(self.initial.height());
        }

        let mut candidate = self.viewport;
        candidate.resize_around_center(width, height)?;
        self.commit(candidate, "zoom")
    }

    /// Zooms keeping the point under `(pixel_x, pixel_y)` in place.
    pub fn zoom_at(&mut self, pixel_x: f64, pixel_y: f64, factor: f64) -> Result<u64, ControlError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor }.into());
        }

        let mut effective = factor;
        if factor > 1.0 {
            let widest = (self.initial.width() / self.viewport.width())
                .min(self.initial.height() / self.viewport.height());
            effective = factor.min(widest.max(1.0));
        }

        let anchor = self.map_pixel(pixel_x, pixel_y);
        let mut candidate = self.viewport;
        candidate.zoom_about(anchor, effective)?;
        self.commit(candidate, "zoom_at")
    }

    /// Replaces the view with the rectangle dragged between two pixels.
    pub fn zoom_to_selection(
        &mut self,
        start: (f64, f64),
        end: (f64, f64),
    ) -> Result<u64, ControlError> {
        if start.0 == end.0 || start.1 == end.1 {
            return Err(ViewportError::EmptySelection.into());
        }

        let candidate =
            Viewport::from_corners(self.map_pixel(start.0, start.1), self.map_pixel(end.0, end.1))?;
        self.commit(candidate, "selection")
    }

    /// Drags the image by a pixel offset; the content follows the pointer.
    pub fn pan(&mut self, dx_pixels: f64, dy_pixels: f64) -> Result<u64, ControlError> {
        let delta_real = -dx_pixels / f64::from(self.pixel_width) * self.viewport.width();
        let delta_imag = -dy_pixels / f64::from(self.pixel_height) * self.viewport.height();

        self.viewport.pan(delta_real, delta_imag)?;
        info!("pan: view now {:?}", self.viewport);
        self.render()
    }

    pub fn reset(&mut self) -> Result<u64, ControlError> {
        self.viewport = self.initial;
        info!("reset to initial bounds");
        self.render()
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<u64, ControlError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations.into());
        }

        self.max_iterations = max_iterations;
        self.render()
    }

    pub fn set_formula(&mut self, formula: FormulaKind) -> Result<u64, ControlError> {
        self.formula = formula;
        info!("formula: {}", formula.display_name());
        self.render()
    }

    pub fn set_formula_by_name(&mut self, name: &str) -> Result<u64, ControlError> {
        self.set_formula(name.parse()?)
    }

    /// Changes the surface size. The complex bounds are kept.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<u64, ControlError> {
        check_dimensions(pixel_width, pixel_height)?;

        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self.render()
    }

    fn map_pixel(&self, pixel_x: f64, pixel_y: f64) -> Complex {
        map_pixel_to_complex(
            pixel_x,
            pixel_y,
            self.pixel_width,
            self.pixel_height,
            &self.viewport,
        )
    }

    fn commit(&mut self, candidate: Viewport, action: &str) -> Result<u64, ControlError> {
        let magnification = self.initial.width() / candidate.width();

        if !(self.min_zoom_factor..=self.max_zoom_factor).contains(&magnification) {
            info!("{action}: zoom limit reached at {magnification:e}");
            return Err(ViewportError::ZoomLimitReached {
                magnification,
                min: self.min_zoom_factor,
                max: self.max_zoom_factor,
            }
            .into());
        }

        self.viewport = candidate;
        info!("{action}: view now {:?} ({magnification:e}x)", self.viewport);
        self.render()
    }
}

fn check_dimensions(pixel_width: u32, pixel_height: u32) -> Result<(), ConfigError> {
    if pixel_width == 0 || pixel_height == 0 {
        return Err(ConfigError::ZeroPixelDimensions {
            width: pixel_width,
            height: pixel_height,
        });
    }

    Ok(())
}
