use crate::core::data::viewport::Viewport;
use crate::core::errors::config::ConfigError;
use crate::core::fractals::formula_kind::FormulaKind;

/// Snapshot of everything one render needs.
///
/// Built once per triggering change and never mutated afterwards; the
/// `generation` identifies it for cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pixel_width: u32,
    pixel_height: u32,
    viewport: Viewport,
    max_iterations: u32,
    formula: FormulaKind,
    generation: u64,
}

impl RenderRequest {
    pub fn new(
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
        generation: u64,
    ) -> Result<Self, ConfigError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ConfigError::ZeroPixelDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_width,
            pixel_height,
            viewport,
            max_iterations,
            formula,
            generation,
        })
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn formula(&self) -> FormulaKind {
        self.formula
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Same parameters under a new generation id.
    #[must_use]
    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }
}
