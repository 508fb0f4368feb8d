use crate::core::data::viewport::Viewport;
use crate::core::errors::config::ConfigError;
use crate::core::fractals::formula_kind::FormulaKind;

/// Starts a new render generation, superseding the previous one.
pub trait RenderTrigger {
    fn request_render(
        &self,
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
    ) -> Result<u64, ConfigError>;
}

impl<T: RenderTrigger + ?Sized> RenderTrigger for &T {
    fn request_render(
        &self,
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
    ) -> Result<u64, ConfigError> {
        (**self).request_render(viewport, pixel_width, pixel_height, max_iterations, formula)
    }
}

impl<T: RenderTrigger + ?Sized> RenderTrigger for std::sync::Arc<T> {
    fn request_render(
        &self,
        viewport: Viewport,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        formula: FormulaKind,
    ) -> Result<u64, ConfigError> {
        (**self).request_render(viewport, pixel_width, pixel_height, max_iterations, formula)
    }
}
