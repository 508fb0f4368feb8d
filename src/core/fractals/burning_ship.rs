use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeKernel, EscapeParams, iterate_escape};

/// `z₀ = c`, `zₙ₊₁ = (|Re zₙ| + i|Im zₙ|)² + c`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BurningShip;

impl EscapeKernel for BurningShip {
    #[inline]
    fn escape_time(&self, point: Complex, params: &EscapeParams) -> u32 {
        iterate_escape(point, point, params, Complex::abs_parts)
    }
}
