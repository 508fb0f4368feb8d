use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeKernel, EscapeParams, iterate_escape};

/// `z₀ = 0`, `zₙ₊₁ = zₙ² + c` with `c` the sampled point.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Mandelbrot;

impl EscapeKernel for Mandelbrot {
    #[inline]
    fn escape_time(&self, point: Complex, params: &EscapeParams) -> u32 {
        iterate_escape(Complex::ZERO, point, params, |z| z)
    }
}
