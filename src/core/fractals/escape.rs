use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Lower bound for the periodicity bailout precision.
pub const MIN_BAILOUT_PRECISION: f64 = 1e-15;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeParams {
    pub max_iterations: u32,
    /// When set, an orbit that returns within this distance (per component)
    /// of the added constant after the first step is treated as non-escaping.
    pub bailout_precision: Option<f64>,
}

impl EscapeParams {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            bailout_precision: None,
        }
    }

    /// Precision derived from the size of one pixel: `max(1e-15, viewport_width / pixel_width)`.
    #[must_use]
    pub fn with_bailout_for_pixel_size(mut self, viewport_width: f64, pixel_width: u32) -> Self {
        let pixel_size = viewport_width / f64::from(pixel_width.max(1));
        self.bailout_precision = Some(pixel_size.max(MIN_BAILOUT_PRECISION));
        self
    }
}

pub trait EscapeKernel {
    /// Number of completed iterations before `|z|² > 4`, or
    /// `max_iterations` for a point that never escapes.
    fn escape_time(&self, point: Complex, params: &EscapeParams) -> u32;
}

/// Runs `z ← shape(z)² + constant` from `z`, counting until escape.
#[inline]
pub(crate) fn iterate_escape(
    mut z: Complex,
    constant: Complex,
    params: &EscapeParams,
    shape: impl Fn(Complex) -> Complex,
) -> u32 {
    for iteration in 0..params.max_iterations {
        z = shape(z).square() + constant;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        // z₁ = k for the Mandelbrot start, so the first step is never compared
        if iteration > 0
            && let Some(precision) = params.bailout_precision
            && (z.real - constant.real).abs() < precision
            && (z.imag - constant.imag).abs() < precision
        {
            return params.max_iterations;
        }
    }

    params.max_iterations
}
