use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeKernel, EscapeParams, iterate_escape};

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex {
    real: -0.7,
    imag: 0.27015,
};

/// `z₀` is the sampled point, `zₙ₊₁ = zₙ² + k` with a fixed constant `k`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Julia {
    constant: Complex,
}

impl Julia {
    #[must_use]
    pub fn new(constant: Complex) -> Self {
        Self { constant }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self::new(DEFAULT_JULIA_CONSTANT)
    }
}

impl EscapeKernel for Julia {
    #[inline]
    fn escape_time(&self, point: Complex, params: &EscapeParams) -> u32 {
        iterate_escape(point, self.constant, params, |z| z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constant() {
        assert_eq!(Julia::default().constant(), DEFAULT_JULIA_CONSTANT);
    }

    #[test]
    fn far_points_escape_immediately() {
        let point = Complex {
            real: 5.0,
            imag: 5.0,
        };

        assert_eq!(Julia::default().escape_time(point, &EscapeParams::new(100)), 0);
    }

    #[test]
    fn zero_constant_gives_unit_disc() {
        let julia = Julia::new(Complex::ZERO);
        let params = EscapeParams::new(64);

        let inside = Complex {
            real: 0.5,
            imag: 0.5,
        };
        let outside = Complex {
            real: 1.1,
            imag: 0.0,
        };

        assert_eq!(julia.escape_time(inside, &params), 64);
        assert!(julia.escape_time(outside, &params) < 64);
    }

    #[test]
    fn sampled_point_is_the_starting_value_not_the_constant() {
        // With k = 0 the orbit of 3 escapes at once, while Mandelbrot-style
        // iteration from zero would stay at the origin forever.
        let julia = Julia::new(Complex::ZERO);
        let point = Complex {
            real: 3.0,
            imag: 0.0,
        };

        assert_eq!(julia.escape_time(point, &EscapeParams::new(10)), 0);
        assert_eq!(julia.escape_time(Complex::ZERO, &EscapeParams::new(10)), 10);
    }
}
