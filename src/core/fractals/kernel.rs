use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::BurningShip;
use crate::core::fractals::escape::{EscapeKernel, EscapeParams};
use crate::core::fractals::formula_kind::FormulaKind;
use crate::core::fractals::julia::Julia;
use crate::core::fractals::mandelbrot::Mandelbrot;

/// Static dispatch over the supported formulas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalKernel {
    Mandelbrot(Mandelbrot),
    Julia(Julia),
    BurningShip(BurningShip),
}

impl FractalKernel {
    #[must_use]
    pub fn new(formula: FormulaKind, julia_constant: Complex) -> Self {
        match formula {
            FormulaKind::Mandelbrot => Self::Mandelbrot(Mandelbrot),
            FormulaKind::Julia => Self::Julia(Julia::new(julia_constant)),
            FormulaKind::BurningShip => Self::BurningShip(BurningShip),
        }
    }

    #[must_use]
    pub fn formula(&self) -> FormulaKind {
        match self {
            Self::Mandelbrot(_) => FormulaKind::Mandelbrot,
            Self::Julia(_) => FormulaKind::Julia,
            Self::BurningShip(_) => FormulaKind::BurningShip,
        }
    }
}

impl EscapeKernel for FractalKernel {
    #[inline]
    fn escape_time(&self, point: Complex, params: &EscapeParams) -> u32 {
        match self {
            Self::Mandelbrot(kernel) => kernel.escape_time(point, params),
            Self::Julia(kernel) => kernel.escape_time(point, params),
            Self::BurningShip(kernel) => kernel.escape_time(point, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::julia::DEFAULT_JULIA_CONSTANT;

    #[test]
    fn kernel_round_trip_for_all_kinds() {
        for &kind in FormulaKind::ALL {
            let kernel = FractalKernel::new(kind, DEFAULT_JULIA_CONSTANT);
            assert_eq!(kernel.formula(), kind);
        }
    }

    #[test]
    fn julia_kernel_carries_the_configured_constant() {
        let constant = Complex {
            real: 0.285,
            imag: 0.01,
        };

        assert_eq!(
            FractalKernel::new(FormulaKind::Julia, constant),
            FractalKernel::Julia(Julia::new(constant))
        );
    }

    #[test]
    fn dispatch_matches_concrete_kernels() {
        let params = EscapeParams::new(60);
        let point = Complex {
            real: -0.1,
            imag: 0.65,
        };

        let mandelbrot = FractalKernel::new(FormulaKind::Mandelbrot, DEFAULT_JULIA_CONSTANT);
        let julia = FractalKernel::new(FormulaKind::Julia, DEFAULT_JULIA_CONSTANT);
        let burning_ship = FractalKernel::new(FormulaKind::BurningShip, DEFAULT_JULIA_CONSTANT);

        assert_eq!(
            mandelbrot.escape_time(point, &params),
            Mandelbrot.escape_time(point, &params)
        );
        assert_eq!(
            julia.escape_time(point, &params),
            Julia::default().escape_time(point, &params)
        );
        assert_eq!(
            burning_ship.escape_time(point, &params),
            BurningShip.escape_time(point, &params)
        );
    }
}
