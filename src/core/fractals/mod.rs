pub mod burning_ship;
pub mod escape;
pub mod formula_kind;
pub mod julia;
pub mod kernel;
pub mod mandelbrot;
