use thiserror::Error;

/// A request or engine setting that can never render.
///
/// Returned to the caller before any work is scheduled; it never affects
/// renders already in flight.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pixel dimensions must be positive: {width}x{height}")]
    ZeroPixelDimensions { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("unknown formula kind '{0}'")]
    UnknownFormula(String),
    #[error("at least one downscale pass is required")]
    EmptyPasses,
    #[error("downscale passes must be positive, strictly decreasing and end at 1: {0:?}")]
    InvalidPasses(Vec<u32>),
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    #[error("julia constant must be finite: {real} + {imag}i")]
    InvalidJuliaConstant { real: f64, imag: f64 },
    #[error("zoom limits must be positive with min <= 1 <= max: [{min}, {max}]")]
    InvalidZoomLimits { min: f64, max: f64 },
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
}
