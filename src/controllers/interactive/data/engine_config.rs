use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::core::data::complex::Complex;
use crate::core::errors::config::ConfigError;
use crate::core::fractals::julia::DEFAULT_JULIA_CONSTANT;

pub const DEFAULT_PASSES: [u32; 3] = [4, 2, 1];
pub const DEFAULT_TILE_SIZE: u32 = 64;
pub const DEFAULT_MIN_ZOOM_FACTOR: f64 = 1e-14;
pub const DEFAULT_MAX_ZOOM_FACTOR: f64 = 1e14;

/// Engine-wide settings shared by every render of a controller.
///
/// Deserialises from JSON with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Downscale factors, coarsest first. The last one must be 1.
    pub passes: Vec<u32>,
    pub tile_size: u32,
    pub julia_constant: Complex,
    /// Return early for orbits that come back to their constant.
    pub periodicity_check: bool,
    /// Compute tile rows on the rayon pool.
    pub parallel_tiles: bool,
    pub min_zoom_factor: f64,
    pub max_zoom_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES.to_vec(),
            tile_size: DEFAULT_TILE_SIZE,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            periodicity_check: false,
            parallel_tiles: false,
            min_zoom_factor: DEFAULT_MIN_ZOOM_FACTOR,
            max_zoom_factor: DEFAULT_MAX_ZOOM_FACTOR,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pass_scales()?;
        self.tile_size()?;

        if !self.julia_constant.is_finite() {
            return Err(ConfigError::InvalidJuliaConstant {
                real: self.julia_constant.real,
                imag: self.julia_constant.imag,
            });
        }

        let (min, max) = (self.min_zoom_factor, self.max_zoom_factor);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= 1.0 && max >= 1.0) {
            return Err(ConfigError::InvalidZoomLimits { min, max });
        }

        Ok(())
    }

    /// The passes as non-zero scales, checked to be strictly decreasing and
    /// to finish at full resolution.
    pub fn pass_scales(&self) -> Result<Vec<NonZeroU32>, ConfigError> {
        if self.passes.is_empty() {
            return Err(ConfigError::EmptyPasses);
        }

        let invalid = || ConfigError::InvalidPasses(self.passes.clone());

        let scales = self
            .passes
            .iter()
            .map(|&scale| NonZeroU32::new(scale).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        let decreasing = scales.windows(2).all(|pair| pair[0] > pair[1]);
        if !decreasing || scales.last().map(|s| s.get()) != Some(1) {
            return Err(invalid());
        }

        Ok(scales)
    }

    pub fn tile_size(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.tile_size).ok_or(ConfigError::ZeroTileSize)
    }
}
