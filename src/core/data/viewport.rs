use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must satisfy x_min < x_max and y_min < y_max: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    #[error("zoom factor must be positive and finite, got {factor}")]
    InvalidZoomFactor { factor: f64 },
    #[error("zoom limit reached: magnification {magnification:e} outside [{min:e}, {max:e}]")]
    ZoomLimitReached {
        magnification: f64,
        min: f64,
        max: f64,
    },
    #[error("selection has zero area")]
    EmptySelection,
}

/// The visible rectangle of the complex plane.
///
/// Bounds are only changed through the methods below, each of which keeps
/// `x_min < x_max` and `y_min < y_max`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportBounds", into = "ViewportBounds")]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
struct ViewportBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl TryFrom<ViewportBounds> for Viewport {
    type Error = ViewportError;

    fn try_from(bounds: ViewportBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max)
    }
}

impl From<Viewport> for ViewportBounds {
    fn from(viewport: Viewport) -> Self {
        Self {
            x_min: viewport.x_min,
            x_max: viewport.x_max,
            y_min: viewport.y_min,
            y_max: viewport.y_max,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.5,
            y_max: 1.5,
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite();

        if !finite || x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds the viewport spanned by two arbitrary corners.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ViewportError> {
        Self::new(
            a.real.min(b.real),
            a.real.max(b.real),
            a.imag.min(b.imag),
            a.imag.max(b.imag),
        )
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_min + self.x_max) / 2.0,
            imag: (self.y_min + self.y_max) / 2.0,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && self.y_min <= point.imag
            && self.x_max >= point.real
            && self.y_max >= point.imag
    }

    pub fn set_bounds(
        &mut self,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<(), ViewportError> {
        *self = Self::new(x_min, x_max, y_min, y_max)?;
        Ok(())
    }

    /// Shifts the view by a complex-plane offset.
    pub fn pan(&mut self, delta_real: f64, delta_imag: f64) -> Result<(), ViewportError> {
        self.set_bounds(
            self.x_min + delta_real,
            self.x_max + delta_real,
            self.y_min + delta_imag,
            self.y_max + delta_imag,
        )
    }

    /// Scales width and height by `factor` around the centre. `factor < 1` zooms in.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewportError> {
        self.zoom_about(self.center(), factor)
    }

    /// Scales the view by `factor` while keeping `anchor` at the same
    /// relative position on screen.
    pub fn zoom_about(&mut self, anchor: Complex, factor: f64) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        self.set_bounds(
            anchor.real + (self.x_min - anchor.real) * factor,
            anchor.real + (self.x_max - anchor.real) * factor,
            anchor.imag + (self.y_min - anchor.imag) * factor,
            anchor.imag + (self.y_max - anchor.imag) * factor,
        )
    }

    /// Replaces the size of the view, keeping its centre.
    pub fn resize_around_center(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        let center = self.center();

        self.set_bounds(
            center.real - width / 2.0,
            center.real + width / 2.0,
            center.imag - height / 2.0,
            center.imag + height / 2.0,
        )
    }
}
