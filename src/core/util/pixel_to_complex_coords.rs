use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps a pixel of a `pixel_width` x `pixel_height` grid onto the viewport.
///
/// `(0, 0)` lands on `(x_min, y_min)` and `(pixel_width, pixel_height)` on
/// `(x_max, y_max)`. Both dimensions must be non-zero.
#[inline]
#[must_use]
pub fn map_pixel_to_complex(
    pixel_x: f64,
    pixel_y: f64,
    pixel_width: u32,
    pixel_height: u32,
    viewport: &Viewport,
) -> Complex {
    let real = viewport.x_min() + (pixel_x / f64::from(pixel_width)) * viewport.width();
    let imag = viewport.y_min() + (pixel_y / f64::from(pixel_height)) * viewport.height();

    Complex { real, imag }
}
