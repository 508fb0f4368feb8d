use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const SATURATION: f64 = 1.0;
const LIGHTNESS: f64 = 0.5;

/// Colours escaped points by rotating the hue through a full circle over
/// `0..max_iterations`; interior points are black.
#[must_use]
pub fn colour_of(iterations: u32, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return Colour::BLACK;
    }

    let hue = 360.0 * f64::from(iterations) / f64::from(max_iterations);
    hsl_to_rgb(hue, SATURATION, LIGHTNESS)
}

/// Standard chroma / intermediate / match conversion. `hue` is in degrees
/// `[0, 360)`, saturation and lightness in `[0, 1]`.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let intermediate = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let offset = lightness - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, intermediate, 0.0),
        h if h < 120.0 => (intermediate, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, intermediate),
        h if h < 240.0 => (0.0, intermediate, chroma),
        h if h < 300.0 => (intermediate, 0.0, chroma),
        _ => (chroma, 0.0, intermediate),
    };

    Colour {
        r: to_channel(r + offset),
        g: to_channel(g + offset),
        b: to_channel(b + offset),
    }
}

#[inline]
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HslRotation {
    max_iterations: u32,
}

impl HslRotation {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for HslRotation {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        colour_of(iterations, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        "HSL hue rotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_black() {
        for max_iterations in [1, 50, 100, 10_000] {
            assert_eq!(colour_of(max_iterations, max_iterations), Colour::BLACK);
        }
    }

    #[test]
    fn test_zero_iterations_is_pure_red() {
        assert_eq!(colour_of(0, 100), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_zero_iterations_differs_from_interior() {
        assert_ne!(colour_of(0, 100), colour_of(100, 100));
    }

    #[test]
    fn test_quarter_rotation_rounds_half_up() {
        // hue 90: intermediate = 0.5 -> 127.5 rounds to 128
        assert_eq!(colour_of(25, 100), Colour { r: 128, g: 255, b: 0 });
    }

    #[test]
    fn test_half_rotation_is_cyan() {
        assert_eq!(colour_of(50, 100), Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(colour_of(1, 6), Colour { r: 255, g: 255, b: 0 }); // 60
        assert_eq!(colour_of(2, 6), Colour { r: 0, g: 255, b: 0 }); // 120
        assert_eq!(colour_of(4, 6), Colour { r: 0, g: 0, b: 255 }); // 240
        assert_eq!(colour_of(5, 6), Colour { r: 255, g: 0, b: 255 }); // 300
    }

    #[test]
    fn test_iterations_above_max_are_black() {
        assert_eq!(colour_of(150, 100), Colour::BLACK);
    }

    #[test]
    fn test_is_deterministic() {
        for iterations in 0..=40 {
            assert_eq!(colour_of(iterations, 40), colour_of(iterations, 40));
        }
    }

    #[test]
    fn test_colour_map_port_uses_max_iterations() {
        let map = HslRotation::new(100);

        assert_eq!(map.map(50), colour_of(50, 100));
        assert_eq!(map.map(100), Colour::BLACK);
        assert_eq!(map.display_name(), "HSL hue rotation");
    }
}
