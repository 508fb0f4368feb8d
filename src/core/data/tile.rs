/// A rectangular region of one pass frame.
///
/// `origin_x`/`origin_y` are in the pass frame's own (downsampled) pixel
/// grid; multiplying by `scale` gives the position on the full-resolution
/// surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Tile {
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && u64::from(self.origin_x) + u64::from(self.width) <= u64::from(frame_width)
            && u64::from(self.origin_y) + u64::from(self.height) <= u64::from(frame_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Tile {
        Tile {
            origin_x,
            origin_y,
            width,
            height,
            scale: 1,
        }
    }

    #[test]
    fn test_size() {
        assert_eq!(tile(0, 0, 64, 32).size(), 2048);
    }

    #[test]
    fn test_fits_within_frame() {
        assert!(tile(0, 0, 10, 10).fits_within(10, 10));
        assert!(tile(64, 64, 36, 36).fits_within(100, 100));
        assert!(!tile(64, 64, 37, 36).fits_within(100, 100));
        assert!(!tile(0, 95, 10, 10).fits_within(100, 100));
    }

    #[test]
    fn test_empty_tile_never_fits() {
        assert!(!tile(0, 0, 0, 10).fits_within(10, 10));
        assert!(!tile(0, 0, 10, 0).fits_within(10, 10));
    }

    #[test]
    fn test_fits_within_does_not_overflow() {
        assert!(!tile(u32::MAX, 0, 2, 1).fits_within(u32::MAX, 1));
    }
}
