use log::{debug, warn};
use std::time::Duration;

use crate::controllers::interactive::data::tile_data::TileData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Full-resolution RGBA canvas that tiles of any pass are painted onto.
///
/// A tile of scale `s` covers `s x s` surface pixels per tile pixel. Tiles
/// from a generation older than the newest one seen are ignored; the image
/// of the previous generation stays visible until it is painted over.
#[derive(Debug)]
pub struct Surface {
    frame: PixelBuffer,
    current_generation: u64,
    is_complete: bool,
    last_error: Option<String>,
    render_time: Duration,
    tiles_composited: usize,
}

impl Surface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: PixelBuffer::new(width, height),
            current_generation: 0,
            is_complete: false,
            last_error: None,
            render_time: Duration::ZERO,
            tiles_composited: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.current_generation
    }

    /// True once the final tile of the current generation has been painted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Summed tile render time of the current generation.
    #[must_use]
    pub fn render_time(&self) -> Duration {
        self.render_time
    }

    #[must_use]
    pub fn tiles_composited(&self) -> usize {
        self.tiles_composited
    }

    /// Discards the canvas. Tiles already in flight for the old size are
    /// clipped against the new one.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.frame = PixelBuffer::new(width, height);
        self.is_complete = false;
    }

    /// Applies one event; returns whether it changed the surface state.
    pub fn apply(&mut self, event: RenderEvent) -> bool {
        match event {
            RenderEvent::Tile(tile) => self.composite_tile(&tile),
            RenderEvent::Error(error) => {
                if error.generation < self.current_generation {
                    return false;
                }

                warn!("generation {}: {}", error.generation, error.message);
                self.begin_generation(error.generation);
                self.last_error = Some(error.message);
                true
            }
        }
    }

    /// Paints `tile` with nearest-neighbour replication by its scale,
    /// clipped to the surface. Stale tiles are ignored.
    pub fn composite_tile(&mut self, tile: &TileData) -> bool {
        if tile.generation < self.current_generation {
            debug!(
                "dropping tile of generation {} (showing {})",
                tile.generation, self.current_generation
            );
            return false;
        }

        self.begin_generation(tile.generation);

        let width = self.frame.width() as usize;
        let height = self.frame.height() as usize;
        let scale = tile.tile.scale.max(1) as usize;
        let source = &tile.pixel_buffer;
        let tile_width = source.width() as usize;
        let source_row_len = tile_width * BYTES_PER_PIXEL;

        let left = tile.tile.origin_x as usize * scale;
        let right = ((tile.tile.origin_x as usize + tile_width) * scale).min(width);
        let mut row = Vec::with_capacity(right.saturating_sub(left) * BYTES_PER_PIXEL);

        if left < right {
            for (local_y, source_row) in source.buffer().chunks_exact(source_row_len).enumerate() {
                let top = (tile.tile.origin_y as usize + local_y) * scale;
                if top >= height {
                    break;
                }

                row.clear();
                for x in left..right {
                    let local_x = x / scale - tile.tile.origin_x as usize;
                    let offset = local_x * BYTES_PER_PIXEL;
                    row.extend_from_slice(&source_row[offset..offset + BYTES_PER_PIXEL]);
                }

                let buffer = self.frame.buffer_mut();
                for y in top..(top + scale).min(height) {
                    let start = (y * width + left) * BYTES_PER_PIXEL;
                    buffer[start..start + row.len()].copy_from_slice(&row);
                }
            }
        }

        self.tiles_composited += 1;
        self.render_time += tile.render_duration;

        if tile.is_final_tile_of_final_pass {
            self.is_complete = true;
        }

        true
    }

    fn begin_generation(&mut self, generation: u64) {
        if generation == self.current_generation {
            return;
        }

        self.current_generation = generation;
        self.is_complete = false;
        self.last_error = None;
        self.render_time = Duration::ZERO;
        self.tiles_composited = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::errors::render_error::RenderError;
    use crate::core::data::colour::Colour;
    use crate::core::data::tile::Tile;

    fn solid_tile(
        generation: u64,
        tile: Tile,
        colour: Colour,
        is_final_tile_of_final_pass: bool,
    ) -> TileData {
        let mut pixel_buffer = PixelBuffer::new(tile.width, tile.height);
        for y in 0..tile.height {
            for x in 0..tile.width {
                pixel_buffer.set_pixel(x, y, colour).unwrap();
            }
        }

        TileData {
            generation,
            tile,
            pixel_buffer,
            is_final_tile_of_final_pass,
            render_duration: Duration::from_millis(1),
        }
    }

    const RED: Colour = Colour { r: 255, g: 0, b: 0 };
    const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };

    #[test]
    fn test_new_surface_is_empty() {
        let surface = Surface::new(4, 3);

        assert_eq!(surface.frame().buffer_size(), 4 * 3 * 4);
        assert_eq!(surface.current_generation(), 0);
        assert!(!surface.is_complete());
        assert!(surface.last_error().is_none());
    }

    #[test]
    fn test_full_resolution_tile_is_copied_in_place() {
        let mut surface = Surface::new(8, 8);
        let tile = Tile { origin_x: 2, origin_y: 4, width: 3, height: 2, scale: 1 };

        assert!(surface.composite_tile(&solid_tile(1, tile, RED, false)));

        assert_eq!(surface.frame().pixel(2, 4), Some([255, 0, 0, 255]));
        assert_eq!(surface.frame().pixel(4, 5), Some([255, 0, 0, 255]));
        assert_eq!(surface.frame().pixel(5, 4), Some([0, 0, 0, 0]));
        assert_eq!(surface.frame().pixel(2, 6), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_scaled_tile_uses_nearest_neighbour_blocks() {
        let mut surface = Surface::new(8, 8);
        let tile = Tile { origin_x: 0, origin_y: 0, width: 2, height: 1, scale: 4 };
        let mut data = solid_tile(1, tile, RED, false);
        data.pixel_buffer.set_pixel(1, 0, BLUE).unwrap();

        surface.composite_tile(&data);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(surface.frame().pixel(x, y), Some([255, 0, 0, 255]));
                assert_eq!(surface.frame().pixel(x + 4, y), Some([0, 0, 255, 255]));
            }
        }
        assert_eq!(surface.frame().pixel(0, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_scaled_origin_is_in_pass_coordinates() {
        let mut surface = Surface::new(10, 10);
        let tile = Tile { origin_x: 2, origin_y: 1, width: 1, height: 1, scale: 2 };

        surface.composite_tile(&solid_tile(1, tile, BLUE, false));

        for (x, y) in [(4, 2), (5, 2), (4, 3), (5, 3)] {
            assert_eq!(surface.frame().pixel(x, y), Some([0, 0, 255, 255]));
        }
        assert_eq!(surface.frame().pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(surface.frame().pixel(6, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_edge_blocks_are_clipped() {
        // 5x5 surface at scale 4 has a 2x2 pass frame
        let mut surface = Surface::new(5, 5);
        let tile = Tile { origin_x: 0, origin_y: 0, width: 2, height: 2, scale: 4 };

        surface.composite_tile(&solid_tile(1, tile, RED, true));

        assert!(
            surface
                .frame()
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [255, 0, 0, 255])
        );
        assert!(surface.is_complete());
    }

    #[test]
    fn test_tile_entirely_outside_is_ignored_without_panicking() {
        let mut surface = Surface::new(4, 4);
        let tile = Tile { origin_x: 3, origin_y: 3, width: 2, height: 2, scale: 2 };

        assert!(surface.composite_tile(&solid_tile(1, tile, RED, false)));
        assert!(surface.frame().buffer().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_finer_pass_overwrites_coarse_pass() {
        let mut surface = Surface::new(4, 4);

        surface.composite_tile(&solid_tile(
            1,
            Tile { origin_x: 0, origin_y: 0, width: 2, height: 2, scale: 2 },
            RED,
            false,
        ));
        surface.composite_tile(&solid_tile(
            1,
            Tile { origin_x: 0, origin_y: 0, width: 4, height: 4, scale: 1 },
            BLUE,
            true,
        ));

        assert!(
            surface
                .frame()
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [0, 0, 255, 255])
        );
        assert!(surface.is_complete());
        assert_eq!(surface.tiles_composited(), 2);
        assert_eq!(surface.render_time(), Duration::from_millis(2));
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut surface = Surface::new(4, 4);
        let whole = Tile { origin_x: 0, origin_y: 0, width: 4, height: 4, scale: 1 };

        assert!(surface.composite_tile(&solid_tile(5, whole, BLUE, false)));
        assert!(!surface.composite_tile(&solid_tile(4, whole, RED, true)));

        assert_eq!(surface.current_generation(), 5);
        assert_eq!(surface.frame().pixel(0, 0), Some([0, 0, 255, 255]));
        assert!(!surface.is_complete());
    }

    #[test]
    fn test_new_generation_resets_completion() {
        let mut surface = Surface::new(2, 2);
        let whole = Tile { origin_x: 0, origin_y: 0, width: 2, height: 2, scale: 1 };

        surface.composite_tile(&solid_tile(1, whole, RED, true));
        assert!(surface.is_complete());

        surface.composite_tile(&solid_tile(2, whole, BLUE, false));
        assert!(!surface.is_complete());
        assert_eq!(surface.current_generation(), 2);
        assert_eq!(surface.tiles_composited(), 1);
    }

    #[test]
    fn test_error_event_is_recorded_for_current_generation() {
        let mut surface = Surface::new(2, 2);

        assert!(surface.apply(RenderEvent::Error(RenderError {
            generation: 3,
            message: "boom".into(),
        })));
        assert_eq!(surface.last_error(), Some("boom"));
        assert_eq!(surface.current_generation(), 3);

        assert!(!surface.apply(RenderEvent::Error(RenderError {
            generation: 2,
            message: "late".into(),
        })));
        assert_eq!(surface.last_error(), Some("boom"));
    }

    #[test]
    fn test_resize_clears_canvas() {
        let mut surface = Surface::new(2, 2);
        let whole = Tile { origin_x: 0, origin_y: 0, width: 2, height: 2, scale: 1 };
        surface.composite_tile(&solid_tile(1, whole, RED, true));

        surface.resize(3, 1);

        assert_eq!((surface.width(), surface.height()), (3, 1));
        assert!(!surface.is_complete());
        assert!(surface.frame().buffer().iter().all(|&byte| byte == 0));

        // Tiles for the old size are clipped
        surface.composite_tile(&solid_tile(1, whole, BLUE, false));
        assert_eq!(surface.frame().pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(surface.frame().pixel(2, 0), Some([0, 0, 0, 0]));
    }
}
