use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::tile::Tile;

/// One finished tile, handed over to the sink by value.
#[derive(Debug)]
pub struct TileData {
    pub generation: u64,
    pub tile: Tile,
    pub pixel_buffer: PixelBuffer,
    /// Set on exactly one tile per generation: the last tile of the
    /// full-resolution pass.
    pub is_final_tile_of_final_pass: bool,
    pub render_duration: Duration,
}
