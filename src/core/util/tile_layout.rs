use crate::core::data::tile::Tile;
use std::num::NonZeroU32;

/// One full-frame pass at a given downscale factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassPlan {
    pub scale: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub tiles: Vec<Tile>,
}

/// Size of the working frame for a pass: `ceil(width / scale) x ceil(height / scale)`.
#[must_use]
pub fn pass_frame_size(width: u32, height: u32, scale: NonZeroU32) -> (u32, u32) {
    (width.div_ceil(scale.get()), height.div_ceil(scale.get()))
}

/// Splits a frame into square tiles of `tile_size`, clipping the last
/// column and row, in row-major order.
#[must_use]
pub fn partition_frame(
    frame_width: u32,
    frame_height: u32,
    tile_size: NonZeroU32,
    scale: u32,
) -> Vec<Tile> {
    let size = tile_size.get();
    let columns = frame_width.div_ceil(size);
    let rows = frame_height.div_ceil(size);
    let mut tiles = Vec::with_capacity(columns as usize * rows as usize);

    for row in 0..rows {
        for column in 0..columns {
            let origin_x = column * size;
            let origin_y = row * size;

            tiles.push(Tile {
                origin_x,
                origin_y,
                width: size.min(frame_width - origin_x),
                height: size.min(frame_height - origin_y),
                scale,
            });
        }
    }

    tiles
}

/// Plans every pass, coarsest first, in the order the scales are given.
#[must_use]
pub fn plan_passes(
    width: u32,
    height: u32,
    scales: &[NonZeroU32],
    tile_size: NonZeroU32,
) -> Vec<PassPlan> {
    scales
        .iter()
        .map(|&scale| {
            let (frame_width, frame_height) = pass_frame_size(width, height, scale);

            PassPlan {
                scale: scale.get(),
                frame_width,
                frame_height,
                tiles: partition_frame(frame_width, frame_height, tile_size, scale.get()),
            }
        })
        .collect()
}
