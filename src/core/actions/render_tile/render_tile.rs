use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferError, write_opaque,
};
use crate::core::data::tile::Tile;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape::{EscapeKernel, EscapeParams};
use crate::core::util::pixel_to_complex_coords::map_pixel_to_complex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error(
        "tile {width}x{height} at ({origin_x}, {origin_y}) does not fit a {frame_width}x{frame_height} frame"
    )]
    OutsideFrame {
        origin_x: u32,
        origin_y: u32,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    },
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

fn check_fits(tile: &Tile, frame_width: u32, frame_height: u32) -> Result<(), TileError> {
    if tile.fits_within(frame_width, frame_height) {
        return Ok(());
    }

    Err(TileError::OutsideFrame {
        origin_x: tile.origin_x,
        origin_y: tile.origin_y,
        width: tile.width,
        height: tile.height,
        frame_width,
        frame_height,
    })
}

/// Renders one tile of a `frame_width` x `frame_height` frame into an RGBA buffer.
pub fn render_tile<K, M>(
    tile: &Tile,
    frame_width: u32,
    frame_height: u32,
    viewport: &Viewport,
    max_iterations: u32,
    kernel: &K,
    colour_map: &M,
) -> Result<PixelBuffer, TileError>
where
    K: EscapeKernel,
    M: ColourMap,
{
    render_tile_with_params(
        tile,
        (frame_width, frame_height),
        viewport,
        &EscapeParams::new(max_iterations),
        kernel,
        colour_map,
    )
}

/// As [`render_tile`], with explicit iteration parameters (bailout included).
pub fn render_tile_with_params<K, M>(
    tile: &Tile,
    (frame_width, frame_height): (u32, u32),
    viewport: &Viewport,
    params: &EscapeParams,
    kernel: &K,
    colour_map: &M,
) -> Result<PixelBuffer, TileError>
where
    K: EscapeKernel,
    M: ColourMap,
{
    check_fits(tile, frame_width, frame_height)?;

    let mut data = vec![0; tile.width as usize * tile.height as usize * BYTES_PER_PIXEL];

    for (local_y, row) in data
        .chunks_exact_mut(tile.width as usize * BYTES_PER_PIXEL)
        .enumerate()
    {
        render_row(
            row,
            tile,
            local_y as u32,
            (frame_width, frame_height),
            viewport,
            params,
            kernel,
            colour_map,
        );
    }

    Ok(PixelBuffer::from_data(tile.width, tile.height, data)?)
}

/// Same output as [`render_tile_with_params`], with rows spread over the
/// rayon pool.
pub fn render_tile_parallel<K, M>(
    tile: &Tile,
    (frame_width, frame_height): (u32, u32),
    viewport: &Viewport,
    params: &EscapeParams,
    kernel: &K,
    colour_map: &M,
) -> Result<PixelBuffer, TileError>
where
    K: EscapeKernel + Sync,
    M: ColourMap + Sync,
{
    check_fits(tile, frame_width, frame_height)?;

    let mut data = vec![0; tile.width as usize * tile.height as usize * BYTES_PER_PIXEL];

    data.par_chunks_exact_mut(tile.width as usize * BYTES_PER_PIXEL)
        .enumerate()
        .for_each(|(local_y, row)| {
            render_row(
                row,
                tile,
                local_y as u32,
                (frame_width, frame_height),
                viewport,
                params,
                kernel,
                colour_map,
            );
        });

    Ok(PixelBuffer::from_data(tile.width, tile.height, data)?)
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn render_row<K, M>(
    row: &mut [u8],
    tile: &Tile,
    local_y: u32,
    (frame_width, frame_height): (u32, u32),
    viewport: &Viewport,
    params: &EscapeParams,
    kernel: &K,
    colour_map: &M,
) where
    K: EscapeKernel,
    M: ColourMap,
{
    let global_y = f64::from(tile.origin_y + local_y);

    for (local_x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let global_x = f64::from(tile.origin_x) + local_x as f64;
        let point = map_pixel_to_complex(global_x, global_y, frame_width, frame_height, viewport);
        let iterations = kernel.escape_time(point, params);

        write_opaque(pixel, colour_map.map(iterations));
    }
}
