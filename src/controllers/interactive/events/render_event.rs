use crate::controllers::interactive::data::tile_data::TileData;
use crate::controllers::interactive::errors::render_error::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    Tile(TileData),
    Error(RenderError),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::Tile(tile) => tile.generation,
            Self::Error(error) => error.generation,
        }
    }
}
