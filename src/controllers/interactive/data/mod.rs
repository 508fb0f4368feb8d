pub mod engine_config;
pub mod tile_data;
