pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod render_request;
pub mod tile;
pub mod viewport;
