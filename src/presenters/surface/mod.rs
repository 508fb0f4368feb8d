pub mod channel_sink;
pub mod shared_surface;
#[allow(clippy::module_inception)]
pub mod surface;
