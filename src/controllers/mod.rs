pub mod interactive;
pub mod viewport;
