#[allow(clippy::module_inception)]
pub mod viewport_controller;
