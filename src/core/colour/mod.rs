pub mod hsl_rotation;
