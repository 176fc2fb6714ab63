pub mod access_control;
pub mod error_shape;
