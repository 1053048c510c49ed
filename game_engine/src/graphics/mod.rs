/// Graphics module - low-level 3D renderer placeholder

pub mod renderer;

pub use renderer::*;
