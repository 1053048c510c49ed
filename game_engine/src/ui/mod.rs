/// UI module - 2D interface renderer placeholder

pub mod renderer;

pub use renderer::*;
