mod component;
mod grid;

pub use component::LifeGridCanvas;
