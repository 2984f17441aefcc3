mod component;
mod render;

pub use component::TopologyCanvas;
