pub mod layout;
pub mod render;
pub mod sink;

pub use layout::{
    best_point, compose, compose_semi, Figure, Panel, PlotRequest, Series, DEFAULT_FIGSIZE,
};
pub use render::render;
pub use sink::OutputSink;
