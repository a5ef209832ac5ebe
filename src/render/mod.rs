pub mod canvas;
pub mod pipeline;
