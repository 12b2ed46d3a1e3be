mod component;
mod stages;

pub use component::PipelineBoard;
