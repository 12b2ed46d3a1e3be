mod component;
mod entries;

pub use component::ProjectsSection;
