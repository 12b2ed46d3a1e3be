mod carousel;
mod catalog;
mod component;
mod graph;
mod layout;
mod node;
mod overlay;
mod types;

pub use catalog::SkillCatalog;
pub use component::SkillsNetwork;
