pub mod certifications;
pub mod icons;
pub mod pipeline;
pub mod projects;
pub mod skills_network;
pub mod terminal;
pub mod timeline;
