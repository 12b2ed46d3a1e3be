mod component;
mod shell;

pub use component::{BootTerminal, FloatingTerminal};
pub use shell::ShellIdentity;
