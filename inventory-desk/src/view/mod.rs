//! Terminal view layer for the inventory desk.

pub mod command;
pub mod shell;

pub use command::Command;
pub use shell::{render_options, Shell};
