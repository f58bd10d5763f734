//! Terminal view layer for the invoice desk.

pub mod command;
pub mod shell;
pub mod table;

pub use command::Command;
pub use shell::Shell;
pub use table::render_items;
