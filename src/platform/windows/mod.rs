//! Windows-specific glue.

pub mod shell;

pub use shell::shell_open;
