//! Presentation layer with the text shell for the setup screen.

/// Command parsing.
pub mod commands;
/// Shell loop.
pub mod shell;
/// Screen rendering.
pub mod view;

pub use commands::{CommandError, ShellCommand};
pub use shell::{Flow, SetupShell, execute};
pub use view::render;
