//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `Session` owns the registry
//! together with the submission history and the scrollback, parses input
//! lines, dispatches `execute()` and renders every result into a `ViewSink`.

mod commands;
mod history;
pub mod intro;
mod interpreter;
pub mod markup;
mod scrollback;
mod session;

/// Register all built-in portfolio commands into a registry.
pub use commands::register_builtins;
/// Linear submission history with a recall cursor.
pub use history::History;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text or the clear signal).
pub use interpreter::CommandOutput;
/// Insertion-ordered registry of available commands.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// A rendered scrollback entry.
pub use scrollback::Line;
/// Append-only log of rendered lines.
pub use scrollback::Scrollback;
/// Destination for rendered lines.
pub use scrollback::ViewSink;
/// Interpreter session owning registry, history and scrollback.
pub use session::Session;

pub use folio_types::input::{Direction, InputEvent};
pub use folio_types::style::LineStyle;
