//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands for switching
//! profiles and automatic mode.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, EventRenderer};
pub use ui::{format_mode_bar, print_message, print_state, print_status};
