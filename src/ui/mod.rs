//! Terminal UI building blocks shared by the chat session and the subcommands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Returns `true` when the user backed out of a prompt (Esc or Ctrl+C).
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow, treating a cancelled prompt as a clean exit.
///
/// Any other error is passed through unchanged.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    f().or_else(|e| {
        if e.downcast_ref::<InquireError>()
            .is_some_and(is_prompt_cancelled)
        {
            println!();
            Ok(())
        } else {
            Err(e)
        }
    })
}

/// Prints an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
