//! One-shot subcommands that run a single session operation and exit.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::api::{Collaborator, HttpCollaborator};
use crate::chat::{print_message, print_state, print_status};
use crate::config::ResolvedConfig;
use crate::session::{ChatController, Role, SessionEvent};
use crate::ui::Spinner;

/// Builds a controller talking to the configured backend.
pub fn connect(config: &ResolvedConfig) -> Result<ChatController> {
    let client: Arc<dyn Collaborator> = match config.timeout {
        Some(timeout) => Arc::new(
            HttpCollaborator::with_timeout(&config.server, timeout)
                .context("Failed to set up HTTP client")?,
        ),
        None => Arc::new(HttpCollaborator::new(&config.server)),
    };
    Ok(ChatController::new(client).with_auto_control(config.auto_control))
}

/// Prints the current backend state. Returns `false` if the backend could
/// not be reached.
pub async fn run_state(config: &ResolvedConfig) -> Result<bool> {
    let mut controller = connect(config)?;
    {
        let _spinner = Spinner::new("Loading state...");
        controller.load_initial_state().await;
    }

    let Some(status) = controller.status().cloned() else {
        crate::warn!(
            "{} Could not reach {}",
            crate::ui::Style::error("Error:"),
            config.server
        );
        return Ok(false);
    };

    print_state(controller.mode(), Some(&status));
    Ok(true)
}

/// Sends one message and prints the reply.
pub async fn run_send(config: &ResolvedConfig, message: &str) -> Result<bool> {
    if message.trim().is_empty() {
        anyhow::bail!("Message is empty");
    }

    let mut controller = connect(config)?;
    let mut events = controller.subscribe();

    {
        let _spinner = Spinner::new("Sending...");
        // The automatic flag sent with the message mirrors the backend's.
        controller.load_initial_state().await;
        controller.send(message).await;
    }

    Ok(report(&mut events))
}

/// Switches profile (disabling automatic mode first when it is on).
pub async fn run_profile(config: &ResolvedConfig, name: &str) -> Result<bool> {
    let mut controller = connect(config)?;
    let mut events = controller.subscribe();

    {
        let _spinner = Spinner::new("Switching mode...");
        controller.load_initial_state().await;
        controller.set_profile(name).await;
    }

    Ok(report(&mut events))
}

/// Turns automatic mode on or off.
pub async fn run_auto(config: &ResolvedConfig, enabled: bool) -> Result<bool> {
    let mut controller = connect(config)?;
    let mut events = controller.subscribe();

    {
        let _spinner = Spinner::new("Updating automatic mode...");
        controller.set_automatic(enabled).await;
    }

    Ok(report(&mut events))
}

/// Prints bot messages and the final status from `events`. Returns `false`
/// when the last status was an error.
fn report(events: &mut UnboundedReceiver<SessionEvent>) -> bool {
    let mut last_status = None;
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::MessageAppended(message) if message.role() == Role::Bot => {
                print_message(&message);
            }
            SessionEvent::StatusChanged(status) => last_status = Some(status),
            _ => {}
        }
    }

    last_status.is_none_or(|status| {
        print_status(&status);
        !status.is_error()
    })
}
