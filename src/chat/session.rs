use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use tokio::sync::mpsc::UnboundedReceiver;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::session::{ChatController, ModeState, Role, SessionEvent, Status};
use crate::ui::{Spinner, Style, is_prompt_cancelled, print_error};

/// Prints the session changes produced by one operation.
///
/// User messages are skipped (the prompt already echoed them), the mode bar
/// is reprinted only when the mode actually changed, and only the final,
/// settled status of the batch is shown.
pub struct EventRenderer {
    profiles: Vec<String>,
    last_mode: Option<ModeState>,
}

impl EventRenderer {
    pub const fn new(profiles: Vec<String>) -> Self {
        Self {
            profiles,
            last_mode: None,
        }
    }

    pub fn render(&mut self, events: &mut UnboundedReceiver<SessionEvent>) {
        let mut settled: Option<Status> = None;
        let mut mode_changed = false;

        while let Ok(event) = events.try_recv() {
            match event {
                SessionEvent::MessageAppended(message) => {
                    if message.role() == Role::Bot {
                        ui::print_message(&message);
                    }
                }
                SessionEvent::ModeChanged(mode) => {
                    if self.last_mode.as_ref() != Some(&mode) {
                        self.last_mode = Some(mode);
                        mode_changed = true;
                    }
                }
                SessionEvent::StatusChanged(status) => {
                    if !status.is_pending() {
                        settled = Some(status);
                    }
                }
            }
        }

        if let Some(status) = &settled {
            ui::print_status(status);
        }
        if mode_changed && let Some(mode) = &self.last_mode {
            ui::print_mode_bar(mode, &self.profiles);
        }
    }
}

/// An interactive chat session against the backend.
///
/// Provides a REPL-style interface: plain lines are sent as chat messages,
/// slash commands switch profiles and automatic mode.
pub struct ChatSession {
    config: ResolvedConfig,
    controller: ChatController,
}

impl ChatSession {
    pub const fn new(config: ResolvedConfig, controller: ChatController) -> Self {
        Self { config, controller }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config.server);

        let mut events = self.controller.subscribe();
        let mut renderer = EventRenderer::new(self.config.profiles.clone());

        {
            let _spinner = Spinner::new("Connecting...");
            self.controller.start().await;
        }
        renderer.render(&mut events);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        let completer = SlashCommandCompleter::new(self.config.profiles.clone());

        loop {
            // A fresh prompt each turn is the cleared input buffer.
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(completer.clone())
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        let _spinner = Spinner::new("Sending...");
                        self.controller.send(&text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }

            renderer.render(&mut events);
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Auto(toggle) => {
                let enabled = toggle.resolve(self.controller.mode().automatic());
                let _spinner = Spinner::new("Updating automatic mode...");
                self.controller.set_automatic(enabled).await;
            }
            SlashCommand::Profile(Some(name)) => {
                let _spinner = Spinner::new("Switching mode...");
                self.controller.set_profile(&name).await;
            }
            SlashCommand::Profile(None) => {
                crate::profile::print_profiles(
                    &self.config.profiles,
                    Some(self.controller.mode().profile()),
                );
                println!("Usage: /profile <name>\n");
            }
            SlashCommand::State => {
                ui::print_state(self.controller.mode(), self.controller.status());
                ui::print_mode_bar(self.controller.mode(), &self.config.profiles);
            }
            SlashCommand::History => {
                ui::print_history(self.controller.transcript().messages());
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                print_error(&format!("Unknown command: /{cmd}"));
                println!("{}\n", Style::hint("Type /help for available commands, or // to send a line starting with /"));
            }
        }
        true
    }
}
