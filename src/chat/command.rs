use inquire::autocompletion::{Autocomplete, Replacement};

use crate::profile;

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/auto", "Toggle automatic mode (or /auto on|off)"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/profile", "Switch to a profile"),
    ("/quit", "Exit chat mode"),
    ("/state", "Show the current mode"),
];

/// Slash command and profile-name autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter {
    profiles: Vec<String>,
}

impl SlashCommandCompleter {
    pub const fn new(profiles: Vec<String>) -> Self {
        Self { profiles }
    }

    fn profile_suggestions(&self, command: &str, partial: &str) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|name| name.starts_with(partial))
            .map(|name| match profile::describe(name) {
                Some(desc) => format!("{command} {name}  {desc}"),
                None => format!("{command} {name}"),
            })
            .collect()
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.starts_with("//") {
            return Ok(vec![]);
        }

        if let Some((command, partial)) = input.split_once(' ') {
            return Ok(match command {
                "/profile" | "/mode" => self.profile_suggestions(command, partial.trim_start()),
                _ => vec![],
            });
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        // Suggestions are "<completion>  <description>"
        let replacement = highlighted_suggestion
            .map(|s| s.split("  ").next().unwrap_or("").trim_end().to_string());
        Ok(replacement)
    }
}

/// Requested change to automatic mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoToggle {
    On,
    Off,
    Toggle,
}

impl AutoToggle {
    /// The flag to request given the current one.
    pub const fn resolve(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Auto(AutoToggle),
    Config,
    Help,
    History,
    /// `None` when no profile name was given.
    Profile(Option<String>),
    Quit,
    State,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a prompt line. A leading `//` sends the rest, starting with a
/// single `/`, as a chat message.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    if let Some(escaped) = input.strip_prefix("//") {
        return Input::Text(format!("/{escaped}"));
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match (parts.first().copied(), parts.get(1).copied(), parts.len()) {
        (Some("auto"), None, _) => SlashCommand::Auto(AutoToggle::Toggle),
        (Some("auto"), Some(arg), 2) => parse_auto_arg(arg)
            .map_or_else(|| SlashCommand::Unknown(parts.join(" ")), SlashCommand::Auto),
        (Some("profile" | "mode"), name, len) if len <= 2 => {
            SlashCommand::Profile(name.map(str::to_string))
        }
        (Some("config"), None, _) => SlashCommand::Config,
        (Some("help"), None, _) => SlashCommand::Help,
        (Some("history"), None, _) => SlashCommand::History,
        (Some("state"), None, _) => SlashCommand::State,
        (Some("quit" | "exit" | "q"), None, _) => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

fn parse_auto_arg(arg: &str) -> Option<AutoToggle> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => Some(AutoToggle::On),
        "off" | "0" | "false" => Some(AutoToggle::Off),
        _ => None,
    }
}
