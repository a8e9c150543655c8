//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::session::{Message, ModeState, Role, Status};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(server: &str) {
    println!(
        "{} {} - {}",
        Style::header("modechat"),
        Style::version(format!("v{VERSION}")),
        Style::secondary(server)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Renders the profile bar. While automatic mode is on, every entry is
/// dimmed: the backend picks the profile.
pub fn format_mode_bar(mode: &ModeState, profiles: &[String]) -> String {
    let mut entries: Vec<String> = profiles
        .iter()
        .map(|name| {
            if mode.profile_controls_enabled() && name == mode.profile() {
                Style::active(name)
            } else if mode.profile_controls_enabled() {
                name.clone()
            } else {
                Style::secondary(name)
            }
        })
        .collect();

    if !profiles.iter().any(|name| name == mode.profile()) {
        entries.push(if mode.profile_controls_enabled() {
            Style::active(mode.profile())
        } else {
            Style::secondary(mode.profile())
        });
    }

    let badge = if mode.automatic() {
        format!(
            "{} {}",
            Style::value(mode.profile()),
            Style::hint("(auto)")
        )
    } else {
        Style::value(mode.profile())
    };

    format!("{} {}  {badge}", Style::label("modes"), entries.join(" · "))
}

pub fn print_mode_bar(mode: &ModeState, profiles: &[String]) {
    println!("{}", format_mode_bar(mode, profiles));
    println!();
}

pub fn print_message(message: &Message) {
    let mut lines = message.text().lines();
    let first = lines.next().unwrap_or("");
    match message.role() {
        Role::User => println!("{} {}", Style::label("you"), Style::user(first)),
        Role::Bot => println!("{} {first}", Style::bot("●")),
    }
    for line in lines {
        println!("  {line}");
    }
    if message.role() == Role::Bot {
        println!();
    }
}

pub fn print_history(messages: &[Message]) {
    println!("{}", Style::header("Conversation"));
    for message in messages {
        print_message(message);
    }
}

pub fn print_status(status: &Status) {
    if status.is_error() {
        crate::status!("{}", Style::error(status));
    } else {
        crate::status!("{}", Style::hint(status));
    }
}

pub fn print_state(mode: &ModeState, status: Option<&Status>) {
    println!("{}", Style::header("State"));
    println!(
        "  {}     {}",
        Style::label("profile"),
        Style::value(mode.profile())
    );
    println!(
        "  {}   {}",
        Style::label("automatic"),
        Style::value(if mode.automatic() { "on" } else { "off" })
    );
    println!(
        "  {}      {}",
        Style::label("status"),
        status.map_or_else(|| Style::secondary("(none)"), Style::secondary)
    );
    println!();
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}        {}",
        Style::label("server"),
        Style::value(&config.server)
    );
    println!(
        "  {}  {}",
        Style::label("auto_control"),
        Style::value(config.auto_control)
    );
    println!(
        "  {}      {}",
        Style::label("profiles"),
        Style::value(config.profiles.join(", "))
    );
    println!(
        "  {}       {}",
        Style::label("timeout"),
        config.timeout.map_or_else(
            || Style::secondary("(none)"),
            |t| Style::value(format!("{}s", t.as_secs()))
        )
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/profile <name>", "Switch profile (turns automatic mode off)"),
        ("/auto [on|off]", "Toggle automatic profile selection"),
        ("/state", "Show the current mode"),
        ("/history", "Show the conversation so far"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
        ("//<text>", "Send a message that starts with /"),
    ];
    for (command, description) in rows {
        println!(
            "  {}  {}",
            Style::command(format!("{command:16}")),
            Style::secondary(description)
        );
    }
    println!();
}
