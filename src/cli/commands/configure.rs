//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Confirm, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_SERVER, ModechatConfig, validate_server};
use crate::profile;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the saved settings; otherwise prompts for each one.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_settings(&config);
        println!(
            "{}",
            Style::secondary(manager.config_path().display().to_string())
        );
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&config);

    let current = config.modechat.clone();
    let server = prompt_server(current.server.as_deref())?;
    let auto_control = prompt_auto_control(current.auto_control.unwrap_or(true))?;
    let profiles = prompt_profiles(current.profiles.as_deref())?;
    let timeout_secs = prompt_timeout(current.timeout_secs)?;

    config.modechat = ModechatConfig {
        server: Some(server),
        auto_control: Some(auto_control),
        profiles,
        timeout_secs,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(config: &ConfigFile) {
    let section = &config.modechat;
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}        {}",
        Style::label("server"),
        section.server.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("auto_control"),
        section.auto_control.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("profiles"),
        section
            .profiles
            .as_ref()
            .map_or_else(not_set, |p| Style::value(p.join(", ")))
    );
    println!(
        "  {}  {}",
        Style::label("timeout_secs"),
        section.timeout_secs.map_or_else(not_set, Style::value)
    );
    println!();
}

fn prompt_server(default: Option<&str>) -> Result<String> {
    let server = Text::new("Server URL:")
        .with_default(default.unwrap_or(DEFAULT_SERVER))
        .with_help_message("Base URL of the chat backend")
        .prompt()?;

    validate_server(&server)
}

fn prompt_auto_control(default: bool) -> Result<bool> {
    let enabled = Confirm::new("Send the automatic-mode flag with each message?")
        .with_default(default)
        .prompt()?;
    Ok(enabled)
}

fn prompt_profiles(default: Option<&[String]>) -> Result<Option<Vec<String>>> {
    let default = default.map_or_else(
        || profile::default_profile_names().join(", "),
        |p| p.join(", "),
    );

    let input = Text::new("Profiles:")
        .with_default(&default)
        .with_help_message("Comma-separated profile names offered for /profile")
        .prompt()?;

    Ok(parse_profile_list(&input))
}

fn prompt_timeout(default: Option<u64>) -> Result<Option<u64>> {
    let default = default.map(|t| t.to_string()).unwrap_or_default();

    let input = Text::new("Request timeout in seconds:")
        .with_default(&default)
        .with_help_message("Leave empty to wait for the backend indefinitely")
        .prompt()?;

    parse_timeout(&input)
}

/// Splits a comma-separated list. `None` when no names remain, so the
/// built-in list is used.
fn parse_profile_list(input: &str) -> Option<Vec<String>> {
    let names: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    (!names.is_empty()).then_some(names)
}

fn parse_timeout(input: &str) -> Result<Option<u64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<u64>() {
        Ok(0) | Err(_) => bail!("Timeout must be a positive number of seconds, got '{input}'"),
        Ok(secs) => Ok(Some(secs)),
    }
}
