use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::profile;

/// Backend used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the configured server.
pub const SERVER_ENV: &str = "MODECHAT_SERVER";

/// Settings in the `[modechat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModechatConfig {
    /// Base URL of the chat backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Whether chat requests carry the automatic-mode flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_control: Option<bool>,
    /// Profile names offered for manual selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<String>>,
    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/modechat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub modechat: ModechatConfig,
}

/// Configuration after merging CLI flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Backend base URL without a trailing slash.
    pub server: String,
    pub auto_control: bool,
    pub profiles: Vec<String>,
    pub timeout: Option<Duration>,
}

/// CLI overrides that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub server: Option<String>,
}

/// Resolves configuration.
///
/// The server comes from, in order: the CLI option, `MODECHAT_SERVER`, the
/// config file, [`DEFAULT_SERVER`].
///
/// # Errors
///
/// Returns an error if the server is not an http(s) URL or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let section = &config_file.modechat;

    let env_server = std::env::var(SERVER_ENV).ok().filter(|s| !s.trim().is_empty());
    let server = options
        .server
        .clone()
        .or(env_server)
        .or_else(|| section.server.clone())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let server = validate_server(&server)?;

    let timeout = match section.timeout_secs {
        Some(0) => bail!(
            "Invalid configuration: 'timeout_secs' must be greater than 0\n\n\
             Remove it from ~/.config/modechat/config.toml to disable timeouts."
        ),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    Ok(ResolvedConfig {
        server,
        auto_control: section.auto_control.unwrap_or(true),
        profiles: normalize_profiles(section.profiles.as_deref()),
        timeout,
    })
}

/// Loads the config file (if any) and resolves it against `options`.
pub fn load_resolved(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    resolve_config(options, &config_file)
}

/// Checks that `server` parses as an http(s) URL with a host and strips
/// trailing slashes.
pub fn validate_server(server: &str) -> Result<String> {
    let server = server.trim().trim_end_matches('/');
    let invalid = || {
        format!(
            "Invalid server URL: '{server}'\n\n\
             The server must be an http:// or https:// URL, e.g. {DEFAULT_SERVER}"
        )
    };

    let url = Url::parse(server).with_context(invalid)?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        bail!(invalid());
    }

    Ok(server.to_string())
}

fn normalize_profiles(configured: Option<&[String]>) -> Vec<String> {
    let mut profiles: Vec<String> = Vec::new();
    for name in configured.unwrap_or_default() {
        let name = name.trim();
        if !name.is_empty() && !profiles.iter().any(|p| p == name) {
            profiles.push(name.to_string());
        }
    }

    if profiles.is_empty() {
        profile::default_profile_names()
    } else {
        profiles
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/modechat/config.toml`
    /// (or `~/.config/modechat/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the file, or returns the defaults when it doesn't exist yet.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
