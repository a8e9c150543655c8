//! XDG-style location of the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "modechat";

/// Returns the configuration directory for modechat.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/modechat` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/modechat` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(xdg) => Ok(PathBuf::from(xdg).join(APP_DIR)),
        None => dirs::home_dir()
            .map(|home| home.join(".config").join(APP_DIR))
            .context("Failed to determine home directory"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var_os("XDG_CONFIG_HOME");
        // SAFETY: tests touching XDG_CONFIG_HOME are serialized
        unsafe {
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        f();

        unsafe {
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg(None, || {
            assert!(config_dir().unwrap().ends_with(".config/modechat"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg(Some("/custom/config"), || {
            assert_eq!(
                config_dir().unwrap(),
                PathBuf::from("/custom/config/modechat")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_empty_xdg_ignored() {
        with_xdg(Some(""), || {
            assert!(config_dir().unwrap().ends_with(".config/modechat"));
        });
    }
}
