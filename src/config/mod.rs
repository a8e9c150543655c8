//! Configuration file handling and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_SERVER, ModechatConfig, ResolveOptions, ResolvedConfig,
    SERVER_ENV, load_resolved, resolve_config, validate_server,
};
