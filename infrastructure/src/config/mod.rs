//! Configuration file loading for ragchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `RAGCHAT_SECTION__KEY` (e.g. `RAGCHAT_SERVICE__BASE_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ragchat.toml` or `./.ragchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ragchat/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileConfig, FileEndpointsConfig, FileLoggingConfig,
    FileReplConfig, FileServiceConfig,
};
pub use loader::{ConfigError, ConfigLoader};
