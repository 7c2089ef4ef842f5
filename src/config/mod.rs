// SPDX-License-Identifier: MPL-2.0
//! This module handles the message system configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[i18n]` - Available languages, resource prefix and resource directories
//! - `[i18n.cookie]` - Cookie that persists a user's language choice
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`load_from_str()` with explicit input
//! 2. Set `LANG_MESSAGES_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```
//! use lang_messages::config;
//!
//! let config = config::load_from_str(r#"
//! [i18n]
//! langs = ["en", "fr"]
//!
//! [i18n.cookie]
//! name = "LANG"
//! "#).unwrap();
//!
//! assert_eq!(config.i18n.langs, vec!["en", "fr"]);
//! assert_eq!(config.i18n.cookie.name, "LANG");
//! assert!(config.i18n.cookie.http_only);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "lang-messages";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LANG_MESSAGES_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Language cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,

    /// Only send the cookie over secure transport.
    #[serde(default = "default_cookie_secure")]
    pub secure: bool,

    /// Hide the cookie from client-side scripts.
    #[serde(default = "default_cookie_http_only")]
    pub http_only: bool,

    #[serde(default = "default_cookie_path")]
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            secure: DEFAULT_LANG_COOKIE_SECURE,
            http_only: DEFAULT_LANG_COOKIE_HTTP_ONLY,
            path: default_cookie_path(),
            domain: None,
        }
    }
}

/// Language and messages settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct I18nConfig {
    /// Available language tags, most preferred fallback first.
    #[serde(default)]
    pub langs: Vec<String>,

    /// Prefix of messages resource names (e.g. `conf` for `conf/messages.fr`).
    #[serde(default = "default_messages_path")]
    pub path: String,

    /// Resource directories; later directories override earlier ones.
    #[serde(default)]
    pub messages_dirs: Vec<PathBuf>,

    #[serde(default)]
    pub cookie: CookieConfig,

    /// File these settings were read from, set by [`load_from_path`].
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub i18n: I18nConfig,
}

fn default_cookie_name() -> String {
    DEFAULT_LANG_COOKIE_NAME.to_string()
}

fn default_cookie_secure() -> bool {
    DEFAULT_LANG_COOKIE_SECURE
}

fn default_cookie_http_only() -> bool {
    DEFAULT_LANG_COOKIE_HTTP_ONLY
}

fn default_cookie_path() -> String {
    DEFAULT_LANG_COOKIE_PATH.to_string()
}

fn default_messages_path() -> String {
    DEFAULT_MESSAGES_PATH.to_string()
}

// =============================================================================
// Loading
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    tracing::debug!("no configuration file found, using defaults");
    Ok(Config::default())
}

/// Loads the configuration from `path`.
///
/// Relative `messages_dirs` are resolved against the file's directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config = load_from_str(&content)?;
    if let Some(base) = path.parent() {
        for dir in &mut config.i18n.messages_dirs {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
    config.i18n.source = Some(path.to_path_buf());
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parses a configuration from TOML text.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::error::Error::Config) on invalid TOML.
pub fn load_from_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
