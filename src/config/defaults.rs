// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the configuration.
//!
//! # Categories
//!
//! - **Languages**: Available languages and resource location
//! - **Cookie**: Persisted language preference

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Configuration key reported when a language tag is invalid.
pub const LANGS_CONFIG_KEY: &str = "i18n.langs";

/// Default prefix of messages resources (none: `messages`, `messages.fr`).
pub const DEFAULT_MESSAGES_PATH: &str = "";

// ==========================================================================
// Cookie Defaults
// ==========================================================================

/// Default name of the language cookie.
pub const DEFAULT_LANG_COOKIE_NAME: &str = "PLAY_LANG";

/// Whether the language cookie is restricted to secure transport by default.
pub const DEFAULT_LANG_COOKIE_SECURE: bool = false;

/// Whether the language cookie is hidden from scripts by default.
pub const DEFAULT_LANG_COOKIE_HTTP_ONLY: bool = true;

/// Default path of the language cookie.
pub const DEFAULT_LANG_COOKIE_PATH: &str = "/";
