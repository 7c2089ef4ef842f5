// SPDX-License-Identifier: MPL-2.0
//! `lang_messages` loads layered message bundles, picks the best language for
//! a request and resolves localized message text.
//!
//! # Example
//!
//! ```
//! use lang_messages::config::I18nConfig;
//! use lang_messages::domain::Lang;
//! use lang_messages::i18n::MessagesApi;
//! use lang_messages::infrastructure::MemoryResourceLoader;
//!
//! let config = I18nConfig {
//!     langs: vec!["en".into(), "fr".into()],
//!     ..I18nConfig::default()
//! };
//! let loader = MemoryResourceLoader::new()
//!     .with("messages", "greeting=Hello {0}")
//!     .with("messages.fr", "greeting=Bonjour {0}");
//! let api = MessagesApi::load(&config, &loader).unwrap();
//!
//! let candidates: Vec<Lang> = vec!["fr-CA".parse().unwrap(), "fr".parse().unwrap()];
//! let messages = api.preferred(&candidates);
//! assert_eq!(messages.at("greeting", &["Anne".into()]), "Bonjour Anne");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;

pub use fluent_bundle::FluentValue;
