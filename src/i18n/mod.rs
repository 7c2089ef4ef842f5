// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) services.
//!
//! This module loads `messages` resources, selects the language for a
//! request and resolves message text through a fixed fallback chain.
//!
//! # Features
//!
//! - Line-oriented `key=pattern` resources with escapes and continuations
//! - Layered resources where later sources override earlier ones
//! - Language selection from ranges (`fr` matches `fr-CH`, not the reverse)
//! - Positional, locale-aware argument formatting
//! - Whole-catalog replacement for reloads

pub mod format;
pub mod handle;
pub mod langs;
pub mod messages;
pub mod parser;
pub mod request;
pub mod store;

pub use handle::SharedMessages;
pub use langs::{LangCookieSettings, Langs};
pub use messages::{Messages, MessagesApi};
pub use parser::{parse, ParseError, ParseErrorKind};
pub use request::{parse_accept_language, LangPreferences};
pub use store::{MessageCatalog, BUILTIN_BUNDLE, DEFAULT_BUNDLE};
