// SPDX-License-Identifier: MPL-2.0
//! Domain layer - language and message value objects.
//!
//! # Modules
//!
//! - [`lang`]: Language identifiers ([`Lang`](lang::Lang))
//! - [`message`]: Parsed message entries ([`MessageEntry`](message::MessageEntry))

pub mod lang;
pub mod message;

pub use lang::{Lang, LangParseError};
pub use message::MessageEntry;
