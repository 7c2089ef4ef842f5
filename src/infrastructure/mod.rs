// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fs`]: Layered directories on disk (implements [`ResourceLoader`])
//! - [`embedded`]: Built-in messages compiled in with `rust-embed`
//! - [`memory`]: Resources held in memory
//! - [`cookies`]: In-memory response cookies (implements [`LangCookieSink`])
//!
//! [`ResourceLoader`]: crate::application::port::ResourceLoader
//! [`LangCookieSink`]: crate::application::port::LangCookieSink

pub mod cookies;
pub mod embedded;
pub mod fs;
pub mod memory;

// Re-export main types for convenience
pub use cookies::CookieJar;
pub use embedded::{EmbeddedMessages, BUILTIN_MESSAGES};
pub use fs::FsResourceLoader;
pub use memory::MemoryResourceLoader;
