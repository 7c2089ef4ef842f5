// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`resource`]: Locating and reading raw messages resources
//! - [`response`]: Attaching and removing the language cookie on a response
//!
//! # Design Notes
//!
//! - Traits use domain types and `std` only, no web framework types
//! - Loaders are `Send + Sync` so a catalog can be rebuilt from any thread
//! - Reading is the only fallible step; listing never fails

pub mod resource;
pub mod response;

// Re-export main types for convenience
pub use resource::{ResourceLoader, ResourceSource};
pub use response::{DiscardCookie, LangCookie, LangCookieSink};
