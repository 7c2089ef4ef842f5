// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator interfaces.
//!
//! - [`port`]: Trait definitions the message system consumes
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//!
//! # Example
//!
//! ```ignore
//! use lang_messages::application::port::ResourceLoader;
//! use lang_messages::infrastructure::FsResourceLoader;
//!
//! // Infrastructure implements the port trait
//! let loader = FsResourceLoader::new(vec!["conf".into()]);
//! let sources = loader.list("messages.fr");
//! ```

pub mod port;
