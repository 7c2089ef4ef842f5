// SPDX-License-Identifier: MPL-2.0
//! Built-in messages compiled into the binary.
//!
//! The `resources/` folder ships `messages.default`, the last bundle of every
//! fallback chain.

use crate::application::port::{ResourceLoader, ResourceSource};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::io;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

/// Name of the built-in resource.
pub const BUILTIN_MESSAGES: &str = "messages.default";

/// Loader over the embedded `resources/` folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMessages;

struct EmbeddedSource {
    id: String,
    data: Cow<'static, [u8]>,
}

impl ResourceSource for EmbeddedSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> io::Result<String> {
        String::from_utf8(self.data.to_vec())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl ResourceLoader for EmbeddedMessages {
    fn list(&self, name: &str) -> Vec<Box<dyn ResourceSource + '_>> {
        Asset::get(name)
            .map(|file| {
                Box::new(EmbeddedSource {
                    id: format!("builtin:{name}"),
                    data: file.data,
                }) as Box<dyn ResourceSource>
            })
            .into_iter()
            .collect()
    }
}
