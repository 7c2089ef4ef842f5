// SPDX-License-Identifier: MPL-2.0
//! In-memory resource loader.
//!
//! Useful when messages come from somewhere other than files (a database, a
//! generated table) and in tests.

use crate::application::port::{ResourceLoader, ResourceSource};
use std::io;

#[derive(Debug, Clone)]
struct MemoryEntry {
    name: String,
    id: String,
    text: String,
}

/// Loader over resources held in memory, listed in insertion order.
///
/// # Example
///
/// ```
/// use lang_messages::application::port::ResourceLoader;
/// use lang_messages::infrastructure::MemoryResourceLoader;
///
/// let loader = MemoryResourceLoader::new()
///     .with("messages", "greeting=Hello")
///     .with("messages.fr", "greeting=Bonjour");
/// assert_eq!(loader.list("messages.fr").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceLoader {
    entries: Vec<MemoryEntry>,
}

impl MemoryResourceLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source for `name`, identified by `name` and its position.
    #[must_use]
    pub fn with(mut self, name: &str, text: &str) -> Self {
        let index = self.entries.iter().filter(|entry| entry.name == name).count();
        let id = format!("memory:{name}#{index}");
        self.add(name, &id, text);
        self
    }

    /// Adds a source for `name` with an explicit identifier.
    pub fn add(&mut self, name: &str, id: &str, text: &str) {
        self.entries.push(MemoryEntry {
            name: name.to_string(),
            id: id.to_string(),
            text: text.to_string(),
        });
    }
}

impl ResourceSource for MemoryEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn list(&self, name: &str) -> Vec<Box<dyn ResourceSource + '_>> {
        self.entries
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| Box::new(entry.clone()) as Box<dyn ResourceSource>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sources_for_name_in_insertion_order() {
        let loader = MemoryResourceLoader::new()
            .with("messages.en", "a=1")
            .with("messages", "a=0")
            .with("messages.en", "a=2");

        let sources = loader.list("messages.en");
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].id(), "memory:messages.en#0");
        assert_eq!(sources[1].id(), "memory:messages.en#1");
        assert_eq!(sources[1].read().expect("read"), "a=2");
    }

    #[test]
    fn unknown_name_is_empty() {
        let loader = MemoryResourceLoader::new().with("messages", "a=0");
        assert!(loader.list("messages.de").is_empty());
    }
}
