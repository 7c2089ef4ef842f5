// SPDX-License-Identifier: MPL-2.0
//! Message catalog assembly.
//!
//! A [`MessageCatalog`] maps a bundle code to that bundle's key → pattern
//! table. Bundle codes are the canonical codes of the available languages plus
//! two sentinels: [`DEFAULT_BUNDLE`] for the unsuffixed `messages` resource and
//! [`BUILTIN_BUNDLE`] for the messages shipped with this crate.
//!
//! The catalog is built once and never mutated afterwards.

use crate::application::port::ResourceLoader;
use crate::domain::Lang;
use crate::error::{Error, Result};
use crate::i18n::parser;
use crate::infrastructure::BUILTIN_MESSAGES;
use std::collections::HashMap;

/// Bundle holding the unsuffixed `messages` resource.
pub const DEFAULT_BUNDLE: &str = "default";

/// Bundle holding the built-in `messages.default` resource.
pub const BUILTIN_BUNDLE: &str = "default.play";

const MESSAGES_NAME: &str = "messages";

/// Key → pattern table of one bundle.
pub type Bundle = HashMap<String, String>;

/// Read-only set of bundles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    bundles: HashMap<String, Bundle>,
}

impl MessageCatalog {
    /// Creates a catalog from already assembled bundles.
    #[must_use]
    pub fn from_bundles(bundles: HashMap<String, Bundle>) -> Self {
        Self { bundles }
    }

    /// Loads every bundle for `available`.
    ///
    /// For each language the sources of `<prefix>messages.<code>` are merged
    /// in listing order, later sources overriding earlier ones. The unsuffixed
    /// `messages` resource fills [`DEFAULT_BUNDLE`] and `builtin`'s
    /// `messages.default` fills [`BUILTIN_BUNDLE`]. A resource without sources
    /// gives an empty bundle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] when a source cannot be read and
    /// [`Error::Parse`] when one is malformed.
    pub fn build(
        available: &[Lang],
        path_prefix: &str,
        loader: &dyn ResourceLoader,
        builtin: &dyn ResourceLoader,
    ) -> Result<Self> {
        let mut bundles = HashMap::new();

        for lang in available {
            let name = resource_name(path_prefix, &format!("{MESSAGES_NAME}.{}", lang.code()));
            bundles.insert(lang.code().to_string(), load_bundle(loader, &name)?);
        }

        let name = resource_name(path_prefix, MESSAGES_NAME);
        bundles.insert(DEFAULT_BUNDLE.to_string(), load_bundle(loader, &name)?);
        bundles.insert(
            BUILTIN_BUNDLE.to_string(),
            load_bundle(builtin, BUILTIN_MESSAGES)?,
        );

        for (code, bundle) in &bundles {
            tracing::info!(bundle = %code, messages = bundle.len(), "loaded message bundle");
        }

        Ok(Self { bundles })
    }

    /// Looks up `key` in the bundle `code` only, without fallback.
    #[must_use]
    pub fn get(&self, code: &str, key: &str) -> Option<&str> {
        self.bundles
            .get(code)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn bundle(&self, code: &str) -> Option<&Bundle> {
        self.bundles.get(code)
    }

    /// All bundle codes, sorted.
    #[must_use]
    pub fn bundle_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of bundles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

fn resource_name(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Merges all sources of `name`; the last listed source wins a key.
fn load_bundle(loader: &dyn ResourceLoader, name: &str) -> Result<Bundle> {
    let mut bundle = Bundle::new();
    for source in loader.list(name) {
        let text = source.read().map_err(|err| Error::Resource {
            source_id: source.id().to_string(),
            message: err.to_string(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let entries = parser::parse(text, source.id())?;
        tracing::debug!(source = source.id(), entries = entries.len(), "merging messages");
        bundle.extend(entries.into_iter().map(|entry| (entry.key, entry.pattern)));
    }
    Ok(bundle)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ResourceSource;
    use crate::infrastructure::{EmbeddedMessages, MemoryResourceLoader};
    use std::io;

    fn langs(tags: &[&str]) -> Vec<Lang> {
        tags.iter().map(|tag| tag.parse().expect("valid tag")).collect()
    }

    fn build(available: &[&str], loader: &MemoryResourceLoader) -> Result<MessageCatalog> {
        MessageCatalog::build(&langs(available), "", loader, &EmbeddedMessages)
    }

    struct FailingLoader;

    struct FailingSource;

    impl ResourceSource for FailingSource {
        fn id(&self) -> &str {
            "broken:messages"
        }

        fn read(&self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    impl ResourceLoader for FailingLoader {
        fn list(&self, _name: &str) -> Vec<Box<dyn ResourceSource + '_>> {
            vec![Box::new(FailingSource)]
        }
    }

    #[test]
    fn builds_language_default_and_builtin_bundles() {
        let loader = MemoryResourceLoader::new()
            .with("messages", "greet=Hello\nbye=Bye")
            .with("messages.en", "greet=Hi")
            .with("messages.fr", "greet=Salut");
        let catalog = build(&["en", "fr"], &loader).expect("catalog builds");

        assert_eq!(
            catalog.bundle_codes(),
            vec!["default", "default.play", "en", "fr"]
        );
        assert_eq!(catalog.get("en", "greet"), Some("Hi"));
        assert_eq!(catalog.get("fr", "greet"), Some("Salut"));
        assert_eq!(catalog.get(DEFAULT_BUNDLE, "bye"), Some("Bye"));
        assert_eq!(
            catalog.get(BUILTIN_BUNDLE, "error.required"),
            Some("This field is required")
        );
    }

    #[test]
    fn missing_resources_give_empty_bundles() {
        let catalog = build(&["de"], &MemoryResourceLoader::new()).expect("catalog builds");
        assert!(catalog.bundle("de").is_some_and(|b| b.is_empty()));
        assert!(catalog.bundle(DEFAULT_BUNDLE).is_some_and(|b| b.is_empty()));
    }

    #[test]
    fn later_listed_source_overrides_earlier() {
        let loader = MemoryResourceLoader::new()
            .with("messages.fr", "k=source one\nonly.first=1")
            .with("messages.fr", "k=source two");
        let catalog = build(&["fr"], &loader).expect("catalog builds");

        assert_eq!(catalog.get("fr", "k"), Some("source two"));
        assert_eq!(catalog.get("fr", "only.first"), Some("1"));
    }

    #[test]
    fn last_duplicate_in_one_file_wins() {
        let loader = MemoryResourceLoader::new().with("messages", "k=one\nk=two");
        let catalog = build(&[], &loader).expect("catalog builds");
        assert_eq!(catalog.get(DEFAULT_BUNDLE, "k"), Some("two"));
    }

    #[test]
    fn merging_identical_sources_is_idempotent() {
        let text = "a=1\nb=2\n# c\n";
        let once = build(&["en"], &MemoryResourceLoader::new().with("messages.en", text))
            .expect("catalog builds");
        let twice = build(
            &["en"],
            &MemoryResourceLoader::new()
                .with("messages.en", text)
                .with("messages.en", text),
        )
        .expect("catalog builds");
        assert_eq!(once, twice);
    }

    #[test]
    fn path_prefix_is_applied_to_application_resources() {
        let loader = MemoryResourceLoader::new()
            .with("conf/messages", "a=prefixed")
            .with("messages", "a=bare");
        let catalog =
            MessageCatalog::build(&[], "conf/", &loader, &EmbeddedMessages).expect("builds");
        assert_eq!(catalog.get(DEFAULT_BUNDLE, "a"), Some("prefixed"));
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let loader = MemoryResourceLoader::new().with("messages", "\u{feff}a=1");
        let catalog = build(&[], &loader).expect("catalog builds");
        assert_eq!(catalog.get(DEFAULT_BUNDLE, "a"), Some("1"));
    }

    #[test]
    fn parse_failure_aborts_with_source_name() {
        let loader = MemoryResourceLoader::new().with("messages.en", "ok=1\n=broken");
        match build(&["en"], &loader) {
            Err(Error::Parse(err)) => {
                assert_eq!(err.source_name(), "memory:messages.en#0");
                assert_eq!((err.line(), err.column()), (2, 1));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_aborts_with_source_id() {
        match MessageCatalog::build(&[], "", &FailingLoader, &EmbeddedMessages) {
            Err(Error::Resource { source_id, message }) => {
                assert_eq!(source_id, "broken:messages");
                assert!(message.contains("denied"));
            }
            other => panic!("expected resource error, got {other:?}"),
        }
    }
}
