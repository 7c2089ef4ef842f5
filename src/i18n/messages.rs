// SPDX-License-Identifier: MPL-2.0
//! Message lookup with language fallback.
//!
//! # Fallback Chain
//!
//! A key is looked up, in order, in the bundle of the language's canonical
//! code (`fr-CH`), of its primary language (`fr`), in
//! [`DEFAULT_BUNDLE`] and finally in [`BUILTIN_BUNDLE`]. With several keys the
//! whole chain is walked for the first key before the next key is tried.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Key in no bundle | [`MessagesApi::resolve`] returns the last key |
//! | Bundle not loaded | Falls through the chain |
//! | Placeholder without argument | Left as written |

use crate::application::port::{LangCookieSink, ResourceLoader};
use crate::config::I18nConfig;
use crate::domain::Lang;
use crate::error::Result;
use crate::i18n::format::format_message;
use crate::i18n::langs::Langs;
use crate::i18n::request::LangPreferences;
use crate::i18n::store::{MessageCatalog, BUILTIN_BUNDLE, DEFAULT_BUNDLE};
use crate::infrastructure::EmbeddedMessages;
use fluent_bundle::FluentValue;

/// Languages plus their messages; immutable once built.
#[derive(Debug, Clone)]
pub struct MessagesApi {
    langs: Langs,
    catalog: MessageCatalog,
}

impl MessagesApi {
    #[must_use]
    pub fn new(langs: Langs, catalog: MessageCatalog) -> Self {
        Self { langs, catalog }
    }

    /// Builds the languages and loads every bundle through `loader`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configured language, an unreadable resource or a
    /// malformed resource.
    pub fn load(config: &I18nConfig, loader: &dyn ResourceLoader) -> Result<Self> {
        let langs = Langs::from_config(config)?;
        let catalog =
            MessageCatalog::build(langs.available(), &config.path, loader, &EmbeddedMessages)?;
        tracing::info!(
            langs = langs.available().len(),
            bundles = catalog.len(),
            "messages ready"
        );
        Ok(Self::new(langs, catalog))
    }

    #[must_use]
    pub fn langs(&self) -> &Langs {
        &self.langs
    }

    #[must_use]
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Finds the raw pattern for the first key with a hit anywhere in its chain.
    fn find_pattern(&self, lang: &Lang, keys: &[&str]) -> Option<&str> {
        let chain = [lang.code(), lang.language(), DEFAULT_BUNDLE, BUILTIN_BUNDLE];
        keys.iter().find_map(|key| {
            chain
                .iter()
                .enumerate()
                .filter(|&(i, code)| !chain[..i].contains(code))
                .find_map(|(_, code)| self.catalog.get(code, key))
        })
    }

    /// Formats the first key found for `lang`, or `None` when no key exists.
    #[must_use]
    pub fn translate(&self, lang: &Lang, keys: &[&str], args: &[FluentValue<'_>]) -> Option<String> {
        self.find_pattern(lang, keys)
            .map(|pattern| format_message(pattern, lang, args))
    }

    /// Formats the first key found for `lang`.
    ///
    /// When no key is found the last key is returned verbatim, so missing
    /// translations stay visible.
    #[must_use]
    pub fn resolve(&self, lang: &Lang, keys: &[&str], args: &[FluentValue<'_>]) -> String {
        self.translate(lang, keys, args).unwrap_or_else(|| {
            let missing = keys.last().copied().unwrap_or_default();
            tracing::debug!(lang = %lang, key = missing, "message not found");
            missing.to_string()
        })
    }

    /// Whether `key` resolves for `lang` through the fallback chain.
    #[must_use]
    pub fn is_defined_at(&self, lang: &Lang, key: &str) -> bool {
        self.find_pattern(lang, &[key]).is_some()
    }

    /// Messages for the best available language among `candidates`.
    #[must_use]
    pub fn preferred(&self, candidates: &[Lang]) -> Messages<'_> {
        Messages {
            lang: self.langs.preferred(candidates),
            api: self,
        }
    }

    /// Messages for the language a request asks for.
    #[must_use]
    pub fn messages_for(&self, preferences: &LangPreferences) -> Messages<'_> {
        self.preferred(&preferences.candidates())
    }

    /// Messages for `lang`, whether or not it is available.
    #[must_use]
    pub fn messages(&self, lang: Lang) -> Messages<'_> {
        Messages { lang, api: self }
    }

    pub fn set_lang(&self, response: &mut dyn LangCookieSink, lang: &Lang) {
        self.langs.set_lang(response, lang);
    }

    pub fn clear_lang(&self, response: &mut dyn LangCookieSink) {
        self.langs.clear_lang(response);
    }

    /// Switches to `lang` for this request and the following ones.
    ///
    /// When `lang` is available the cookie is set on `response` and `lang`
    /// becomes the transient language of `preferences`; otherwise nothing
    /// changes. Returns whether the switch happened.
    pub fn change_lang(
        &self,
        response: &mut dyn LangCookieSink,
        preferences: &mut LangPreferences,
        lang: &Lang,
    ) -> bool {
        if !self.langs.change_lang(response, lang) {
            return false;
        }
        preferences.set_transient(lang.clone());
        true
    }
}

/// Messages bound to one selected language.
#[derive(Debug, Clone)]
pub struct Messages<'a> {
    lang: Lang,
    api: &'a MessagesApi,
}

impl Messages<'_> {
    #[must_use]
    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    /// Formats `key`, returning the key itself when it is missing.
    #[must_use]
    pub fn at(&self, key: &str, args: &[FluentValue<'_>]) -> String {
        self.api.resolve(&self.lang, &[key], args)
    }

    /// Formats the first of `keys` that exists.
    #[must_use]
    pub fn at_keys(&self, keys: &[&str], args: &[FluentValue<'_>]) -> String {
        self.api.resolve(&self.lang, keys, args)
    }

    #[must_use]
    pub fn is_defined_at(&self, key: &str) -> bool {
        self.api.is_defined_at(&self.lang, key)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::langs::LangCookieSettings;
    use crate::i18n::store::Bundle;
    use crate::infrastructure::CookieJar;
    use std::collections::HashMap;

    fn lang(tag: &str) -> Lang {
        tag.parse().expect("valid tag")
    }

    fn bundle(pairs: &[(&str, &str)]) -> Bundle {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn api() -> MessagesApi {
        let mut bundles = HashMap::new();
        bundles.insert("en".to_string(), bundle(&[("greet", "Hi")]));
        bundles.insert(
            "fr".to_string(),
            bundle(&[("greet", "Salut"), ("only.fr", "fr"), ("count", "{0} éléments")]),
        );
        bundles.insert("fr-CH".to_string(), bundle(&[("greet", "Grüezi")]));
        bundles.insert(
            DEFAULT_BUNDLE.to_string(),
            bundle(&[("greet", "Hello"), ("bye", "Bye"), ("error.required", "Fill me")]),
        );
        bundles.insert(
            BUILTIN_BUNDLE.to_string(),
            bundle(&[("error.required", "Required"), ("builtin.only", "Built in")]),
        );
        let langs = Langs::new(
            vec![lang("en"), lang("fr"), lang("fr-CH")],
            LangCookieSettings::default(),
        );
        MessagesApi::new(langs, MessageCatalog::from_bundles(bundles))
    }

    #[test]
    fn exact_bundle_first() {
        assert_eq!(api().resolve(&lang("en"), &["greet"], &[]), "Hi");
        assert_eq!(api().resolve(&lang("fr-CH"), &["greet"], &[]), "Grüezi");
    }

    #[test]
    fn regional_language_falls_back_to_bare_language() {
        assert_eq!(api().resolve(&lang("fr-CH"), &["only.fr"], &[]), "fr");
        assert_eq!(api().resolve(&lang("fr-BE"), &["greet"], &[]), "Salut");
    }

    #[test]
    fn falls_through_to_default_then_builtin() {
        let api = api();
        assert_eq!(api.resolve(&lang("en"), &["bye"], &[]), "Bye");
        assert_eq!(api.resolve(&lang("en"), &["error.required"], &[]), "Fill me");
        assert_eq!(api.resolve(&lang("en"), &["builtin.only"], &[]), "Built in");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(api().resolve(&lang("en"), &["missing"], &[]), "missing");
        assert_eq!(api().translate(&lang("en"), &["missing"], &[]), None);
    }

    #[test]
    fn whole_chain_is_tried_for_each_key_in_order() {
        let api = api();
        // `bye` only exists in the default bundle, yet it wins over `only.fr`
        // because it is the first key.
        assert_eq!(api.resolve(&lang("fr"), &["bye", "only.fr"], &[]), "Bye");
        assert_eq!(api.resolve(&lang("fr"), &["nope", "only.fr"], &[]), "fr");
    }

    #[test]
    fn all_keys_missing_returns_last_key() {
        assert_eq!(api().resolve(&lang("en"), &["a", "b", "c"], &[]), "c");
    }

    #[test]
    fn arguments_are_formatted_for_the_language() {
        let text = api().resolve(&lang("fr"), &["count"], &[FluentValue::from(1500)]);
        assert_eq!(text, "1\u{202f}500 éléments");
    }

    #[test]
    fn is_defined_at_agrees_with_resolve() {
        let api = api();
        for tag in ["en", "fr", "fr-CH", "de"] {
            for key in ["greet", "bye", "only.fr", "builtin.only", "missing", "count"] {
                let l = lang(tag);
                let found = api.resolve(&l, &[key], &[]) != key;
                assert_eq!(api.is_defined_at(&l, key), found, "{tag}/{key}");
            }
        }
    }

    #[test]
    fn preferred_binds_selected_language() {
        let api = api();
        let messages = api.preferred(&[lang("de"), lang("fr-CH")]);
        assert_eq!(messages.lang().code(), "fr-CH");
        assert_eq!(messages.at("greet", &[]), "Grüezi");
        assert_eq!(messages.at_keys(&["nope", "bye"], &[]), "Bye");
        assert!(messages.is_defined_at("only.fr"));
        assert!(!messages.is_defined_at("nope"));
    }

    #[test]
    fn messages_for_unavailable_language_still_walks_chain() {
        let api = api();
        let messages = api.messages(lang("de"));
        assert_eq!(messages.at("greet", &[]), "Hello");
    }

    #[test]
    fn change_lang_applies_to_the_current_request() {
        let api = api();
        let mut jar = CookieJar::new();
        let mut preferences = LangPreferences::new().with_accept(vec![lang("en")]);

        assert!(api.change_lang(&mut jar, &mut preferences, &lang("fr")));
        assert_eq!(api.messages_for(&preferences).at("greet", &[]), "Salut");
        assert_eq!(jar.get("PLAY_LANG").map(|c| c.value.as_str()), Some("fr"));
    }

    #[test]
    fn change_lang_to_unavailable_language_changes_nothing() {
        let api = api();
        let mut jar = CookieJar::new();
        let mut preferences = LangPreferences::new().with_accept(vec![lang("en")]);

        assert!(!api.change_lang(&mut jar, &mut preferences, &lang("de")));
        assert!(jar.is_empty());
        assert_eq!(api.messages_for(&preferences).at("greet", &[]), "Hi");
    }
}
