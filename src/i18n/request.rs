// SPDX-License-Identifier: MPL-2.0
//! Language preferences declared by a request.
//!
//! A request can ask for a language in three ways, from strongest to
//! weakest: a language set for the current request only, the persisted
//! language cookie and the `Accept-Language` header.

use crate::domain::Lang;
use std::cmp::Ordering;

/// Parses an `Accept-Language` header into language ranges, best first.
///
/// Ranges keep header order among equal weights. The wildcard `*`, ranges
/// with `q=0` and unparsable tags are dropped.
///
/// # Example
///
/// ```
/// use lang_messages::i18n::parse_accept_language;
///
/// let ranges = parse_accept_language("fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5");
/// let codes: Vec<&str> = ranges.iter().map(|l| l.code()).collect();
/// assert_eq!(codes, ["fr-CH", "fr", "en"]);
/// ```
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<Lang> {
    let mut weighted: Vec<(Lang, f32)> = header
        .split(',')
        .filter_map(|item| {
            let mut params = item.split(';');
            let tag = params.next().map(str::trim).filter(|t| !t.is_empty() && *t != "*")?;
            let quality = params
                .filter_map(|param| param.split_once('='))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                .map_or(Some(1.0), |(_, value)| value.trim().parse::<f32>().ok())?;
            if quality <= 0.0 {
                return None;
            }
            Lang::parse(tag).ok().map(|lang| (lang, quality))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    weighted.into_iter().map(|(lang, _)| lang).collect()
}

/// Candidate languages of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangPreferences {
    transient: Option<Lang>,
    cookie: Option<Lang>,
    accept: Vec<Lang>,
}

impl LangPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the preferences from raw request values.
    #[must_use]
    pub fn from_parts(
        transient: Option<Lang>,
        cookie_value: Option<&str>,
        accept_language: Option<&str>,
    ) -> Self {
        let mut preferences = Self::new();
        preferences.transient = transient;
        if let Some(value) = cookie_value {
            preferences = preferences.with_cookie_value(value);
        }
        if let Some(header) = accept_language {
            preferences.accept = parse_accept_language(header);
        }
        preferences
    }

    /// Language chosen for the current request only.
    #[must_use]
    pub fn with_transient(mut self, lang: Lang) -> Self {
        self.transient = Some(lang);
        self
    }

    /// Sets the transient language of a request already being served.
    pub fn set_transient(&mut self, lang: Lang) {
        self.transient = Some(lang);
    }

    /// Value of the language cookie; an invalid tag is ignored.
    #[must_use]
    pub fn with_cookie_value(mut self, value: &str) -> Self {
        match Lang::parse(value) {
            Ok(lang) => self.cookie = Some(lang),
            Err(err) => tracing::debug!(%err, "ignoring language cookie"),
        }
        self
    }

    /// Already parsed accept-languages, best first.
    #[must_use]
    pub fn with_accept(mut self, accept: Vec<Lang>) -> Self {
        self.accept = accept;
        self
    }

    /// Candidates in priority order: transient, cookie, accept-languages.
    #[must_use]
    pub fn candidates(&self) -> Vec<Lang> {
        self.transient
            .iter()
            .chain(self.cookie.iter())
            .chain(self.accept.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(langs: &[Lang]) -> Vec<&str> {
        langs.iter().map(Lang::code).collect()
    }

    #[test]
    fn header_order_is_kept_for_equal_weights() {
        let ranges = parse_accept_language("de, en-GB, fr");
        assert_eq!(codes(&ranges), ["de", "en-GB", "fr"]);
    }

    #[test]
    fn weights_reorder_ranges() {
        let ranges = parse_accept_language("en;q=0.5, de;q=0.9, fr");
        assert_eq!(codes(&ranges), ["fr", "de", "en"]);
    }

    #[test]
    fn wildcard_zero_weight_and_garbage_are_dropped() {
        let ranges = parse_accept_language("*, it;q=0, not a tag, es;q=abc, pt ; Q=0.4");
        assert_eq!(codes(&ranges), ["pt"]);
    }

    #[test]
    fn empty_header_has_no_ranges() {
        assert!(parse_accept_language("").is_empty());
        assert!(parse_accept_language(" , ,").is_empty());
    }

    #[test]
    fn candidates_are_transient_cookie_then_accept() {
        let preferences = LangPreferences::from_parts(
            Some("it".parse().expect("valid tag")),
            Some("fr-CH"),
            Some("de;q=0.8, en"),
        );
        assert_eq!(codes(&preferences.candidates()), ["it", "fr-CH", "en", "de"]);
    }

    #[test]
    fn invalid_cookie_value_is_ignored() {
        let preferences = LangPreferences::new()
            .with_cookie_value("!!")
            .with_accept(vec!["en".parse().expect("valid tag")]);
        assert_eq!(codes(&preferences.candidates()), ["en"]);
    }

    #[test]
    fn set_transient_takes_priority_over_cookie() {
        let mut preferences = LangPreferences::from_parts(None, Some("fr"), Some("en"));
        preferences.set_transient("de".parse().expect("valid tag"));
        assert_eq!(codes(&preferences.candidates()), ["de", "fr", "en"]);
    }

    #[test]
    fn no_preferences_means_no_candidates() {
        assert!(LangPreferences::from_parts(None, None, None).candidates().is_empty());
    }
}
