// SPDX-License-Identifier: MPL-2.0
//! Available languages and language selection.
//!
//! # Invariants
//!
//! 1. **Selection never fails**: [`Langs::preferred`] always returns a
//!    language, falling back to the first available one and then to the
//!    platform default.
//!
//! 2. **Deterministic order**: candidates are scanned in priority order and,
//!    for each candidate, available languages in configured order.
//!
//! 3. **One cookie**: [`Langs::set_lang`] and [`Langs::clear_lang`] touch only
//!    the configured language cookie.

use crate::application::port::{DiscardCookie, LangCookie, LangCookieSink};
use crate::config::{CookieConfig, I18nConfig, LANGS_CONFIG_KEY};
use crate::domain::Lang;
use crate::error::{Error, Result};

/// Settings of the cookie persisting a language choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangCookieSettings {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub path: String,
    pub domain: Option<String>,
}

impl Default for LangCookieSettings {
    fn default() -> Self {
        Self::from(&CookieConfig::default())
    }
}

impl From<&CookieConfig> for LangCookieSettings {
    fn from(config: &CookieConfig) -> Self {
        Self {
            name: config.name.clone(),
            secure: config.secure,
            http_only: config.http_only,
            path: config.path.clone(),
            domain: config.domain.clone(),
        }
    }
}

/// The configured languages.
#[derive(Debug, Clone)]
pub struct Langs {
    available: Vec<Lang>,
    cookie: LangCookieSettings,
}

impl Langs {
    #[must_use]
    pub fn new(available: Vec<Lang>, cookie: LangCookieSettings) -> Self {
        Self { available, cookie }
    }

    /// Parses the configured language tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLang`] naming the first invalid tag, the
    /// configuration key and, when known, the settings file.
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let origin = match &config.source {
            Some(path) => format!("{LANGS_CONFIG_KEY} ({})", path.display()),
            None => LANGS_CONFIG_KEY.to_string(),
        };
        let available = config
            .langs
            .iter()
            .map(|tag| Lang::parse(tag).map_err(|err| Error::invalid_lang(&err, &origin)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(available, LangCookieSettings::from(&config.cookie)))
    }

    /// Available languages in configured order.
    #[must_use]
    pub fn available(&self) -> &[Lang] {
        &self.available
    }

    #[must_use]
    pub fn is_available(&self, lang: &Lang) -> bool {
        self.available.contains(lang)
    }

    #[must_use]
    pub fn cookie(&self) -> &LangCookieSettings {
        &self.cookie
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Selects the best available language for the candidate ranges.
    ///
    /// # Example
    ///
    /// ```
    /// use lang_messages::domain::Lang;
    /// use lang_messages::i18n::{LangCookieSettings, Langs};
    ///
    /// let tags = |t: &[&str]| t.iter().map(|s| s.parse::<Lang>().unwrap()).collect::<Vec<_>>();
    /// let langs = Langs::new(tags(&["en", "fr", "fr-CH"]), LangCookieSettings::default());
    ///
    /// assert_eq!(langs.preferred(&tags(&["de", "fr-CH"])).code(), "fr-CH");
    /// assert_eq!(langs.preferred(&tags(&["de"])).code(), "en");
    /// ```
    #[must_use]
    pub fn preferred(&self, candidates: &[Lang]) -> Lang {
        candidates
            .iter()
            .find_map(|range| self.available.iter().find(|lang| lang.satisfies(range)))
            .or_else(|| self.available.first())
            .cloned()
            .unwrap_or_else(Lang::platform_default)
    }

    /// Persists `lang` on `response`.
    pub fn set_lang(&self, response: &mut dyn LangCookieSink, lang: &Lang) {
        response.set_cookie(LangCookie {
            name: self.cookie.name.clone(),
            value: lang.code().to_string(),
            path: self.cookie.path.clone(),
            domain: self.cookie.domain.clone(),
            secure: self.cookie.secure,
            http_only: self.cookie.http_only,
        });
    }

    /// Removes the persisted language from `response`.
    pub fn clear_lang(&self, response: &mut dyn LangCookieSink) {
        response.discard_cookie(DiscardCookie {
            name: self.cookie.name.clone(),
            path: self.cookie.path.clone(),
            domain: self.cookie.domain.clone(),
            secure: self.cookie.secure,
        });
    }

    /// Persists `lang` only if it is available; returns whether it was.
    ///
    /// Only the response is touched. The current request keeps its own
    /// candidates unless the caller also sets `lang` as its transient
    /// language, which [`MessagesApi::change_lang`] does.
    ///
    /// [`MessagesApi::change_lang`]: crate::i18n::MessagesApi::change_lang
    pub fn change_lang(&self, response: &mut dyn LangCookieSink, lang: &Lang) -> bool {
        if !self.is_available(lang) {
            tracing::debug!(lang = %lang, "refusing to persist unavailable language");
            return false;
        }
        self.set_lang(response, lang);
        true
    }
}

// =============================================================================
// Tests
// =============================================================================
