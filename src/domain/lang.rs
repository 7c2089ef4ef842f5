// SPDX-License-Identifier: MPL-2.0
//! Language value object.
//!
//! A [`Lang`] wraps a [`LanguageIdentifier`] together with its canonical code
//! (`en`, `en-US`, `zh-Hant-TW`). Two languages are equal when their canonical
//! codes are equal; parsing normalizes subtag case, so `EN-us` and `en-US`
//! denote the same language.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Language used when neither configuration nor the platform yields one.
const FALLBACK_PLATFORM_TAG: &str = "en";

// =============================================================================
// LangParseError
// =============================================================================

/// A string could not be parsed as a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangParseError {
    tag: String,
}

impl LangParseError {
    /// Returns the rejected tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for LangParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid language tag: '{}'", self.tag)
    }
}

impl std::error::Error for LangParseError {}

// =============================================================================
// Lang
// =============================================================================

/// A normalized language identifier.
///
/// # Example
///
/// ```
/// use lang_messages::domain::Lang;
///
/// let lang: Lang = "fr-ch".parse().unwrap();
/// assert_eq!(lang.code(), "fr-CH");
/// assert_eq!(lang.language(), "fr");
/// assert_eq!(lang.region(), Some("CH"));
/// ```
#[derive(Debug, Clone)]
pub struct Lang {
    id: LanguageIdentifier,
    code: String,
    language: String,
}

impl Lang {
    /// Parses a language tag such as `en`, `en-US` or `sr-Latn-RS`.
    ///
    /// Both `-` and `_` are accepted as subtag separators.
    ///
    /// # Errors
    ///
    /// Returns a [`LangParseError`] when the tag is empty or malformed.
    pub fn parse(tag: &str) -> Result<Self, LangParseError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LangParseError {
                tag: tag.to_string(),
            });
        }
        trimmed
            .parse::<LanguageIdentifier>()
            .map(Self::from)
            .map_err(|_| LangParseError {
                tag: tag.to_string(),
            })
    }

    /// Builds a language from its sub-parts.
    ///
    /// # Errors
    ///
    /// Returns a [`LangParseError`] when any part is not a valid subtag.
    pub fn from_parts(
        language: &str,
        script: Option<&str>,
        region: Option<&str>,
        variants: &[&str],
    ) -> Result<Self, LangParseError> {
        let mut tag = language.to_string();
        for part in script.into_iter().chain(region).chain(variants.iter().copied()) {
            tag.push('-');
            tag.push_str(part);
        }
        Self::parse(&tag)
    }

    /// The language of the running platform, or `en` when it cannot be read.
    #[must_use]
    pub fn platform_default() -> Self {
        sys_locale::get_locale()
            .and_then(|locale| {
                // POSIX locales may carry an encoding suffix (`de_DE.UTF-8`).
                let tag = locale.split(['.', '@']).next().unwrap_or_default();
                Self::parse(tag).ok()
            })
            .or_else(|| Self::parse(FALLBACK_PLATFORM_TAG).ok())
            .unwrap_or_else(|| Self::from(LanguageIdentifier::default()))
    }

    /// Canonical code, e.g. `en-US`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Primary language subtag, e.g. `en` for `en-US`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.id.script.as_ref().map(|script| script.as_str())
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|region| region.as_str())
    }

    /// Returns `true` when only the primary language subtag is set.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.id.script.is_none() && self.id.region.is_none() && self.id.variants().len() == 0
    }

    /// Whether this language satisfies the requested language range.
    ///
    /// Every subtag the range specifies must be equal; subtags the range
    /// leaves out match anything. `fr-CH` satisfies `fr`, but `fr` does not
    /// satisfy `fr-CH`.
    #[must_use]
    pub fn satisfies(&self, range: &Lang) -> bool {
        self.id.matches(&range.id, false, true)
    }

    /// Borrows the underlying identifier.
    #[must_use]
    pub fn identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl From<LanguageIdentifier> for Lang {
    fn from(id: LanguageIdentifier) -> Self {
        let code = id.to_string();
        let language = id.language.to_string();
        Self { id, code, language }
    }
}

impl FromStr for Lang {
    type Err = LangParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Lang {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Lang {}

impl Hash for Lang {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// =============================================================================
// Tests
// =============================================================================
