// SPDX-License-Identifier: MPL-2.0
//! Message entry type.

/// One `key=pattern` pair read from a messages resource.
///
/// The pattern is stored after escape processing but before any argument
/// substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    pub pattern: String,
}

impl MessageEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pattern: pattern.into(),
        }
    }

    /// Returns `true` when `c` may appear in a message key.
    #[must_use]
    pub fn is_key_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    }
}
