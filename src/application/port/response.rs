// SPDX-License-Identifier: MPL-2.0
//! Outbound response port for the persisted language preference.
//!
//! The message system never touches HTTP types. It hands a [`LangCookie`] or
//! a [`DiscardCookie`] to whatever implements [`LangCookieSink`] for the
//! response being built.

/// Cookie carrying the canonical code of the selected language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
}

/// Instruction to expire the language cookie on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardCookie {
    pub name: String,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
}

/// Port for an outbound response that can carry cookies.
///
/// Implementations must only add or remove the named cookie and leave the
/// rest of the response untouched.
pub trait LangCookieSink {
    /// Adds `cookie`, replacing any cookie with the same name.
    fn set_cookie(&mut self, cookie: LangCookie);

    /// Removes the named cookie from the client.
    fn discard_cookie(&mut self, cookie: DiscardCookie);
}
