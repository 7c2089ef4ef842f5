// SPDX-License-Identifier: MPL-2.0
//! In-memory cookie jar for outbound responses.
//!
//! Web integrations copy the jar into their own response type after the
//! handler ran. Setting a cookie cancels a pending discard of the same name
//! and the other way around.

use crate::application::port::{DiscardCookie, LangCookie, LangCookieSink};

/// Cookies to set and to discard on one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    set: Vec<LangCookie>,
    discarded: Vec<DiscardCookie>,
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cookie pending to be set under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LangCookie> {
        self.set.iter().find(|cookie| cookie.name == name)
    }

    /// Discard instruction pending for `name`.
    #[must_use]
    pub fn discarded(&self, name: &str) -> Option<&DiscardCookie> {
        self.discarded.iter().find(|cookie| cookie.name == name)
    }

    pub fn cookies(&self) -> impl Iterator<Item = &LangCookie> {
        self.set.iter()
    }

    pub fn discards(&self) -> impl Iterator<Item = &DiscardCookie> {
        self.discarded.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.discarded.is_empty()
    }
}

impl LangCookieSink for CookieJar {
    fn set_cookie(&mut self, cookie: LangCookie) {
        self.set.retain(|existing| existing.name != cookie.name);
        self.discarded.retain(|existing| existing.name != cookie.name);
        self.set.push(cookie);
    }

    fn discard_cookie(&mut self, cookie: DiscardCookie) {
        self.set.retain(|existing| existing.name != cookie.name);
        self.discarded.retain(|existing| existing.name != cookie.name);
        self.discarded.push(cookie);
    }
}
