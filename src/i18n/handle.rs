// SPDX-License-Identifier: MPL-2.0
//! Shared, replaceable messages.
//!
//! Lookups clone the current `Arc` and keep using it, so a reload that swaps
//! in a rebuilt [`MessagesApi`] never shows a lookup a mix of old and new
//! bundles.

use crate::i18n::messages::MessagesApi;
use std::sync::{Arc, PoisonError, RwLock};

/// Handle to the current [`MessagesApi`], cheap to clone across threads.
#[derive(Debug, Clone)]
pub struct SharedMessages {
    current: Arc<RwLock<Arc<MessagesApi>>>,
}

impl SharedMessages {
    #[must_use]
    pub fn new(api: MessagesApi) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(api))),
        }
    }

    /// Snapshot of the messages in use right now.
    #[must_use]
    pub fn current(&self) -> Arc<MessagesApi> {
        // The guarded value is a plain `Arc` swap; a poisoned lock still holds
        // a complete catalog.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the whole catalog, returning the previous one.
    pub fn replace(&self, api: MessagesApi) -> Arc<MessagesApi> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::new(api));
        tracing::info!(bundles = guard.catalog().len(), "messages replaced");
        previous
    }
}
