//! Active-language provider.
//!
//! One process-wide observable value owns the currently selected
//! language. Consumers read or subscribe instead of keeping their own
//! copies, so a language switch reaches every page without drift.

use crate::content::{Language, LanguageRegistry};
use tokio::sync::watch;
use tracing::info;

/// Handle to the shared active-language value.
///
/// Cloning is cheap; every clone observes the same underlying value.
#[derive(Debug, Clone)]
pub struct LanguageProvider {
    tx: watch::Sender<Language>,
}

impl LanguageProvider {
    /// Create a provider initialized with the given language.
    pub fn new(initial: Language) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// The currently selected language.
    pub fn current(&self) -> Language {
        *self.tx.borrow()
    }

    /// Switch the active language. Consumers subscribed via
    /// [`subscribe`](Self::subscribe) are notified. Setting the language
    /// it already holds is a no-op for subscribers.
    pub fn set(&self, language: Language) {
        self.tx.send_if_modified(|current| {
            if *current == language {
                return false;
            }
            info!(from = current.code(), to = language.code(), "active language changed");
            *current = language;
            true
        });
    }

    /// Subscribe to language changes.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }

    /// Language codes a consumer may select from.
    pub fn supported_codes(&self) -> Vec<&'static str> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|lang| lang.code)
            .collect()
    }
}

impl Default for LanguageProvider {
    fn default() -> Self {
        Self::new(Language::default_language())
    }
}
