//! Language type: a locale code validated against the registry.

use crate::content::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Construction goes through the registry, so a `Language` value always
/// refers to a supported, enabled locale. Unvalidated codes coming from
/// the outside (query strings, the active-language provider) stay as
/// `&str` until they hit the resolver, which treats unknown codes as a
/// fallback case rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// English, the default language. Every page ships an English bundle.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Japanese.
    pub const JAPANESE: Language = Language { code: "ja" };

    /// Chinese.
    pub const CHINESE: Language = Language { code: "zh" };

    /// Create a Language from a language code string.
    ///
    /// Returns an error if the code is unknown or the language is
    /// disabled.
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default language (English).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot
    /// happen for a properly constructed `Language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default (fallback) language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
