//! Language registry: single source of truth for all supported locales.
//!
//! The registry is initialized once via `OnceLock` and is immutable
//! afterwards, so it can be read from any number of consumers without
//! locking.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ja", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "日本語", "中文")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one must be true).
    /// The default language is guaranteed to have a content bundle for
    /// every page and is the fallback target for all other languages.
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Look up a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or multiple default languages are defined; that is
    /// a configuration error caught at first registry access.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The closed set of locales the site ships content for.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("en").expect("en should exist");

        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_japanese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("ja").expect("ja should exist");

        assert_eq!(config.code, "ja");
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.native_name, "日本語");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_chinese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("zh").expect("zh should exist");

        assert_eq!(config.code, "zh");
        assert_eq!(config.native_name, "中文");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_contains_all_three() {
        let registry = LanguageRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 3);
        assert!(enabled.iter().any(|lang| lang.code == "en"));
        assert!(enabled.iter().any(|lang| lang.code == "ja"));
        assert!(enabled.iter().any(|lang| lang.code == "zh"));
    }

    #[test]
    fn test_default_language_is_english() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_exactly_one_default() {
        let registry = LanguageRegistry::get();
        let defaults = registry
            .list_all()
            .into_iter()
            .filter(|lang| lang.is_default)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("ja"));
        assert!(registry.is_enabled("zh"));
        assert!(!registry.is_enabled("fr"));
        assert!(!registry.is_enabled(""));
    }
}
