//! Localized content for the site's pages.
//!
//! Every page renders from a language-keyed content bundle. This module
//! owns the whole pipeline: the registry of supported locales, the
//! validated `Language` type, the per-page bundle schemas, the resolver
//! that maps (page, language) to a bundle with deterministic fallback,
//! and the consumer-side pieces (active-language provider, page view
//! with recency guard).
//!
//! # Example
//!
//! ```rust,ignore
//! use festival_hub::content::{ContentRegistry, Language};
//!
//! let registry = ContentRegistry::load(Path::new("content"))?;
//! // Unknown languages fall back to the default bundle
//! let home = registry.home().resolve("fr").ready().unwrap();
//! assert_eq!(home.page1.title, "Discover Amazing Festivals");
//! ```

pub mod bundles;
mod language;
mod provider;
mod registry;
mod resolver;
mod view;

pub use language::Language;
pub use provider::LanguageProvider;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{ContentRegistry, LanguageBundles, Page, Resolution};
pub use view::{ContentView, RequestToken, ViewState};
