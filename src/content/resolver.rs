//! Content resolution: (page, language code) -> content bundle.
//!
//! All bundles are loaded from disk once at startup and held for the
//! lifetime of the process. Resolution afterwards is a pure lookup with
//! deterministic fallback: an unknown or missing language falls back to
//! the default language's bundle, and only when even the default bundle
//! is unavailable does the caller receive the explicit `Unavailable`
//! signal. `resolve` never returns an error and never panics.

use crate::content::bundles::{
    AboutContent, BlogContent, FaqsContent, FestivalsContent, HomeContent, ManageContent,
    MoviesContent, SubmitContent,
};
use crate::content::LanguageRegistry;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Identifier for one page of the site. Each page has its own bundle
/// schema; the enum keeps shape mismatches a compile-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Blog,
    Faqs,
    Movies,
    Festivals,
    Submit,
    Manage,
}

impl Page {
    /// Every page the site ships content for.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::Blog,
        Page::Faqs,
        Page::Movies,
        Page::Festivals,
        Page::Submit,
        Page::Manage,
    ];

    /// URL/file slug for this page (`content/<lang>/<slug>.json`).
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Blog => "blog",
            Page::Faqs => "faqs",
            Page::Movies => "movies",
            Page::Festivals => "festivals",
            Page::Submit => "submit",
            Page::Manage => "manage",
        }
    }

    /// Parse a slug back into a page identifier.
    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.slug() == slug)
    }
}

/// Outcome of a resolution: either a usable bundle or the explicit
/// "content not available" signal. There is no error variant on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Ready(T),
    Unavailable,
}

impl<T> Resolution<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Resolution::Ready(_))
    }

    /// The resolved bundle, if any.
    pub fn ready(self) -> Option<T> {
        match self {
            Resolution::Ready(bundle) => Some(bundle),
            Resolution::Unavailable => None,
        }
    }
}

/// Per-page table from language code to content bundle.
///
/// Built once at startup from the on-disk content tree, read-only
/// afterwards. Languages whose bundle failed to load are simply absent
/// from the table, which makes them fall back at resolve time.
#[derive(Debug)]
pub struct LanguageBundles<T> {
    bundles: HashMap<&'static str, T>,
    default_code: &'static str,
    page: Page,
}

impl<T> LanguageBundles<T> {
    /// Resolve the bundle for a requested language code.
    ///
    /// The code is not validated in advance; any unknown code is a
    /// fallback case, never an error surfaced to the user.
    pub fn resolve(&self, code: &str) -> Resolution<&T> {
        if let Some(bundle) = self.bundles.get(code) {
            return Resolution::Ready(bundle);
        }

        if code != self.default_code {
            debug!(
                page = self.page.slug(),
                requested = code,
                fallback = self.default_code,
                "no bundle for requested language, falling back to default"
            );
        }

        match self.bundles.get(self.default_code) {
            Some(bundle) => Resolution::Ready(bundle),
            None => Resolution::Unavailable,
        }
    }

    /// Language codes that have a bundle loaded for this page.
    pub fn loaded_languages(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.bundles.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

/// Load the bundle table for one page from `<dir>/<lang>/<slug>.json`.
///
/// A bundle that is missing or unparsable is logged and left out of the
/// table; the resolver degrades to fallback (or `Unavailable` when the
/// default itself is affected) instead of failing startup.
fn load_bundles<T: DeserializeOwned>(dir: &Path, page: Page) -> LanguageBundles<T> {
    let registry = LanguageRegistry::get();
    let default_code = registry.default_language().code;
    let mut bundles = HashMap::new();

    for lang in registry.list_enabled() {
        let path = dir.join(lang.code).join(format!("{}.json", page.slug()));
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    page = page.slug(),
                    language = lang.code,
                    path = %path.display(),
                    "failed to read content bundle: {}",
                    e
                );
                continue;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(bundle) => {
                bundles.insert(lang.code, bundle);
            }
            Err(e) => {
                warn!(
                    page = page.slug(),
                    language = lang.code,
                    "failed to parse content bundle: {}",
                    e
                );
            }
        }
    }

    if !bundles.contains_key(default_code) {
        warn!(
            page = page.slug(),
            default = default_code,
            "default-language bundle unavailable, page will resolve as Unavailable"
        );
    }

    LanguageBundles {
        bundles,
        default_code,
        page,
    }
}

/// All content bundles for the whole site, one table per page.
///
/// Constructed once in `main` and shared behind an `Arc`; every field
/// is read-only after this point.
#[derive(Debug)]
pub struct ContentRegistry {
    home: LanguageBundles<HomeContent>,
    about: LanguageBundles<AboutContent>,
    blog: LanguageBundles<BlogContent>,
    faqs: LanguageBundles<FaqsContent>,
    movies: LanguageBundles<MoviesContent>,
    festivals: LanguageBundles<FestivalsContent>,
    submit: LanguageBundles<SubmitContent>,
    manage: LanguageBundles<ManageContent>,
}

impl ContentRegistry {
    /// Load every page's bundle table from the content directory.
    ///
    /// Only a missing content root is a hard error; individual bundle
    /// failures degrade to fallback at resolve time.
    pub fn load(dir: &Path) -> Result<ContentRegistry> {
        let dir = dir
            .canonicalize()
            .with_context(|| format!("content directory not found: {}", dir.display()))?;

        Ok(ContentRegistry {
            home: load_bundles(&dir, Page::Home),
            about: load_bundles(&dir, Page::About),
            blog: load_bundles(&dir, Page::Blog),
            faqs: load_bundles(&dir, Page::Faqs),
            movies: load_bundles(&dir, Page::Movies),
            festivals: load_bundles(&dir, Page::Festivals),
            submit: load_bundles(&dir, Page::Submit),
            manage: load_bundles(&dir, Page::Manage),
        })
    }

    pub fn home(&self) -> &LanguageBundles<HomeContent> {
        &self.home
    }

    pub fn about(&self) -> &LanguageBundles<AboutContent> {
        &self.about
    }

    pub fn blog(&self) -> &LanguageBundles<BlogContent> {
        &self.blog
    }

    pub fn faqs(&self) -> &LanguageBundles<FaqsContent> {
        &self.faqs
    }

    pub fn movies(&self) -> &LanguageBundles<MoviesContent> {
        &self.movies
    }

    pub fn festivals(&self) -> &LanguageBundles<FestivalsContent> {
        &self.festivals
    }

    pub fn submit(&self) -> &LanguageBundles<SubmitContent> {
        &self.submit
    }

    pub fn manage(&self) -> &LanguageBundles<ManageContent> {
        &self.manage
    }

    /// Resolve a page's bundle as untyped JSON for the HTTP layer.
    pub fn resolve_value(&self, page: Page, code: &str) -> Resolution<serde_json::Value> {
        match page {
            Page::Home => to_value(self.home.resolve(code)),
            Page::About => to_value(self.about.resolve(code)),
            Page::Blog => to_value(self.blog.resolve(code)),
            Page::Faqs => to_value(self.faqs.resolve(code)),
            Page::Movies => to_value(self.movies.resolve(code)),
            Page::Festivals => to_value(self.festivals.resolve(code)),
            Page::Submit => to_value(self.submit.resolve(code)),
            Page::Manage => to_value(self.manage.resolve(code)),
        }
    }
}

fn to_value<T: Serialize>(resolution: Resolution<&T>) -> Resolution<serde_json::Value> {
    match resolution {
        Resolution::Ready(bundle) => match serde_json::to_value(bundle) {
            Ok(value) => Resolution::Ready(value),
            Err(e) => {
                warn!("failed to serialize resolved bundle: {}", e);
                Resolution::Unavailable
            }
        },
        Resolution::Unavailable => Resolution::Unavailable,
    }
}
