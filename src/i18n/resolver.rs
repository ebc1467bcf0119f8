//! Initial language resolution.
//!
//! An ordered list of resolvers; the first one to produce a language wins.
//! The standard chain is: persisted preference, browser locale, hard default.

use crate::page::Page;

use super::language::Languages;

pub trait LanguageResolver {
    fn name(&self) -> &'static str;

    fn resolve(&self, page: &Page, languages: &Languages) -> Option<String>;
}

/// The preference persisted in local storage under `key`
pub struct StoredPreference {
    key: String,
}

impl StoredPreference {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl LanguageResolver for StoredPreference {
    fn name(&self) -> &'static str {
        "stored"
    }

    fn resolve(&self, page: &Page, languages: &Languages) -> Option<String> {
        let stored = page.storage_get(&self.key)?;

        if languages.is_supported(&stored) {
            Some(stored)
        } else {
            tracing::debug!("Ignoring stored language `{}`: not supported", stored);
            None
        }
    }
}

/// The browser-reported locale; an unmatched locale maps to the hard default
pub struct BrowserLocale;

impl LanguageResolver for BrowserLocale {
    fn name(&self) -> &'static str {
        "browser"
    }

    fn resolve(&self, page: &Page, languages: &Languages) -> Option<String> {
        let locale = page.locale().filter(|locale| !locale.trim().is_empty())?;

        Some(
            languages
                .match_locale(locale)
                .unwrap_or(languages.default_language())
                .to_string(),
        )
    }
}

pub struct HardDefault;

impl LanguageResolver for HardDefault {
    fn name(&self) -> &'static str {
        "default"
    }

    fn resolve(&self, _page: &Page, languages: &Languages) -> Option<String> {
        Some(languages.default_language().to_string())
    }
}

pub struct ResolverChain {
    resolvers: Vec<Box<dyn LanguageResolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Box<dyn LanguageResolver>>) -> Self {
        Self { resolvers }
    }

    /// Stored preference, then browser locale, then the hard default
    pub fn standard(storage_key: &str) -> Self {
        Self::new(vec![
            Box::new(StoredPreference::new(storage_key)),
            Box::new(BrowserLocale),
            Box::new(HardDefault),
        ])
    }

    /// The first non-empty result, falling back to the hard default if every resolver declines
    pub fn resolve(&self, page: &Page, languages: &Languages) -> String {
        for resolver in self.resolvers.iter() {
            if let Some(code) = resolver.resolve(page, languages) {
                tracing::debug!("Language `{}` resolved by `{}` resolver", code, resolver.name());
                return code;
            }
        }

        languages.default_language().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageOptions;
    use crate::storage::MemoryStorage;

    fn languages() -> Languages {
        Languages::new(vec!["es".to_string(), "en".to_string()], "es".to_string())
    }

    fn page(locale: Option<&str>, stored: Option<&str>) -> Page {
        let storage = match stored {
            Some(value) => MemoryStorage::with_item("preferredLanguage", value),
            None => MemoryStorage::new(),
        };
        let options = PageOptions {
            locale: locale.map(str::to_string),
            ..PageOptions::default()
        };
        Page::load(b"<html></html>", options, Box::new(storage)).unwrap()
    }

    #[test]
    fn stored_preference_wins() {
        let chain = ResolverChain::standard("preferredLanguage");
        assert_eq!(chain.resolve(&page(Some("en-US"), Some("es")), &languages()), "es");
    }

    #[test]
    fn browser_locale_is_second() {
        let chain = ResolverChain::standard("preferredLanguage");
        assert_eq!(chain.resolve(&page(Some("en-US"), None), &languages()), "en");
        assert_eq!(chain.resolve(&page(Some("de-DE"), None), &languages()), "es");
    }

    #[test]
    fn unsupported_stored_value_is_skipped() {
        let chain = ResolverChain::standard("preferredLanguage");
        assert_eq!(chain.resolve(&page(Some("en"), Some("klingon")), &languages()), "en");
    }

    #[test]
    fn hard_default_is_last() {
        let chain = ResolverChain::standard("preferredLanguage");
        assert_eq!(chain.resolve(&page(None, None), &languages()), "es");

        let empty = ResolverChain::new(Vec::new());
        assert_eq!(empty.resolve(&page(None, None), &languages()), "es");
    }
}
