//! Language toggle
//!
//! Elements carry one variant per language in `data-lang-<code>` attributes;
//! switching language rewrites every element that has a variant for the new
//! language and leaves the rest untouched.

pub mod api;
pub mod controller;
pub mod language;
pub mod resolver;
pub mod translator;

pub use api::LanguageApi;
pub use controller::TranslationController;
pub use language::{variant_attr, Languages, SWITCH_TARGET_ATTR, VARIANT_ATTR_PREFIX};
pub use resolver::{BrowserLocale, HardDefault, LanguageResolver, ResolverChain, StoredPreference};
pub use translator::Translator;
