//! Supported languages and the `data-lang-*` attribute contract.

use markup5ever_rcdom::Handle;

use crate::config::I18nConfig;
use crate::html::dom::get_node_attr;

/// Prefix of per-language variant attributes, e.g. `data-lang-en`
pub const VARIANT_ATTR_PREFIX: &str = "data-lang-";

/// Attribute naming the target language of a switch control
pub const SWITCH_TARGET_ATTR: &str = "data-lang";

pub fn variant_attr(code: &str) -> String {
    format!("{VARIANT_ATTR_PREFIX}{code}")
}

/// The supported language codes plus the hard default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    supported: Vec<String>,
    default: String,
}

impl Languages {
    pub fn new(supported: Vec<String>, default: String) -> Self {
        Self { supported, default }
    }

    pub fn from_config(config: &I18nConfig) -> Self {
        Self::new(config.languages.clone(), config.default_language.clone())
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|supported| supported == code)
    }

    /// Maps a browser locale such as `en-US` to a supported code by its primary subtag
    pub fn match_locale(&self, locale: &str) -> Option<&str> {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        self.supported
            .iter()
            .find(|code| **code == primary)
            .map(String::as_str)
    }

    /// The variant of `node` for `code`; an empty attribute counts as absent
    pub fn variant(&self, node: &Handle, code: &str) -> Option<String> {
        get_node_attr(node, &variant_attr(code)).filter(|value| !value.is_empty())
    }

    /// True when `node` carries a variant attribute for any supported language
    pub fn is_translatable(&self, node: &Handle) -> bool {
        self.supported
            .iter()
            .any(|code| get_node_attr(node, &variant_attr(code)).is_some())
    }
}

/// Human-readable name used in log messages
pub fn display_name(code: &str) -> &str {
    match code {
        "es" => "Español",
        "en" => "English",
        "fr" => "Français",
        "de" => "Deutsch",
        "pt" => "Português",
        "it" => "Italiano",
        other => other,
    }
}
