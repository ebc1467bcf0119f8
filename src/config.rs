//! Site configuration
//!
//! Loaded from a TOML file with three optional sections, `[i18n]`,
//! `[carousel]` and `[menu]`. Every field has a default matching the markup
//! of the live site, so an empty file (or no file) is a valid configuration.
//! Environment variables from [`crate::env`] override file values.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

pub mod constants {
    pub const DEFAULT_LANGUAGES: &[&str] = &["es", "en"];
    pub const DEFAULT_LANGUAGE: &str = "es";
    pub const STORAGE_KEY: &str = "preferredLanguage";
    pub const AUTO_ADVANCE_MS: u64 = 5000;
    pub const MOBILE_BREAKPOINT: u32 = 768;
    pub const FEEDBACK_OPACITY: f32 = 0.8;
    pub const FEEDBACK_RESTORE_MS: u64 = 150;
    pub const FEEDBACK_TRANSITION_MS: u64 = 300;
}

fn language_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").expect("valid language code regex"))
}

pub fn is_valid_language_code(code: &str) -> bool {
    language_code_regex().is_match(code)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub i18n: I18nConfig,
    pub carousel: CarouselConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct I18nConfig {
    /// Supported language codes; each maps to a `data-lang-<code>` attribute
    pub languages: Vec<String>,
    pub default_language: String,
    /// Local storage key of the persisted preference
    pub storage_key: String,
    /// Class carried by language switch controls
    pub switch_class: String,
    /// Class of image placeholder containers
    pub placeholder_class: String,
    pub active_class: String,
    pub feedback: FeedbackConfig,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            languages: constants::DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            default_language: constants::DEFAULT_LANGUAGE.to_string(),
            storage_key: constants::STORAGE_KEY.to_string(),
            switch_class: "lang-btn".to_string(),
            placeholder_class: "image-placeholder".to_string(),
            active_class: "active".to_string(),
            feedback: FeedbackConfig::default(),
        }
    }
}

/// Fade applied to `<body>` after a language switch
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeedbackConfig {
    pub enabled: bool,
    pub opacity: f32,
    pub restore_after_ms: u64,
    pub transition_ms: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: constants::FEEDBACK_OPACITY,
            restore_after_ms: constants::FEEDBACK_RESTORE_MS,
            transition_ms: constants::FEEDBACK_TRANSITION_MS,
        }
    }
}

impl FeedbackConfig {
    pub fn restore_after(&self) -> Duration {
        Duration::from_millis(self.restore_after_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub slide_class: String,
    pub indicator_class: String,
    pub prev_class: String,
    pub next_class: String,
    /// Hovering this region pauses auto-advance
    pub controls_class: String,
    pub active_class: String,
    pub auto_advance_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_class: "gallery-slide".to_string(),
            indicator_class: "dot".to_string(),
            prev_class: "prev-btn".to_string(),
            next_class: "next-btn".to_string(),
            controls_class: "gallery-controls".to_string(),
            active_class: "active".to_string(),
            auto_advance_ms: constants::AUTO_ADVANCE_MS,
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_id: String,
    pub nav_id: String,
    pub link_class: String,
    pub active_class: String,
    pub open_icon_class: String,
    pub close_icon_class: String,
    /// Viewports at most this wide close the menu after a link click
    pub mobile_breakpoint: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "menuToggle".to_string(),
            nav_id: "mainNav".to_string(),
            link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            open_icon_class: "fa-bars".to_string(),
            close_icon_class: "fa-times".to_string(),
            mobile_breakpoint: constants::MOBILE_BREAKPOINT,
        }
    }
}

impl SiteConfig {
    /// Reads and validates a TOML file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            SiteError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&data)?;
        tracing::info!("Loaded configuration file: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(data: &str) -> SiteResult<Self> {
        let mut config: SiteConfig = toml::from_str(data)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `path` is `None`, otherwise [`SiteConfig::load`]
    pub fn load_or_default(path: Option<&Path>) -> SiteResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn normalize(&mut self) {
        for code in self.i18n.languages.iter_mut() {
            *code = code.trim().to_lowercase();
        }
        self.i18n.default_language = self.i18n.default_language.trim().to_lowercase();
    }

    pub fn validate(&self) -> SiteResult<()> {
        let i18n = &self.i18n;

        if i18n.languages.is_empty() {
            return Err(SiteError::Config("at least one language is required".to_string()));
        }

        if let Some(code) = i18n.languages.iter().find(|code| !is_valid_language_code(code)) {
            return Err(SiteError::Config(format!("invalid language code `{}`", code)));
        }

        if !i18n.languages.contains(&i18n.default_language) {
            return Err(SiteError::Config(format!(
                "default language `{}` is not one of {:?}",
                i18n.default_language, i18n.languages
            )));
        }

        if i18n.storage_key.is_empty() {
            return Err(SiteError::Config("storage key must not be empty".to_string()));
        }

        if !(0.0..=1.0).contains(&i18n.feedback.opacity) {
            return Err(SiteError::Config(format!(
                "feedback opacity {} is outside 0..=1",
                i18n.feedback.opacity
            )));
        }

        if self.carousel.auto_advance_ms == 0 {
            return Err(SiteError::Config("carousel auto-advance period must be positive".to_string()));
        }

        Ok(())
    }

    /// Applies environment overrides, then re-validates
    pub fn apply_env_overrides(&mut self) -> SiteResult<()> {
        use crate::env::{carousel, i18n, EnvVar};

        let to_config_error = |e: crate::env::EnvError| SiteError::Config(e.to_string());

        if let Some(default_language) = i18n::DefaultLang::get_opt().map_err(to_config_error)? {
            tracing::info!("Environment overrides default language: {}", default_language);
            self.i18n.default_language = default_language;
        }

        if let Some(ms) = carousel::AutoAdvanceMs::get_opt().map_err(to_config_error)? {
            tracing::info!("Environment overrides auto-advance period: {}ms", ms);
            self.carousel.auto_advance_ms = ms;
        }

        self.validate()
    }
}
