//! Script-facing language functions.
//!
//! The site's inline scripts call `changeLanguage(code)` and
//! `getCurrentLanguage()`. `LanguageApi` provides both, delegating to the
//! controller it was built with.

use crate::page::Page;

use super::controller::TranslationController;

#[derive(Clone)]
pub struct LanguageApi {
    controller: Option<TranslationController>,
    fallback: String,
}

impl LanguageApi {
    pub fn new(controller: TranslationController) -> Self {
        let fallback = controller.current_language();
        Self {
            controller: Some(controller),
            fallback,
        }
    }

    /// A handle with no controller behind it: reports `fallback`, ignores changes
    pub fn detached(fallback: impl Into<String>) -> Self {
        Self {
            controller: None,
            fallback: fallback.into(),
        }
    }

    pub fn change_language(&self, page: &Page, code: &str) {
        match &self.controller {
            Some(controller) => controller.set_language(page, code),
            None => tracing::debug!("No language controller mounted, ignoring change to {}", code),
        }
    }

    pub fn current_language(&self) -> String {
        self.controller
            .as_ref()
            .map(TranslationController::current_language)
            .unwrap_or_else(|| self.fallback.clone())
    }
}
