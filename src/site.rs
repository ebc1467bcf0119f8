//! Page bootstrap: attaches every component to a loaded page.

use crate::carousel::CarouselController;
use crate::config::SiteConfig;
use crate::i18n::{LanguageApi, TranslationController};
use crate::menu::MobileMenu;
use crate::page::Page;

/// The components mounted on one page
pub struct Site {
    pub translation: TranslationController,
    pub language: LanguageApi,
    pub carousel: Option<CarouselController>,
    pub menu: Option<MobileMenu>,
}

impl Site {
    /// Mounts the carousel, the mobile menu and the language toggle.
    ///
    /// Components whose markup is missing are skipped.
    pub fn mount(page: &Page, config: &SiteConfig) -> Self {
        let carousel = CarouselController::mount(page, &config.carousel);
        let menu = MobileMenu::mount(page, &config.menu);
        let translation = TranslationController::mount(page, &config.i18n);
        let language = LanguageApi::new(translation.clone());

        page.flush_mutations();

        tracing::info!(
            "Site ready (carousel: {}, menu: {}, language: {})",
            carousel.is_some(),
            menu.is_some(),
            translation.current_language()
        );

        Self {
            translation,
            language,
            carousel,
            menu,
        }
    }
}
