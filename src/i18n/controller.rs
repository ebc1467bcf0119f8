//! The language toggle.
//!
//! Owns the current language, binds the switch controls, resolves the
//! initial language and keeps content inserted later translated.

use std::cell::RefCell;
use std::rc::Rc;

use markup5ever_rcdom::Handle;

use crate::config::{FeedbackConfig, I18nConfig};
use crate::html::dom::{get_node_attr, has_class, set_node_attr, toggle_class};
use crate::html::style::set_style_property;
use crate::page::{EventKind, Page, WatchId};

use super::language::{display_name, variant_attr, Languages, SWITCH_TARGET_ATTR};
use super::resolver::ResolverChain;
use super::translator::Translator;

struct TranslationState {
    current: String,
    switches: Vec<Handle>,
    elements: Vec<Handle>,
    watch: Option<WatchId>,
}

struct Settings {
    translator: Translator,
    resolvers: ResolverChain,
    storage_key: String,
    switch_class: String,
    active_class: String,
    feedback: FeedbackConfig,
}

/// Cheap handle; clones share state
#[derive(Clone)]
pub struct TranslationController {
    state: Rc<RefCell<TranslationState>>,
    settings: Rc<Settings>,
}

impl TranslationController {
    /// Creates an unattached controller whose current language is the hard default
    pub fn new(config: &I18nConfig) -> Self {
        Self::with_resolvers(config, ResolverChain::standard(&config.storage_key))
    }

    pub fn with_resolvers(config: &I18nConfig, resolvers: ResolverChain) -> Self {
        let languages = Languages::from_config(config);

        Self {
            state: Rc::new(RefCell::new(TranslationState {
                current: languages.default_language().to_string(),
                switches: Vec::new(),
                elements: Vec::new(),
                watch: None,
            })),
            settings: Rc::new(Settings {
                translator: Translator::new(languages, config.placeholder_class.clone()),
                resolvers,
                storage_key: config.storage_key.clone(),
                switch_class: config.switch_class.clone(),
                active_class: config.active_class.clone(),
                feedback: config.feedback.clone(),
            }),
        }
    }

    /// Creates a controller and attaches it to `page`
    pub fn mount(page: &Page, config: &I18nConfig) -> Self {
        let controller = Self::new(config);
        controller.initialize(page);
        controller
    }

    /// Finds translatable elements and switch controls, binds the controls,
    /// applies the resolved initial language and starts watching `<body>`.
    pub fn initialize(&self, page: &Page) {
        tracing::info!("Initializing language toggle");

        let elements = self.settings.translator.translatable_elements(page);
        let switch_class = self.settings.switch_class.clone();
        let switches = page.query_all(|node| has_class(node, &switch_class));

        tracing::info!(
            "Found {} translatable element(s) and {} language switch(es)",
            elements.len(),
            switches.len()
        );

        for switch in switches.iter() {
            let controller = self.clone();
            let target = switch.clone();
            page.add_event_listener(switch, EventKind::Click, move |page, event| {
                event.prevent_default();
                if let Some(code) = get_node_attr(&target, SWITCH_TARGET_ATTR) {
                    controller.set_language(page, &code);
                }
            });
        }

        {
            let mut state = self.state.borrow_mut();
            state.elements = elements;
            state.switches = switches;
        }

        self.load_language(page);
        self.watch_body(page);
    }

    /// Resolves the initial language through the resolver chain and applies it
    pub fn load_language(&self, page: &Page) {
        let resolved = self
            .settings
            .resolvers
            .resolve(page, self.settings.translator.languages());

        tracing::info!(
            "Loading language - stored: {:?}, browser: {:?}, using: {}",
            page.storage_get(&self.settings.storage_key),
            page.locale(),
            resolved
        );

        self.set_language(page, &resolved);
    }

    fn watch_body(&self, page: &Page) {
        let Some(body) = page.body() else {
            tracing::warn!("Document has no <body>, dynamic content will not be translated");
            return;
        };

        let controller = self.clone();
        let id = page.watch_added_elements(&body, move |page, node| {
            let current = controller.current_language();
            controller
                .settings
                .translator
                .translate_subtree(page, node, &current);
        });

        if let Some(previous) = self.state.borrow_mut().watch.replace(id) {
            page.unwatch(previous);
        }
    }

    /// Switches the page to `code`.
    ///
    /// A no-op when `code` is already current or not supported.
    pub fn set_language(&self, page: &Page, code: &str) {
        if self.state.borrow().current == code {
            tracing::debug!("Language already {}", code);
            return;
        }

        if !self.settings.translator.languages().is_supported(code) {
            tracing::warn!("Ignoring unsupported language `{}`", code);
            return;
        }

        tracing::info!("Switching language to {}", code);

        let switches = self.state.borrow().switches.clone();
        for switch in switches.iter() {
            let is_active = get_node_attr(switch, SWITCH_TARGET_ATTR).as_deref() == Some(code);
            toggle_class(switch, &self.settings.active_class, Some(is_active));
            set_node_attr(switch, "aria-pressed", Some(is_active.to_string()));
        }

        let translator = &self.settings.translator;
        let translated = translator.translate_document(page, code);
        let elements = translator.translatable_elements(page);

        if let Some(html) = page.document_element() {
            set_node_attr(&html, "lang", Some(code.to_string()));
        }

        if let Err(e) = page.storage_set(&self.settings.storage_key, code) {
            tracing::warn!("Failed to persist language preference: {}", e);
        }

        {
            let mut state = self.state.borrow_mut();
            state.current = code.to_string();
            state.elements = elements;
        }

        self.show_feedback(page);

        tracing::info!(
            "Language switched to {} ({} of the translatable element(s) had a variant)",
            display_name(code),
            translated
        );
    }

    pub fn current_language(&self) -> String {
        self.state.borrow().current.clone()
    }

    /// Elements found by the latest scan
    pub fn tracked_elements(&self) -> usize {
        self.state.borrow().elements.len()
    }

    pub fn switches(&self) -> Vec<Handle> {
        self.state.borrow().switches.clone()
    }

    /// Adds language variants to `element` and shows it in the current language right away
    pub fn add_translation(&self, page: &Page, element: &Handle, variants: &[(&str, &str)]) {
        for (code, text) in variants {
            set_node_attr(element, &variant_attr(code), Some(text.to_string()));
        }

        let current = self.current_language();
        self.settings
            .translator
            .translate_element(page, element, &current);
    }

    /// Dims `<body>` briefly, then fades it back
    fn show_feedback(&self, page: &Page) {
        let feedback = &self.settings.feedback;
        if !feedback.enabled {
            return;
        }
        let Some(body) = page.body() else {
            return;
        };

        set_style_property(
            &body,
            "transition",
            &format!("opacity {}s ease", feedback.transition().as_secs_f32()),
        );
        set_style_property(&body, "opacity", &feedback.opacity.to_string());

        let transition = feedback.transition();
        page.set_timeout(feedback.restore_after(), move |page| {
            let Some(body) = page.body() else {
                return;
            };
            set_style_property(&body, "opacity", "1");

            page.set_timeout(transition, |page| {
                if let Some(body) = page.body() {
                    set_style_property(&body, "transition", "");
                }
            });
        });
    }
}
