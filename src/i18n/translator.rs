//! Rewriting document content into one language.

use markup5ever_rcdom::Handle;

use crate::html::content::inner_html;
use crate::html::dom::{find_nodes, get_node_attr, get_node_name, has_class, set_node_attr};
use crate::html::query::{find_all_inclusive, find_first};
use crate::html::utils::{has_markup, is_void_element};
use crate::page::Page;

use super::language::{variant_attr, Languages};

/// `<meta>` tags whose `content` is translated, by identifying attribute
pub const TRANSLATABLE_META: &[(&str, &str)] = &[
    ("name", "description"),
    ("property", "og:title"),
    ("property", "og:description"),
];

pub struct Translator {
    languages: Languages,
    placeholder_class: String,
}

impl Translator {
    pub fn new(languages: Languages, placeholder_class: impl Into<String>) -> Self {
        Self {
            languages,
            placeholder_class: placeholder_class.into(),
        }
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    /// Every element in the document carrying a variant attribute
    pub fn translatable_elements(&self, page: &Page) -> Vec<Handle> {
        page.query_all(|node| self.languages.is_translatable(node))
    }

    /// Rewrites one element's content to its `lang` variant.
    ///
    /// Current content containing markup is replaced as markup, anything else
    /// as plain text. Returns false when the element has no such variant.
    pub fn translate_element(&self, page: &Page, element: &Handle, lang: &str) -> bool {
        let Some(translation) = self.languages.variant(element, lang) else {
            return false;
        };

        // img / meta variants are applied to attributes by the passes below
        if get_node_name(element).is_some_and(is_void_element) {
            return true;
        }

        if has_markup(&inner_html(element)) {
            page.set_inner_html(element, &translation);
        } else {
            page.set_text_content(element, &translation);
        }

        if has_class(element, &self.placeholder_class) {
            self.translate_placeholder(page, element, lang);
        }

        true
    }

    /// Label `span` and its `img` alt inside an image placeholder, each from its own variant
    fn translate_placeholder(&self, page: &Page, container: &Handle, lang: &str) {
        let attr = variant_attr(lang);

        let Some(label) = find_first(container, |node| get_node_name(node) == Some("span")) else {
            return;
        };
        let Some(label_translation) = get_node_attr(&label, &attr) else {
            return;
        };

        if let Some(image) = find_first(&label, |node| get_node_name(node) == Some("img")) {
            if let Some(alt) = get_node_attr(&image, &attr) {
                set_node_attr(&image, "alt", Some(alt));
            }
        }

        page.set_text_content(&label, &label_translation);
    }

    /// `root` and every translatable element beneath it
    pub fn translate_subtree(&self, page: &Page, root: &Handle, lang: &str) -> usize {
        find_all_inclusive(root, |node| self.languages.is_translatable(node))
            .iter()
            .filter(|element| self.translate_element(page, element, lang))
            .count()
    }

    pub fn translate_page_title(&self, page: &Page, lang: &str) {
        let Some(head) = page.head() else {
            return;
        };
        let Some(title) = find_nodes(&head, &["head", "title"]).into_iter().next() else {
            return;
        };

        if let Some(translation) = self.languages.variant(&title, lang) {
            page.set_text_content(&title, &translation);
        }
    }

    pub fn translate_meta_tags(&self, page: &Page, lang: &str) {
        let Some(head) = page.head() else {
            return;
        };

        let metas = find_nodes(&head, &["head", "meta"]);

        for (attr, value) in TRANSLATABLE_META {
            let meta = metas
                .iter()
                .find(|node| get_node_attr(node, attr).as_deref() == Some(*value));

            if let Some(meta) = meta {
                if let Some(translation) = self.languages.variant(meta, lang) {
                    set_node_attr(meta, "content", Some(translation));
                }
            }
        }
    }

    pub fn translate_image_alts(&self, page: &Page, lang: &str) {
        let images = page.query_all(|node| {
            get_node_name(node) == Some("img") && self.languages.is_translatable(node)
        });

        for image in images {
            if let Some(translation) = self.languages.variant(&image, lang) {
                set_node_attr(&image, "alt", Some(translation));
            }
        }
    }

    pub fn translate_aria_labels(&self, page: &Page, lang: &str) {
        let labelled = page.query_all(|node| {
            get_node_attr(node, "aria-label").is_some() && self.languages.is_translatable(node)
        });

        for element in labelled {
            if let Some(translation) = self.languages.variant(&element, lang) {
                set_node_attr(&element, "aria-label", Some(translation));
            }
        }
    }

    /// Full pass: re-scans the document, then title, meta tags, alt texts and aria labels.
    ///
    /// Returns how many elements had a variant for `lang`.
    pub fn translate_document(&self, page: &Page, lang: &str) -> usize {
        let translated = self
            .translatable_elements(page)
            .iter()
            .filter(|element| self.translate_element(page, element, lang))
            .count();

        self.translate_page_title(page, lang);
        self.translate_meta_tags(page, lang);
        self.translate_image_alts(page, lang);
        self.translate_aria_labels(page, lang);

        translated
    }
}
