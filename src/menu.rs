//! Mobile navigation menu.
//!
//! A toggle button opens and closes the main navigation and swaps its icon;
//! on narrow viewports following a navigation link closes the menu again.

use markup5ever_rcdom::Handle;

use crate::config::MenuConfig;
use crate::html::dom::{add_class, get_node_name, has_class, remove_class, toggle_class};
use crate::html::query::find_first;
use crate::page::{EventKind, Page};

#[derive(Clone)]
pub struct MobileMenu {
    toggle: Handle,
    nav: Handle,
    config: MenuConfig,
}

impl MobileMenu {
    /// Binds the toggle and the navigation links; `None` unless both toggle and nav exist
    pub fn mount(page: &Page, config: &MenuConfig) -> Option<Self> {
        let toggle = page.element_by_id(&config.toggle_id)?;
        let nav = page.element_by_id(&config.nav_id)?;

        let menu = Self {
            toggle,
            nav,
            config: config.clone(),
        };

        let on_toggle = menu.clone();
        page.add_event_listener(&menu.toggle, EventKind::Click, move |_, _| on_toggle.toggle());

        let links = page.query_all(|node| has_class(node, &config.link_class));
        for link in links.iter() {
            let menu = menu.clone();
            page.add_event_listener(link, EventKind::Click, move |page, _| {
                if page.viewport_width() <= menu.config.mobile_breakpoint {
                    menu.close();
                }
            });
        }

        tracing::debug!("Mobile menu mounted with {} link(s)", links.len());
        Some(menu)
    }

    fn icon(&self) -> Option<Handle> {
        find_first(&self.toggle, |node| get_node_name(node) == Some("i"))
    }

    /// Flips the menu open/closed and swaps the icon
    pub fn toggle(&self) {
        toggle_class(&self.nav, &self.config.active_class, None);

        if let Some(icon) = self.icon() {
            if has_class(&icon, &self.config.open_icon_class) {
                remove_class(&icon, &self.config.open_icon_class);
                add_class(&icon, &self.config.close_icon_class);
            } else {
                remove_class(&icon, &self.config.close_icon_class);
                add_class(&icon, &self.config.open_icon_class);
            }
        }
    }

    pub fn close(&self) {
        remove_class(&self.nav, &self.config.active_class);

        if let Some(icon) = self.icon() {
            remove_class(&icon, &self.config.close_icon_class);
            add_class(&icon, &self.config.open_icon_class);
        }
    }

    pub fn is_open(&self) -> bool {
        has_class(&self.nav, &self.config.active_class)
    }
}
