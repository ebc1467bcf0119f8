//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

mod common;

#[cfg(test)]
mod passing {
    use reavital::config::MenuConfig;
    use reavital::{MemoryStorage, MobileMenu, Page};

    use crate::common::*;

    fn mount(width: u32) -> (Page, MobileMenu) {
        let page = site_page(None, MemoryStorage::new());
        page.set_viewport_width(width);
        let menu = MobileMenu::mount(&page, &MenuConfig::default()).unwrap();
        (page, menu)
    }

    #[test]
    fn toggle_opens_and_swaps_icon() {
        let (page, menu) = mount(375);
        let toggle = page.element_by_id("menuToggle").unwrap();

        page.click(&toggle);
        assert!(menu.is_open());
        assert!(has_class_id(&page, "mainNav", "active"));
        assert!(has_class_id(&page, "menuIcon", "fa-times"));
        assert!(!has_class_id(&page, "menuIcon", "fa-bars"));

        // Clicking the icon bubbles to the toggle
        page.click(&page.element_by_id("menuIcon").unwrap());
        assert!(!menu.is_open());
        assert!(has_class_id(&page, "menuIcon", "fa-bars"));
        assert!(!has_class_id(&page, "menuIcon", "fa-times"));
    }

    #[test]
    fn link_click_closes_menu_on_narrow_viewport() {
        let (page, menu) = mount(768);
        assert_eq!(attr_of(&page, "link-services", "href"), Some("#servicios".to_string()));

        menu.toggle();
        assert!(menu.is_open());

        page.click(&page.element_by_id("link-services").unwrap());
        assert!(!menu.is_open());
        assert!(has_class_id(&page, "menuIcon", "fa-bars"));
    }

    #[test]
    fn link_click_keeps_menu_on_wide_viewport() {
        let (page, menu) = mount(1024);

        menu.toggle();
        page.click(&page.element_by_id("link-home").unwrap());

        assert!(menu.is_open());
        assert!(has_class_id(&page, "menuIcon", "fa-times"));
    }

    #[test]
    fn resized_viewport_is_honoured() {
        let (page, menu) = mount(1280);

        menu.toggle();
        page.set_viewport_width(600);
        page.click(&page.element_by_id("link-home").unwrap());

        assert!(!menu.is_open());
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use reavital::config::MenuConfig;
    use reavital::{MemoryStorage, MobileMenu};

    use crate::common::*;

    #[test]
    fn missing_nav_means_no_menu() {
        let page = load(
            r#"<html><body><button id="menuToggle"></button></body></html>"#,
            None,
            MemoryStorage::new(),
        );

        assert!(MobileMenu::mount(&page, &MenuConfig::default()).is_none());
        assert_eq!(page.listener_count(&page.element_by_id("menuToggle").unwrap()), 0);
    }

    #[test]
    fn toggle_without_icon_still_opens() {
        let page = load(
            r#"<html><body><button id="menuToggle">Menu</button><nav id="mainNav"></nav></body></html>"#,
            None,
            MemoryStorage::new(),
        );
        let menu = MobileMenu::mount(&page, &MenuConfig::default()).unwrap();

        page.click(&page.element_by_id("menuToggle").unwrap());
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());
    }
}
