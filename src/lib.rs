//! # ReaVital
//!
//! Headless runtime for the interactive parts of the ReaVital site: the
//! Spanish/English language toggle, the gallery carousel and the mobile
//! navigation menu, running over a parsed HTML document.
//!
//! ## Modules
//!
//! - `html` - DOM helpers over `markup5ever_rcdom`
//! - `page` - page runtime: virtual clock, events, structural-change watchers, storage
//! - `i18n` - language toggle
//! - `carousel` - gallery carousel
//! - `menu` - mobile navigation menu
//! - `site` - mounts all components on a page
//! - `config`, `env`, `error`, `storage` - ambient plumbing

pub mod carousel;
pub mod config;
pub mod env;
pub mod error;
pub mod html;
pub mod i18n;
pub mod menu;
pub mod page;
pub mod site;
pub mod storage;

pub use carousel::CarouselController;
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use i18n::{LanguageApi, TranslationController};
pub use menu::MobileMenu;
pub use page::{Page, PageOptions};
pub use site::Site;
pub use storage::{FileStorage, MemoryStorage, Storage};
