//! Gallery carousel
//!
//! One active slide at a time, navigated with previous/next buttons or the
//! indicator dots, and advanced automatically on a timer that pauses while
//! the pointer is over the controls.

pub mod controller;
pub mod slides;

pub use controller::CarouselController;
pub use slides::{normalize_index, SlideSet};
