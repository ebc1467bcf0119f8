//! Gallery carousel: manual navigation plus a repeating auto-advance timer.
//!
//! Every manual action cancels the running timer and starts a fresh one, so
//! the next automatic step comes a full period after the last interaction.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use markup5ever_rcdom::Handle;

use crate::config::CarouselConfig;
use crate::html::dom::has_class;
use crate::page::{EventKind, Page, TimerId};

use super::slides::SlideSet;

struct CarouselState {
    current: usize,
    timer: Option<TimerId>,
}

#[derive(Clone)]
pub struct CarouselController {
    slides: Rc<SlideSet>,
    state: Rc<RefCell<CarouselState>>,
    period: Duration,
}

impl CarouselController {
    pub fn new(slides: SlideSet, period: Duration) -> Self {
        Self {
            slides: Rc::new(slides),
            state: Rc::new(RefCell::new(CarouselState {
                current: 0,
                timer: None,
            })),
            period,
        }
    }

    /// Wires the carousel found in `page`.
    ///
    /// Returns `None` when the page has no slides. Buttons, indicators and the
    /// control region are each optional.
    pub fn mount(page: &Page, config: &CarouselConfig) -> Option<Self> {
        let slides = page.query_all(|node| has_class(node, &config.slide_class));
        if slides.is_empty() {
            tracing::debug!("No `.{}` elements, carousel not mounted", config.slide_class);
            return None;
        }

        let indicators = page.query_all(|node| has_class(node, &config.indicator_class));
        let controller = Self::new(
            SlideSet::new(slides, indicators, config.active_class.clone()),
            config.auto_advance(),
        );

        if let Some(prev) = page.query_first(|node| has_class(node, &config.prev_class)) {
            let controller = controller.clone();
            page.add_event_listener(&prev, EventKind::Click, move |page, _| controller.previous(page));
        }

        if let Some(next) = page.query_first(|node| has_class(node, &config.next_class)) {
            let controller = controller.clone();
            page.add_event_listener(&next, EventKind::Click, move |page, _| controller.next(page));
        }

        for (index, indicator) in controller.slides.indicators().iter().enumerate() {
            let controller = controller.clone();
            page.add_event_listener(indicator, EventKind::Click, move |page, _| {
                controller.go_to(page, index)
            });
        }

        if let Some(controls) = page.query_first(|node| has_class(node, &config.controls_class)) {
            let on_enter = controller.clone();
            page.add_event_listener(&controls, EventKind::MouseEnter, move |page, _| {
                on_enter.stop_auto_advance(page)
            });

            let on_leave = controller.clone();
            page.add_event_listener(&controls, EventKind::MouseLeave, move |page, _| {
                on_leave.start_auto_advance(page)
            });
        }

        controller.show_slide(0);
        controller.start_auto_advance(page);

        tracing::info!(
            "Gallery carousel initialized with {} slide(s)",
            controller.slide_count()
        );

        Some(controller)
    }

    /// Activates exactly one slide/indicator pair, wrapping `n` around the ends
    pub fn show_slide(&self, n: isize) -> usize {
        match self.slides.show(n) {
            Some(index) => {
                self.state.borrow_mut().current = index;
                index
            }
            None => self.current_index(),
        }
    }

    /// (Re)starts the repeating timer; any previous timer is cancelled first
    pub fn start_auto_advance(&self, page: &Page) {
        self.stop_auto_advance(page);

        let controller = self.clone();
        let id = page.set_interval(self.period, move |_| {
            let next = controller.current_index() as isize + 1;
            controller.show_slide(next);
        });

        self.state.borrow_mut().timer = Some(id);
    }

    pub fn stop_auto_advance(&self, page: &Page) {
        if let Some(id) = self.state.borrow_mut().timer.take() {
            page.clear_timer(id);
        }
    }

    /// Manual navigation: cancel the timer, move, restart the timer
    fn navigate(&self, page: &Page, n: isize) {
        self.stop_auto_advance(page);
        self.show_slide(n);
        self.start_auto_advance(page);
    }

    pub fn next(&self, page: &Page) {
        self.navigate(page, self.current_index() as isize + 1);
    }

    pub fn previous(&self, page: &Page) {
        self.navigate(page, self.current_index() as isize - 1);
    }

    pub fn go_to(&self, page: &Page, index: usize) {
        self.navigate(page, index as isize);
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_running(&self, page: &Page) -> bool {
        self.state
            .borrow()
            .timer
            .is_some_and(|id| page.timer_pending(id))
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Indicator element for slide `index`, if the page has one
    pub fn indicator(&self, index: usize) -> Option<Handle> {
        self.slides.indicators().get(index).cloned()
    }
}
