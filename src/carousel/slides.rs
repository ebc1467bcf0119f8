//! Slides, indicators and the wraparound rule.

use markup5ever_rcdom::Handle;

use crate::html::dom::{add_class, has_class, remove_class};

/// Wraps a requested index into `0..count`.
///
/// Anything past the end goes to the first slide and anything before the
/// start goes to the last one; `None` when there are no slides.
pub fn normalize_index(n: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let index = if n >= count as isize {
        0
    } else if n < 0 {
        count - 1
    } else {
        n as usize
    };

    Some(index)
}

/// Slide elements and their parallel indicators
pub struct SlideSet {
    slides: Vec<Handle>,
    indicators: Vec<Handle>,
    active_class: String,
}

impl SlideSet {
    pub fn new(slides: Vec<Handle>, indicators: Vec<Handle>, active_class: impl Into<String>) -> Self {
        if !indicators.is_empty() && indicators.len() != slides.len() {
            tracing::warn!(
                "Carousel has {} slide(s) but {} indicator(s)",
                slides.len(),
                indicators.len()
            );
        }

        Self {
            slides,
            indicators,
            active_class: active_class.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn indicators(&self) -> &[Handle] {
        &self.indicators
    }

    /// Deactivates everything, then activates the slide and indicator at the wrapped index
    pub fn show(&self, n: isize) -> Option<usize> {
        for node in self.slides.iter().chain(self.indicators.iter()) {
            remove_class(node, &self.active_class);
        }

        let index = normalize_index(n, self.slides.len())?;

        add_class(&self.slides[index], &self.active_class);
        if let Some(indicator) = self.indicators.get(index) {
            add_class(indicator, &self.active_class);
        }

        Some(index)
    }

    pub fn active_slides(&self) -> Vec<usize> {
        Self::active_positions(&self.slides, &self.active_class)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        Self::active_positions(&self.indicators, &self.active_class)
    }

    fn active_positions(nodes: &[Handle], active_class: &str) -> Vec<usize> {
        nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| has_class(node, active_class))
            .map(|(i, _)| i)
            .collect()
    }
}
