//! Scroll state synchronizer.
//!
//! On every scroll, resize, or load tick the host takes a fresh snapshot of
//! the page geometry and calls [`evaluate`]. The result is the next
//! [`ScrollState`] plus the class toggles and analytics records that bring the
//! header, the back-to-top control, and the navigation in line with the
//! current scroll position.
//!
//! `evaluate` is pure apart from the scroll-depth latch carried in
//! [`ScrollState`]: calling it twice with the same input yields the same
//! effects, and the depth event is emitted at most once per page lifetime.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::analytics::AnalyticsEvent;
use crate::anchor::fragment_target;
use crate::config::ScrollConfig;
use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED, CLASS_VISIBLE, EVENT_SCROLL_DEPTH};
use crate::engine::{Effect, Target};

/// A page region that navigation links can point at.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Offset of the section's top edge from the document top, in CSS pixels.
    pub top: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// A navigation link, identified by its `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The section id this link points at, for `#id` hrefs only.
    ///
    /// Links to other pages and a bare `#` return `None`; the synchronizer
    /// leaves their active state alone.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        fragment_target(&self.href)
    }
}

/// Geometry snapshot for one tick.
#[derive(Debug, Clone, Copy)]
pub struct ScrollInput<'a> {
    /// Vertical scroll offset (`window.scrollY`).
    pub offset: f64,
    /// Scrollable height: `scrollHeight - innerHeight`.
    pub doc_height: f64,
    /// Sections in document order.
    pub sections: &'a [Section],
    /// Navigation links in document order.
    pub nav_links: &'a [NavLink],
}

/// State carried between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Set once the scroll-depth event has been emitted.
    pub depth_tracked: bool,
}

/// Id of the last section whose top is at or above `y`, or `""`.
///
/// Later sections overwrite earlier matches, so the deepest section already
/// reached wins even if section offsets are not sorted.
#[must_use]
pub fn active_section(sections: &[Section], y: f64) -> &str {
    let mut current = "";
    for section in sections {
        if y >= section.top {
            current = &section.id;
        }
    }
    current
}

/// Scroll progress in `0.0..=1.0`; zero when the page cannot scroll.
#[must_use]
pub fn progress(offset: f64, doc_height: f64) -> f64 {
    if doc_height > 0.0 { (offset / doc_height).clamp(0.0, 1.0) } else { 0.0 }
}

/// Recompute derived UI state for the current scroll position.
#[must_use]
pub fn evaluate(state: ScrollState, input: &ScrollInput<'_>, config: &ScrollConfig) -> (ScrollState, Vec<Effect>) {
    let offset = input.offset.max(0.0);
    let mut effects = Vec::with_capacity(input.nav_links.len() + 3);

    effects.push(Effect::ToggleClass {
        target: Target::Header,
        class: CLASS_SCROLLED,
        on: offset > config.header_scrolled_px,
    });
    effects.push(Effect::ToggleClass {
        target: Target::BackToTop,
        class: CLASS_VISIBLE,
        on: offset > config.back_to_top_px,
    });

    let mut next = state;
    if !state.depth_tracked && progress(offset, input.doc_height) >= config.depth_ratio {
        next.depth_tracked = true;
        effects.push(Effect::Track(AnalyticsEvent::new(EVENT_SCROLL_DEPTH)));
    }

    let current = active_section(input.sections, offset + config.lookahead_px);
    for (index, link) in input.nav_links.iter().enumerate() {
        let Some(fragment) = link.fragment() else {
            continue;
        };
        effects.push(Effect::ToggleClass {
            target: Target::NavLink(index),
            class: CLASS_ACTIVE,
            on: fragment == current,
        });
    }

    (next, effects)
}
