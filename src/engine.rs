use crate::analytics::{AnalyticsEvent, tracked_click};
use crate::anchor::{AnchorGeometry, scroll_top};
use crate::config::PageConfig;
use crate::consts::{EVENT_THEME_TOGGLE, EVENT_WHATSAPP_CLICK};
use crate::contact::{ContactForm, compose_message, whatsapp_url};
use crate::locale::Locale;
use crate::menu::MenuState;
use crate::reveal::RevealTracker;
use crate::scroll::{self, NavLink, ScrollInput, ScrollState, Section};
use crate::theme::{THEME_ATTRIBUTE, Theme};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Page elements an [`Effect`] can address.
///
/// Indexed variants refer to the node lists collected at mount time, in
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// `.site-header`.
    Header,
    /// `#backToTop`.
    BackToTop,
    /// `#menuToggle`.
    MenuToggle,
    /// `#siteNav`.
    SiteNav,
    /// `.site-nav .nav-link` at this index.
    NavLink(usize),
    /// `[data-reveal]` node at this index.
    Reveal(usize),
    /// `#formStatus`.
    FormStatus,
    /// `<img>` at this index.
    Image(usize),
}

/// Effects returned from event handlers for the host to apply.
///
/// Targets that do not exist on the current page are skipped by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ToggleClass { target: Target, class: &'static str, on: bool },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Smooth-scroll the window to this document offset.
    ScrollTo { top: f64 },
    /// Open in a new tab, falling back to same-window navigation.
    OpenExternal { url: String },
    /// Reset the contact form controls.
    ResetForm,
    /// Persist a preference value.
    StorePreference { key: String, value: String },
    /// Push a record to the analytics sink.
    Track(AnalyticsEvent),
    /// Stop delivering intersection entries for this node.
    StopObserving(Target),
}

/// Core page state — everything that doesn't touch the DOM.
///
/// Separated from the browser adapter so it can be tested natively.
pub struct PageCore {
    pub config: PageConfig,
    pub locale: Locale,
    pub scroll: ScrollState,
    pub theme: Theme,
    pub menu: MenuState,
    pub reveal: RevealTracker,
    pub nav_links: Vec<NavLink>,
}

impl PageCore {
    #[must_use]
    pub fn new(config: PageConfig, locale: Locale, theme: Theme) -> Self {
        Self {
            config,
            locale,
            scroll: ScrollState::default(),
            theme,
            menu: MenuState::default(),
            reveal: RevealTracker::default(),
            nav_links: Vec::new(),
        }
    }

    /// Effects that establish initial state at load, before the first scroll tick.
    #[must_use]
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::SetAttribute { target: Target::Root, name: THEME_ATTRIBUTE, value: self.theme.as_str().into() }]
    }

    // --- Scroll ---

    /// Scroll, resize, or load tick.
    pub fn on_scroll(&mut self, offset: f64, doc_height: f64, sections: &[Section]) -> Vec<Effect> {
        let input = ScrollInput { offset, doc_height, sections, nav_links: &self.nav_links };
        let (next, effects) = scroll::evaluate(self.scroll, &input, &self.config.scroll);
        self.scroll = next;
        effects
    }

    /// Back-to-top control clicked.
    #[must_use]
    pub fn on_back_to_top(&self) -> Vec<Effect> {
        vec![Effect::ScrollTo { top: 0.0 }]
    }

    /// In-page anchor clicked. `target` is `None` when the fragment matches no
    /// element; the host then keeps the browser's default navigation.
    #[must_use]
    pub fn on_anchor_click(&self, target: Option<AnchorGeometry>) -> Vec<Effect> {
        target.map_or_else(Vec::new, |geometry| {
            vec![Effect::ScrollTo { top: scroll_top(geometry, self.config.anchor_gap_px) }]
        })
    }

    // --- Menu ---

    pub fn on_menu_toggle(&mut self) -> Vec<Effect> {
        self.menu.toggle()
    }

    /// Any navigation link clicked.
    pub fn on_nav_link_click(&mut self) -> Vec<Effect> {
        self.menu.close()
    }

    // --- Theme ---

    pub fn on_theme_toggle(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        let name = self.theme.as_str();
        vec![
            Effect::SetAttribute { target: Target::Root, name: THEME_ATTRIBUTE, value: name.into() },
            Effect::StorePreference { key: self.config.theme_storage_key.clone(), value: name.into() },
            Effect::Track(AnalyticsEvent::new(EVENT_THEME_TOGGLE).with("theme", name)),
        ]
    }

    // --- Analytics / reveal ---

    /// Click on a `[data-track]` node with the given attributes.
    #[must_use]
    pub fn on_track_click(&self, attributes: &[(String, String)]) -> Vec<Effect> {
        tracked_click(attributes).map(Effect::Track).into_iter().collect()
    }

    pub fn on_reveal(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        self.reveal.on_intersection(index, is_intersecting)
    }

    pub fn reveal_all(&mut self) -> Vec<Effect> {
        self.reveal.reveal_all()
    }

    // --- Contact form ---

    /// Contact form submitted. `valid` is the browser's constraint validation result.
    #[must_use]
    pub fn on_form_submit(&self, valid: bool, form: &ContactForm) -> Vec<Effect> {
        if !valid {
            return vec![Effect::SetText { target: Target::FormStatus, text: self.locale.validation_message().into() }];
        }
        let text = compose_message(form, self.locale);
        vec![
            Effect::Track(AnalyticsEvent::new(EVENT_WHATSAPP_CLICK).with("source", "qualification_form")),
            Effect::OpenExternal { url: whatsapp_url(&self.config.whatsapp_number, &text) },
            Effect::SetText { target: Target::FormStatus, text: self.locale.ready_message().into() },
            Effect::ResetForm,
        ]
    }

    // --- Images ---

    #[must_use]
    pub fn on_image_error(&self, index: usize) -> Vec<Effect> {
        vec![Effect::SetAttribute {
            target: Target::Image(index),
            name: "alt",
            value: self.locale.image_unavailable().into(),
        }]
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    #[must_use]
    pub fn scroll_depth_tracked(&self) -> bool {
        self.scroll.depth_tracked
    }
}
