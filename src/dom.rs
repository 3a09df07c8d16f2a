//! Browser adapter: wires DOM events to [`PageCore`] and applies its effects.
//!
//! ARCHITECTURE
//! ============
//! All decisions live in the core; this module only reads geometry and
//! attributes from the live document, forwards them, and performs the
//! returned [`Effect`]s. Nodes are collected once at mount. Sections are
//! re-read on every scroll tick so layout changes are picked up. Listeners
//! live for the whole page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
    Storage, Window,
};

use crate::analytics::{AnalyticsEvent, EventSink, TRACK_ATTRIBUTE};
use crate::anchor::{AnchorGeometry, fragment_target};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::contact::{ContactForm, FORM_ID, FORM_STATUS_ID};
use crate::engine::{Effect, PageCore, Target};
use crate::menu::MenuState;
use crate::reveal::{REVEAL_ATTRIBUTE, RevealTracker};
use crate::scroll::{NavLink, Section};
use crate::theme::{self, PreferenceStore};

/// Error raised while mounting or talking to the browser.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // The embedding page installed its own logger; keep using it.
        log::debug!("console logger not installed: {err}");
    }

    if let Err(err) = mount() {
        log::warn!("pagekit disabled: {err}");
    }
}

// =============================================================
// Storage and analytics backends
// =============================================================

/// `localStorage`, or nothing when storage is blocked.
struct LocalStorage(Option<Storage>);

impl LocalStorage {
    fn open(window: &Window) -> Self {
        Self(window.local_storage().unwrap_or(None))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).unwrap_or(None)
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("failed to persist '{key}': {err:?}");
            }
        }
    }
}

/// `window.dataLayer`, created on first push if the page has none.
struct DataLayer<'a>(&'a Window);

impl EventSink for DataLayer<'_> {
    fn push(&mut self, event: &AnalyticsEvent) {
        match push_data_layer(self.0, event) {
            Ok(()) => log::debug!("tracked {}", event.event),
            Err(err) => log::warn!("failed to track {}: {err}", event.event),
        }
    }
}

fn push_data_layer(window: &Window, event: &AnalyticsEvent) -> Result<(), DomError> {
    let key = JsValue::from_str("dataLayer");
    let existing = Reflect::get(window, &key)?;
    let layer: Array = if Array::is_array(&existing) {
        existing.unchecked_into()
    } else {
        let layer = Array::new();
        Reflect::set(window, &key, &layer)?;
        layer
    };
    let record = js_sys::JSON::parse(&serde_json::to_string(event)?)?;
    layer.push(&record);
    Ok(())
}

// =============================================================
// Page
// =============================================================

struct Nodes {
    window: Window,
    document: Document,
    root: Element,
    header: Option<Element>,
    back_to_top: Option<Element>,
    menu_toggle: Option<Element>,
    site_nav: Option<Element>,
    nav_links: Vec<Element>,
    reveal: Vec<Element>,
    form: Option<HtmlFormElement>,
    form_status: Option<Element>,
    images: Vec<Element>,
}

impl Nodes {
    fn collect(window: Window) -> Result<Self, DomError> {
        let document = window.document().ok_or(DomError::NoDocument)?;
        let root = document.document_element().ok_or(DomError::NoRoot)?;
        Ok(Self {
            header: document.query_selector(".site-header")?,
            back_to_top: document.get_element_by_id("backToTop"),
            menu_toggle: document.get_element_by_id("menuToggle"),
            site_nav: document.get_element_by_id("siteNav"),
            nav_links: query_all(&document, ".site-nav .nav-link")?,
            reveal: query_all(&document, &format!("[{REVEAL_ATTRIBUTE}]"))?,
            form: document.get_element_by_id(FORM_ID).and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()),
            form_status: document.get_element_by_id(FORM_STATUS_ID),
            images: query_all(&document, "img")?,
            window,
            document,
            root,
        })
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => Some(&self.root),
            Target::Header => self.header.as_ref(),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::MenuToggle => self.menu_toggle.as_ref(),
            Target::SiteNav => self.site_nav.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Reveal(i) => self.reveal.get(i),
            Target::FormStatus => self.form_status.as_ref(),
            Target::Image(i) => self.images.get(i),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn header_height(&self) -> f64 {
        self.header
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map_or(0.0, |el| f64::from(el.offset_height()))
    }
}

struct Page {
    nodes: Nodes,
    core: RefCell<PageCore>,
    observer: RefCell<Option<IntersectionObserver>>,
}

impl Page {
    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect) {
                log::warn!("effect failed: {err}");
            }
        }
    }

    fn apply_one(&self, effect: Effect) -> Result<(), DomError> {
        let nodes = &self.nodes;
        match effect {
            Effect::ToggleClass { target, class, on } => {
                if let Some(el) = nodes.element(target) {
                    el.class_list().toggle_with_force(class, on)?;
                }
            }
            Effect::SetAttribute { target, name, value } => {
                if let Some(el) = nodes.element(target) {
                    el.set_attribute(name, &value)?;
                }
            }
            Effect::SetText { target, text } => {
                if let Some(el) = nodes.element(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                nodes.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::OpenExternal { url } => {
                let opened = nodes.window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
                if !matches!(opened, Ok(Some(_))) {
                    nodes.window.location().set_href(&url)?;
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &nodes.form {
                    form.reset();
                }
            }
            Effect::StorePreference { key, value } => {
                LocalStorage::open(&nodes.window).set(&key, &value);
            }
            Effect::Track(event) => {
                DataLayer(&nodes.window).push(&event);
            }
            Effect::StopObserving(target) => {
                if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), nodes.element(target)) {
                    observer.unobserve(el);
                }
            }
        }
        Ok(())
    }

    fn tick(&self) {
        let offset = self.nodes.scroll_y();
        let viewport = self
            .nodes
            .window
            .inner_height()
            .map_or(0.0, |h| h.as_f64().unwrap_or(0.0));
        let doc_height = f64::from(self.nodes.root.scroll_height()) - viewport;
        let sections = snapshot_sections(&self.nodes.document);
        let effects = self.core.borrow_mut().on_scroll(offset, doc_height, &sections);
        self.apply(effects);
    }
}

/// Build the page core from the live document and attach every listener.
///
/// # Errors
///
/// Returns [`DomError`] when there is no window/document or a listener
/// cannot be attached. Missing optional elements are not errors.
pub fn mount() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let nodes = Nodes::collect(window)?;

    let config = read_config(&nodes.document);
    let locale = config.resolve_locale(&nodes.root.get_attribute("lang").unwrap_or_default());
    let prefers_dark = nodes
        .window
        .match_media("(prefers-color-scheme: dark)")
        .unwrap_or(None)
        .is_some_and(|mq| mq.matches());
    let initial_theme = theme::load(&LocalStorage::open(&nodes.window), &config.theme_storage_key, prefers_dark);

    let mut core = PageCore::new(config, locale, initial_theme);
    core.nav_links = nodes
        .nav_links
        .iter()
        .map(|el| NavLink::new(el.get_attribute("href").unwrap_or_default()))
        .collect();
    core.menu = MenuState::from_aria_expanded(
        nodes.menu_toggle.as_ref().and_then(|el| el.get_attribute("aria-expanded")).as_deref(),
    );
    core.reveal = RevealTracker::new(nodes.reveal.len());

    log::info!(
        "pagekit mounted: {} nav links, {} reveal nodes, {} images, locale {locale:?}",
        nodes.nav_links.len(),
        nodes.reveal.len(),
        nodes.images.len(),
    );

    let page = Rc::new(Page { nodes, core: RefCell::new(core), observer: RefCell::new(None) });
    let initial = page.core.borrow().initial_effects();
    page.apply(initial);

    wire_theme(&page)?;
    wire_menu(&page)?;
    wire_scroll(&page)?;
    wire_anchors(&page)?;
    wire_tracking(&page)?;
    wire_reveal(&page)?;
    wire_form(&page)?;
    wire_images(&page)?;
    Ok(())
}

// =============================================================
// Reading the document
// =============================================================

fn read_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            PageConfig::default()
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn snapshot_sections(document: &Document) -> Vec<Section> {
    let Ok(sections) = query_all(document, "main section[id]") else {
        return Vec::new();
    };
    sections
        .iter()
        .filter_map(|el| {
            let top = el.dyn_ref::<HtmlElement>()?.offset_top();
            Some(Section::new(el.id(), f64::from(top)))
        })
        .collect()
}

fn attributes(el: &Element) -> Vec<(String, String)> {
    let attrs = el.attributes();
    (0..attrs.length())
        .filter_map(|i| attrs.item(i))
        .map(|attr| (attr.name(), attr.value()))
        .collect()
}

fn form_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let field = form.elements().named_item(name)?;
    Reflect::get(&field, &JsValue::from_str("value")).unwrap_or_default().as_string()
}

// =============================================================
// Listeners
// =============================================================

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_theme(page: &Rc<Page>) -> Result<(), DomError> {
    let Some(toggle) = page.nodes.document.get_element_by_id("themeToggle") else {
        return Ok(());
    };
    let page = Rc::clone(page);
    listen(&toggle, "click", move |_| {
        let effects = page.core.borrow_mut().on_theme_toggle();
        page.apply(effects);
    })
}

fn wire_menu(page: &Rc<Page>) -> Result<(), DomError> {
    if let (Some(toggle), Some(_)) = (&page.nodes.menu_toggle, &page.nodes.site_nav) {
        let handler_page = Rc::clone(page);
        listen(toggle, "click", move |_| {
            let effects = handler_page.core.borrow_mut().on_menu_toggle();
            handler_page.apply(effects);
        })?;

        for link in &page.nodes.nav_links {
            let handler_page = Rc::clone(page);
            listen(link, "click", move |_| {
                let effects = handler_page.core.borrow_mut().on_nav_link_click();
                handler_page.apply(effects);
            })?;
        }
    }
    Ok(())
}

fn wire_scroll(page: &Rc<Page>) -> Result<(), DomError> {
    let window = &page.nodes.window;

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let scroll_page = Rc::clone(page);
    let on_scroll = Closure::wrap(Box::new(move |_: Event| scroll_page.tick()) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    on_scroll.forget();

    for kind in ["resize", "load"] {
        let handler_page = Rc::clone(page);
        listen(window, kind, move |_| handler_page.tick())?;
    }

    if let Some(button) = &page.nodes.back_to_top {
        let handler_page = Rc::clone(page);
        listen(button, "click", move |_| {
            let effects = handler_page.core.borrow().on_back_to_top();
            handler_page.apply(effects);
        })?;
    }

    page.tick();
    Ok(())
}

fn wire_anchors(page: &Rc<Page>) -> Result<(), DomError> {
    for anchor in query_all(&page.nodes.document, "a[href^=\"#\"]")? {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let Some(id) = fragment_target(&href).map(str::to_owned) else {
            continue;
        };
        let handler_page = Rc::clone(page);
        listen(&anchor, "click", move |event| {
            let nodes = &handler_page.nodes;
            let geometry = nodes.document.get_element_by_id(&id).map(|target| AnchorGeometry {
                rect_top: target.get_bounding_client_rect().top(),
                scroll_y: nodes.scroll_y(),
                header_height: nodes.header_height(),
            });
            let effects = handler_page.core.borrow().on_anchor_click(geometry);
            if !effects.is_empty() {
                event.prevent_default();
                handler_page.apply(effects);
            }
        })?;
    }
    Ok(())
}

fn wire_tracking(page: &Rc<Page>) -> Result<(), DomError> {
    for node in query_all(&page.nodes.document, &format!("[{TRACK_ATTRIBUTE}]"))? {
        let handler_page = Rc::clone(page);
        let target = node.clone();
        listen(&node, "click", move |_| {
            let effects = handler_page.core.borrow().on_track_click(&attributes(&target));
            handler_page.apply(effects);
        })?;
    }
    Ok(())
}

fn wire_reveal(page: &Rc<Page>) -> Result<(), DomError> {
    if page.nodes.reveal.is_empty() {
        return Ok(());
    }
    if !Reflect::has(&page.nodes.window, &JsValue::from_str("IntersectionObserver"))? {
        let effects = page.core.borrow_mut().reveal_all();
        page.apply(effects);
        return Ok(());
    }

    let handler_page = Rc::clone(page);
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = handler_page.nodes.reveal.iter().position(|node| *node == target) else {
                continue;
            };
            let effects = handler_page.core.borrow_mut().on_reveal(index, entry.is_intersecting());
            handler_page.apply(effects);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(page.core.borrow().config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for node in &page.nodes.reveal {
        observer.observe(node);
    }
    *page.observer.borrow_mut() = Some(observer);
    Ok(())
}

fn wire_form(page: &Rc<Page>) -> Result<(), DomError> {
    let Some(form) = &page.nodes.form else {
        return Ok(());
    };
    let handler_page = Rc::clone(page);
    let handler_form = form.clone();
    listen(form, "submit", move |event| {
        event.prevent_default();
        let valid = handler_form.report_validity();
        let values = if valid {
            ContactForm::from_fields(|name| form_value(&handler_form, name))
        } else {
            ContactForm::default()
        };
        let effects = handler_page.core.borrow().on_form_submit(valid, &values);
        handler_page.apply(effects);
    })
}

fn wire_images(page: &Rc<Page>) -> Result<(), DomError> {
    for (index, image) in page.nodes.images.iter().enumerate() {
        let handler_page = Rc::clone(page);
        listen(image, "error", move |_| {
            let effects = handler_page.core.borrow().on_image_error(index);
            handler_page.apply(effects);
        })?;
    }
    Ok(())
}
