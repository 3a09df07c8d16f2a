//! Shared numeric constants and DOM hook names for the page controller.

// ── Scroll ──────────────────────────────────────────────────────

/// Pixels added to the scroll offset before matching the active section.
/// Roughly the height of the fixed header.
pub const SECTION_LOOKAHEAD_PX: f64 = 130.0;

/// Scroll offset above which the header gets its compact style.
pub const HEADER_SCROLLED_PX: f64 = 10.0;

/// Scroll offset above which the back-to-top control is shown.
pub const BACK_TO_TOP_PX: f64 = 420.0;

/// Scroll progress ratio that triggers the one-shot depth event.
pub const SCROLL_DEPTH_RATIO: f64 = 0.75;

/// Extra gap kept between the fixed header and an anchor target.
pub const ANCHOR_GAP_PX: f64 = 8.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction of a `[data-reveal]` node required before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.16;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Contact ─────────────────────────────────────────────────────

/// Default WhatsApp number that receives qualification form messages.
pub const WHATSAPP_NUMBER: &str = "972569906492";

/// Base URL for WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

// ── CSS classes ─────────────────────────────────────────────────

pub const CLASS_SCROLLED: &str = "is-scrolled";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_REVEALED: &str = "is-revealed";

// ── Analytics event names ───────────────────────────────────────

pub const EVENT_SCROLL_DEPTH: &str = "scroll_75";
pub const EVENT_THEME_TOGGLE: &str = "theme_toggle";
pub const EVENT_WHATSAPP_CLICK: &str = "cta_whatsapp_click";
