//! Page controller for static marketing and portfolio pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It keeps the
//! page's UI affordances in step with the visitor: active navigation by scroll
//! position, header and back-to-top styling, the mobile menu, light/dark
//! theme, reveal-on-scroll, click analytics, and the WhatsApp contact form.
//! Every decision is made by [`engine::PageCore`], which returns declarative
//! [`engine::Effect`]s; the `browser` feature adds the DOM adapter that feeds
//! it events and applies those effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::PageCore`] and the [`engine::Effect`] vocabulary |
//! | [`scroll`] | Scroll state synchronizer (active section, header, back-to-top, depth event) |
//! | [`theme`] | Theme preference and its key-value store |
//! | [`menu`] | Mobile menu open/closed state |
//! | [`anchor`] | In-page anchor scroll targets |
//! | [`reveal`] | Fire-once reveal tracking |
//! | [`analytics`] | Analytics records, sinks, `data-track` payloads |
//! | [`contact`] | Contact form message and deep link |
//! | [`locale`] | Page language and localized strings |
//! | [`config`] | Inline JSON page configuration |
//! | [`consts`] | Shared thresholds, class names, event names |
//! | `dom` | Browser adapter and WASM entry point (`browser` feature) |

pub mod analytics;
pub mod anchor;
pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "browser")]
pub mod dom;
pub mod engine;
pub mod locale;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;
