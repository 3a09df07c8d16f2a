//! Page configuration parsed from an optional inline JSON block.
//!
//! Pages may embed
//! `<script type="application/json" id="pagekit-config">{...}</script>`
//! to override any field; omitted fields keep their defaults from
//! [`crate::consts`]. Keys are camelCase.

use serde::Deserialize;

use crate::consts::{
    ANCHOR_GAP_PX, BACK_TO_TOP_PX, HEADER_SCROLLED_PX, REVEAL_THRESHOLD, SCROLL_DEPTH_RATIO, SECTION_LOOKAHEAD_PX,
    THEME_STORAGE_KEY, WHATSAPP_NUMBER,
};
use crate::locale::Locale;

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The block is not valid JSON or has the wrong shape.
    #[error("failed to parse page config: {0}")]
    Json(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid page config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Pixel thresholds for the scroll synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub lookahead_px: f64,
    pub header_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub depth_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lookahead_px: SECTION_LOOKAHEAD_PX,
            header_scrolled_px: HEADER_SCROLLED_PX,
            back_to_top_px: BACK_TO_TOP_PX,
            depth_ratio: SCROLL_DEPTH_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Forces a locale. When absent the `<html lang>` attribute decides.
    pub locale: Option<Locale>,
    /// Digits-only international number receiving contact form messages.
    pub whatsapp_number: String,
    pub scroll: ScrollConfig,
    pub anchor_gap_px: f64,
    pub reveal_threshold: f64,
    pub theme_storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: None,
            whatsapp_number: WHATSAPP_NUMBER.to_owned(),
            scroll: ScrollConfig::default(),
            anchor_gap_px: ANCHOR_GAP_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Locale for this page: the configured one, else derived from `lang`.
    #[must_use]
    pub fn resolve_locale(&self, html_lang: &str) -> Locale {
        self.locale.unwrap_or_else(|| Locale::from_lang(html_lang))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty() || !self.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                field: "whatsappNumber",
                reason: format!("expected digits only, got '{}'", self.whatsapp_number),
            });
        }
        non_negative("scroll.lookaheadPx", self.scroll.lookahead_px)?;
        non_negative("scroll.headerScrolledPx", self.scroll.header_scrolled_px)?;
        non_negative("scroll.backToTopPx", self.scroll.back_to_top_px)?;
        non_negative("anchorGapPx", self.anchor_gap_px)?;
        unit_ratio("scroll.depthRatio", self.scroll.depth_ratio)?;
        unit_ratio("revealThreshold", self.reveal_threshold)?;
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::Invalid { field: "themeStorageKey", reason: "must not be empty".into() });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a non-negative number, got {value}") })
    }
}

fn unit_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a value in 0..=1, got {value}") })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
