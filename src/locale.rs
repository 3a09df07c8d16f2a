//! Page language and the visitor-facing strings that depend on it.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use serde::Deserialize;

/// Language the page is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Resolve from the `<html lang>` attribute. Only an exact `"ar"` selects
    /// Arabic; anything else (including a missing attribute) is English.
    #[must_use]
    pub fn from_lang(lang: &str) -> Self {
        if lang == "ar" { Self::Ar } else { Self::En }
    }

    /// Status text shown when the contact form fails browser validation.
    #[must_use]
    pub fn validation_message(self) -> &'static str {
        match self {
            Self::En => "Please complete the required fields before continuing.",
            Self::Ar => "رجاءً أكمل الحقول المطلوبة قبل المتابعة.",
        }
    }

    /// Status text shown after the WhatsApp link has been opened.
    #[must_use]
    pub fn ready_message(self) -> &'static str {
        match self {
            Self::En => "Message is ready. If WhatsApp did not open automatically, click your WhatsApp CTA again.",
            Self::Ar => "تم تجهيز الرسالة. إذا لم يُفتح واتساب تلقائيًا اضغط زر واتساب مرة أخرى.",
        }
    }

    /// Replacement `alt` text for images that fail to load.
    #[must_use]
    pub fn image_unavailable(self) -> &'static str {
        match self {
            Self::En => "Image unavailable",
            Self::Ar => "صورة غير متاحة حاليًا",
        }
    }
}
