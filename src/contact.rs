//! Qualification form → WhatsApp click-to-chat link.
//!
//! The form never posts anywhere. Its values are rendered into a short
//! localized message which is opened as a `wa.me` deep link.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::consts::WHATSAPP_BASE_URL;
use crate::locale::Locale;

/// Element id of the qualification form.
pub const FORM_ID: &str = "qualifyForm";

/// Element id of the status line under the form.
pub const FORM_STATUS_ID: &str = "formStatus";

/// Form control names read on submit, in message order.
pub const FIELD_NAMES: [&str; 6] = ["name", "business_type", "budget_range", "timeline", "project_goal", "message"];

/// Trimmed values of the qualification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub business_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub project_goal: String,
    pub message: String,
}

impl ContactForm {
    /// Build from a control lookup, asking for each of [`FIELD_NAMES`] in
    /// order. Missing controls read as empty.
    pub fn from_fields<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let [name, business_type, budget_range, timeline, project_goal, message] =
            FIELD_NAMES.map(|field| lookup(field).map(|v| v.trim().to_owned()).unwrap_or_default());
        Self { name, business_type, budget_range, timeline, project_goal, message }
    }
}

/// Message lines in the page's language.
#[must_use]
pub fn message_lines(form: &ContactForm, locale: Locale) -> Vec<String> {
    match locale {
        Locale::En => vec![
            "Hi Basil, I have a new project.".to_owned(),
            String::new(),
            format!("Name: {}", form.name),
            format!("Business type: {}", form.business_type),
            format!("Budget range: {}", form.budget_range),
            format!("Timeline: {}", form.timeline),
            format!("Primary goal: {}", form.project_goal),
            format!("Extra details: {}", or_placeholder(&form.message, "N/A")),
        ],
        Locale::Ar => vec![
            "مرحباً Basil، عندي مشروع جديد.".to_owned(),
            String::new(),
            format!("الاسم: {}", form.name),
            format!("نوع النشاط: {}", form.business_type),
            format!("الميزانية: {}", form.budget_range),
            format!("المدة: {}", form.timeline),
            format!("الهدف الرئيسي: {}", form.project_goal),
            format!("تفاصيل إضافية: {}", or_placeholder(&form.message, "لا يوجد")),
        ],
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

/// Full message text, lines joined by `\n`.
#[must_use]
pub fn compose_message(form: &ContactForm, locale: Locale) -> String {
    message_lines(form, locale).join("\n")
}

/// `https://wa.me/<number>?text=<encoded>` for a prepared message.
#[must_use]
pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE_URL}/{number}?text={}", encode_uri_component(text))
}

/// Characters `encodeURIComponent` escapes: everything except ASCII
/// alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` the way JavaScript's `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}
