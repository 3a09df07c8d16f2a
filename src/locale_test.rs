use super::*;

#[test]
fn from_lang_ar_is_arabic() {
    assert_eq!(Locale::from_lang("ar"), Locale::Ar);
}

#[test]
fn from_lang_other_values_are_english() {
    assert_eq!(Locale::from_lang("en"), Locale::En);
    assert_eq!(Locale::from_lang(""), Locale::En);
    assert_eq!(Locale::from_lang("ar-SA"), Locale::En);
}

#[test]
fn default_is_english() {
    assert_eq!(Locale::default(), Locale::En);
}

#[test]
fn messages_differ_by_locale() {
    assert_ne!(Locale::En.validation_message(), Locale::Ar.validation_message());
    assert_ne!(Locale::En.ready_message(), Locale::Ar.ready_message());
    assert_eq!(Locale::En.image_unavailable(), "Image unavailable");
}

#[test]
fn deserializes_lowercase_names() {
    let locale: Locale = serde_json::from_str("\"ar\"").unwrap();
    assert_eq!(locale, Locale::Ar);
}
