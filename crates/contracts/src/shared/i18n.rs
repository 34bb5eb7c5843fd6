//! Localized text fields.
//!
//! The API returns translations as a list (`[{locale, title}]`) and expects
//! them back as an object keyed by locale (`{"en": "North"}`). Forms bind to
//! [`Translations`], which is always restricted to the configured
//! [`LanguageSet`].

use crate::shared::error::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(pub String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Locale::new(value)
    }
}

/// Language as returned by the `languages/active` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub locale: Locale,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub default: bool,
}

/// Configured locales of the panel plus the default one
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSet {
    pub languages: Vec<Language>,
    pub default_locale: Locale,
}

impl LanguageSet {
    pub fn new(languages: Vec<Language>) -> Self {
        let default_locale = languages
            .iter()
            .find(|l| l.default)
            .or_else(|| languages.first())
            .map(|l| l.locale.clone())
            .unwrap_or_else(|| Locale::new("en"));
        Self {
            languages,
            default_locale,
        }
    }

    /// Single-locale set, used before the languages endpoint answers
    pub fn single(locale: &str) -> Self {
        Self::new(vec![Language {
            id: 1,
            locale: Locale::new(locale),
            title: locale.to_string(),
            default: true,
        }])
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.languages.iter().map(|l| &l.locale)
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.languages.iter().any(|l| &l.locale == locale)
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self::single("en")
    }
}

/// One row of an entity's `translations` list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub id: Option<i64>,
    pub locale: Locale,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Which text field of a [`Translation`] to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
}

impl TextField {
    pub fn key(&self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Description => "description",
        }
    }

    fn read<'a>(&self, t: &'a Translation) -> Option<&'a str> {
        match self {
            TextField::Title => t.title.as_deref(),
            TextField::Description => t.description.as_deref(),
        }
    }
}

/// Locale -> text for one field. Serializes as `{"en": "...", "fr": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(pub BTreeMap<Locale, String>);

/// Length bounds for localized text inputs
#[derive(Debug, Clone, Copy)]
pub struct TextRules {
    pub min: usize,
    pub max: usize,
    pub default_required: bool,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            min: 2,
            max: 200,
            default_required: true,
        }
    }
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only locales of `languages`; empty values are dropped.
    pub fn from_translations(
        translations: &[Translation],
        languages: &LanguageSet,
        field: TextField,
    ) -> Self {
        let mut map = BTreeMap::new();
        for locale in languages.locales() {
            let value = translations
                .iter()
                .find(|t| &t.locale == locale)
                .and_then(|t| field.read(t));
            if let Some(v) = value {
                if !v.is_empty() {
                    map.insert(locale.clone(), v.to_string());
                }
            }
        }
        Self(map)
    }

    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale).map(|s| s.as_str())
    }

    /// Setting an empty value removes the locale
    pub fn set(&mut self, locale: Locale, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.0.remove(&locale);
        } else {
            self.0.insert(locale, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flat form-field names: `{"title[en]": "A"}`
    pub fn to_field_map(&self, prefix: &str) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(locale, value)| (field_name(prefix, locale), value.clone()))
            .collect()
    }

    /// Inverse of [`Translations::to_field_map`]. Keys for locales outside
    /// `languages` are ignored.
    pub fn from_field_map(
        prefix: &str,
        fields: &BTreeMap<String, String>,
        languages: &LanguageSet,
    ) -> Self {
        let mut result = Self::new();
        for locale in languages.locales() {
            if let Some(value) = fields.get(&field_name(prefix, locale)) {
                result.set(locale.clone(), value.clone());
            }
        }
        result
    }

    /// Back to the API list shape, in configured-locale order
    pub fn to_translation_list(&self, languages: &LanguageSet, field: TextField) -> Vec<Translation> {
        languages
            .locales()
            .filter_map(|locale| {
                let value = self.0.get(locale)?.clone();
                let mut t = Translation {
                    locale: locale.clone(),
                    ..Default::default()
                };
                match field {
                    TextField::Title => t.title = Some(value),
                    TextField::Description => t.description = Some(value),
                }
                Some(t)
            })
            .collect()
    }

    pub fn validate(
        &self,
        prefix: &str,
        languages: &LanguageSet,
        rules: TextRules,
        errors: &mut ValidationErrors,
    ) {
        let default = &languages.default_locale;
        if rules.default_required && self.get(default).map_or(true, |v| v.trim().is_empty()) {
            errors.add(field_name(prefix, default), "required");
        }
        for (locale, value) in &self.0 {
            if !languages.contains(locale) {
                errors.add(field_name(prefix, locale), "unknown.locale");
                continue;
            }
            let len = value.chars().count();
            if len < rules.min || len > rules.max {
                errors.add(
                    field_name(prefix, locale),
                    format!("min.{}.max.{}.chars", rules.min, rules.max),
                );
            }
        }
    }
}

/// `title[en]`
pub fn field_name(prefix: &str, locale: &Locale) -> String {
    format!("{}[{}]", prefix, locale)
}

/// Title of the current translation, or `"-"`
pub fn title_or_dash(translation: Option<&Translation>) -> String {
    translation
        .and_then(|t| t.title.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(codes: &[&str]) -> LanguageSet {
        LanguageSet::new(
            codes
                .iter()
                .enumerate()
                .map(|(i, c)| Language {
                    id: i as i64 + 1,
                    locale: Locale::new(*c),
                    title: c.to_string(),
                    default: i == 0,
                })
                .collect(),
        )
    }

    fn tr(locale: &str, title: &str) -> Translation {
        Translation {
            locale: Locale::new(locale),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_and_back() {
        let languages = langs(&["en", "fr"]);
        let list = vec![tr("en", "A"), tr("fr", "B")];

        let titles = Translations::from_translations(&list, &languages, TextField::Title);
        let flat = titles.to_field_map("title");
        assert_eq!(flat.get("title[en]").map(String::as_str), Some("A"));
        assert_eq!(flat.get("title[fr]").map(String::as_str), Some("B"));
        assert_eq!(flat.len(), 2);

        let restored = Translations::from_field_map("title", &flat, &languages);
        assert_eq!(restored, titles);
        assert_eq!(
            restored.to_translation_list(&languages, TextField::Title),
            list
        );
    }

    #[test]
    fn test_unconfigured_locales_are_dropped() {
        let languages = langs(&["en"]);
        let list = vec![tr("en", "A"), tr("de", "X")];
        let titles = Translations::from_translations(&list, &languages, TextField::Title);
        assert_eq!(titles.0.len(), 1);

        let mut flat = BTreeMap::new();
        flat.insert("title[de]".to_string(), "X".to_string());
        assert!(Translations::from_field_map("title", &flat, &languages).is_empty());
    }

    #[test]
    fn test_serializes_as_locale_object() {
        let mut t = Translations::new();
        t.set(Locale::new("en"), "North");
        assert_eq!(serde_json::to_value(&t).unwrap(), serde_json::json!({"en": "North"}));
    }

    #[test]
    fn test_validate_default_required_and_length() {
        let languages = langs(&["en", "fr"]);
        let mut errors = ValidationErrors::new();
        let mut t = Translations::new();
        t.set(Locale::new("fr"), "B");
        t.validate("title", &languages, TextRules::default(), &mut errors);
        assert_eq!(errors.first("title[en]").as_deref(), Some("required"));
        assert_eq!(errors.first("title[fr]").as_deref(), Some("min.2.max.200.chars"));
    }

    #[test]
    fn test_default_locale_falls_back_to_first() {
        let mut set = langs(&["uz", "ru"]);
        for l in set.languages.iter_mut() {
            l.default = false;
        }
        let set = LanguageSet::new(set.languages);
        assert_eq!(set.default_locale, Locale::new("uz"));
    }

    #[test]
    fn test_title_or_dash() {
        assert_eq!(title_or_dash(None), "-");
        assert_eq!(title_or_dash(Some(&tr("en", "A"))), "A");
        assert_eq!(title_or_dash(Some(&tr("en", ""))), "-");
    }

    #[test]
    fn test_translation_default_is_blank() {
        let t = Translation::default();
        assert_eq!(t.locale.as_str(), "");
        assert_eq!(t.title, None);
        assert_eq!(title_or_dash(Some(&t)), "-");
    }
}
