use crate::domain::common::named_ref::ref_option;
use crate::domain::common::{AggregateRoot, NamedRef};
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{title_or_dash, LanguageSet, TextField, TextRules, Translation, Translations};
use crate::shared::list::SelectOption;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Страна внутри региона
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub region_id: Option<i64>,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl AggregateRoot for Country {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a102"
    }

    fn collection_name() -> &'static str {
        "countries"
    }

    fn element_name() -> &'static str {
        "country"
    }

    fn list_name() -> &'static str {
        "countries"
    }

    fn parent_filter() -> Option<&'static str> {
        Some("region_id")
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CountryForm {
    pub id: Option<i64>,
    pub title: Translations,
    pub active: bool,
    pub code: String,
    pub region: Option<SelectOption>,
    /// Uploaded image URL
    pub image: Option<String>,
}

impl Default for CountryForm {
    fn default() -> Self {
        Self {
            id: None,
            title: Translations::new(),
            active: true,
            code: String::new(),
            region: None,
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPayload {
    pub images: Vec<String>,
    pub region_id: Option<i64>,
    pub code: String,
    pub active: bool,
    pub title: Translations,
}

impl CountryForm {
    pub fn from_entity(country: &Country, languages: &LanguageSet) -> Self {
        Self {
            id: Some(country.id),
            title: Translations::from_translations(&country.translations, languages, TextField::Title),
            active: country.active,
            code: country.code.clone().unwrap_or_default(),
            region: ref_option(country.region.as_ref()),
            image: country.img.clone().filter(|s| !s.is_empty()),
        }
    }

    pub fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.title
            .validate("title", languages, TextRules::default(), &mut errors);
        if self.image.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.add("images", "required");
        }
        if self.region.is_none() {
            errors.add("region_id", "required");
        }
        if self.code.trim().is_empty() {
            errors.add("code", "required");
        }
        errors.into_result()
    }

    pub fn to_payload(&self) -> CountryPayload {
        CountryPayload {
            images: self.image.iter().cloned().collect(),
            region_id: self.region.as_ref().map(|r| r.value),
            code: self.code.trim().to_string(),
            active: self.active,
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;
    use serde_json::json;

    #[test]
    fn test_validate_required_fields() {
        let languages = LanguageSet::single("en");
        let errors = CountryForm::default().validate(&languages).unwrap_err();
        for field in ["title[en]", "images", "region_id", "code"] {
            assert_eq!(errors.first(field).as_deref(), Some("required"), "{}", field);
        }
    }

    #[test]
    fn test_payload() {
        let mut form = CountryForm {
            code: " UZ ".into(),
            region: Some(SelectOption::new("Asia", 2)),
            image: Some("https://cdn/x.png".into()),
            ..CountryForm::default()
        };
        form.title.set(Locale::new("en"), "Uzbekistan");
        assert!(form.validate(&LanguageSet::single("en")).is_ok());
        assert_eq!(
            serde_json::to_value(form.to_payload()).unwrap(),
            json!({
                "images": ["https://cdn/x.png"],
                "region_id": 2,
                "code": "UZ",
                "active": true,
                "title": {"en": "Uzbekistan"}
            })
        );
    }

    #[test]
    fn test_from_entity_preselects_region() {
        let country: Country = serde_json::from_value(json!({
            "id": 9,
            "active": true,
            "code": "KZ",
            "img": "https://cdn/kz.png",
            "region": {"id": 2, "translation": {"locale": "en", "title": "Asia"}},
            "translations": [{"locale": "en", "title": "Kazakhstan"}]
        }))
        .unwrap();
        let form = CountryForm::from_entity(&country, &LanguageSet::single("en"));
        assert_eq!(form.region, Some(SelectOption::new("Asia", 2)));
        assert_eq!(form.code, "KZ");
        assert_eq!(form.image.as_deref(), Some("https://cdn/kz.png"));
    }
}
