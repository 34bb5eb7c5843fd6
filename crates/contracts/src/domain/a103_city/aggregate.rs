use crate::domain::common::named_ref::ref_option;
use crate::domain::common::{AggregateRoot, NamedRef};
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{title_or_dash, LanguageSet, TextField, TextRules, Translation, Translations};
use crate::shared::list::SelectOption;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Город внутри страны
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub country: Option<NamedRef>,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl AggregateRoot for City {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a103"
    }

    fn collection_name() -> &'static str {
        "cities"
    }

    fn element_name() -> &'static str {
        "city"
    }

    fn list_name() -> &'static str {
        "cities"
    }

    fn parent_filter() -> Option<&'static str> {
        Some("country_id")
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CityForm {
    pub id: Option<i64>,
    pub title: Translations,
    pub active: bool,
    pub region: Option<SelectOption>,
    pub country: Option<SelectOption>,
}

impl Default for CityForm {
    fn default() -> Self {
        Self {
            id: None,
            title: Translations::new(),
            active: true,
            region: None,
            country: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPayload {
    pub region_id: Option<i64>,
    pub country_id: Option<i64>,
    pub active: bool,
    pub title: Translations,
}

impl CityForm {
    pub fn from_entity(city: &City, languages: &LanguageSet) -> Self {
        Self {
            id: Some(city.id),
            title: Translations::from_translations(&city.translations, languages, TextField::Title),
            active: city.active,
            region: ref_option(city.region.as_ref()),
            country: ref_option(city.country.as_ref()),
        }
    }

    /// Selecting (or clearing) a region invalidates the country
    pub fn select_region(&mut self, region: Option<SelectOption>) {
        self.region = region;
        self.country = None;
    }

    pub fn select_country(&mut self, country: Option<SelectOption>) {
        self.country = country;
    }

    /// Country options are fetched for the selected region only
    pub fn country_filter(&self) -> Option<(&'static str, String)> {
        self.region
            .as_ref()
            .map(|r| ("region_id", r.value.to_string()))
    }

    pub fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.title
            .validate("title", languages, TextRules::default(), &mut errors);
        if self.region.is_none() {
            errors.add("region_id", "required");
        }
        if self.country.is_none() {
            errors.add("country_id", "required");
        }
        errors.into_result()
    }

    pub fn to_payload(&self) -> CityPayload {
        CityPayload {
            region_id: self.region.as_ref().map(|r| r.value),
            country_id: self.country.as_ref().map(|c| c.value),
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
    fn test_region_change_clears_country() {
        let mut form = CityForm {
            region: Some(SelectOption::new("Asia", 1)),
            country: Some(SelectOption::new("Uzbekistan", 5)),
            ..CityForm::default()
        };
        form.select_region(Some(SelectOption::new("Europe", 2)));
        assert_eq!(form.country, None);
        assert_eq!(form.country_filter(), Some(("region_id", "2".to_string())));

        form.select_region(None);
        assert_eq!(form.country_filter(), None);
    }

    #[test]
    fn test_payload() {
        let mut form = CityForm::default();
        form.select_region(Some(SelectOption::new("Asia", 1)));
        form.select_country(Some(SelectOption::new("Uzbekistan", 5)));
        form.title.set(Locale::new("en"), "Tashkent");
        assert!(form.validate(&LanguageSet::single("en")).is_ok());
        assert_eq!(
            serde_json::to_value(form.to_payload()).unwrap(),
            json!({
                "region_id": 1,
                "country_id": 5,
                "active": true,
                "title": {"en": "Tashkent"}
            })
        );
    }
}
