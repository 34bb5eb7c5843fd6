use crate::domain::common::named_ref::ref_option;
use crate::domain::common::{AggregateRoot, NamedRef};
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{title_or_dash, LanguageSet, TextField, TextRules, Translation, Translations};
use crate::shared::list::SelectOption;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Район доставки внутри города
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub region: Option<NamedRef>,
    #[serde(default)]
    pub country: Option<NamedRef>,
    #[serde(default)]
    pub city: Option<NamedRef>,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl AggregateRoot for Area {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a104"
    }

    fn collection_name() -> &'static str {
        "areas"
    }

    fn element_name() -> &'static str {
        "area"
    }

    fn list_name() -> &'static str {
        "areas"
    }

    fn parent_filter() -> Option<&'static str> {
        Some("city_id")
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма района: каскад region -> country -> city
#[derive(Debug, Clone, PartialEq)]
pub struct AreaForm {
    pub id: Option<i64>,
    pub title: Translations,
    pub active: bool,
    pub region: Option<SelectOption>,
    pub country: Option<SelectOption>,
    pub city: Option<SelectOption>,
}

impl Default for AreaForm {
    fn default() -> Self {
        Self {
            id: None,
            title: Translations::new(),
            active: true,
            region: None,
            country: None,
            city: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaPayload {
    pub country_id: Option<i64>,
    pub region_id: Option<i64>,
    pub city_id: Option<i64>,
    pub active: bool,
    pub title: Translations,
}

impl AreaForm {
    pub fn from_entity(area: &Area, languages: &LanguageSet) -> Self {
        Self {
            id: Some(area.id),
            title: Translations::from_translations(&area.translations, languages, TextField::Title),
            active: area.active,
            region: ref_option(area.region.as_ref()),
            country: ref_option(area.country.as_ref()),
            city: ref_option(area.city.as_ref()),
        }
    }

    /// Clears country and city
    pub fn select_region(&mut self, region: Option<SelectOption>) {
        self.region = region;
        self.country = None;
        self.city = None;
    }

    /// Clears city only
    pub fn select_country(&mut self, country: Option<SelectOption>) {
        self.country = country;
        self.city = None;
    }

    pub fn select_city(&mut self, city: Option<SelectOption>) {
        self.city = city;
    }

    /// Country select stays disabled until a region is chosen
    pub fn country_enabled(&self) -> bool {
        self.region.is_some()
    }

    pub fn city_enabled(&self) -> bool {
        self.country.is_some()
    }

    pub fn country_filter(&self) -> Option<(&'static str, String)> {
        self.region
            .as_ref()
            .map(|r| ("region_id", r.value.to_string()))
    }

    pub fn city_filter(&self) -> Option<(&'static str, String)> {
        self.country
            .as_ref()
            .map(|c| ("country_id", c.value.to_string()))
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
        if self.city.is_none() {
            errors.add("city_id", "required");
        }
        errors.into_result()
    }

    pub fn to_payload(&self) -> AreaPayload {
        AreaPayload {
            country_id: self.country.as_ref().map(|c| c.value),
            region_id: self.region.as_ref().map(|r| r.value),
            city_id: self.city.as_ref().map(|c| c.value),
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

    fn filled() -> AreaForm {
        AreaForm {
            region: Some(SelectOption::new("Asia", 1)),
            country: Some(SelectOption::new("Uzbekistan", 5)),
            city: Some(SelectOption::new("Tashkent", 12)),
            ..AreaForm::default()
        }
    }

    #[test]
    fn test_selecting_region_clears_country_and_city() {
        let mut form = filled();
        form.select_region(Some(SelectOption::new("Europe", 2)));
        assert_eq!(form.region.as_ref().map(|r| r.value), Some(2));
        assert_eq!(form.country, None);
        assert_eq!(form.city, None);
        assert!(!form.city_enabled());
    }

    #[test]
    fn test_selecting_country_clears_city_only() {
        let mut form = filled();
        form.select_country(Some(SelectOption::new("Kazakhstan", 6)));
        assert_eq!(form.region.as_ref().map(|r| r.value), Some(1));
        assert_eq!(form.country.as_ref().map(|c| c.value), Some(6));
        assert_eq!(form.city, None);
        assert_eq!(form.city_filter(), Some(("country_id", "6".to_string())));
    }

    #[test]
    fn test_clearing_region_disables_children() {
        let mut form = filled();
        form.select_region(None);
        assert!(!form.country_enabled());
        assert_eq!(form.country_filter(), None);
    }

    #[test]
    fn test_validate_and_payload() {
        let languages = LanguageSet::single("en");
        let errors = AreaForm::default().validate(&languages).unwrap_err();
        assert_eq!(errors.first("city_id").as_deref(), Some("required"));

        let mut form = filled();
        form.title.set(Locale::new("en"), "Chilanzar");
        assert!(form.validate(&languages).is_ok());
        assert_eq!(
            serde_json::to_value(form.to_payload()).unwrap(),
            json!({
                "country_id": 5,
                "region_id": 1,
                "city_id": 12,
                "active": true,
                "title": {"en": "Chilanzar"}
            })
        );
    }

    #[test]
    fn test_from_entity_missing_relations() {
        let area: Area = serde_json::from_value(json!({"id": 1, "translations": []})).unwrap();
        let form = AreaForm::from_entity(&area, &LanguageSet::single("en"));
        assert_eq!(form.region, None);
        assert!(form.title.is_empty());
        assert_eq!(area.display_title(), "-");
    }
}
