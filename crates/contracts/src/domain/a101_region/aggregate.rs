use crate::domain::common::AggregateRoot;
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{title_or_dash, LanguageSet, TextField, TextRules, Translation, Translations};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Регион доставки (верхний уровень зоны доставки)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl AggregateRoot for Region {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a101"
    }

    fn collection_name() -> &'static str {
        "regions"
    }

    fn element_name() -> &'static str {
        "region"
    }

    fn list_name() -> &'static str {
        "regions"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Состояние формы региона
#[derive(Debug, Clone, PartialEq)]
pub struct RegionForm {
    pub id: Option<i64>,
    pub title: Translations,
    pub active: bool,
}

impl Default for RegionForm {
    fn default() -> Self {
        Self {
            id: None,
            title: Translations::new(),
            active: true,
        }
    }
}

/// Тело запроса create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPayload {
    pub title: Translations,
    pub active: bool,
}

impl RegionForm {
    pub fn from_entity(region: &Region, languages: &LanguageSet) -> Self {
        Self {
            id: Some(region.id),
            title: Translations::from_translations(&region.translations, languages, TextField::Title),
            active: region.active,
        }
    }

    pub fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.title
            .validate("title", languages, TextRules::default(), &mut errors);
        errors.into_result()
    }

    pub fn to_payload(&self) -> RegionPayload {
        RegionPayload {
            title: self.title.clone(),
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;
    use serde_json::json;

    #[test]
    fn test_create_payload_shape() {
        let languages = LanguageSet::single("en");
        let mut form = RegionForm::default();
        form.title.set(Locale::new("en"), "North");

        assert!(form.validate(&languages).is_ok());
        assert_eq!(
            serde_json::to_value(form.to_payload()).unwrap(),
            json!({"title": {"en": "North"}, "active": true})
        );
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let languages = LanguageSet::single("en");
        let errors = RegionForm::default().validate(&languages).unwrap_err();
        assert_eq!(errors.first("title[en]").as_deref(), Some("required"));
    }

    #[test]
    fn test_from_entity() {
        let region: Region = serde_json::from_value(json!({
            "id": 3,
            "active": false,
            "translation": {"locale": "en", "title": "South"},
            "translations": [{"locale": "en", "title": "South"}]
        }))
        .unwrap();
        let form = RegionForm::from_entity(&region, &LanguageSet::single("en"));
        assert_eq!(form.id, Some(3));
        assert!(!form.active);
        assert_eq!(form.title.get(&Locale::new("en")), Some("South"));
        assert_eq!(region.display_title(), "South");
        assert_eq!(Region::collection_path(), "/api/v1/dashboard/admin/regions");
        assert_eq!(Region::item_path(&3), "/api/v1/dashboard/admin/regions/3");
    }
}
