use crate::shared::i18n::Translation;
use crate::shared::list::SelectOption;
use serde::{Deserialize, Serialize};

/// Nested relation as embedded in API responses: `{id, translation: {title}}`.
/// Some relations (brands) carry a plain `title` instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub title: Option<String>,
}

impl NamedRef {
    pub fn title(&self) -> String {
        self.translation
            .as_ref()
            .and_then(|t| t.title.clone())
            .or_else(|| self.title.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Pre-selected value of an infinite select in edit mode
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.title(), self.id)
    }
}

/// `Option<&NamedRef>` -> select value
pub fn ref_option(value: Option<&NamedRef>) -> Option<SelectOption> {
    value.map(NamedRef::to_option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_title_prefers_translation() {
        let r = NamedRef {
            id: 1,
            translation: Some(Translation {
                locale: Locale::new("en"),
                title: Some("Food".into()),
                ..Default::default()
            }),
            title: Some("ignored".into()),
        };
        assert_eq!(r.to_option(), SelectOption::new("Food", 1));

        let brand = NamedRef {
            id: 2,
            title: Some("Acme".into()),
            ..Default::default()
        };
        assert_eq!(brand.title(), "Acme");
        assert_eq!(NamedRef::default().title(), "-");
    }
}
