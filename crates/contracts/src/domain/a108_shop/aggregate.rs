use crate::domain::common::AggregateRoot;
use crate::shared::i18n::{title_or_dash, Translation};
use serde::{Deserialize, Serialize};

/// Магазин продавца
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    /// `shop` or `restaurant`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo_img: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
}

impl AggregateRoot for Shop {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a108"
    }

    fn collection_name() -> &'static str {
        "shops"
    }

    fn element_name() -> &'static str {
        "shop"
    }

    fn list_name() -> &'static str {
        "shops"
    }
}
