//! Reshaping a loaded product into the editable clone draft.
//!
//! The draft is what the clone wizard binds to and what gets stored in the
//! opened page's menu data, so it must survive a serde round trip.

use super::aggregate::{ExtraGroup, Gallery, Product, ProductProperty, Stock};
use super::wizard::{visible_steps, WizardStep};
use crate::domain::common::named_ref::ref_option;
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{LanguageSet, TextField, TextRules, Translations};
use crate::shared::list::SelectOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One value of an extra group, remembering the first stock it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub value: i64,
    pub label: String,
    pub stock_id: i64,
}

/// Distinct values of one extra group across all stocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraGroupValues {
    pub id: i64,
    pub label: String,
    pub group: Option<ExtraGroup>,
    pub stock_id: i64,
    pub values: Vec<ExtraOption>,
}

impl ExtraGroupValues {
    pub fn is_color(&self) -> bool {
        self.group.as_ref().map_or(false, ExtraGroup::is_color)
    }
}

/// Group stock extras by `extra_group_id`, ordered by group id. Extras
/// without a group id or value id are skipped.
pub fn collect_extras(stocks: &[Stock]) -> Vec<ExtraGroupValues> {
    let mut groups: BTreeMap<i64, ExtraGroupValues> = BTreeMap::new();
    for stock in stocks {
        for extra in &stock.extras {
            let (Some(group_id), Some(value)) = (extra.extra_group_id, extra.value.as_ref()) else {
                continue;
            };
            let option = ExtraOption {
                value: value.id,
                label: value.value.clone().unwrap_or_default(),
                stock_id: stock.id,
            };
            let entry = groups.entry(group_id).or_insert_with(|| ExtraGroupValues {
                id: group_id,
                label: extra
                    .group
                    .as_ref()
                    .and_then(|g| g.title())
                    .unwrap_or_default()
                    .to_string(),
                group: extra.group.clone(),
                stock_id: stock.id,
                values: Vec::new(),
            });
            if !entry.values.iter().any(|v| v.value == option.value) {
                entry.values.push(option);
            }
        }
    }
    groups.into_values().collect()
}

/// Distinct values of the first color group
pub fn color_values(extras: &[ExtraGroupValues]) -> Vec<ExtraOption> {
    let Some(group) = extras.iter().find(|g| g.is_color()) else {
        return Vec::new();
    };
    let mut seen = Vec::new();
    for v in &group.values {
        if !seen.iter().any(|s: &ExtraOption| s.label == v.label) {
            seen.push(v.clone());
        }
    }
    seen
}

/// Upload-widget file entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub uid: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub is_video: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaSet {
    pub images: Vec<MediaFile>,
    pub previews: Vec<MediaFile>,
}

pub fn gallery_images(galleries: &[Gallery]) -> Vec<MediaFile> {
    galleries
        .iter()
        .map(|g| MediaFile {
            uid: g.id,
            name: g.path.clone(),
            url: g.path.clone(),
            is_video: false,
        })
        .collect()
}

/// Galleries with a preview are videos: the preview goes to `previews`,
/// the video path to `images`.
pub fn gallery_media(galleries: &[Gallery]) -> MediaSet {
    let with_preview = || galleries.iter().filter_map(|g| g.preview.as_ref().map(|p| (g, p)));
    MediaSet {
        previews: with_preview()
            .map(|(g, preview)| MediaFile {
                uid: g.id,
                name: preview.clone(),
                url: preview.clone(),
                is_video: false,
            })
            .collect(),
        images: with_preview()
            .map(|(g, _)| MediaFile {
                uid: g.id,
                name: g.path.clone(),
                url: g.path.clone(),
                is_video: true,
            })
            .collect(),
    }
}

/// Stock row of the stock step: extras flattened to their ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneStock {
    pub id: i64,
    pub sku: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub extra_ids: Vec<i64>,
}

impl From<&Stock> for CloneStock {
    fn from(stock: &Stock) -> Self {
        Self {
            id: stock.id,
            sku: stock.sku.clone(),
            price: stock.price.unwrap_or(0.0),
            quantity: stock.quantity.unwrap_or(0),
            extra_ids: stock.extras.iter().map(|e| e.id).collect(),
        }
    }
}

/// One row of the properties step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    pub id: usize,
    pub key: Translations,
    pub value: Translations,
}

pub fn property_rows(properties: &[ProductProperty]) -> Vec<PropertyRow> {
    properties
        .iter()
        .enumerate()
        .map(|(id, p)| {
            let mut key = Translations::new();
            let mut value = Translations::new();
            key.set(p.locale.clone(), p.key.clone().unwrap_or_default());
            value.set(p.locale.clone(), p.value.clone().unwrap_or_default());
            PropertyRow { id, key, value }
        })
        .collect()
}

/// Editable copy of a product for the clone wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneDraft {
    pub source_uuid: Uuid,
    pub title: Translations,
    pub description: Translations,
    pub shop: Option<SelectOption>,
    pub category: Option<SelectOption>,
    pub brand: Option<SelectOption>,
    pub unit: Option<SelectOption>,
    pub digital: Option<bool>,
    pub images: Vec<MediaFile>,
    pub initial_media: MediaSet,
    pub extras: Vec<ExtraGroupValues>,
    pub stocks: Vec<CloneStock>,
    pub stocks_data: Vec<Stock>,
    pub properties: Vec<PropertyRow>,
    pub min_qty: Option<i64>,
    pub max_qty: Option<i64>,
    pub tax: Option<f64>,
    pub interval: Option<f64>,
    pub age_limit: Option<i64>,
    #[serde(default)]
    pub step: usize,
}

impl CloneDraft {
    pub fn from_product(product: &Product, languages: &LanguageSet) -> Self {
        Self {
            source_uuid: product.uuid,
            title: Translations::from_translations(&product.translations, languages, TextField::Title),
            description: Translations::from_translations(
                &product.translations,
                languages,
                TextField::Description,
            ),
            shop: ref_option(product.shop.as_ref()),
            category: ref_option(product.category.as_ref()),
            brand: ref_option(product.brand.as_ref()),
            unit: ref_option(product.unit.as_ref()),
            digital: product.digital,
            images: gallery_images(&product.galleries),
            initial_media: gallery_media(&product.galleries),
            extras: collect_extras(&product.stocks),
            stocks: product.stocks.iter().map(CloneStock::from).collect(),
            stocks_data: product.stocks.clone(),
            properties: property_rows(&product.properties),
            min_qty: product.min_qty,
            max_qty: product.max_qty,
            tax: product.tax,
            interval: product.interval,
            age_limit: product.age_limit,
            step: 0,
        }
    }

    pub fn has_color(&self) -> bool {
        self.extras.iter().any(ExtraGroupValues::is_color)
    }

    pub fn steps(&self) -> Vec<WizardStep> {
        visible_steps(self.digital, self.has_color())
    }
}

/// Stock row of the clone request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPayload {
    pub sku: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub extras: Vec<i64>,
}

/// Тело запроса создания копии товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: Translations,
    pub description: Translations,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub shop_id: Option<i64>,
    pub digital: bool,
    pub images: Vec<String>,
    pub stocks: Vec<StockPayload>,
    /// `{"en": {"material": "cotton"}}`
    pub properties: BTreeMap<String, BTreeMap<String, String>>,
    pub min_qty: Option<i64>,
    pub max_qty: Option<i64>,
    pub tax: Option<f64>,
    pub interval: Option<f64>,
    pub age_limit: Option<i64>,
}

impl CloneDraft {
    pub fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.title
            .validate("title", languages, TextRules::default(), &mut errors);
        if self.category.is_none() {
            errors.add("category", "required");
        }
        if self.unit.is_none() {
            errors.add("unit", "required");
        }
        if let (Some(min), Some(max)) = (self.min_qty, self.max_qty) {
            if min > max {
                errors.add("min_qty", "min.qty.must.be.less.than.max.qty");
            }
        }
        for (index, stock) in self.stocks.iter().enumerate() {
            if stock.sku.as_deref().map_or(true, |s| s.trim().is_empty()) {
                errors.add(format!("stocks[{}].sku", index), "required");
            }
        }
        errors.into_result()
    }

    /// Property rows keyed by locale; rows without a key are skipped
    pub fn properties_by_locale(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut result: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for row in &self.properties {
            for (locale, key) in &row.key.0 {
                if key.trim().is_empty() {
                    continue;
                }
                let value = row.value.get(locale).unwrap_or_default().to_string();
                result
                    .entry(locale.to_string())
                    .or_default()
                    .insert(key.clone(), value);
            }
        }
        result
    }

    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category.as_ref().map(|o| o.value),
            brand_id: self.brand.as_ref().map(|o| o.value),
            unit_id: self.unit.as_ref().map(|o| o.value),
            shop_id: self.shop.as_ref().map(|o| o.value),
            digital: self.digital.unwrap_or(false),
            images: self.images.iter().map(|m| m.url.clone()).collect(),
            stocks: self
                .stocks
                .iter()
                .map(|s| StockPayload {
                    sku: s.sku.clone(),
                    price: s.price,
                    quantity: s.quantity,
                    extras: s.extra_ids.clone(),
                })
                .collect(),
            properties: self.properties_by_locale(),
            min_qty: self.min_qty,
            max_qty: self.max_qty,
            tax: self.tax,
            interval: self.interval,
            age_limit: self.age_limit,
        }
    }

    /// Next free row id of the properties step
    pub fn add_property_row(&mut self) {
        let id = self.properties.iter().map(|r| r.id + 1).max().unwrap_or(0);
        self.properties.push(PropertyRow {
            id,
            key: Translations::new(),
            value: Translations::new(),
        });
    }

    pub fn remove_property_row(&mut self, id: usize) {
        self.properties.retain(|r| r.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;
    use serde_json::json;

    fn sample_product() -> Product {
        serde_json::from_value(json!({
            "uuid": "3566bdf6-3a09-4488-8269-70a19f871bd0",
            "digital": false,
            "translations": [{"locale": "en", "title": "Shirt", "description": "Cotton"}],
            "shop": {"id": 1, "translation": {"locale": "en", "title": "Shop"}},
            "brand": {"id": 4, "title": "Acme"},
            "galleries": [
                {"id": 1, "path": "a.png"},
                {"id": 2, "path": "v.mp4", "preview": "v.png"}
            ],
            "stocks": [
                {"id": 10, "price": 5.0, "quantity": 3, "extras": [
                    {"id": 100, "extra_group_id": 2, "value": {"id": 21, "value": "XL"},
                     "group": {"type": "text", "translation": {"locale": "en", "title": "Size"}}},
                    {"id": 101, "extra_group_id": 1, "value": {"id": 11, "value": "#ff0000"},
                     "group": {"type": "color", "translation": {"locale": "en", "title": "Color"}}}
                ]},
                {"id": 20, "extras": [
                    {"id": 102, "extra_group_id": 2, "value": {"id": 21, "value": "XL"}},
                    {"id": 103, "extra_group_id": 1, "value": {"id": 12, "value": "#0000ff"}}
                ]}
            ],
            "properties": [{"locale": "en", "key": "material", "value": "cotton"}],
            "min_qty": 1,
            "max_qty": 10
        }))
        .unwrap()
    }

    #[test]
    fn test_collect_extras_groups_and_dedupes() {
        let extras = collect_extras(&sample_product().stocks);
        assert_eq!(extras.len(), 2);
        // ordered by group id
        assert_eq!(extras[0].id, 1);
        assert_eq!(extras[0].label, "Color");
        assert_eq!(extras[0].values.len(), 2);
        assert_eq!(extras[0].values[1].stock_id, 20);

        assert_eq!(extras[1].id, 2);
        assert_eq!(extras[1].values.len(), 1);
        assert_eq!(extras[1].values[0].stock_id, 10);
    }

    #[test]
    fn test_from_product() {
        let draft = CloneDraft::from_product(&sample_product(), &LanguageSet::single("en"));
        assert_eq!(draft.title.get(&Locale::new("en")), Some("Shirt"));
        assert_eq!(draft.description.get(&Locale::new("en")), Some("Cotton"));
        assert_eq!(draft.brand, Some(SelectOption::new("Acme", 4)));
        assert_eq!(draft.category, None);
        assert_eq!(draft.images.len(), 2);
        assert_eq!(draft.initial_media.previews.len(), 1);
        assert!(draft.initial_media.images[0].is_video);
        assert_eq!(draft.stocks[0].extra_ids, vec![100, 101]);
        assert_eq!(draft.stocks[1].price, 0.0);
        assert_eq!(draft.stocks[1].quantity, 0);
        assert_eq!(draft.properties[0].key.get(&Locale::new("en")), Some("material"));
        assert!(draft.has_color());
        assert!(!draft.steps().contains(&WizardStep::Digital));
        assert_eq!(color_values(&draft.extras).len(), 2);
    }

    #[test]
    fn test_draft_survives_menu_data_round_trip() {
        let draft = CloneDraft::from_product(&sample_product(), &LanguageSet::single("en"));
        let stored = serde_json::to_value(&draft).unwrap();
        let restored: CloneDraft = serde_json::from_value(stored).unwrap();
        assert_eq!(restored, draft);
    }
    #[test]
    fn test_payload_requires_sku_and_category() {
        let languages = LanguageSet::single("en");
        let draft = CloneDraft::from_product(&sample_product(), &languages);
        let errors = draft.validate(&languages).unwrap_err();
        assert_eq!(errors.first("category").as_deref(), Some("required"));
        assert_eq!(errors.first("stocks[0].sku").as_deref(), Some("required"));
    }

    #[test]
    fn test_payload_shape() {
        let mut draft = CloneDraft::from_product(&sample_product(), &LanguageSet::single("en"));
        draft.add_property_row();
        let payload = draft.to_payload();
        assert_eq!(payload.brand_id, Some(4));
        assert_eq!(payload.stocks[0].extras, vec![100, 101]);
        assert_eq!(payload.images, vec!["a.png", "v.mp4"]);
        // empty row is skipped
        assert_eq!(payload.properties["en"]["material"], "cotton");
        assert_eq!(payload.properties["en"].len(), 1);
        assert_eq!(draft.properties[1].id, 1);
        draft.remove_property_row(0);
        assert_eq!(draft.properties.len(), 1);
    }
}
