use crate::domain::common::{AggregateRoot, NamedRef};
use crate::shared::i18n::{title_or_dash, Locale, Translation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Stocks and extras
// ============================================================================

/// Группа экстра-характеристик (цвет, размер, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtraGroup {
    #[serde(default)]
    pub id: Option<i64>,
    /// `color`, `text`, `image`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
}

impl ExtraGroup {
    pub fn is_color(&self) -> bool {
        self.kind.as_deref() == Some("color")
    }

    pub fn title(&self) -> Option<&str> {
        self.translation
            .as_ref()
            .and_then(|t| t.title.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtraValue {
    pub id: i64,
    /// Text value, or a `#rrggbb` hex for color groups
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub group_type: Option<String>,
}

/// Экстра, привязанная к конкретному стоку
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockExtra {
    pub id: i64,
    #[serde(default)]
    pub extra_group_id: Option<i64>,
    #[serde(default)]
    pub value: Option<ExtraValue>,
    #[serde(default)]
    pub group: Option<ExtraGroup>,
}

/// Product embedded in a stock (`stock.product`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockProduct {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
}

/// Сток (вариант товара) со своей ценой и остатком
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub product: Option<StockProduct>,
    #[serde(default)]
    pub extras: Vec<StockExtra>,
}

impl Stock {
    pub fn product_title(&self) -> String {
        title_or_dash(self.product.as_ref().and_then(|p| p.translation.as_ref()))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gallery {
    pub id: i64,
    #[serde(default)]
    pub path: String,
    /// Video galleries carry a preview image
    #[serde(default)]
    pub preview: Option<String>,
}

/// One localized property row: `{locale, key, value}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductProperty {
    pub locale: Locale,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Товар
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub uuid: Uuid,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub digital: Option<bool>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub shop: Option<NamedRef>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub brand: Option<NamedRef>,
    #[serde(default)]
    pub unit: Option<NamedRef>,
    #[serde(default)]
    pub galleries: Vec<Gallery>,
    #[serde(default)]
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub properties: Vec<ProductProperty>,
    #[serde(default)]
    pub min_qty: Option<i64>,
    #[serde(default)]
    pub max_qty: Option<i64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub interval: Option<f64>,
    #[serde(default)]
    pub age_limit: Option<i64>,
}

impl AggregateRoot for Product {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.uuid
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a107"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "products"
    }
}

/// Product of the public catalog, as listed by the POS screen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestProduct {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub stocks: Vec<Stock>,
}

impl AggregateRoot for RestProduct {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a107"
    }

    fn collection_name() -> &'static str {
        "products/paginate"
    }

    fn element_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "products"
    }

    fn scope() -> crate::domain::common::ApiScope {
        crate::domain::common::ApiScope::Rest
    }
}

/// Seller-side stock search used by the discount editor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SellerStock(pub Stock);

impl AggregateRoot for SellerStock {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.0.id
    }

    fn display_title(&self) -> String {
        self.0.product_title()
    }

    fn aggregate_index() -> &'static str {
        "a107"
    }

    fn collection_name() -> &'static str {
        "stocks"
    }

    fn element_name() -> &'static str {
        "stock"
    }

    fn list_name() -> &'static str {
        "stocks"
    }

    fn scope() -> crate::domain::common::ApiScope {
        crate::domain::common::ApiScope::Seller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_row_defaults() {
        let row = ProductProperty::default();
        assert_eq!(row.locale, Locale::default());
        assert!(row.key.is_none() && row.value.is_none());
    }

    #[test]
    fn test_deserialize_stock_with_extras() {
        let stock: Stock = serde_json::from_value(json!({
            "id": 11,
            "price": 20.5,
            "extras": [{
                "id": 3,
                "extra_group_id": 1,
                "value": {"id": 7, "value": "#ff0000"},
                "group": {"type": "color", "translation": {"locale": "en", "title": "Color"}}
            }]
        }))
        .unwrap();
        assert_eq!(stock.extras.len(), 1);
        assert!(stock.extras[0].group.as_ref().unwrap().is_color());
        assert_eq!(stock.product_title(), "-");
    }

    #[test]
    fn test_paths() {
        assert_eq!(RestProduct::collection_path(), "/api/v1/rest/products/paginate");
        assert_eq!(SellerStock::collection_path(), "/api/v1/dashboard/seller/stocks");
    }
}
