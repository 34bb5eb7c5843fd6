use super::color_name::color_name;
use crate::domain::a107_product::aggregate::{Stock, StockExtra};
use crate::domain::common::{AggregateRoot, ApiScope};
use crate::shared::error::ValidationErrors;
use crate::shared::list::{ListParams, SelectOption};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Fix,
    Percent,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Fix => "fix",
            DiscountType::Percent => "percent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fix" => Some(DiscountType::Fix),
            "percent" => Some(DiscountType::Percent),
            _ => None,
        }
    }
}

/// Скидка продавца на набор стоков
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    #[serde(default, rename = "type")]
    pub kind: Option<DiscountType>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stocks: Vec<Stock>,
}

impl AggregateRoot for Discount {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        format!("#{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a106"
    }

    fn collection_name() -> &'static str {
        "discounts"
    }

    fn element_name() -> &'static str {
        "discount"
    }

    fn list_name() -> &'static str {
        "discounts"
    }

    fn scope() -> ApiScope {
        ApiScope::Seller
    }
}

// ============================================================================
// Stock labels
// ============================================================================

fn extra_label(extra: &StockExtra) -> String {
    let group = extra
        .group
        .as_ref()
        .and_then(|g| g.title())
        .unwrap_or("N/A");
    let raw = extra
        .value
        .as_ref()
        .and_then(|v| v.value.as_deref())
        .filter(|v| !v.is_empty());
    let value = match (extra.group.as_ref().map_or(false, |g| g.is_color()), raw) {
        (true, Some(hex)) => color_name(hex),
        (_, Some(v)) => v.to_string(),
        (_, None) => "N/A".to_string(),
    };
    format!("{}: {}", group, value)
}

/// `Shirt => Color: Red, Size: XL`
pub fn stock_label(stock: &Stock) -> String {
    let extras: Vec<String> = stock.extras.iter().map(extra_label).collect();
    format!("{} => {}", stock.product_title(), extras.join(", "))
}

pub fn stock_option(stock: &Stock) -> SelectOption {
    SelectOption::new(stock_label(stock), stock.id)
}

/// Query of the seller stock search: published, active stocks of one shop
pub fn stock_search_params(search: Option<String>, shop_id: i64) -> ListParams {
    let mut params = ListParams::default();
    params.search = search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    for (key, value) in [
        ("shop_id", shop_id.to_string()),
        ("status", "published".to_string()),
        ("active", "1".to_string()),
        ("rest", "1".to_string()),
    ] {
        params.filters.insert(key.to_string(), value);
    }
    params
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscountForm {
    /// `None` for a new discount
    pub id: Option<i64>,
    pub kind: Option<DiscountType>,
    pub price: Option<f64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub products: Vec<SelectOption>,
    /// Uploaded image URL
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountPayload {
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: DiscountType,
    pub stocks: Vec<i64>,
    pub start: String,
    pub end: String,
    pub images: Vec<String>,
}

/// `YYYY-MM-DD`, also accepting a trailing time part
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Date pickers reject days before today
pub fn is_selectable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

impl DiscountForm {
    pub fn from_entity(discount: &Discount) -> Self {
        Self {
            id: Some(discount.id),
            kind: discount.kind,
            price: discount.price,
            start: discount.start.as_deref().and_then(parse_date),
            end: discount.end.as_deref().and_then(parse_date),
            products: discount.stocks.iter().map(stock_option).collect(),
            image: discount.img.clone().filter(|s| !s.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.kind.is_none() {
            errors.add("type", "required");
        }
        match self.price {
            None => errors.add("price", "required"),
            Some(p) if !p.is_finite() || p < 0.0 => errors.add("price", "must.be.positive"),
            _ => {}
        }
        if self.start.is_none() {
            errors.add("start", "required");
        }
        if self.end.is_none() {
            errors.add("end", "required");
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                errors.add("start", "start.date.must.be.before.end.date");
            }
        }
        if self.products.is_empty() {
            errors.add("products", "required");
        }
        if self.image.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.add("images", "required");
        }
        errors.into_result()
    }

    /// Validated request body
    pub fn to_payload(&self) -> Result<DiscountPayload, ValidationErrors> {
        self.validate()?;
        let mut errors = ValidationErrors::new();
        let (Some(kind), Some(price), Some(start), Some(end)) =
            (self.kind, self.price, self.start, self.end)
        else {
            errors.add("form", "required");
            return Err(errors);
        };
        Ok(DiscountPayload {
            price,
            kind,
            stocks: self.products.iter().map(|p| p.value).collect(),
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
            images: self.image.iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stock() -> Stock {
        serde_json::from_value(json!({
            "id": 5,
            "product": {"translation": {"locale": "en", "title": "Shirt"}},
            "extras": [
                {"id": 1, "value": {"id": 1, "value": "#ff0000"},
                 "group": {"type": "color", "translation": {"locale": "en", "title": "Color"}}},
                {"id": 2, "value": {"id": 2, "value": "XL"},
                 "group": {"type": "text", "translation": {"locale": "en", "title": "Size"}}},
                {"id": 3, "value": {"id": 3, "value": ""}}
            ]
        }))
        .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_stock_label() {
        assert_eq!(stock_label(&stock()), "Shirt => Color: Red, Size: XL, N/A: N/A");
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let form = DiscountForm {
            kind: Some(DiscountType::Fix),
            price: Some(10.0),
            start: Some(date("2024-05-10")),
            end: Some(date("2024-05-01")),
            products: vec![SelectOption::new("x", 1)],
            image: Some("a.png".into()),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first("start").as_deref(),
            Some("start.date.must.be.before.end.date")
        );
    }

    #[test]
    fn test_payload() {
        let discount: Discount = serde_json::from_value(json!({
            "id": 3,
            "type": "percent",
            "price": 15.0,
            "start": "2024-05-01",
            "end": "2024-05-31 00:00:00",
            "img": "d.png",
            "stocks": [{"id": 5}, {"id": 6}]
        }))
        .unwrap();
        let form = DiscountForm::from_entity(&discount);
        assert_eq!(form.id, Some(3));
        let payload = form.to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({
                "price": 15.0,
                "type": "percent",
                "stocks": [5, 6],
                "start": "2024-05-01",
                "end": "2024-05-31",
                "images": ["d.png"]
            })
        );
    }

    #[test]
    fn test_stock_search_params() {
        let params = stock_search_params(Some(" shi ".into()), 501);
        let pairs = params.to_pairs();
        assert_eq!(pairs.get("shop_id").map(String::as_str), Some("501"));
        assert_eq!(pairs.get("status").map(String::as_str), Some("published"));
        assert_eq!(pairs.get("active").map(String::as_str), Some("1"));
        assert_eq!(pairs.get("rest").map(String::as_str), Some("1"));
        assert_eq!(pairs.get("search").map(String::as_str), Some("shi"));
    }

    #[test]
    fn test_selectable_dates() {
        let today = date("2024-05-10");
        assert!(is_selectable_date(today, today));
        assert!(!is_selectable_date(date("2024-05-09"), today));
    }
}
