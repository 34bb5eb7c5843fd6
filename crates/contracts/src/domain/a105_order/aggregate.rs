use crate::domain::a107_product::aggregate::Stock;
use crate::domain::common::AggregateRoot;
use crate::shared::format::{format_datetime, hide_email, hide_phone, number_to_price};
use crate::shared::i18n::{Locale, Translation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Status
// ============================================================================

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    New,
    Accepted,
    Cooking,
    Ready,
    OnAWay,
    Delivered,
    Canceled,
    Pause,
    /// Status added on the backend that this panel does not know
    Unknown,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::New
    }
}

impl OrderStatus {
    /// Wire name, also the i18n key
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::OnAWay => "on_a_way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Pause => "pause",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "new" => OrderStatus::New,
            "accepted" => OrderStatus::Accepted,
            "cooking" => OrderStatus::Cooking,
            "ready" => OrderStatus::Ready,
            "on_a_way" => OrderStatus::OnAWay,
            "delivered" => OrderStatus::Delivered,
            "canceled" => OrderStatus::Canceled,
            "pause" => OrderStatus::Pause,
            _ => OrderStatus::Unknown,
        }
    }

    /// Badge color of the status tag
    pub fn tag_color(&self) -> &'static str {
        match self {
            OrderStatus::New => "blue",
            OrderStatus::Canceled => "error",
            _ => "cyan",
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::parse(&raw))
    }
}

/// Row of the `order-statuses` list: ordering of the status steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: Option<bool>,
}

// ============================================================================
// Nested data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub orders_count: Option<i64>,
    #[serde(default)]
    pub orders_sum_price: Option<f64>,
}

impl OrderUser {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or_default(),
            self.lastname.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// Phone for display; masked in demo mode
    pub fn display_phone(&self, is_demo: bool) -> String {
        match self.phone.as_deref().filter(|p| !p.is_empty()) {
            Some(phone) if is_demo => hide_phone(phone),
            Some(phone) => phone.to_string(),
            None => "no.phone".to_string(),
        }
    }

    pub fn display_email(&self, is_demo: bool) -> String {
        match self.email.as_deref() {
            Some(email) if is_demo => hide_email(email),
            Some(email) => email.to_string(),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderShop {
    pub id: i64,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo_img: Option<String>,
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentSystem {
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_system: Option<PaymentSystem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderAddress {
    #[serde(default)]
    pub street_house_number: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryPoint {
    #[serde(default)]
    pub address: BTreeMap<Locale, String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub stock: Option<Stock>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub origin_price: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    /// Stock the seller substituted for an unavailable one
    #[serde(default)]
    pub replace_stock: Option<Stock>,
    #[serde(default)]
    pub replace_quantity: Option<i64>,
}

/// `Group: value` tags of a stock's extras
pub fn extra_tags(stock: &Stock) -> Vec<String> {
    stock
        .extras
        .iter()
        .map(|e| {
            format!(
                "{}: {}",
                e.group.as_ref().and_then(|g| g.title()).unwrap_or_default(),
                e.value
                    .as_ref()
                    .and_then(|v| v.value.as_deref())
                    .unwrap_or_default()
            )
        })
        .collect()
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub status: OrderStatus,
    /// `2` marks a parcel order that can be tracked
    #[serde(default, rename = "type")]
    pub kind: Option<i64>,
    #[serde(default)]
    pub delivery_type: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub shop: Option<OrderShop>,
    #[serde(default)]
    pub transaction: Option<Transaction>,
    #[serde(default)]
    pub address: Option<OrderAddress>,
    #[serde(default)]
    pub my_address: Option<OrderAddress>,
    #[serde(default)]
    pub delivery_point: Option<DeliveryPoint>,
    #[serde(default)]
    pub review: Option<Review>,

    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub origin_price: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub delivery_fee: Option<f64>,
    #[serde(default)]
    pub total_discount: Option<f64>,
    #[serde(default)]
    pub service_fee: Option<f64>,
    #[serde(default)]
    pub coupon_price: Option<f64>,

    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub track_id: Option<String>,
    #[serde(default)]
    pub track_url: Option<String>,

    #[serde(default)]
    pub details: Vec<OrderDetail>,
}

impl AggregateRoot for Order {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        format!("#{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a105"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "order"
    }

    fn list_name() -> &'static str {
        "orders"
    }

    fn scope() -> crate::domain::common::ApiScope {
        crate::domain::common::ApiScope::Seller
    }
}

/// What the delivery-address card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressDisplay {
    Street { street: String, zipcode: String },
    DeliveryPoint(String),
    Digital,
    Missing,
}

/// Totals block at the bottom of the order page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTotals {
    pub delivery_fee: String,
    pub tax: String,
    pub products: String,
    pub discount: String,
    pub service_fee: String,
    pub coupon: String,
    pub total: String,
}

/// Invoice / delivery receipt row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDocument {
    pub document: &'static str,
    pub number: String,
    pub date: String,
    pub price: String,
}

impl Order {
    /// Sum of line quantities
    pub fn products_count(&self) -> i64 {
        self.details.iter().map(|d| d.quantity).sum()
    }

    /// Address, then saved address, then pickup point, then digital
    pub fn address_display(&self, default_lang: &Locale) -> AddressDisplay {
        let not_given = || "not.given".to_string();
        if let Some(a) = &self.address {
            return AddressDisplay::Street {
                street: a.street_house_number.clone().unwrap_or_else(not_given),
                zipcode: a
                    .zipcode
                    .clone()
                    .or_else(|| a.zip_code.clone())
                    .unwrap_or_else(not_given),
            };
        }
        if let Some(a) = &self.my_address {
            return AddressDisplay::Street {
                street: a.street_house_number.clone().unwrap_or_else(not_given),
                zipcode: a.zipcode.clone().unwrap_or_else(not_given),
            };
        }
        if let Some(point) = &self.delivery_point {
            return AddressDisplay::DeliveryPoint(
                point
                    .address
                    .get(default_lang)
                    .cloned()
                    .unwrap_or_else(|| "no.address".to_string()),
            );
        }
        if self.delivery_type.as_deref() == Some("digital") {
            return AddressDisplay::Digital;
        }
        AddressDisplay::Missing
    }

    /// Index of the current status in the step bar. `None` for canceled
    /// orders (the bar is hidden) and statuses missing from the list.
    pub fn status_step(&self, statuses: &[OrderStatusItem]) -> Option<usize> {
        if self.status == OrderStatus::Canceled {
            return None;
        }
        statuses
            .iter()
            .position(|s| s.name == self.status.as_str())
    }

    /// Parcel orders delivered by courier show the tracking card
    pub fn shows_tracking(&self) -> bool {
        self.kind == Some(2) && self.delivery_type.as_deref() == Some("delivery")
    }

    pub fn tracking(&self) -> TrackingUpdate {
        TrackingUpdate {
            track_name: self.track_name.clone().unwrap_or_default(),
            track_id: self.track_id.clone().unwrap_or_default(),
            track_url: self.track_url.clone().unwrap_or_default(),
        }
    }

    pub fn totals(&self, symbol: &str) -> OrderTotals {
        OrderTotals {
            delivery_fee: number_to_price(self.delivery_fee, symbol),
            tax: number_to_price(self.tax, symbol),
            products: number_to_price(self.origin_price, symbol),
            discount: number_to_price(self.total_discount, symbol),
            service_fee: number_to_price(self.service_fee, symbol),
            coupon: number_to_price(self.coupon_price, symbol),
            total: number_to_price(self.total_price, symbol),
        }
    }

    pub fn documents(&self, symbol: &str) -> Vec<OrderDocument> {
        let date = self
            .created_at
            .as_deref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string());
        vec![
            OrderDocument {
                document: "invoice",
                number: format!("#{}", self.id),
                date: date.clone(),
                price: number_to_price(self.total_price, symbol),
            },
            OrderDocument {
                document: "delivery.receipt",
                number: format!("#{}", self.id),
                date,
                price: "-".to_string(),
            },
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of the tracking update call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackingUpdate {
    pub track_name: String,
    pub track_id: String,
    pub track_url: String,
}

impl TrackingUpdate {
    pub fn is_empty(&self) -> bool {
        self.track_name.trim().is_empty()
            && self.track_id.trim().is_empty()
            && self.track_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(value: serde_json::Value) -> Order {
        serde_json::from_value(value).unwrap()
    }

    fn statuses() -> Vec<OrderStatusItem> {
        ["new", "accepted", "ready", "on_a_way", "delivered", "canceled"]
            .iter()
            .enumerate()
            .map(|(i, name)| OrderStatusItem {
                id: i as i64 + 1,
                name: name.to_string(),
                active: Some(true),
            })
            .collect()
    }

    #[test]
    fn test_status_parsing() {
        let o = order(json!({"id": 1, "status": "on_a_way"}));
        assert_eq!(o.status, OrderStatus::OnAWay);
        let o = order(json!({"id": 1, "status": "teleported"}));
        assert_eq!(o.status, OrderStatus::Unknown);
        assert_eq!(OrderStatus::Canceled.tag_color(), "error");
    }

    #[test]
    fn test_products_count() {
        let o = order(json!({"id": 1, "details": [{"quantity": 2}, {"quantity": 3}]}));
        assert_eq!(o.products_count(), 5);
        assert_eq!(order(json!({"id": 2})).products_count(), 0);
    }

    #[test]
    fn test_address_fallbacks() {
        let en = Locale::new("en");
        let o = order(json!({"id": 1, "address": {"zip_code": "100000"}}));
        assert_eq!(
            o.address_display(&en),
            AddressDisplay::Street {
                street: "not.given".into(),
                zipcode: "100000".into()
            }
        );

        let o = order(json!({"id": 1, "delivery_point": {"address": {"en": "Main st 1"}}}));
        assert_eq!(o.address_display(&en), AddressDisplay::DeliveryPoint("Main st 1".into()));
        assert_eq!(
            o.address_display(&Locale::new("fr")),
            AddressDisplay::DeliveryPoint("no.address".into())
        );

        let o = order(json!({"id": 1, "delivery_type": "digital"}));
        assert_eq!(o.address_display(&en), AddressDisplay::Digital);
        assert_eq!(order(json!({"id": 1})).address_display(&en), AddressDisplay::Missing);
    }

    #[test]
    fn test_status_step() {
        let list = statuses();
        assert_eq!(order(json!({"id": 1, "status": "ready"})).status_step(&list), Some(2));
        assert_eq!(order(json!({"id": 1, "status": "canceled"})).status_step(&list), None);
        assert_eq!(order(json!({"id": 1, "status": "pause"})).status_step(&list), None);
    }

    #[test]
    fn test_shows_tracking() {
        assert!(order(json!({"id": 1, "type": 2, "delivery_type": "delivery"})).shows_tracking());
        assert!(!order(json!({"id": 1, "type": 1, "delivery_type": "delivery"})).shows_tracking());
        assert!(!order(json!({"id": 1, "type": 2, "delivery_type": "pickup"})).shows_tracking());
    }

    #[test]
    fn test_totals_and_documents() {
        let o = order(json!({"id": 7, "total_price": 1200.0, "tax": 10.0,
                             "created_at": "2024-03-15 14:02:26"}));
        let totals = o.totals("$");
        assert_eq!(totals.total, "$1,200.00");
        assert_eq!(totals.delivery_fee, "$0.00");
        let docs = o.documents("$");
        assert_eq!(docs[0].number, "#7");
        assert_eq!(docs[0].date, "2024-03-15 14:02");
        assert_eq!(docs[1].price, "-");
    }

    #[test]
    fn test_user_masking() {
        let user = OrderUser {
            phone: Some("+998901234567".into()),
            email: Some("john@mail.com".into()),
            ..Default::default()
        };
        assert_eq!(user.display_phone(true), "+99********67");
        assert_eq!(user.display_phone(false), "+998901234567");
        assert_eq!(user.display_email(true), "j**n@mail.com");
        assert_eq!(OrderUser::default().display_phone(false), "no.phone");
    }

    #[test]
    fn test_extra_tags() {
        let stock: Stock = serde_json::from_value(json!({
            "id": 1,
            "extras": [{"id": 1, "value": {"id": 2, "value": "XL"},
                        "group": {"translation": {"locale": "en", "title": "Size"}}}]
        }))
        .unwrap();
        assert_eq!(extra_tags(&stock), vec!["Size: XL".to_string()]);
    }
}
