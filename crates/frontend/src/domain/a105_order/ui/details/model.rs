use contracts::domain::a105_order::aggregate::{Order, TrackingUpdate};
use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiResult;

use crate::shared::i18n::t;
use crate::shared::{http, rest};

pub async fn fetch_by_id(id: i64) -> ApiResult<Order> {
    rest::show::<Order>(&id).await
}

pub fn tracking_path(id: i64) -> String {
    format!("{}/tracking", Order::item_path(&id))
}

/// Save the parcel tracking fields of a courier order
pub async fn update_tracking(id: i64, body: &TrackingUpdate) -> ApiResult<()> {
    let _: serde_json::Value = http::put_json(&tracking_path(id), body).await?;
    Ok(())
}

/// Payment system tag of the order's transaction, `-` without one
pub fn payment_label(order: &Order) -> String {
    order
        .transaction
        .as_ref()
        .and_then(|tr| tr.payment_system.as_ref())
        .and_then(|p| p.tag.as_deref())
        .map(t)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_path() {
        assert_eq!(tracking_path(12), "/api/v1/dashboard/seller/orders/12/tracking");
    }

    #[test]
    fn test_payment_label() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 3,
            "transaction": {"payment_system": {"tag": "cash"}}
        }))
        .unwrap();
        assert_eq!(payment_label(&order), "cash");
        assert_eq!(payment_label(&Order::default()), "-");
    }
}
