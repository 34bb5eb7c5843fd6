use contracts::domain::a105_order::aggregate::OrderStatusItem;
use contracts::domain::a108_shop::aggregate::Shop;
use contracts::shared::error::ApiResult;
use contracts::shared::i18n::Language;
use contracts::shared::list::Single;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::shared::http;

/// Row of the global settings endpoint; values come as strings or numbers
#[derive(Debug, Clone, Deserialize)]
pub struct SettingRow {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Flatten rows into `key -> raw string`; `null` values are skipped
pub fn settings_map(rows: Vec<SettingRow>) -> HashMap<String, String> {
    rows.into_iter()
        .filter_map(|row| {
            let value = match row.value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            Some((row.key, value))
        })
        .collect()
}

pub async fn fetch_languages() -> ApiResult<Vec<Language>> {
    let result: Single<Vec<Language>> =
        http::get_json("/api/v1/rest/languages/active", &BTreeMap::new()).await?;
    Ok(result.data)
}

pub async fn fetch_settings() -> ApiResult<HashMap<String, String>> {
    let result: Single<Vec<SettingRow>> =
        http::get_json("/api/v1/rest/settings", &BTreeMap::new()).await?;
    Ok(settings_map(result.data))
}

/// Shop of the signed-in seller
pub async fn fetch_my_shop() -> ApiResult<Shop> {
    let result: Single<Shop> =
        http::get_json("/api/v1/dashboard/seller/shops", &BTreeMap::new()).await?;
    Ok(result.data)
}

pub async fn fetch_order_statuses() -> ApiResult<Vec<OrderStatusItem>> {
    let result: Single<Vec<OrderStatusItem>> =
        http::get_json("/api/v1/rest/order-statuses", &BTreeMap::new()).await?;
    Ok(result.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_map() {
        let rows: Vec<SettingRow> = serde_json::from_value(json!([
            {"key": "order_refresh_timeout", "value": 15},
            {"key": "title", "value": "Dokan"},
            {"key": "empty", "value": null}
        ]))
        .unwrap();
        let map = settings_map(rows);
        assert_eq!(map.get("order_refresh_timeout").map(String::as_str), Some("15"));
        assert_eq!(map.get("title").map(String::as_str), Some("Dokan"));
        assert!(!map.contains_key("empty"));
    }
}
