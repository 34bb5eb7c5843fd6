//! URL query state (`?active=a101_regions&search=nor&page=2`).
//!
//! The active tab owns the query string; lists persist their params here so a
//! reload restores them.

use std::collections::BTreeMap;
use web_sys::window;

/// Current `location.search` as flat pairs
pub fn read_query() -> BTreeMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn build_query(params: &BTreeMap<String, String>) -> String {
    let query = serde_qs::to_string(params).unwrap_or_default();
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}

/// `history.replaceState` without a navigation; no-op when nothing changed
pub fn replace_query(params: &BTreeMap<String, String>) {
    let Some(w) = window() else {
        return;
    };
    let new_search = build_query(params);
    let current = w.location().search().unwrap_or_default();
    if current == new_search {
        return;
    }
    let pathname = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", pathname, new_search)),
        );
    }
}

/// Query of the active tab: its id plus the given list pairs
pub fn with_active(active: &str, pairs: BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut params = pairs;
    params.insert("active".to_string(), active.to_string());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let params = parse_query("?active=a103_cities&country_id=7&search=tash");
        assert_eq!(params.get("active").map(String::as_str), Some("a103_cities"));
        assert_eq!(params.get("country_id").map(String::as_str), Some("7"));

        let built = build_query(&params);
        assert_eq!(parse_query(&built), params);
        assert_eq!(build_query(&BTreeMap::new()), "");
    }

    #[test]
    fn test_with_active() {
        let mut pairs = BTreeMap::new();
        pairs.insert("page".to_string(), "2".to_string());
        let params = with_active("a101_regions", pairs);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("active").map(String::as_str), Some("a101_regions"));
    }
}
