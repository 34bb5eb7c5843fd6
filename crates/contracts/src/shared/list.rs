//! Server-paginated lists: response envelopes, query parameters and the
//! per-resource list slice.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pagination block of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default = "one")]
    pub current_page: u32,
    #[serde(default = "one")]
    pub last_page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn one() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for ListMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: default_per_page(),
            total: 0,
        }
    }
}

impl ListMeta {
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// `{data: [...], meta: {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: ListMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

/// `{data: {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    pub data: T,
}

/// Query of a list request. Filters are free-form (`region_id`,
/// `country_id`, `shop_id`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: default_per_page(),
            search: None,
            filters: BTreeMap::new(),
        }
    }
}

/// A single user-driven change of list parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamChange {
    Search(Option<String>),
    Filter(String, Option<String>),
    Page { page: u32, per_page: u32 },
}

impl ListParams {
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    /// Apply a change. Returns the new params when a fetch is required,
    /// `None` when nothing changed. Search and filter changes go back to
    /// page 1.
    pub fn apply(&self, change: ParamChange) -> Option<ListParams> {
        let mut next = self.clone();
        match change {
            ParamChange::Search(search) => {
                next.search = normalize(search);
                next.page = 1;
            }
            ParamChange::Filter(key, value) => {
                match normalize(value) {
                    Some(v) => {
                        next.filters.insert(key, v);
                    }
                    None => {
                        next.filters.remove(&key);
                    }
                }
                next.page = 1;
            }
            ParamChange::Page { page, per_page } => {
                next.page = page.max(1);
                next.per_page = per_page.max(1);
            }
        }
        (next != *self).then_some(next)
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(|s| s.as_str())
    }

    /// Flat key/value pairs as sent to the API (`perPage` spelling kept)
    pub fn to_pairs(&self) -> BTreeMap<String, String> {
        let mut pairs = self.filters.clone();
        pairs.insert("page".into(), self.page.to_string());
        pairs.insert("perPage".into(), self.per_page.to_string());
        if let Some(search) = &self.search {
            pairs.insert("search".into(), search.clone());
        }
        pairs
    }

    pub fn to_query(&self) -> String {
        serde_qs::to_string(&self.to_pairs()).unwrap_or_default()
    }

    /// Inverse of [`ListParams::to_pairs`]. Only keys in `filter_keys` are
    /// taken as filters; broken page numbers fall back to the defaults.
    pub fn from_pairs(pairs: &BTreeMap<String, String>, filter_keys: &[&str], per_page: u32) -> Self {
        let number = |key: &str, default: u32| {
            pairs
                .get(key)
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };
        let filters = filter_keys
            .iter()
            .filter_map(|key| {
                let value = normalize(pairs.get(*key).cloned())?;
                Some((key.to_string(), value))
            })
            .collect();
        Self {
            page: number("page", 1),
            per_page: number("perPage", per_page),
            search: normalize(pairs.get("search").cloned()),
            filters,
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `{list, meta, loading, params}` container of one resource.
///
/// Each fetch gets a sequence number; a response carrying an older number
/// than the last started fetch is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSlice<T> {
    pub list: Vec<T>,
    pub meta: ListMeta,
    pub loading: bool,
    pub params: ListParams,
    pub error: Option<String>,
    request_seq: u64,
}

impl<T> Default for ListSlice<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            meta: ListMeta::default(),
            loading: false,
            params: ListParams::default(),
            error: None,
            request_seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    FetchStarted(ListParams),
    FetchSucceeded { seq: u64, page: Paginated<T> },
    FetchFailed { seq: u64, message: String },
    /// Replace one row in place (e.g. after a status toggle)
    RowUpdated { index: usize, row: T },
    Clear,
}

impl<T> ListSlice<T> {
    pub fn with_params(params: ListParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Sequence number of the last started fetch
    pub fn current_seq(&self) -> u64 {
        self.request_seq
    }

    pub fn reduce(&mut self, action: ListAction<T>) {
        match action {
            ListAction::FetchStarted(params) => {
                self.request_seq += 1;
                self.params = params;
                self.loading = true;
                self.error = None;
            }
            ListAction::FetchSucceeded { seq, page } => {
                if seq != self.request_seq {
                    return;
                }
                self.list = page.data;
                self.meta = page.meta;
                self.loading = false;
            }
            ListAction::FetchFailed { seq, message } => {
                if seq != self.request_seq {
                    return;
                }
                self.loading = false;
                self.error = Some(message);
            }
            ListAction::RowUpdated { index, row } => {
                if let Some(slot) = self.list.get_mut(index) {
                    *slot = row;
                }
            }
            ListAction::Clear => {
                let params = std::mem::take(&mut self.params);
                let seq = self.request_seq;
                *self = Self::default();
                self.params = ListParams {
                    per_page: params.per_page,
                    ..ListParams::default()
                };
                self.request_seq = seq;
            }
        }
    }
}

/// Row id with a pending action (toggle or delete)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowBusy(Option<i64>);

impl RowBusy {
    pub fn begin(&mut self, id: i64) {
        self.0 = Some(id);
    }

    pub fn finish(&mut self) {
        self.0 = None;
    }

    pub fn is_busy(&self, id: i64) -> bool {
        self.0 == Some(id)
    }

    pub fn current(&self) -> Option<i64> {
        self.0
    }
}

/// `{label, value}` option of a select widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: i64,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Options of an infinite-scroll select
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfiniteOptions {
    pub options: Vec<SelectOption>,
    pub search: Option<String>,
    pub page: u32,
    pub has_more: bool,
}

impl InfiniteOptions {
    /// New search term: restart from page 1
    pub fn restart(&mut self, search: Option<String>) -> u32 {
        self.search = normalize(search);
        self.options.clear();
        self.page = 1;
        self.has_more = false;
        self.page
    }

    /// Page to request for the next scroll, if any
    pub fn next_page(&self) -> Option<u32> {
        self.has_more.then_some(self.page + 1)
    }

    /// Merge a loaded page. Pages other than the expected one are ignored.
    pub fn receive(&mut self, page: u32, options: Vec<SelectOption>, meta: &ListMeta) {
        let expected = if self.options.is_empty() { 1 } else { self.page + 1 };
        if page != expected && page != self.page {
            return;
        }
        if page == 1 {
            self.options = options;
        } else {
            for opt in options {
                if !self.options.iter().any(|o| o.value == opt.value) {
                    self.options.push(opt);
                }
            }
        }
        self.page = page;
        self.has_more = meta.has_more();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(data: Vec<i32>, current: u32, last: u32) -> Paginated<i32> {
        Paginated {
            data,
            meta: ListMeta {
                current_page: current,
                last_page: last,
                per_page: 10,
                total: 25,
            },
        }
    }

    #[test]
    fn test_search_resets_page_and_merges() {
        let mut params = ListParams::default();
        params.filters.insert("region_id".into(), "3".into());
        params.page = 4;

        let next = params
            .apply(ParamChange::Search(Some("  nor ".into())))
            .expect("fetch required");
        assert_eq!(next.page, 1);
        assert_eq!(next.search.as_deref(), Some("nor"));
        assert_eq!(next.filter("region_id"), Some("3"));
    }

    #[test]
    fn test_filter_change_resets_page() {
        let params = ListParams {
            page: 3,
            ..ListParams::default()
        };
        let next = params
            .apply(ParamChange::Filter("country_id".into(), Some("7".into())))
            .unwrap();
        assert_eq!(next.page, 1);
        assert_eq!(next.filter("country_id"), Some("7"));

        let cleared = next
            .apply(ParamChange::Filter("country_id".into(), None))
            .unwrap();
        assert_eq!(cleared.filter("country_id"), None);
    }

    #[test]
    fn test_unchanged_params_need_no_fetch() {
        let params = ListParams::default();
        assert!(params.apply(ParamChange::Search(Some("".into()))).is_none());
        assert!(params
            .apply(ParamChange::Page { page: 1, per_page: 10 })
            .is_none());
    }

    #[test]
    fn test_to_query() {
        let mut params = ListParams::default();
        params.search = Some("a b".into());
        params.filters.insert("city_id".into(), "5".into());
        let q = params.to_query();
        assert!(q.contains("city_id=5"));
        assert!(q.contains("perPage=10"));
        assert!(q.contains("page=1"));
        assert!(q.contains("search=a"));
    }

    #[test]
    fn test_from_pairs() {
        let mut pairs = BTreeMap::new();
        pairs.insert("page".to_string(), "3".to_string());
        pairs.insert("perPage".to_string(), "abc".to_string());
        pairs.insert("search".to_string(), " tash ".to_string());
        pairs.insert("country_id".to_string(), "7".to_string());
        pairs.insert("active".to_string(), "tab".to_string());

        let params = ListParams::from_pairs(&pairs, &["country_id"], 20);
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 20);
        assert_eq!(params.search.as_deref(), Some("tash"));
        assert_eq!(params.filter("country_id"), Some("7"));
        assert_eq!(params.filter("active"), None);
    }

    #[test]
    fn test_slice_fetch_lifecycle() {
        let mut slice: ListSlice<i32> = ListSlice::default();
        slice.reduce(ListAction::FetchStarted(ListParams::default()));
        assert!(slice.loading);
        let seq = slice.current_seq();
        slice.reduce(ListAction::FetchSucceeded {
            seq,
            page: page_of(vec![1, 2], 1, 3),
        });
        assert!(!slice.loading);
        assert_eq!(slice.list, vec![1, 2]);
        assert!(slice.meta.has_more());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut slice: ListSlice<i32> = ListSlice::default();
        slice.reduce(ListAction::FetchStarted(ListParams::default()));
        let first = slice.current_seq();
        slice.reduce(ListAction::FetchStarted(ListParams::default()));
        let second = slice.current_seq();

        slice.reduce(ListAction::FetchSucceeded {
            seq: second,
            page: page_of(vec![2], 1, 1),
        });
        slice.reduce(ListAction::FetchSucceeded {
            seq: first,
            page: page_of(vec![1], 1, 1),
        });
        assert_eq!(slice.list, vec![2]);
    }

    #[test]
    fn test_failed_fetch_clears_loading() {
        let mut slice: ListSlice<i32> = ListSlice::default();
        slice.reduce(ListAction::FetchStarted(ListParams::default()));
        let seq = slice.current_seq();
        slice.reduce(ListAction::FetchFailed {
            seq,
            message: "HTTP 500".into(),
        });
        assert!(!slice.loading);
        assert_eq!(slice.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_clear_keeps_page_size() {
        let mut slice: ListSlice<i32> = ListSlice::with_params(ListParams::with_per_page(50));
        slice.list = vec![1];
        slice.reduce(ListAction::Clear);
        assert!(slice.list.is_empty());
        assert_eq!(slice.params.per_page, 50);
    }

    #[test]
    fn test_row_busy() {
        let mut busy = RowBusy::default();
        busy.begin(4);
        assert!(busy.is_busy(4));
        assert!(!busy.is_busy(5));
        busy.finish();
        assert_eq!(busy.current(), None);
    }

    #[test]
    fn test_infinite_options() {
        let mut opts = InfiniteOptions::default();
        assert_eq!(opts.restart(Some("ca".into())), 1);
        let meta = ListMeta {
            current_page: 1,
            last_page: 2,
            ..ListMeta::default()
        };
        opts.receive(1, vec![SelectOption::new("Canada", 1)], &meta);
        assert_eq!(opts.next_page(), Some(2));

        let meta2 = ListMeta {
            current_page: 2,
            last_page: 2,
            ..ListMeta::default()
        };
        opts.receive(
            2,
            vec![SelectOption::new("Canada", 1), SelectOption::new("Cameroon", 2)],
            &meta2,
        );
        assert_eq!(opts.options.len(), 2);
        assert_eq!(opts.next_page(), None);

        opts.restart(None);
        assert!(opts.options.is_empty());
        assert_eq!(opts.search, None);
    }

    #[test]
    fn test_meta_defaults_when_missing() {
        let p: Paginated<i32> = serde_json::from_str(r#"{"data":[1]}"#).unwrap();
        assert_eq!(p.meta.per_page, 10);
        assert!(!p.meta.has_more());
    }
}
