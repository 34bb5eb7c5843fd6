//! Server-paginated list of one resource, shared by the list views.
//!
//! Holds the `ListSlice` of the view plus the per-row busy flags. Params are
//! restored from the tab's menu data or the URL query and written back on
//! every fetch.

use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiResult;
use contracts::shared::list::{ListAction, ListParams, ListSlice, ParamChange, RowBusy};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::future::Future;
use std::marker::PhantomData;

use crate::layout::global_context::AppStore;
use crate::shared::i18n::t;
use crate::shared::query_state;
use crate::shared::rest;

pub struct ListController<A: Send + Sync + 'static> {
    pub slice: RwSignal<ListSlice<A>>,
    /// Row whose `active` switch is in flight
    pub toggling: RwSignal<RowBusy>,
    pub deleting: RwSignal<RowBusy>,
    store: AppStore,
    _marker: PhantomData<fn() -> A>,
}

impl<A: Send + Sync + 'static> Clone for ListController<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Send + Sync + 'static> Copy for ListController<A> {}

impl<A> ListController<A>
where
    A: AggregateRoot + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Create the controller and issue the first fetch.
    ///
    /// `filter_keys` are the URL query keys that narrow this list
    /// (`region_id`, `status`, ...).
    pub fn new(store: AppStore, filter_keys: &'static [&'static str]) -> Self {
        let per_page = store.config.with_value(|c| c.default_page_size);
        let params = initial_params(store, &A::full_name(), filter_keys, per_page);
        Self::with_params(store, params)
    }

    /// Controller whose params are built by the caller (POS filter)
    pub fn with_params(store: AppStore, params: ListParams) -> Self {
        let this = Self {
            slice: RwSignal::new(ListSlice::with_params(params.clone())),
            toggling: RwSignal::new(RowBusy::default()),
            deleting: RwSignal::new(RowBusy::default()),
            store,
            _marker: PhantomData,
        };
        this.fetch(params);
        this.subscribe_refetch();
        this.sync_url();
        this
    }

    pub fn params(&self) -> ListParams {
        self.slice.with_untracked(|s| s.params.clone())
    }

    pub fn fetch(&self, params: ListParams) {
        self.store
            .set_menu_data(&A::full_name(), pairs_to_json(&params.to_pairs()));
        self.slice
            .update(|s| s.reduce(ListAction::FetchStarted(params.clone())));
        let seq = self.slice.with_untracked(|s| s.current_seq());
        let slice = self.slice;
        let store = self.store;
        spawn_local(async move {
            match rest::list::<A>(&params).await {
                Ok(page) => slice.update(|s| s.reduce(ListAction::FetchSucceeded { seq, page })),
                Err(e) => {
                    store.notify_error(&e);
                    slice.update(|s| {
                        s.reduce(ListAction::FetchFailed {
                            seq,
                            message: e.user_message(),
                        })
                    });
                }
            }
        });
    }

    pub fn reload(&self) {
        self.fetch(self.params());
    }

    /// Fetch only when the change actually alters the params
    pub fn apply(&self, change: ParamChange) {
        if let Some(next) = self.params().apply(change) {
            self.fetch(next);
        }
    }

    fn subscribe_refetch(&self) {
        let resource = A::full_name();
        let seen = StoredValue::new(self.store.refetch.with_untracked(|b| b.version(&resource)));
        let this = *self;
        Effect::new(move |_| {
            let version = this.store.refetch.with(|b| b.version(&resource));
            if version > seen.get_value() {
                seen.set_value(version);
                log!("♻️ refetch {}", resource);
                this.reload();
            }
        });
    }

    /// Keep `?active=<tab>&<params>` in the address bar while the tab is shown
    fn sync_url(&self) {
        let key = A::full_name();
        let this = *self;
        Effect::new(move |_| {
            let params = this.slice.with(|s| s.params.clone());
            if !this.store.is_active(&key) {
                return;
            }
            query_state::replace_query(&query_state::with_active(&key, params.to_pairs()));
        });
    }
}

/// Row actions exist only for resources with numeric ids
impl<A> ListController<A>
where
    A: AggregateRoot<Id = i64> + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn toggle_status(&self, id: i64) {
        let toggling = self.toggling;
        let store = self.store;
        spawn_local(async move {
            match run_row_action(mark_row(toggling), id, rest::toggle_status::<A>(&id)).await {
                Ok(()) => {
                    store.notify_success(t("successfully.updated"));
                    store.bump_refetch(&A::full_name());
                }
                Err(e) => store.notify_error(&e),
            }
        });
    }

    pub fn delete(&self, id: i64) {
        let deleting = self.deleting;
        let store = self.store;
        spawn_local(async move {
            match run_row_action(mark_row(deleting), id, rest::delete::<A>(&id)).await {
                Ok(()) => {
                    store.notify_success(t("successfully.deleted"));
                    store.bump_refetch(&A::full_name());
                }
                Err(e) => store.notify_error(&e),
            }
        });
    }
}

fn mark_row(busy: RwSignal<RowBusy>) -> impl Fn(Option<i64>) {
    move |state| {
        busy.update(|b| match state {
            Some(id) => b.begin(id),
            None => b.finish(),
        })
    }
}

/// Row `id` is marked busy while `call` runs; the mark is cleared whatever
/// the outcome, there is no rollback.
pub async fn run_row_action<T, Fut>(mark: impl Fn(Option<i64>), id: i64, call: Fut) -> ApiResult<T>
where
    Fut: Future<Output = ApiResult<T>>,
{
    mark(Some(id));
    let result = call.await;
    mark(None);
    result
}

fn initial_params(
    store: AppStore,
    key: &str,
    filter_keys: &[&str],
    per_page: u32,
) -> ListParams {
    let saved = json_to_pairs(&store.menu_data(key));
    let pairs = if !saved.is_empty() {
        saved
    } else if store.menu.with_untracked(|m| m.active.as_deref() == Some(key)) {
        query_state::read_query()
    } else {
        BTreeMap::new()
    };
    ListParams::from_pairs(&pairs, filter_keys, per_page)
}

fn pairs_to_json(pairs: &BTreeMap<String, String>) -> serde_json::Value {
    serde_json::to_value(pairs).unwrap_or(serde_json::Value::Null)
}

fn json_to_pairs(value: &serde_json::Value) -> BTreeMap<String, String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::error::ApiError;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_row_mark_cleared_after_failure() {
        let marks = RefCell::new(Vec::new());
        let result: ApiResult<()> = block_on(run_row_action(
            |m| marks.borrow_mut().push(m),
            7,
            async {
                // во время запроса строка занята
                assert_eq!(marks.borrow().last(), Some(&Some(7)));
                Err(ApiError::Network("offline".into()))
            },
        ));
        assert!(result.is_err());
        assert_eq!(*marks.borrow(), vec![Some(7), None]);
    }

    #[test]
    fn test_row_mark_cleared_after_success() {
        let marks = RefCell::new(Vec::new());
        let result = block_on(run_row_action(|m| marks.borrow_mut().push(m), 3, async {
            Ok::<_, ApiError>(42)
        }));
        assert_eq!(result, Ok(42));
        assert_eq!(*marks.borrow(), vec![Some(3), None]);
    }

    #[test]
    fn test_menu_data_round_trip() {
        let mut pairs = BTreeMap::new();
        pairs.insert("region_id".to_string(), "3".to_string());
        pairs.insert("page".to_string(), "2".to_string());
        assert_eq!(json_to_pairs(&pairs_to_json(&pairs)), pairs);
        assert!(json_to_pairs(&serde_json::Value::Null).is_empty());
    }
}
