use contracts::domain::a107_product::aggregate::Product;
use contracts::domain::a107_product::clone_draft::{CloneDraft, MediaFile};
use contracts::domain::a107_product::stock_tools::{assign_all, generate_sku, StockPatch, SKU_LENGTH};
use contracts::domain::a107_product::wizard::{step_from_query, WizardStep};
use contracts::domain::common::AggregateRoot;
use contracts::shared::error::{ApiError, ValidationErrors};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::layout::global_context::AppStore;
use crate::layout::tabs::product_clone_tab_key;
use crate::shared::i18n::t;
use crate::shared::query_state;
use crate::shared::rest;

const STEP_PARAM: &str = "step";

/// Состояние мастера копирования товара.
///
/// Черновик живёт в menu data вкладки, поэтому переключение вкладок его
/// не теряет; номер шага дублируется в `?step=`.
#[derive(Clone, Copy)]
pub struct ProductCloneViewModel {
    pub uuid: Uuid,
    pub draft: RwSignal<Option<CloneDraft>>,
    pub errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    store: AppStore,
}

impl ProductCloneViewModel {
    pub fn new(store: AppStore, uuid: Uuid) -> Self {
        Self {
            uuid,
            draft: RwSignal::new(None),
            errors: RwSignal::new(ValidationErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            store,
        }
    }

    pub fn tab_key(&self) -> String {
        product_clone_tab_key(&self.uuid)
    }

    /// Restore the saved draft, or fetch the source product
    pub fn load(&self) {
        let key = self.tab_key();
        if let Ok(mut draft) = serde_json::from_value::<CloneDraft>(self.store.menu_data(&key)) {
            log!("📋 clone draft restored for {}", self.uuid);
            draft.step = self.query_step(draft.steps().len()).unwrap_or(draft.step);
            self.draft.set(Some(draft));
            return;
        }

        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match rest::show::<Product>(&this.uuid).await {
                Ok(product) => {
                    let languages = this.store.languages.get_untracked();
                    let mut draft = CloneDraft::from_product(&product, &languages);
                    draft.step = this.query_step(draft.steps().len()).unwrap_or(0);
                    this.draft.set(Some(draft));
                    this.persist();
                }
                Err(e) => this.store.notify_error(&e),
            }
            this.loading.set(false);
        });
    }

    /// `?step=` only counts while this tab is the active one
    fn query_step(&self, step_count: usize) -> Option<usize> {
        let key = self.tab_key();
        let active = self.store.menu.with_untracked(|m| m.active.as_deref() == Some(key.as_str()));
        if !active {
            return None;
        }
        let query = query_state::read_query();
        query
            .get(STEP_PARAM)
            .map(|raw| step_from_query(Some(raw), step_count))
    }

    fn persist(&self) {
        let key = self.tab_key();
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        let step = draft.step;
        if let Ok(value) = serde_json::to_value(&draft) {
            self.store.set_menu_data(&key, value);
        }
        if self.store.menu.with_untracked(|m| m.active.as_deref() == Some(key.as_str())) {
            let mut pairs = BTreeMap::new();
            pairs.insert(STEP_PARAM.to_string(), step.to_string());
            query_state::replace_query(&query_state::with_active(&key, pairs));
        }
    }

    /// Change the draft and store it in the tab
    pub fn update(&self, f: impl FnOnce(&mut CloneDraft)) {
        self.draft.update(|d| {
            if let Some(d) = d {
                f(d);
            }
        });
        self.persist();
    }

    pub fn steps(&self) -> Vec<WizardStep> {
        self.draft.with(|d| d.as_ref().map(CloneDraft::steps).unwrap_or_default())
    }

    pub fn current_index(&self) -> usize {
        self.draft.with(|d| d.as_ref().map_or(0, |d| d.step))
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.steps().get(self.current_index()).copied()
    }

    pub fn go_to(&self, index: usize) {
        self.update(|d| d.step = index.min(d.steps().len().saturating_sub(1)));
    }

    pub fn next(&self) {
        self.go_to(self.current_index() + 1);
    }

    pub fn prev(&self) {
        self.go_to(self.current_index().saturating_sub(1));
    }

    pub fn set_all(&self, patch: StockPatch) {
        self.update(|d| assign_all(&mut d.stocks, &patch));
    }

    /// New SKU for one stock row
    pub fn generate_sku_for(&self, index: usize) {
        let sku = generate_sku(&mut rand::thread_rng(), SKU_LENGTH);
        self.update(|d| {
            if let Some(stock) = d.stocks.get_mut(index) {
                stock.sku = Some(sku);
            }
        });
    }

    pub fn add_image(&self, url: String) {
        let url = url.trim().to_string();
        if url.is_empty() {
            return;
        }
        self.update(|d| {
            let uid = d.images.iter().map(|m| m.uid + 1).max().unwrap_or(1);
            d.images.push(MediaFile {
                uid,
                name: url.clone(),
                url,
                is_video: false,
            });
        });
    }

    pub fn remove_image(&self, uid: i64) {
        self.update(|d| d.images.retain(|m| m.uid != uid));
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.first(field))
    }

    pub fn save_command(&self) {
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        let languages = self.store.languages.get_untracked();
        if let Err(errors) = draft.validate(&languages) {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let this = *self;
        let payload = draft.to_payload();
        this.saving.set(true);
        spawn_local(async move {
            let result = rest::create::<Product, _>(&payload).await;
            this.saving.set(false);
            match result {
                Ok(_) => {
                    this.store.notify_success(t("successfully.created"));
                    this.store.bump_refetch(&Product::full_name());
                    this.store.close_menu(&this.tab_key());
                    this.store
                        .open_menu(&Product::full_name(), &t(Product::list_name()));
                }
                Err(ApiError::Validation(errors)) => {
                    this.errors.set(errors.clone());
                    this.store.notify_error(&ApiError::Validation(errors));
                }
                Err(e) => this.store.notify_error(&e),
            }
        });
    }
}
