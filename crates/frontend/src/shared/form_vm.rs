//! ViewModel of a modal create/edit form.
//!
//! Edit mode loads the entity by id and flattens it into the form; save
//! validates locally, then calls create or update and signals the list.

use contracts::domain::common::AggregateRoot;
use contracts::shared::error::{ApiError, ValidationErrors};
use contracts::shared::i18n::LanguageSet;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::layout::global_context::AppStore;
use crate::shared::i18n::t;
use crate::shared::rest;

/// Form state bound to one REST entity
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    type Entity: AggregateRoot<Id = i64> + DeserializeOwned + Send + Sync + 'static;
    type Payload: Serialize + 'static;

    fn from_entity(entity: &Self::Entity, languages: &LanguageSet) -> Self;
    fn id(&self) -> Option<i64>;
    fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors>;
    /// Called after a successful `validate`
    fn to_payload(&self) -> Result<Self::Payload, ValidationErrors>;
}

pub struct FormViewModel<F: EntityForm> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    store: AppStore,
}

impl<F: EntityForm> Clone for FormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntityForm> Copy for FormViewModel<F> {}

impl<F: EntityForm> FormViewModel<F> {
    pub fn new(store: AppStore) -> Self {
        Self {
            form: RwSignal::new(F::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            store,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id().is_some())
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match rest::show::<F::Entity>(&id).await {
                Ok(entity) => {
                    let languages = this.store.languages.get_untracked();
                    this.form.set(F::from_entity(&entity, &languages));
                }
                Err(e) => this.store.notify_error(&e),
            }
            this.loading.set(false);
        });
    }

    /// Validate, then create or update. `on_saved` runs only on success.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let languages = self.store.languages.get_untracked();
        let payload = match current.validate(&languages).and_then(|_| current.to_payload()) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(ValidationErrors::new());

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = match current.id() {
                Some(id) => rest::update::<F::Entity, _>(&id, &payload).await,
                None => rest::create::<F::Entity, _>(&payload).await,
            };
            this.saving.set(false);
            match result {
                Ok(_) => {
                    let key = if current.id().is_some() {
                        "successfully.updated"
                    } else {
                        "successfully.created"
                    };
                    this.store.notify_success(t(key));
                    this.store.bump_refetch(&F::Entity::full_name());
                    this.form.set(F::default());
                    on_saved.run(());
                }
                Err(ApiError::Validation(errors)) => {
                    this.errors.set(errors.clone());
                    this.store.notify_error(&ApiError::Validation(errors));
                }
                Err(e) => this.store.notify_error(&e),
            }
        });
    }

    /// First message of a field; tracked
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.first(field))
    }
}
