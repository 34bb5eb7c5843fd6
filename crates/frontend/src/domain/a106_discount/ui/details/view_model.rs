use contracts::domain::a106_discount::aggregate::{Discount, DiscountForm, DiscountPayload};
use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::LanguageSet;
use contracts::shared::list::SelectOption;
use leptos::prelude::*;

use crate::layout::global_context::AppStore;
use crate::shared::form_vm::{EntityForm, FormViewModel};

impl EntityForm for DiscountForm {
    type Entity = Discount;
    type Payload = DiscountPayload;

    fn from_entity(entity: &Discount, _languages: &LanguageSet) -> Self {
        DiscountForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self, _languages: &LanguageSet) -> Result<(), ValidationErrors> {
        DiscountForm::validate(self)
    }

    fn to_payload(&self) -> Result<DiscountPayload, ValidationErrors> {
        DiscountForm::to_payload(self)
    }
}

/// Общая модель формы плюс список выбранных стоков
#[derive(Clone, Copy)]
pub struct DiscountDetailsViewModel {
    pub id: Option<i64>,
    inner: FormViewModel<DiscountForm>,
    pub form: RwSignal<DiscountForm>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl DiscountDetailsViewModel {
    pub fn new(store: AppStore, id: Option<i64>) -> Self {
        let inner = FormViewModel::new(store);
        Self {
            id,
            inner,
            form: inner.form,
            loading: inner.loading,
            saving: inner.saving,
        }
    }

    pub fn load_if_needed(&self) {
        self.inner.load_if_needed(self.id);
    }

    /// Picking the same stock twice keeps one entry
    pub fn add_product(&self, option: SelectOption) {
        self.form.update(|f| add_unique(&mut f.products, option));
    }

    pub fn remove_product(&self, value: i64) {
        self.form.update(|f| f.products.retain(|p| p.value != value));
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.inner.error_for(field)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        self.inner.save_command(on_saved);
    }
}

fn add_unique(products: &mut Vec<SelectOption>, option: SelectOption) {
    if !products.iter().any(|p| p.value == option.value) {
        products.push(option);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_knows_edit_mode() {
        let discount: Discount = serde_json::from_value(json!({"id": 9})).unwrap();
        let form = <DiscountForm as EntityForm>::from_entity(&discount, &LanguageSet::default());
        assert_eq!(EntityForm::id(&form), Some(9));
        assert_eq!(EntityForm::id(&DiscountForm::default()), None);
    }

    #[test]
    fn test_empty_form_is_rejected_before_request() {
        let form = DiscountForm::default();
        let languages = LanguageSet::default();
        let errors = EntityForm::validate(&form, &languages)
            .and_then(|_| EntityForm::to_payload(&form))
            .unwrap_err();
        assert_eq!(errors.first("type").as_deref(), Some("required"));
    }

    #[test]
    fn test_add_unique() {
        let mut products = vec![SelectOption::new("a", 1)];
        add_unique(&mut products, SelectOption::new("a", 1));
        add_unique(&mut products, SelectOption::new("b", 2));
        assert_eq!(products.len(), 2);
    }
}
