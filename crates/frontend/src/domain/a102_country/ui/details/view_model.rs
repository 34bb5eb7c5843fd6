use contracts::domain::a102_country::aggregate::{Country, CountryForm, CountryPayload};
use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::LanguageSet;

use crate::shared::form_vm::EntityForm;

impl EntityForm for CountryForm {
    type Entity = Country;
    type Payload = CountryPayload;

    fn from_entity(entity: &Country, languages: &LanguageSet) -> Self {
        CountryForm::from_entity(entity, languages)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        CountryForm::validate(self, languages)
    }

    fn to_payload(&self) -> Result<CountryPayload, ValidationErrors> {
        Ok(CountryForm::to_payload(self))
    }
}
