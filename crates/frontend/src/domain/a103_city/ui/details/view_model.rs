use contracts::domain::a103_city::aggregate::{City, CityForm, CityPayload};
use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::LanguageSet;

use crate::shared::form_vm::EntityForm;

impl EntityForm for CityForm {
    type Entity = City;
    type Payload = CityPayload;

    fn from_entity(entity: &City, languages: &LanguageSet) -> Self {
        CityForm::from_entity(entity, languages)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        CityForm::validate(self, languages)
    }

    fn to_payload(&self) -> Result<CityPayload, ValidationErrors> {
        Ok(CityForm::to_payload(self))
    }
}
