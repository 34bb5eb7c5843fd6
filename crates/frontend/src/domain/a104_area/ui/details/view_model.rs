use contracts::domain::a104_area::aggregate::{Area, AreaForm, AreaPayload};
use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::LanguageSet;

use crate::shared::form_vm::EntityForm;

impl EntityForm for AreaForm {
    type Entity = Area;
    type Payload = AreaPayload;

    fn from_entity(entity: &Area, languages: &LanguageSet) -> Self {
        AreaForm::from_entity(entity, languages)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        AreaForm::validate(self, languages)
    }

    fn to_payload(&self) -> Result<AreaPayload, ValidationErrors> {
        Ok(AreaForm::to_payload(self))
    }
}
