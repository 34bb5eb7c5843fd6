use contracts::domain::a101_region::aggregate::{Region, RegionForm, RegionPayload};
use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::LanguageSet;

use crate::shared::form_vm::EntityForm;

impl EntityForm for RegionForm {
    type Entity = Region;
    type Payload = RegionPayload;

    fn from_entity(entity: &Region, languages: &LanguageSet) -> Self {
        RegionForm::from_entity(entity, languages)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        RegionForm::validate(self, languages)
    }

    fn to_payload(&self) -> Result<RegionPayload, ValidationErrors> {
        Ok(RegionForm::to_payload(self))
    }
}
