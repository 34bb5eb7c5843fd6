//! Form state of the shop-add wizard.
//!
//! One draft spans all steps; validation errors are mapped back to the step
//! that owns the field so the wizard can jump there.

use super::wizard::ShopStep;
use crate::shared::config::{GeoPoint, DEFAULT_CENTER};
use crate::shared::error::ValidationErrors;
use crate::shared::i18n::{LanguageSet, TextRules, Translations};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SHOP_KINDS: [&str; 2] = ["shop", "restaurant"];
pub const SOCIAL_NETWORKS: [&str; 4] = ["instagram", "facebook", "telegram", "youtube"];
pub const DELIVERY_TIME_UNITS: [&str; 3] = ["minute", "hour", "day"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopDraft {
    // main
    pub title: Translations,
    pub description: Translations,
    pub kind: String,
    pub phone: String,
    pub logo_img: Option<String>,
    pub background_img: Option<String>,
    pub tax: Option<f64>,
    pub percentage: Option<f64>,
    // map
    pub address: Translations,
    pub location: GeoPoint,
    // social
    pub socials: BTreeMap<String, String>,
    // delivery
    pub min_amount: Option<f64>,
    pub delivery_time_from: Option<u32>,
    pub delivery_time_to: Option<u32>,
    pub delivery_time_unit: String,
}

impl Default for ShopDraft {
    fn default() -> Self {
        Self {
            title: Translations::new(),
            description: Translations::new(),
            kind: SHOP_KINDS[0].to_string(),
            phone: String::new(),
            logo_img: None,
            background_img: None,
            tax: None,
            percentage: None,
            address: Translations::new(),
            location: DEFAULT_CENTER,
            socials: BTreeMap::new(),
            min_amount: None,
            delivery_time_from: None,
            delivery_time_to: None,
            delivery_time_unit: DELIVERY_TIME_UNITS[0].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTime {
    pub from: u32,
    pub to: u32,
    #[serde(rename = "type")]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopPayload {
    pub title: Translations,
    pub description: Translations,
    pub address: Translations,
    #[serde(rename = "type")]
    pub kind: String,
    pub phone: String,
    pub images: Vec<String>,
    pub tax: f64,
    pub percentage: f64,
    pub location: GeoPoint,
    pub socials: BTreeMap<String, String>,
    pub min_amount: f64,
    pub delivery_time: DeliveryTime,
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn non_negative(errors: &mut ValidationErrors, field: &str, value: Option<f64>) {
    match value {
        None => errors.add(field, "required"),
        Some(v) if !v.is_finite() || v < 0.0 => errors.add(field, "must.be.positive"),
        _ => {}
    }
}

/// Step that owns a form field (`title[en]` belongs to main)
pub fn step_of_field(field: &str) -> ShopStep {
    let name = field.split('[').next().unwrap_or(field);
    match name {
        "address" | "location" => ShopStep::Map,
        "socials" => ShopStep::Social,
        "min_amount" | "delivery_time_from" | "delivery_time_to" | "delivery_time_unit" => {
            ShopStep::Delivery
        }
        _ => ShopStep::Main,
    }
}

impl ShopDraft {
    pub fn validate(&self, languages: &LanguageSet) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.title
            .validate("title", languages, TextRules::default(), &mut errors);
        self.description.validate(
            "description",
            languages,
            TextRules {
                min: 2,
                max: 2000,
                default_required: true,
            },
            &mut errors,
        );
        self.address
            .validate("address", languages, TextRules::default(), &mut errors);

        if !SHOP_KINDS.contains(&self.kind.as_str()) {
            errors.add("type", "required");
        }
        if is_blank(Some(&self.phone)) {
            errors.add("phone", "required");
        } else if !self
            .phone
            .trim()
            .trim_start_matches('+')
            .chars()
            .all(|c| c.is_ascii_digit())
        {
            errors.add("phone", "invalid.phone");
        }
        if is_blank(self.logo_img.as_deref()) {
            errors.add("logo_img", "required");
        }
        if is_blank(self.background_img.as_deref()) {
            errors.add("background_img", "required");
        }
        non_negative(&mut errors, "tax", self.tax);
        non_negative(&mut errors, "percentage", self.percentage);
        non_negative(&mut errors, "min_amount", self.min_amount);

        if !(-90.0..=90.0).contains(&self.location.lat) || !(-180.0..=180.0).contains(&self.location.lng) {
            errors.add("location", "invalid.location");
        }

        match (self.delivery_time_from, self.delivery_time_to) {
            (None, _) => errors.add("delivery_time_from", "required"),
            (_, None) => errors.add("delivery_time_to", "required"),
            (Some(from), Some(to)) if from > to => {
                errors.add("delivery_time_from", "from.must.be.less.than.to")
            }
            _ => {}
        }
        if !DELIVERY_TIME_UNITS.contains(&self.delivery_time_unit.as_str()) {
            errors.add("delivery_time_unit", "required");
        }
        errors.into_result()
    }

    /// Earliest step with an error
    pub fn first_error_step(errors: &ValidationErrors) -> Option<ShopStep> {
        errors.0.keys().map(|field| step_of_field(field)).min_by_key(|step| {
            super::wizard::SHOP_STEPS
                .iter()
                .position(|s| s == step)
                .unwrap_or(usize::MAX)
        })
    }

    /// Validated request body
    pub fn to_payload(&self, languages: &LanguageSet) -> Result<ShopPayload, ValidationErrors> {
        self.validate(languages)?;
        Ok(ShopPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            kind: self.kind.clone(),
            phone: self.phone.trim().to_string(),
            images: self
                .logo_img
                .iter()
                .chain(self.background_img.iter())
                .cloned()
                .collect(),
            tax: self.tax.unwrap_or_default(),
            percentage: self.percentage.unwrap_or_default(),
            location: self.location,
            socials: self
                .socials
                .iter()
                .filter(|(_, url)| !url.trim().is_empty())
                .map(|(k, v)| (k.clone(), v.trim().to_string()))
                .collect(),
            min_amount: self.min_amount.unwrap_or_default(),
            delivery_time: DeliveryTime {
                from: self.delivery_time_from.unwrap_or_default(),
                to: self.delivery_time_to.unwrap_or_default(),
                unit: self.delivery_time_unit.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Locale;

    fn filled() -> ShopDraft {
        let en = Locale::new("en");
        let mut draft = ShopDraft::default();
        draft.title.set(en.clone(), "Corner shop");
        draft.description.set(en.clone(), "Groceries");
        draft.address.set(en, "Main st 1");
        draft.phone = "+15551234".into();
        draft.logo_img = Some("logo.png".into());
        draft.background_img = Some("bg.png".into());
        draft.tax = Some(5.0);
        draft.percentage = Some(10.0);
        draft.min_amount = Some(0.0);
        draft.delivery_time_from = Some(10);
        draft.delivery_time_to = Some(30);
        draft
    }

    #[test]
    fn test_default_location_is_map_center() {
        assert_eq!(ShopDraft::default().location, DEFAULT_CENTER);
    }

    #[test]
    fn test_valid_draft_payload() {
        let languages = LanguageSet::single("en");
        let mut draft = filled();
        draft.socials.insert("instagram".into(), " https://i.com/x ".into());
        draft.socials.insert("facebook".into(), "".into());
        let payload = draft.to_payload(&languages).unwrap();
        assert_eq!(payload.images, vec!["logo.png", "bg.png"]);
        assert_eq!(payload.socials.len(), 1);
        assert_eq!(payload.socials["instagram"], "https://i.com/x");
        assert_eq!(payload.delivery_time.unit, "minute");
    }

    #[test]
    fn test_errors_map_to_steps() {
        let languages = LanguageSet::single("en");
        let mut draft = filled();
        draft.delivery_time_from = Some(40);
        let errors = draft.validate(&languages).unwrap_err();
        assert_eq!(ShopDraft::first_error_step(&errors), Some(ShopStep::Delivery));

        draft.address = Translations::new();
        let errors = draft.validate(&languages).unwrap_err();
        assert_eq!(ShopDraft::first_error_step(&errors), Some(ShopStep::Map));
        assert_eq!(step_of_field("title[en]"), ShopStep::Main);
    }

    #[test]
    fn test_phone_must_be_digits() {
        let languages = LanguageSet::single("en");
        let mut draft = filled();
        draft.phone = "call me".into();
        let errors = draft.validate(&languages).unwrap_err();
        assert_eq!(errors.first("phone").as_deref(), Some("invalid.phone"));
    }
}
