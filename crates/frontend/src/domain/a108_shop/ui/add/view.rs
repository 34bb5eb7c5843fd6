use contracts::domain::a108_shop::aggregate::Shop;
use contracts::domain::a108_shop::draft::{ShopDraft, DELIVERY_TIME_UNITS, SHOP_KINDS, SOCIAL_NETWORKS};
use contracts::domain::a108_shop::wizard::{ShopStep, WizardCursor, SHOP_STEPS};
use contracts::shared::error::{ApiError, ValidationErrors};
use contracts::shared::i18n::Translations;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use thaw::*;

use crate::layout::global_context::{use_app_store, AppStore};
use crate::layout::tabs::SHOP_ADD_TAB;
use crate::shared::components::translation_inputs::TranslationInputs;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::rest;

/// Что хранится в menu data вкладки между переключениями
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SavedWizard {
    #[serde(default)]
    step: usize,
    #[serde(default)]
    draft: Option<ShopDraft>,
}

fn restore(store: AppStore) -> (WizardCursor, ShopDraft) {
    let saved: SavedWizard =
        serde_json::from_value(store.menu_data(SHOP_ADD_TAB)).unwrap_or_default();
    (
        WizardCursor::new(saved.step, SHOP_STEPS.len()),
        saved.draft.unwrap_or_default(),
    )
}

fn parse_opt<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[component]
pub fn ShopAdd() -> impl IntoView {
    let store = use_app_store();
    let (initial_cursor, initial_draft) = restore(store);
    let cursor = RwSignal::new(initial_cursor);
    let draft = RwSignal::new(initial_draft);
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);

    // Шаг и черновик переживают переключение вкладок
    Effect::new(move |_| {
        let saved = SavedWizard {
            step: cursor.with(|c| c.current),
            draft: Some(draft.get()),
        };
        if let Ok(value) = serde_json::to_value(&saved) {
            store.set_menu_data(SHOP_ADD_TAB, value);
        }
    });

    let error_for = move |field: &'static str| {
        move || errors.with(|e| e.first(field)).map(|e| view! { <span class="form__error">{t(&e)}</span> })
    };
    let translations = move |pick: fn(&ShopDraft) -> &Translations| {
        Signal::derive(move || draft.with(|d| pick(d).clone()))
    };

    let submit = move |_| {
        let languages = store.languages.get_untracked();
        let payload = match draft.with_untracked(|d| d.to_payload(&languages)) {
            Ok(payload) => payload,
            Err(e) => {
                if let Some(step) = ShopDraft::first_error_step(&e) {
                    let index = SHOP_STEPS.iter().position(|s| *s == step).unwrap_or(0);
                    cursor.set(WizardCursor::new(index, SHOP_STEPS.len()));
                }
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::new());
        saving.set(true);
        spawn_local(async move {
            let result = rest::create::<Shop, _>(&payload).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    store.notify_success(t("successfully.created"));
                    store.set_menu_data(SHOP_ADD_TAB, serde_json::Value::Null);
                    store.close_menu(SHOP_ADD_TAB);
                }
                Err(ApiError::Validation(e)) => {
                    errors.set(e.clone());
                    store.notify_error(&ApiError::Validation(e));
                }
                Err(e) => store.notify_error(&e),
            }
        });
    };

    let main_step = move || view! {
        <div class="details-form">
            <TranslationInputs
                value=translations(|d| &d.title)
                on_change=Callback::new(move |(locale, text)| draft.update(|d| d.title.set(locale, text)))
                errors=errors
                prefix="title"
            />
            <TranslationInputs
                value=translations(|d| &d.description)
                on_change=Callback::new(move |(locale, text)| draft.update(|d| d.description.set(locale, text)))
                errors=errors
                prefix="description"
                multiline=true
            />
            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("type")}</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.with(|d| d.kind.clone())
                        on:change=move |ev| {
                            let kind = event_target_value(&ev);
                            draft.update(|d| d.kind = kind);
                        }
                    >
                        {SHOP_KINDS.iter().map(|k| view! { <option value=*k>{t(k)}</option> }).collect_view()}
                    </select>
                    {error_for("type")}
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("phone")}</label>
                    <input
                        type="tel"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.phone.clone())
                        on:input=move |ev| {
                            let phone = event_target_value(&ev);
                            draft.update(|d| d.phone = phone);
                        }
                    />
                    {error_for("phone")}
                </div>
            </Flex>
            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("logo.image")}</label>
                    <input
                        type="url"
                        class="form__input"
                        placeholder="https://"
                        prop:value=move || draft.with(|d| d.logo_img.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let url = event_target_value(&ev);
                            draft.update(|d| d.logo_img = Some(url).filter(|u| !u.trim().is_empty()));
                        }
                    />
                    {error_for("logo_img")}
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("background.image")}</label>
                    <input
                        type="url"
                        class="form__input"
                        placeholder="https://"
                        prop:value=move || draft.with(|d| d.background_img.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let url = event_target_value(&ev);
                            draft.update(|d| d.background_img = Some(url).filter(|u| !u.trim().is_empty()));
                        }
                    />
                    {error_for("background_img")}
                </div>
            </Flex>
            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("tax")}</label>
                    <input
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.tax.map(|v| v.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let tax = parse_opt(&event_target_value(&ev));
                            draft.update(|d| d.tax = tax);
                        }
                    />
                    {error_for("tax")}
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("admin.comission")}</label>
                    <input
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.percentage.map(|v| v.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let percentage = parse_opt(&event_target_value(&ev));
                            draft.update(|d| d.percentage = percentage);
                        }
                    />
                    {error_for("percentage")}
                </div>
            </Flex>
        </div>
    };

    // Карта вне рамок: координаты вводятся вручную
    let map_step = move || view! {
        <div class="details-form">
            <TranslationInputs
                value=translations(|d| &d.address)
                on_change=Callback::new(move |(locale, text)| draft.update(|d| d.address.set(locale, text)))
                errors=errors
                prefix="address"
            />
            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label">{t("latitude")}</label>
                    <input
                        type="number"
                        step="any"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.location.lat.to_string())
                        on:input=move |ev| {
                            if let Some(lat) = parse_opt::<f64>(&event_target_value(&ev)) {
                                draft.update(|d| d.location.lat = lat);
                            }
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{t("longitude")}</label>
                    <input
                        type="number"
                        step="any"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.location.lng.to_string())
                        on:input=move |ev| {
                            if let Some(lng) = parse_opt::<f64>(&event_target_value(&ev)) {
                                draft.update(|d| d.location.lng = lng);
                            }
                        }
                    />
                </div>
            </Flex>
            {error_for("location")}
        </div>
    };

    let social_step = move || view! {
        <div class="details-form">
            {SOCIAL_NETWORKS.iter().map(|network| {
                let network = *network;
                view! {
                    <div class="form__group">
                        <label class="form__label">{t(network)}</label>
                        <input
                            type="url"
                            class="form__input"
                            placeholder="https://"
                            prop:value=move || draft.with(|d| d.socials.get(network).cloned().unwrap_or_default())
                            on:input=move |ev| {
                                let url = event_target_value(&ev);
                                draft.update(|d| {
                                    d.socials.insert(network.to_string(), url);
                                });
                            }
                        />
                    </div>
                }
            }).collect_view()}
        </div>
    };

    let delivery_step = move || view! {
        <div class="details-form">
            <div class="form__group">
                <label class="form__label form__label--required">{t("min.amount")}</label>
                <input
                    type="number"
                    min="0"
                    class="form__input"
                    prop:value=move || draft.with(|d| d.min_amount.map(|v| v.to_string()).unwrap_or_default())
                    on:input=move |ev| {
                        let amount = parse_opt(&event_target_value(&ev));
                        draft.update(|d| d.min_amount = amount);
                    }
                />
                {error_for("min_amount")}
            </div>
            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("delivery_time_from")}</label>
                    <input
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.delivery_time_from.map(|v| v.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let from = parse_opt(&event_target_value(&ev));
                            draft.update(|d| d.delivery_time_from = from);
                        }
                    />
                    {error_for("delivery_time_from")}
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("delivery_time_to")}</label>
                    <input
                        type="number"
                        min="0"
                        class="form__input"
                        prop:value=move || draft.with(|d| d.delivery_time_to.map(|v| v.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let to = parse_opt(&event_target_value(&ev));
                            draft.update(|d| d.delivery_time_to = to);
                        }
                    />
                    {error_for("delivery_time_to")}
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("delivery_time_type")}</label>
                    <select
                        class="form__select"
                        prop:value=move || draft.with(|d| d.delivery_time_unit.clone())
                        on:change=move |ev| {
                            let unit = event_target_value(&ev);
                            draft.update(|d| d.delivery_time_unit = unit);
                        }
                    >
                        {DELIVERY_TIME_UNITS.iter().map(|u| view! { <option value=*u>{t(u)}</option> }).collect_view()}
                    </select>
                </div>
            </Flex>
        </div>
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("shop")}
                    <h1 class="page__title">{t("add.shop")}</h1>
                </div>
            </div>

            <div class="page__content">
                <ol class="steps">
                    {move || {
                        let current = cursor.with(|c| c.current);
                        SHOP_STEPS.iter().enumerate().map(|(i, step)| view! {
                            <li
                                class="steps__item"
                                class:steps__item--active={i == current}
                                class:steps__item--done={i < current}
                                on:click=move |_| cursor.set(WizardCursor::new(i, SHOP_STEPS.len()))
                            >
                                {t(step.title())}
                            </li>
                        }).collect_view()
                    }}
                </ol>

                <div class="card">
                    <div class="card__body">
                        {move || match cursor.with(|c| c.step()) {
                            Some(ShopStep::Main) | None => main_step().into_any(),
                            Some(ShopStep::Map) => map_step().into_any(),
                            Some(ShopStep::Social) => social_step().into_any(),
                            Some(ShopStep::Delivery) => delivery_step().into_any(),
                        }}
                    </div>
                </div>

                <div class="details-actions">
                    <Button
                        disabled=Signal::derive(move || cursor.with(|c| c.is_first()))
                        on_click=move |_| cursor.update(|c| c.prev())
                    >
                        {icon("chevron-left")}
                        {t("prev")}
                    </Button>
                    <Show
                        when=move || cursor.with(|c| c.is_last())
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| cursor.update(|c| c.next())>
                                {t("next")}
                                {icon("chevron-right")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=submit
                        >
                            {icon("save")}
                            {t("submit")}
                        </Button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_wizard_tolerates_missing_fields() {
        let saved: SavedWizard = serde_json::from_value(serde_json::json!({"step": 2})).unwrap();
        assert_eq!(saved.step, 2);
        assert!(saved.draft.is_none());
        let saved: SavedWizard = serde_json::from_value(serde_json::Value::Null).unwrap_or_default();
        assert_eq!(saved.step, 0);
    }
}
