use contracts::shared::error::ValidationErrors;
use contracts::shared::i18n::{field_name, Locale, Translations};
use leptos::prelude::*;

use crate::layout::global_context::use_app_store;
use crate::shared::i18n::t;

/// One input per configured locale, bound to a [`Translations`] map.
/// Only the default locale is marked required.
#[component]
pub fn TranslationInputs(
    #[prop(into)] value: Signal<Translations>,
    /// `(locale, text)` on every keystroke
    on_change: Callback<(Locale, String)>,
    #[prop(into)] errors: Signal<ValidationErrors>,
    /// Field prefix: `title`, `description`
    #[prop(optional, into)]
    prefix: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let store = use_app_store();
    let prefix = prefix.unwrap_or_else(|| "title".to_string());
    let label = label.unwrap_or_else(|| prefix.clone());

    view! {
        <div class="translation-inputs">
            {move || {
                let languages = store.languages.get();
                let default_locale = languages.default_locale.clone();
                languages
                    .languages
                    .into_iter()
                    .map(|lang| {
                        let locale: Locale = lang.locale.clone();
                        let name = field_name(&prefix, &locale);
                        let required = locale == default_locale;
                        let error_name = name.clone();
                        let locale_for_input = locale.clone();
                        let current = move || {
                            value.with(|v| v.get(&locale).unwrap_or_default().to_string())
                        };
                        let on_input = move |ev: leptos::ev::Event| {
                            let text = event_target_value(&ev);
                            on_change.run((locale_for_input.clone(), text));
                        };
                        let field = if multiline {
                            view! {
                                <textarea class="form__textarea" name=name.clone() rows=3 prop:value=current on:input=on_input></textarea>
                            }
                            .into_any()
                        } else {
                            view! {
                                <input class="form__input" type="text" name=name.clone() prop:value=current on:input=on_input />
                            }
                            .into_any()
                        };
                        view! {
                            <div class="form__group">
                                <label class="form__label" class:form__label--required=required>
                                    {format!("{} ({})", t(&label), lang.title)}
                                </label>
                                {field}
                                {move || errors.with(|e| e.first(&error_name)).map(|msg| view! {
                                    <span class="form__error">{t(&msg)}</span>
                                })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
