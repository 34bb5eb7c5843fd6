use chrono::NaiveDate;
use contracts::domain::a106_discount::aggregate::{is_selectable_date, parse_date, DATE_FORMAT};
use leptos::prelude::*;

/// Native date picker bound to `Option<NaiveDate>`.
/// With `min`, earlier days are disabled in the picker and rejected on input.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional)] min: Option<NaiveDate>,
) -> impl IntoView {
    let min_attr = min.map(|d| d.format(DATE_FORMAT).to_string());

    view! {
        <input
            type="date"
            class="form__input form__input--date"
            min=min_attr
            prop:value=move || value.get().map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
            on:input=move |ev| {
                let date = parse_date(&event_target_value(&ev))
                    .filter(|d| min.map_or(true, |m| is_selectable_date(*d, m)));
                on_change.run(date);
            }
        />
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
