/// Утилиты для списков: поле поиска с debounce
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед отправкой поискового запроса
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Начальное значение (из URL или menu data)
    #[prop(optional, into)]
    initial: String,
    /// Callback с итоговым значением; пустая строка сбрасывает поиск
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "search".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(initial);

    // Отмена предыдущего таймера происходит при его drop
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
