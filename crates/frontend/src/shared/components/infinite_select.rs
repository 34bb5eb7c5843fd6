//! Select whose options are fetched page by page from the server.
//!
//! Typing restarts the search at page 1; "more" loads the next page. Cascades
//! re-create the select when the parent value changes, so the loader always
//! sees the current parent.

use contracts::shared::error::ApiResult;
use contracts::shared::list::{InfiniteOptions, Paginated, SelectOption};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::layout::global_context::use_app_store;
use crate::shared::icons::icon;
use crate::shared::list_utils::SEARCH_DEBOUNCE_MS;

#[component]
pub fn InfiniteSelect<F, Fut>(
    /// Loads `(search, page)`
    loader: F,
    /// Text of the current selection; empty shows the placeholder
    #[prop(into)]
    selected_label: Signal<String>,
    on_pick: Callback<SelectOption>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView
where
    F: Fn(Option<String>, u32) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Paginated<SelectOption>>> + 'static,
{
    let store = use_app_store();
    let loader = StoredValue::new_local(loader);
    let options = RwSignal::new(InfiniteOptions::default());
    let open = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let load = move |page: u32| {
        let term = options.with_untracked(|o| o.search.clone());
        let request = loader.with_value(|f| f(term, page));
        loading.set(true);
        spawn_local(async move {
            match request.await {
                Ok(result) => options.update(|o| o.receive(page, result.data, &result.meta)),
                Err(e) => store.notify_error(&e),
            }
            loading.set(false);
        });
    };

    let restart = move |term: Option<String>| {
        let page = options.try_update(|o| o.restart(term)).unwrap_or(1);
        load(page);
    };

    let toggle_open = move |_| {
        if disabled.get_untracked() {
            return;
        }
        let now_open = !open.get_untracked();
        open.set(now_open);
        if now_open && options.with_untracked(|o| o.options.is_empty()) {
            restart(None);
        }
    };

    let on_search = move |value: String| {
        search.set(value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || restart(Some(value)));
        pending.set_value(Some(timeout));
    };

    let pick = move |option: SelectOption| {
        open.set(false);
        on_pick.run(option);
    };

    view! {
        <div class="infinite-select" class:infinite-select--disabled=move || disabled.get()>
            <div class="infinite-select__control" on:click=toggle_open>
                <span class="infinite-select__value">
                    {move || {
                        let label = selected_label.get();
                        if label.is_empty() { placeholder.clone() } else { label }
                    }}
                </span>
                {on_clear.map(|clear| view! {
                    <button
                        class="infinite-select__clear"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            clear.run(());
                        }
                    >
                        {icon("x")}
                    </button>
                })}
                {icon("chevron-down")}
            </div>
            <Show when=move || open.get()>
                <div class="infinite-select__dropdown">
                    <input
                        type="text"
                        class="infinite-select__search"
                        prop:value=move || search.get()
                        on:input=move |ev| on_search(event_target_value(&ev))
                    />
                    <ul class="infinite-select__options">
                        <For
                            each=move || options.with(|o| o.options.clone())
                            key=|o| o.value
                            children=move |option| {
                                let label = option.label.clone();
                                view! {
                                    <li class="infinite-select__option" on:click=move |_| pick(option.clone())>
                                        {label}
                                    </li>
                                }
                            }
                        />
                    </ul>
                    {move || options.with(|o| o.next_page()).map(|next| view! {
                        <button
                            class="button button--secondary infinite-select__more"
                            disabled=move || loading.get()
                            on:click=move |_| load(next)
                        >
                            "more"
                        </button>
                    })}
                </div>
            </Show>
        </div>
    }
}
