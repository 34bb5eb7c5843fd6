use crate::layout::global_context::use_app_store;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.left_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
