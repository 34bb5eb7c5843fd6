use super::tab::Tab;
use crate::layout::global_context::use_app_store;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs-bar">
                <For
                    each=move || store.menu.with(|m| m.menu_items.clone())
                    key=|item| (item.id.clone(), item.name.clone())
                    children=move |item| view! { <Tab item=item /> }
                />
            </div>
            {children()}
        </div>
    }
}
