use contracts::shared::menu::MenuItem;
use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::use_app_store;
use crate::shared::icons::icon;

/// Заголовок вкладки в полосе над контентом
#[component]
pub fn Tab(item: MenuItem) -> impl IntoView {
    let store = use_app_store();

    let id_for_active = item.id.clone();
    let is_active = Memo::new(move |_| store.is_active(&id_for_active));

    let id_for_click = item.id.clone();
    let on_click = move |_| store.activate_menu(&id_for_click);

    let id_for_close = item.id.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        store.close_menu(&id_for_close);
    };

    let title = item.name.clone();

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=title>
            <span>{item.name}</span>
            <button class="tab-close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
