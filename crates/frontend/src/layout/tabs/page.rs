//! TabPage component - wrapper для отображения контента таба
//!
//! Контент создаётся один раз при открытии и живёт до закрытия; неактивная
//! вкладка только скрывается.

use super::registry::render_tab_content;
use crate::layout::global_context::use_app_store;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab_key: String) -> impl IntoView {
    let store = use_app_store();
    let key_for_active = tab_key.clone();
    let is_active = move || store.is_active(&key_for_active);

    log!("🔨 TabPage CREATED for: '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", key_for_cleanup);
    });

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
