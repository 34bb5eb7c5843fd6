//! Правая панель: чаты магазина

use crate::domain::a109_chat::ui::panel::ChatPanel;
use leptos::prelude::*;

#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <ChatPanel />
        </div>
    }
}
