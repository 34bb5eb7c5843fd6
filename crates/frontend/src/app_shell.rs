//! Application Shell - корневые компоненты приложения
//!
//! - `AppShell` - точка входа layout
//! - `MainLayout` - Shell + Sidebar + вкладки + чаты

use crate::layout::global_context::use_app_store;
use crate::layout::left::Sidebar;
use crate::layout::right::RightPanel;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Main application layout с Sidebar, Tabs и RightPanel.
///
/// Инициализирует синхронизацию активной вкладки с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let store = use_app_store();

    store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || store.menu.with(|m| m.menu_items.iter().map(|i| i.id.clone()).collect::<Vec<_>>())
                        key=|id| id.clone()
                        children={move |id: String| view! { <TabPage tab_key=id /> }}
                    />
                }.into_any()
            }
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! { <MainLayout /> }
}
