use crate::app_shell::AppShell;
use crate::layout::global_context::AppStore;
use crate::shared::config::app_config;
use crate::system::settings::load_bootstrap;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Единое хранилище панели, доступно всем компонентам через context
    let store = AppStore::new(app_config().clone());
    provide_context(store);
    load_bootstrap(store);

    view! {
        <AppShell />
    }
}
