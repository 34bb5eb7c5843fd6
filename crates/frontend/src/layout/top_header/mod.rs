//! TopHeader component - application top navigation bar.
//!
//! Panel toggles, project title, unread chat counter and the toast host.

use crate::layout::global_context::use_app_store;
use crate::shared::components::toaster::Toaster;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Counter text for the chat button; large counts are capped
fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let store = use_app_store();

    let is_sidebar_visible = move || store.left_open.get();
    let is_right_panel_visible = move || store.right_open.get();
    let unread = move || {
        store
            .chat
            .with(|c| unread_badge(c.chats.iter().map(|chat| chat.unread() as usize).sum()))
    };
    let title = store.config.with_value(|c| c.project_name.clone());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=is_sidebar_visible
                    on:click=move |_| store.toggle_left()
                    title=move || if is_sidebar_visible() { t("hide.navigation") } else { t("show.navigation") }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">{title}</span>
                <Show when=move || store.is_demo()>
                    <span class="tag tag--warning">{t("demo")}</span>
                </Show>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=is_right_panel_visible
                    on:click=move |_| store.toggle_right()
                    title=t("chats")
                >
                    {icon("chat")}
                    {move || unread().map(|n| view! { <span class="top-header__badge">{n}</span> })}
                </button>
            </div>

            <Toaster />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_badge() {
        assert_eq!(unread_badge(0), None);
        assert_eq!(unread_badge(7).as_deref(), Some("7"));
        assert_eq!(unread_badge(150).as_deref(), Some("99+"));
    }
}
