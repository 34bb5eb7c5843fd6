use contracts::shared::toast::ToastKind;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_store, AppAction};
use crate::shared::i18n::t;

/// Host of the toast slice; newest toast at the bottom
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts.with(|s| s.items.clone())
                key=|toast| toast.id
                children=move |toast| {
                    let intent = match toast.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                        ToastKind::Info => MessageBarIntent::Info,
                    };
                    let id = toast.id;
                    view! {
                        <div class="toaster__item" on:click=move |_| store.dispatch(AppAction::DismissToast(id))>
                            <MessageBar intent=intent>
                                {t(&toast.message)}
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
