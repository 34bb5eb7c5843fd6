use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::t;
use crate::shared::icons::icon;

/// Ячейка с переключателем `active`.
///
/// Пока запрос в полёте, чекбокс заблокирован и показан спиннер; значение
/// меняется только после перезагрузки списка.
#[component]
pub fn ActiveCell(
    active: bool,
    #[prop(into)] busy: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=active
                prop:disabled=move || busy.get()
                // Состояние приходит с сервера после refetch
                on:change=move |_| on_toggle.run(())
            />
            <Show when=move || busy.get()>
                <Spinner size=SpinnerSize::Tiny />
            </Show>
        </td>
    }
}

/// Edit / delete buttons of a table row. Delete asks for confirmation.
#[component]
pub fn RowActions(
    #[prop(into)] busy: Signal<bool>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let confirm_delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&t("delete.this.record")).ok())
            .unwrap_or(false);
        if confirmed {
            on_delete.run(());
        }
    };

    view! {
        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
            <Space>
                <Button size=ButtonSize::Small on_click=move |_| on_edit.run(())>
                    {icon("edit")}
                </Button>
                <Button
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || busy.get())
                    on_click=confirm_delete
                >
                    {move || if busy.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                    } else {
                        icon("delete")
                    }}
                </Button>
            </Space>
        </td>
    }
}
