use contracts::domain::a106_discount::aggregate::{Discount, DiscountType};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ParamChange;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::layout::tabs::discount_tab_key;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{ActiveCell, RowActions};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;

fn format_amount(discount: &Discount, currency: &str) -> String {
    let price = discount.price.unwrap_or_default();
    match discount.kind {
        Some(DiscountType::Percent) => format!("{}%", price),
        _ => format!("{}{:.2}", currency, price),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DiscountList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<Discount>::new(store, &[]);
    let currency = store.currency_symbol();

    // Редактор скидки открывается отдельной вкладкой
    let open_editor = move |id: Option<i64>| {
        let title = match id {
            Some(id) => format!("{} #{}", t("edit.discount"), id),
            None => t("add.discount"),
        };
        store.open_menu(&discount_tab_key(id), &title);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("discount")}
                    <h1 class="page__title">{t(Discount::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_editor(None)>
                        {icon("plus")}
                        {t("add.discount")}
                    </Button>
                    <Button on_click=move |_| list.reload()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || list.slice.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{t("id")}</th>
                                <th class="table__header-cell">{t("image")}</th>
                                <th class="table__header-cell">{t("type")}</th>
                                <th class="table__header-cell">{t("price")}</th>
                                <th class="table__header-cell">{t("start.date")}</th>
                                <th class="table__header-cell">{t("end.date")}</th>
                                <th class="table__header-cell">{t("active")}</th>
                                <th class="table__header-cell">{t("options")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let currency = currency.clone();
                                list.slice.with(|s| s.list.clone()).into_iter().map(|discount| {
                                    let id = discount.id;
                                    let amount = format_amount(&discount, &currency);
                                    let kind = discount.kind.map(|k| t(k.as_str())).unwrap_or_default();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">
                                                {discount.img.clone().map(|src| view! {
                                                    <img class="table__thumb" src=src alt="" />
                                                })}
                                            </td>
                                            <td class="table__cell">{kind}</td>
                                            <td class="table__cell">{amount}</td>
                                            <td class="table__cell">{discount.start.clone().unwrap_or_default()}</td>
                                            <td class="table__cell">{discount.end.clone().unwrap_or_default()}</td>
                                            <ActiveCell
                                                active=discount.active
                                                busy=Signal::derive(move || list.toggling.with(|b| b.is_busy(id)))
                                                on_toggle=Callback::new(move |_| list.toggle_status(id))
                                            />
                                            <RowActions
                                                busy=Signal::derive(move || list.deleting.with(|b| b.is_busy(id)))
                                                on_edit=Callback::new(move |_| open_editor(Some(id)))
                                                on_delete=Callback::new(move |_| list.delete(id))
                                            />
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || list.slice.with(|s| s.loading)>
                        <div class="table__loading"><Spinner /></div>
                    </Show>
                </div>

                <PaginationControls
                    meta=Signal::derive(move || list.slice.with(|s| s.meta.clone()))
                    on_change=Callback::new(move |(page, per_page)| list.apply(ParamChange::Page { page, per_page }))
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_by_type() {
        let mut discount = Discount {
            kind: Some(DiscountType::Percent),
            price: Some(15.0),
            ..Discount::default()
        };
        assert_eq!(format_amount(&discount, "$"), "15%");
        discount.kind = Some(DiscountType::Fix);
        assert_eq!(format_amount(&discount, "$"), "$15.00");
    }
}
