use contracts::domain::a105_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use contracts::shared::format::{format_datetime, number_to_price};
use contracts::shared::list::ParamChange;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::layout::tabs::order_tab_key;
use crate::shared::auto_refresh::{auto_refresh_order, ORDER_REFRESH_SETTING};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;

const STATUS_FILTER: &str = "status";

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<Order>::new(store, &[STATUS_FILTER]);
    let status = RwSignal::new(
        list.params()
            .filter(STATUS_FILTER)
            .unwrap_or_default()
            .to_string(),
    );

    // Таймер пересоздаётся, когда приходят глобальные настройки
    let timer = StoredValue::new_local(None::<Interval>);
    Effect::new(move |_| {
        let setting = store.setting(ORDER_REFRESH_SETTING);
        timer.set_value(auto_refresh_order(setting.as_deref(), move || list.reload()));
    });

    Effect::new(move |prev: Option<()>| {
        let value = status.get();
        if prev.is_some() {
            let value = (!value.is_empty()).then_some(value);
            list.apply(ParamChange::Filter(STATUS_FILTER.to_string(), value));
        }
    });

    let open_order = move |id: i64| {
        store.open_menu(&order_tab_key(id), &format!("{} #{}", t("order"), id));
    };
    let symbol = store.currency_symbol();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">{t(Order::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| list.reload()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <SearchInput
                        initial=list.params().search.unwrap_or_default()
                        on_change=Callback::new(move |s: String| list.apply(ParamChange::Search(Some(s))))
                    />
                    <Select value=status>
                        <option value="">{t("all")}</option>
                        {move || store.order_statuses.get().into_iter().map(|item| view! {
                            <option value=item.name.clone()>{t(&item.name)}</option>
                        }).collect_view()}
                    </Select>
                </div>

                {move || list.slice.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{t("id")}</th>
                                <th class="table__header-cell">{t("client")}</th>
                                <th class="table__header-cell">{t("status")}</th>
                                <th class="table__header-cell">{t("products")}</th>
                                <th class="table__header-cell">{t("amount")}</th>
                                <th class="table__header-cell">{t("delivery.date")}</th>
                                <th class="table__header-cell">{t("created.at")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.slice.with(|s| s.list.clone()).into_iter().map(|order| {
                                let id = order.id;
                                let client = order
                                    .user
                                    .as_ref()
                                    .map(|u| u.full_name())
                                    .filter(|n| !n.is_empty())
                                    .or_else(|| order.username.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let created = order
                                    .created_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class="table__row" on:click=move |_| open_order(id)>
                                        <td class="table__cell">{order.display_title()}</td>
                                        <td class="table__cell">{client}</td>
                                        <td class="table__cell">
                                            <span class=format!("tag tag--{}", order.status.tag_color())>
                                                {t(order.status.as_str())}
                                            </span>
                                        </td>
                                        <td class="table__cell">{order.products_count()}</td>
                                        <td class="table__cell">{number_to_price(order.total_price, &symbol)}</td>
                                        <td class="table__cell">{order.delivery_date.clone().unwrap_or_else(|| "-".to_string())}</td>
                                        <td class="table__cell">{created}</td>
                                    </tr>
                                }
                            }).collect_view()}
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
