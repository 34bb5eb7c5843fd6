use super::model;
use contracts::domain::a105_order::aggregate::{
    extra_tags, AddressDisplay, Order, OrderDetail, TrackingUpdate,
};
use contracts::shared::format::{format_datetime, number_to_price};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{use_app_store, AppStore};
use crate::shared::auto_refresh::{auto_refresh_order, ORDER_REFRESH_SETTING};
use crate::shared::i18n::t;
use crate::shared::icons::icon;

fn load(store: AppStore, id: i64, order: RwSignal<Option<Order>>, tracking: RwSignal<TrackingUpdate>) {
    spawn_local(async move {
        match model::fetch_by_id(id).await {
            Ok(data) => {
                // Не затираем поля, которые пользователь сейчас редактирует
                if tracking.with_untracked(TrackingUpdate::is_empty) {
                    tracking.set(data.tracking());
                }
                order.set(Some(data));
            }
            Err(e) => store.notify_error(&e),
        }
    });
}

#[component]
pub fn OrderDetails(id: i64) -> impl IntoView {
    let store = use_app_store();
    let order = RwSignal::new(None::<Order>);
    let tracking = RwSignal::new(TrackingUpdate::default());
    let saving_tracking = RwSignal::new(false);

    load(store, id, order, tracking);

    let timer = StoredValue::new_local(None::<Interval>);
    Effect::new(move |_| {
        let setting = store.setting(ORDER_REFRESH_SETTING);
        timer.set_value(auto_refresh_order(setting.as_deref(), move || {
            load(store, id, order, tracking)
        }));
    });

    let save_tracking = move |_| {
        let body = tracking.get_untracked();
        saving_tracking.set(true);
        spawn_local(async move {
            match model::update_tracking(id, &body).await {
                Ok(()) => {
                    store.notify_success(t("successfully.updated"));
                    load(store, id, order, tracking);
                }
                Err(e) => store.notify_error(&e),
            }
            saving_tracking.set(false);
        });
    };

    let symbol = store.currency_symbol();
    let is_demo = store.is_demo();

    view! {
        <div class="page order-details">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">{format!("{} #{}", t("order"), id)}</h1>
                    {move || order.with(|o| o.as_ref().map(|o| o.status)).map(|status| view! {
                        <span class=format!("tag tag--{}", status.tag_color())>{t(status.as_str())}</span>
                    })}
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| load(store, id, order, tracking)>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match order.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(o) => {
                        let default_lang = store.languages.with(|l| l.default_locale.clone());
                        let step = store.order_statuses.with(|s| o.status_step(s));
                        let statuses = store.order_statuses.get();
                        let totals = o.totals(&symbol);
                        let documents = o.documents(&symbol);
                        let address = match o.address_display(&default_lang) {
                            AddressDisplay::Street { street, zipcode } => {
                                format!("{}, {}: {}", t(&street), t("zip.code"), t(&zipcode))
                            }
                            AddressDisplay::DeliveryPoint(point) => t(&point),
                            AddressDisplay::Digital => t("digital"),
                            AddressDisplay::Missing => t("no.address"),
                        };
                        let user = o.user.clone().unwrap_or_default();
                        let shows_tracking = o.shows_tracking();
                        let symbol = symbol.clone();
                        let delivery_date = format!(
                            "{} {}",
                            o.delivery_date.clone().unwrap_or_else(|| "-".to_string()),
                            o.delivery_time.clone().unwrap_or_default(),
                        );
                        let payment = model::payment_label(&o);
                        let note = o.note.clone().filter(|n| !n.is_empty());
                        let products_title = format!("{} ({})", t("products"), o.products_count());
                        let details = o.details.clone();
                        let created_at = format!(
                            "{}: {}",
                            t("created.at"),
                            o.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".to_string()),
                        );

                        view! {
                            {step.map(|current| view! {
                                <div class="card">
                                    <div class="card__body">
                                        <ol class="steps">
                                            {statuses.iter().enumerate().map(|(i, item)| view! {
                                                <li
                                                    class="steps__item"
                                                    class:steps__item--done={i < current}
                                                    class:steps__item--current={i == current}
                                                >
                                                    {t(&item.name)}
                                                </li>
                                            }).collect_view()}
                                        </ol>
                                    </div>
                                </div>
                            })}

                            <Flex gap=FlexGap::Medium>
                                <div class="card">
                                    <div class="card__header">{t("customer")}</div>
                                    <div class="card__body">
                                        <div class="form__group">
                                            <span class="form__label">{t("name")}</span>
                                            <span>{if user.full_name().is_empty() { "-".to_string() } else { user.full_name() }}</span>
                                        </div>
                                        <div class="form__group">
                                            <span class="form__label">{t("phone")}</span>
                                            <span>{t(&user.display_phone(is_demo))}</span>
                                        </div>
                                        <div class="form__group">
                                            <span class="form__label">{t("email")}</span>
                                            <span>{user.display_email(is_demo)}</span>
                                        </div>
                                    </div>
                                </div>

                                <div class="card">
                                    <div class="card__header">{t("delivery")}</div>
                                    <div class="card__body">
                                        <div class="form__group">
                                            <span class="form__label">{t("address")}</span>
                                            <span>{address}</span>
                                        </div>
                                        <div class="form__group">
                                            <span class="form__label">{t("delivery.date")}</span>
                                            <span>{delivery_date}</span>
                                        </div>
                                        <div class="form__group">
                                            <span class="form__label">{t("payment.type")}</span>
                                            <span>{payment}</span>
                                        </div>
                                        {note.map(|note| view! {
                                            <div class="form__group">
                                                <span class="form__label">{t("note")}</span>
                                                <span>{note}</span>
                                            </div>
                                        })}
                                    </div>
                                </div>
                            </Flex>

                            {shows_tracking.then(|| view! {
                                <div class="card">
                                    <div class="card__header">{t("tracking")}</div>
                                    <div class="card__body">
                                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                                            <div class="form__group">
                                                <label class="form__label">{t("track.name")}</label>
                                                <input
                                                    type="text"
                                                    class="form__input"
                                                    prop:value=move || tracking.with(|tr| tr.track_name.clone())
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        tracking.update(|tr| tr.track_name = value);
                                                    }
                                                />
                                            </div>
                                            <div class="form__group">
                                                <label class="form__label">{t("track.id")}</label>
                                                <input
                                                    type="text"
                                                    class="form__input"
                                                    prop:value=move || tracking.with(|tr| tr.track_id.clone())
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        tracking.update(|tr| tr.track_id = value);
                                                    }
                                                />
                                            </div>
                                            <div class="form__group">
                                                <label class="form__label">{t("track.url")}</label>
                                                <input
                                                    type="url"
                                                    class="form__input"
                                                    prop:value=move || tracking.with(|tr| tr.track_url.clone())
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        tracking.update(|tr| tr.track_url = value);
                                                    }
                                                />
                                            </div>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || saving_tracking.get())
                                                on_click=save_tracking
                                            >
                                                {icon("save")}
                                                {t("save")}
                                            </Button>
                                        </Flex>
                                    </div>
                                </div>
                            })}

                            <div class="card">
                                <div class="card__header">
                                    {products_title}
                                </div>
                                <div class="card__body">
                                    <OrderLines details=details symbol=symbol.clone() />
                                </div>
                            </div>

                            <div class="card">
                                <div class="card__body order-totals">
                                    <div class="order-totals__row"><span>{t("delivery.fee")}</span><span>{totals.delivery_fee}</span></div>
                                    <div class="order-totals__row"><span>{t("order.tax")}</span><span>{totals.tax}</span></div>
                                    <div class="order-totals__row"><span>{t("product")}</span><span>{totals.products}</span></div>
                                    <div class="order-totals__row"><span>{t("discount")}</span><span>{totals.discount}</span></div>
                                    <div class="order-totals__row"><span>{t("service.fee")}</span><span>{totals.service_fee}</span></div>
                                    <div class="order-totals__row"><span>{t("coupon")}</span><span>{totals.coupon}</span></div>
                                    <div class="order-totals__row order-totals__row--total"><span>{t("total.amount")}</span><span>{totals.total}</span></div>
                                </div>
                            </div>

                            <div class="card">
                                <div class="card__header">{t("documents")}</div>
                                <div class="card__body">
                                    <table class="table__data">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">{t("document")}</th>
                                                <th class="table__header-cell">{t("number")}</th>
                                                <th class="table__header-cell">{t("date")}</th>
                                                <th class="table__header-cell">{t("price")}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {documents.into_iter().map(|doc| view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{t(doc.document)}</td>
                                                    <td class="table__cell">{doc.number}</td>
                                                    <td class="table__cell">{doc.date}</td>
                                                    <td class="table__cell">{doc.price}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            </div>

                            <div class="order-details__footer">{created_at}</div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Line items; replaced stocks show the replacement under the original
#[component]
fn OrderLines(details: Vec<OrderDetail>, symbol: String) -> impl IntoView {
    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">{t("id")}</th>
                    <th class="table__header-cell">{t("product")}</th>
                    <th class="table__header-cell">{t("quantity")}</th>
                    <th class="table__header-cell">{t("price")}</th>
                    <th class="table__header-cell">{t("tax")}</th>
                    <th class="table__header-cell">{t("total.price")}</th>
                </tr>
            </thead>
            <tbody>
                {details.into_iter().map(|detail| {
                    let title = detail
                        .stock
                        .as_ref()
                        .map(|s| s.product_title())
                        .unwrap_or_else(|| "-".to_string());
                    let tags = detail.stock.as_ref().map(extra_tags).unwrap_or_default();
                    let replacement = detail.replace_stock.as_ref().map(|s| {
                        format!(
                            "{} {} x {}",
                            t("replaced.with"),
                            s.product_title(),
                            detail.replace_quantity.unwrap_or(detail.quantity),
                        )
                    });
                    view! {
                        <tr class="table__row">
                            <td class="table__cell">{detail.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                            <td class="table__cell">
                                <div>{title}</div>
                                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                                {replacement.map(|r| view! { <div class="order-lines__replace">{r}</div> })}
                            </td>
                            <td class="table__cell">{detail.quantity}</td>
                            <td class="table__cell">{number_to_price(detail.origin_price, &symbol)}</td>
                            <td class="table__cell">{number_to_price(detail.tax, &symbol)}</td>
                            <td class="table__cell">{number_to_price(detail.total_price, &symbol)}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
