use super::view_model::DiscountDetailsViewModel;
use contracts::domain::a106_discount::aggregate::{
    stock_option, stock_search_params, Discount, DiscountType,
};
use contracts::domain::a107_product::aggregate::SellerStock;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::layout::tabs::discount_tab_key;
use crate::shared::components::date_input::{today, DateInput};
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::select_options::fetch_options;

#[component]
pub fn DiscountDetails(id: Option<i64>) -> impl IntoView {
    let store = use_app_store();
    let vm = DiscountDetailsViewModel::new(store, id);
    vm.load_if_needed();

    let tab_key = discount_tab_key(id);
    // После сохранения вкладка редактора закрывается, список открывается
    let on_saved = Callback::new(move |_: ()| {
        store.close_menu(&tab_key);
        store.open_menu(&Discount::full_name(), &t(Discount::list_name()));
    });

    let min_date = today();
    let field_error = move |field: &'static str| {
        move || vm.error_for(field).map(|e| view! { <span class="form__error">{t(&e)}</span> })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("discount")}
                    <h1 class="page__title">
                        {if id.is_some() { t("edit.discount") } else { t("add.discount") }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.loading.get()>
                    <Spinner />
                </Show>

                <div class="card">
                    <div class="card__body details-form">
                        <Flex gap=FlexGap::Medium>
                            <div class="form__group">
                                <label class="form__label form__label--required">{t("type")}</label>
                                <select
                                    class="form__select"
                                    prop:value=move || vm.form.with(|f| f.kind.map(|k| k.as_str()).unwrap_or_default().to_string())
                                    on:change=move |ev| {
                                        let kind = DiscountType::parse(&event_target_value(&ev));
                                        vm.form.update(|f| f.kind = kind);
                                    }
                                >
                                    <option value="">{t("select")}</option>
                                    <option value=DiscountType::Fix.as_str()>{t("fix")}</option>
                                    <option value=DiscountType::Percent.as_str()>{t("percent")}</option>
                                </select>
                                {field_error("type")}
                            </div>

                            <div class="form__group">
                                <label class="form__label form__label--required">{t("price")}</label>
                                <input
                                    type="number"
                                    min="0"
                                    step="any"
                                    class="form__input"
                                    prop:value=move || vm.form.with(|f| f.price.map(|p| p.to_string()).unwrap_or_default())
                                    on:input=move |ev| {
                                        let price = event_target_value(&ev).trim().parse::<f64>().ok();
                                        vm.form.update(|f| f.price = price);
                                    }
                                />
                                {field_error("price")}
                            </div>
                        </Flex>

                        <Flex gap=FlexGap::Medium>
                            <div class="form__group">
                                <label class="form__label form__label--required">{t("start.date")}</label>
                                <DateInput
                                    value=Signal::derive(move || vm.form.with(|f| f.start))
                                    on_change=Callback::new(move |date| vm.form.update(|f| f.start = date))
                                    min=min_date
                                />
                                {field_error("start")}
                            </div>
                            <div class="form__group">
                                <label class="form__label form__label--required">{t("end.date")}</label>
                                <DateInput
                                    value=Signal::derive(move || vm.form.with(|f| f.end))
                                    on_change=Callback::new(move |date| vm.form.update(|f| f.end = date))
                                    min=min_date
                                />
                                {field_error("end")}
                            </div>
                        </Flex>

                        <div class="form__group">
                            <label class="form__label form__label--required">{t("products")}</label>
                            {move || {
                                let shop_id = store.my_shop.with(|s| s.as_ref().map(|s| s.id));
                                view! {
                                    <InfiniteSelect
                                        loader={move |search: Option<String>, page: u32| {
                                            let mut params = stock_search_params(search, shop_id.unwrap_or_default());
                                            params.page = page;
                                            fetch_options::<SellerStock, _>(params, |s: &SellerStock| stock_option(&s.0))
                                        }}
                                        selected_label=Signal::derive(String::new)
                                        on_pick=Callback::new(move |option| vm.add_product(option))
                                        disabled=shop_id.is_none()
                                        placeholder=t("select.product")
                                    />
                                }
                            }}
                            <div class="chips">
                                {move || vm.form.with(|f| f.products.clone()).into_iter().map(|product| {
                                    let value = product.value;
                                    view! {
                                        <span class="chip">
                                            {product.label}
                                            <button class="chip__remove" on:click=move |_| vm.remove_product(value)>
                                                {icon("x")}
                                            </button>
                                        </span>
                                    }
                                }).collect_view()}
                            </div>
                            {field_error("products")}
                        </div>

                        <div class="form__group">
                            <label class="form__label form__label--required">{t("image")}</label>
                            <input
                                type="url"
                                class="form__input"
                                placeholder="https://"
                                prop:value=move || vm.form.with(|f| f.image.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.image = if value.trim().is_empty() { None } else { Some(value) };
                                    });
                                }
                            />
                            {move || vm.form.with(|f| f.image.clone()).map(|src| view! {
                                <img class="form__preview" src=src alt="" />
                            })}
                            {field_error("images")}
                        </div>

                        <div class="details-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                                on_click=move |_| vm.save_command(on_saved)
                            >
                                {icon("save")}
                                {t("save")}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
