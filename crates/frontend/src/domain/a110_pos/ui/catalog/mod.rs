use contracts::domain::a107_product::aggregate::RestProduct;
use contracts::domain::a110_pos::filter::{
    category_column_span, category_search_params, Brand, Category, PosFilter,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::format::number_to_price;
use contracts::shared::list::{ParamChange, SelectOption};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::select_options::{fetch_options, option_params};

/// Lowest stock price of a product card
fn min_price(product: &RestProduct) -> Option<f64> {
    product
        .stocks
        .iter()
        .filter_map(|s| s.price)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.min(p))))
}

fn label_of(option: &Option<SelectOption>) -> String {
    option.as_ref().map(|o| o.label.clone()).unwrap_or_default()
}

/// Каталог кассы: фильтр по поиску, категории и бренду
#[component]
#[allow(non_snake_case)]
pub fn PosCatalog() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(PosFilter::default());
    let shop_id = move || store.my_shop.with(|s| s.as_ref().map(|s| s.id));
    let list = ListController::<RestProduct>::with_params(
        store,
        filter.with_untracked(|f| f.to_params(store.my_shop.with_untracked(|s| s.as_ref().map(|s| s.id)))),
    );

    // Первый запуск пропускается: начальную выборку уже сделал контроллер
    Effect::new(move |prev: Option<()>| {
        let params = filter.with(|f| f.to_params(shop_id()));
        if prev.is_some() {
            list.fetch(params);
        }
    });

    let shop_kind = move || store.my_shop.with(|s| s.as_ref().and_then(|s| s.kind.clone()));
    let category_span = move || format!("grid-column: span {}", category_column_span(shop_kind().as_deref()));
    let symbol = store.currency_symbol();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("pos")}
                    <h1 class="page__title">{t("pos.system")}</h1>
                </div>
                <div class="page__header-right">
                    <Button on_click=move |_| list.reload()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel filter-panel--grid">
                    <div style="grid-column: span 12">
                        <SearchInput
                            placeholder=t("search.products")
                            on_change=Callback::new(move |s: String| {
                                filter.update(|f| f.search = Some(s).filter(|s| !s.is_empty()));
                            })
                        />
                    </div>
                    <div style=category_span>
                        <InfiniteSelect
                            loader={move |search: Option<String>, page: u32| {
                                let mut params = category_search_params(search.as_deref());
                                params.page = page;
                                fetch_options::<Category, _>(params, Category::to_option)
                            }}
                            selected_label=Signal::derive(move || filter.with(|f| label_of(&f.category)))
                            on_pick=Callback::new(move |option| filter.update(|f| f.category = Some(option)))
                            on_clear=Callback::new(move |_: ()| filter.update(|f| f.category = None))
                            placeholder=t("all.category")
                        />
                    </div>
                    <Show when=move || shop_kind().as_deref() == Some("shop")>
                        <div style="grid-column: span 6">
                            <InfiniteSelect
                                loader={move |search: Option<String>, page: u32| {
                                    fetch_options::<Brand, _>(option_params(search, page, None), Brand::to_option)
                                }}
                                selected_label=Signal::derive(move || filter.with(|f| label_of(&f.brand)))
                                on_pick=Callback::new(move |option| filter.update(|f| f.brand = Some(option)))
                                on_clear=Callback::new(move |_: ()| filter.update(|f| f.brand = None))
                                placeholder=t("all.brand")
                            />
                        </div>
                    </Show>
                </div>

                {move || list.slice.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="product-grid">
                    {move || {
                        let symbol = symbol.clone();
                        list.slice.with(|s| s.list.clone()).into_iter().map(|product| {
                            let price = number_to_price(min_price(&product), &symbol);
                            view! {
                                <div class="product-card">
                                    {product.img.clone().map(|src| view! {
                                        <img class="product-card__image" src=src alt="" />
                                    })}
                                    <div class="product-card__title">{product.display_title()}</div>
                                    <div class="product-card__price">{price}</div>
                                </div>
                            }
                        }).collect_view()
                    }}
                    <Show when=move || list.slice.with(|s| !s.loading && s.list.is_empty())>
                        <div class="product-grid__empty">{t("no.products")}</div>
                    </Show>
                </div>
                <Show when=move || list.slice.with(|s| s.loading)>
                    <div class="table__loading"><Spinner /></div>
                </Show>

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
    use serde_json::json;

    #[test]
    fn test_min_price() {
        let product: RestProduct = serde_json::from_value(json!({
            "id": 1,
            "stocks": [{"id": 1, "price": 9.0}, {"id": 2}, {"id": 3, "price": 4.5}]
        }))
        .unwrap();
        assert_eq!(min_price(&product), Some(4.5));
        assert_eq!(min_price(&RestProduct::default()), None);
    }
}
