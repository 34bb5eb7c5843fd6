use contracts::domain::a107_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ParamChange;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

use crate::layout::global_context::use_app_store;
use crate::layout::tabs::product_clone_tab_key;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;

fn status_tag(status: Option<&str>) -> &'static str {
    match status {
        Some("published") => "tag tag--success",
        Some("pending") => "tag tag--warning",
        Some("unpublished") => "tag tag--danger",
        _ => "tag",
    }
}

/// Каталог товаров; из строки открывается мастер копирования
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<Product>::new(store, &[]);

    let open_clone = move |uuid: Uuid, title: String| {
        store.open_menu(
            &product_clone_tab_key(&uuid),
            &format!("{}: {}", t("clone"), title),
        );
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">{t(Product::list_name())}</h1>
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
                </div>

                {move || list.slice.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{t("id")}</th>
                                <th class="table__header-cell">{t("image")}</th>
                                <th class="table__header-cell">{t("title")}</th>
                                <th class="table__header-cell">{t("category")}</th>
                                <th class="table__header-cell">{t("shop")}</th>
                                <th class="table__header-cell">{t("status")}</th>
                                <th class="table__header-cell">{t("options")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.slice.with(|s| s.list.clone()).into_iter().map(|product| {
                                let uuid = product.uuid;
                                let title = product.display_title();
                                let title_for_clone = title.clone();
                                let status = product.status.clone().unwrap_or_default();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            {product.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="table__cell">
                                            {product.img.clone().map(|src| view! {
                                                <img class="table__thumb" src=src alt="" />
                                            })}
                                        </td>
                                        <td class="table__cell">{title}</td>
                                        <td class="table__cell">
                                            {product.category.as_ref().map(|c| c.title()).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell">
                                            {product.shop.as_ref().map(|s| s.title()).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell">
                                            <span class=status_tag(product.status.as_deref())>{t(&status)}</span>
                                        </td>
                                        <td class="table__cell">
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=move |_| open_clone(uuid, title_for_clone.clone())
                                            >
                                                {icon("copy")}
                                                {t("clone")}
                                            </Button>
                                        </td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tag() {
        assert_eq!(status_tag(Some("published")), "tag tag--success");
        assert_eq!(status_tag(None), "tag");
    }
}
