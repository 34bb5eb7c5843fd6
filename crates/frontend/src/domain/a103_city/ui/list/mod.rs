use contracts::domain::a102_country::aggregate::Country;
use contracts::domain::a103_city::aggregate::City;
use contracts::domain::common::{AggregateRoot, NamedRef};
use contracts::shared::list::{ParamChange, SelectOption};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a103_city::ui::details::CityDetails;
use crate::layout::global_context::use_app_store;
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{ActiveCell, RowActions};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::select_options::titled_options;

const COUNTRY_FILTER: &str = "country_id";

#[component]
#[allow(non_snake_case)]
pub fn CityList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<City>::new(store, &[COUNTRY_FILTER]);
    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);

    let country_label = RwSignal::new(
        list.params()
            .filter(COUNTRY_FILTER)
            .map(|id| format!("#{}", id))
            .unwrap_or_default(),
    );

    let pick_country = Callback::new(move |option: SelectOption| {
        country_label.set(option.label.clone());
        list.apply(ParamChange::Filter(
            COUNTRY_FILTER.to_string(),
            Some(option.value.to_string()),
        ));
    });
    let clear_country = Callback::new(move |_: ()| {
        country_label.set(String::new());
        list.apply(ParamChange::Filter(COUNTRY_FILTER.to_string(), None));
    });

    let open_create = move |_| {
        editing.set(None);
        modal_open.set(true);
    };
    let open_edit = move |id: i64| {
        editing.set(Some(id));
        modal_open.set(true);
    };
    let close_modal = Callback::new(move |_: ()| modal_open.set(false));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("building")}
                    <h1 class="page__title">{t(City::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        {t("add.city")}
                    </Button>
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
                    <InfiniteSelect
                        loader={|search: Option<String>, page: u32| titled_options::<Country>(search, page, None)}
                        selected_label=country_label
                        on_pick=pick_country
                        on_clear=clear_country
                        placeholder=t("select.country")
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
                                <th class="table__header-cell">{t("title")}</th>
                                <th class="table__header-cell">{t("region")}</th>
                                <th class="table__header-cell">{t("country")}</th>
                                <th class="table__header-cell">{t("active")}</th>
                                <th class="table__header-cell">{t("options")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.slice.with(|s| s.list.clone()).into_iter().map(|city| {
                                let id = city.id;
                                let ref_title = |r: Option<&NamedRef>| r.map(NamedRef::title).unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class="table__row" on:click=move |_| open_edit(id)>
                                        <td class="table__cell">{id}</td>
                                        <td class="table__cell">{city.display_title()}</td>
                                        <td class="table__cell">{ref_title(city.region.as_ref())}</td>
                                        <td class="table__cell">{ref_title(city.country.as_ref())}</td>
                                        <ActiveCell
                                            active=city.active
                                            busy=Signal::derive(move || list.toggling.with(|b| b.is_busy(id)))
                                            on_toggle=Callback::new(move |_| list.toggle_status(id))
                                        />
                                        <RowActions
                                            busy=Signal::derive(move || list.deleting.with(|b| b.is_busy(id)))
                                            on_edit=Callback::new(move |_| open_edit(id))
                                            on_delete=Callback::new(move |_| list.delete(id))
                                        />
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

            <Dialog open=modal_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || if editing.get().is_some() { t("edit.city") } else { t("add.city") }}
                        </DialogTitle>
                        <DialogContent>
                            {move || modal_open.get().then(|| view! {
                                <CityDetails id=editing.get_untracked() on_close=close_modal />
                            })}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
