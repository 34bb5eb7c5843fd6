use contracts::domain::a103_city::aggregate::City;
use contracts::domain::a104_area::aggregate::Area;
use contracts::domain::common::{AggregateRoot, NamedRef};
use contracts::shared::list::{ParamChange, SelectOption};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a104_area::ui::details::AreaDetails;
use crate::layout::global_context::use_app_store;
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{ActiveCell, RowActions};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::select_options::titled_options;

const CITY_FILTER: &str = "city_id";

#[component]
#[allow(non_snake_case)]
pub fn AreaList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<Area>::new(store, &[CITY_FILTER]);
    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);

    let city_label = RwSignal::new(
        list.params()
            .filter(CITY_FILTER)
            .map(|id| format!("#{}", id))
            .unwrap_or_default(),
    );

    let pick_city = Callback::new(move |option: SelectOption| {
        city_label.set(option.label.clone());
        list.apply(ParamChange::Filter(
            CITY_FILTER.to_string(),
            Some(option.value.to_string()),
        ));
    });
    let clear_city = Callback::new(move |_: ()| {
        city_label.set(String::new());
        list.apply(ParamChange::Filter(CITY_FILTER.to_string(), None));
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
                    {icon("pin")}
                    <h1 class="page__title">{t(Area::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        {t("add.area")}
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
                        loader={|search: Option<String>, page: u32| titled_options::<City>(search, page, None)}
                        selected_label=city_label
                        on_pick=pick_city
                        on_clear=clear_city
                        placeholder=t("select.city")
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
                                <th class="table__header-cell">{t("city")}</th>
                                <th class="table__header-cell">{t("active")}</th>
                                <th class="table__header-cell">{t("options")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.slice.with(|s| s.list.clone()).into_iter().map(|area| {
                                let id = area.id;
                                let ref_title = |r: Option<&NamedRef>| r.map(NamedRef::title).unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class="table__row" on:click=move |_| open_edit(id)>
                                        <td class="table__cell">{id}</td>
                                        <td class="table__cell">{area.display_title()}</td>
                                        <td class="table__cell">{ref_title(area.region.as_ref())}</td>
                                        <td class="table__cell">{ref_title(area.country.as_ref())}</td>
                                        <td class="table__cell">{ref_title(area.city.as_ref())}</td>
                                        <ActiveCell
                                            active=area.active
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
                            {move || if editing.get().is_some() { t("edit.area") } else { t("add.area") }}
                        </DialogTitle>
                        <DialogContent>
                            {move || modal_open.get().then(|| view! {
                                <AreaDetails id=editing.get_untracked() on_close=close_modal />
                            })}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
