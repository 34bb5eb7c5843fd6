use contracts::domain::a101_region::aggregate::Region;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list::ParamChange;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a101_region::ui::details::RegionDetails;
use crate::layout::global_context::use_app_store;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::row_actions::{ActiveCell, RowActions};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;

#[component]
#[allow(non_snake_case)]
pub fn RegionList() -> impl IntoView {
    let store = use_app_store();
    let list = ListController::<Region>::new(store, &[]);
    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);

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
                    {icon("map")}
                    <h1 class="page__title">{t(Region::list_name())}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        {t("add.region")}
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
                                <th class="table__header-cell">{t("active")}</th>
                                <th class="table__header-cell">{t("options")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || list.slice.with(|s| s.list.clone()).into_iter().map(|region| {
                                let id = region.id;
                                view! {
                                    <tr class="table__row" on:click=move |_| open_edit(id)>
                                        <td class="table__cell">{id}</td>
                                        <td class="table__cell">{region.display_title()}</td>
                                        <ActiveCell
                                            active=region.active
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
                            {move || if editing.get().is_some() { t("edit.region") } else { t("add.region") }}
                        </DialogTitle>
                        <DialogContent>
                            {move || modal_open.get().then(|| view! {
                                <RegionDetails id=editing.get_untracked() on_close=close_modal />
                            })}
                        </DialogContent>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
