use super::steps::{DigitalStep, ExtrasStep, FinishStep, GalleryStep, MainStep, PropertiesStep, StockStep};
use super::view_model::ProductCloneViewModel;
use contracts::domain::a107_product::wizard::WizardStep;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

use crate::layout::global_context::use_app_store;
use crate::shared::i18n::t;
use crate::shared::icons::icon;

/// Мастер копирования товара: шаги зависят от `digital` и наличия цветов
#[component]
pub fn ProductClone(uuid: Uuid) -> impl IntoView {
    let store = use_app_store();
    let vm = ProductCloneViewModel::new(store, uuid);
    vm.load();

    let is_last = move || {
        let count = vm.steps().len();
        count == 0 || vm.current_index() + 1 >= count
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("copy")}
                    <h1 class="page__title">{t("product.clone")}</h1>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.loading.get()>
                    <div class="table__loading"><Spinner /></div>
                </Show>

                <ol class="steps">
                    {move || {
                        let current = vm.current_index();
                        vm.steps().into_iter().enumerate().map(|(i, step)| view! {
                            <li
                                class="steps__item"
                                class:steps__item--active={i == current}
                                class:steps__item--done={i < current}
                                on:click=move |_| vm.go_to(i)
                            >
                                {t(step.title())}
                            </li>
                        }).collect_view()
                    }}
                </ol>

                {move || vm.current_step().map(|step| match step {
                    WizardStep::Main => view! { <MainStep vm=vm /> }.into_any(),
                    WizardStep::Extras => view! { <ExtrasStep vm=vm /> }.into_any(),
                    WizardStep::Digital => view! { <DigitalStep /> }.into_any(),
                    WizardStep::Stock => view! { <StockStep vm=vm /> }.into_any(),
                    WizardStep::Gallery => view! { <GalleryStep vm=vm /> }.into_any(),
                    WizardStep::Properties => view! { <PropertiesStep vm=vm /> }.into_any(),
                    WizardStep::Finish => view! { <FinishStep vm=vm /> }.into_any(),
                })}

                <div class="details-actions">
                    <Button
                        disabled=Signal::derive(move || vm.current_index() == 0)
                        on_click=move |_| vm.prev()
                    >
                        {icon("chevron-left")}
                        {t("prev")}
                    </Button>
                    <Show
                        when=is_last
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next()>
                                {t("next")}
                                {icon("chevron-right")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.saving.get() || vm.draft.with(Option::is_none))
                            on_click=move |_| vm.save_command()
                        >
                            {icon("save")}
                            {t("submit")}
                        </Button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
