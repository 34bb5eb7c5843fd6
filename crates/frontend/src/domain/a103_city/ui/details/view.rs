use contracts::domain::a101_region::aggregate::Region;
use contracts::domain::a102_country::aggregate::Country;
use contracts::domain::a103_city::aggregate::CityForm;
use contracts::shared::list::SelectOption;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::translation_inputs::TranslationInputs;
use crate::shared::form_vm::FormViewModel;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::select_options::titled_options;

fn label_of(option: Option<&SelectOption>) -> String {
    option.map(|o| o.label.clone()).unwrap_or_default()
}

#[component]
pub fn CityDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let vm = FormViewModel::<CityForm>::new(use_app_store());
    vm.load_if_needed(id);

    let region_label = Signal::derive(move || vm.form.with(|f| label_of(f.region.as_ref())));
    let country_label = Signal::derive(move || vm.form.with(|f| label_of(f.country.as_ref())));
    // Список стран перезапрашивается только при смене региона
    let country_parent = Memo::new(move |_| vm.form.with(|f| f.country_filter()));

    view! {
        <div class="details-form">
            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <TranslationInputs
                value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                on_change=Callback::new(move |(locale, text)| vm.form.update(|f| f.title.set(locale, text)))
                errors=vm.errors
            />

            <div class="form__group">
                <label class="form__label form__label--required">{t("region")}</label>
                <InfiniteSelect
                    loader={|search: Option<String>, page: u32| titled_options::<Region>(search, page, None)}
                    selected_label=region_label
                    on_pick=Callback::new(move |option| vm.form.update(|f| f.select_region(Some(option))))
                    placeholder=t("select.region")
                />
                {move || vm.error_for("region_id").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
            </div>

            <div class="form__group">
                <label class="form__label form__label--required">{t("country")}</label>
                {move || {
                    let parent = country_parent.get();
                    let disabled = parent.is_none();
                    view! {
                        <InfiniteSelect
                            loader={move |search: Option<String>, page: u32| {
                                titled_options::<Country>(search, page, parent.clone())
                            }}
                            selected_label=country_label
                            on_pick=Callback::new(move |option| vm.form.update(|f| f.select_country(Some(option))))
                            disabled=disabled
                            placeholder=t("select.country")
                        />
                    }
                }}
                {move || vm.error_for("country_id").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
            </div>

            <div class="form__group">
                <label class="form__label">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|f| f.active = checked);
                        }
                    />
                    {t("active")}
                </label>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    on_click=move |_| vm.save_command(on_close)
                >
                    {icon("save")}
                    {t("save")}
                </Button>
                <Button on_click=move |_| on_close.run(())>
                    {icon("x")}
                    {t("cancel")}
                </Button>
            </div>
        </div>
    }
}
