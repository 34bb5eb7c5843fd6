use contracts::domain::a101_region::aggregate::Region;
use contracts::domain::a102_country::aggregate::CountryForm;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::translation_inputs::TranslationInputs;
use crate::shared::form_vm::FormViewModel;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::select_options::titled_options;

#[component]
pub fn CountryDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let vm = FormViewModel::<CountryForm>::new(use_app_store());
    vm.load_if_needed(id);

    let region_label = Signal::derive(move || {
        vm.form
            .with(|f| f.region.as_ref().map(|r| r.label.clone()))
            .unwrap_or_default()
    });
    let image = move || vm.form.with(|f| f.image.clone());

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
                    on_pick=Callback::new(move |option| vm.form.update(|f| f.region = Some(option)))
                    placeholder=t("select.region")
                />
                {move || vm.error_for("region_id").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
            </div>

            <div class="form__group">
                <label class="form__label form__label--required">{t("code")}</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || vm.form.with(|f| f.code.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| f.code = value);
                    }
                />
                {move || vm.error_for("code").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
            </div>

            <div class="form__group">
                <label class="form__label form__label--required">{t("image")}</label>
                <input
                    type="url"
                    class="form__input"
                    placeholder="https://"
                    prop:value=move || image().unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| {
                            f.image = if value.trim().is_empty() { None } else { Some(value) };
                        });
                    }
                />
                {move || image().map(|src| view! { <img class="form__preview" src=src alt="" /> })}
                {move || vm.error_for("images").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
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
