use contracts::domain::a101_region::aggregate::RegionForm;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_store;
use crate::shared::components::translation_inputs::TranslationInputs;
use crate::shared::form_vm::FormViewModel;
use crate::shared::i18n::t;
use crate::shared::icons::icon;

#[component]
pub fn RegionDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let vm = FormViewModel::<RegionForm>::new(use_app_store());
    vm.load_if_needed(id);

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
