//! Шаги мастера копирования товара

use super::view_model::ProductCloneViewModel;
use contracts::domain::a107_product::clone_draft::{color_values, CloneDraft, CloneStock};
use contracts::domain::a107_product::stock_tools::{
    clamp_quantity, generate_sku, StockPatch, SKU_LENGTH,
};
use contracts::domain::a110_pos::filter::{category_search_params, Brand, Category};
use contracts::shared::i18n::Translations;
use contracts::shared::list::SelectOption;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::infinite_select::InfiniteSelect;
use crate::shared::components::translation_inputs::TranslationInputs;
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::select_options::{fetch_options, option_params};

fn option_label(option: Option<&SelectOption>) -> String {
    option.map(|o| o.label.clone()).unwrap_or_default()
}

fn parse_opt<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[component]
pub fn MainStep(vm: ProductCloneViewModel) -> impl IntoView {
    let translations = move |pick: fn(&CloneDraft) -> &Translations| {
        Signal::derive(move || vm.draft.with(|d| d.as_ref().map(|d| pick(d).clone()).unwrap_or_default()))
    };
    let number_input = move |field: &'static str,
                             read: fn(&CloneDraft) -> Option<String>,
                             write: fn(&mut CloneDraft, &str)| {
        view! {
            <div class="form__group">
                <label class="form__label">{t(field)}</label>
                <input
                    type="number"
                    min="0"
                    class="form__input"
                    prop:value=move || vm.draft.with(|d| d.as_ref().and_then(read).unwrap_or_default())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        vm.update(|d| write(d, &raw));
                    }
                />
                {move || vm.error_for(field).map(|e| view! { <span class="form__error">{t(&e)}</span> })}
            </div>
        }
    };

    view! {
        <div class="details-form">
            <TranslationInputs
                value=translations(|d| &d.title)
                on_change=Callback::new(move |(locale, text)| vm.update(|d| d.title.set(locale, text)))
                errors=vm.errors
                prefix="title"
            />
            <TranslationInputs
                value=translations(|d| &d.description)
                on_change=Callback::new(move |(locale, text)| vm.update(|d| d.description.set(locale, text)))
                errors=vm.errors
                prefix="description"
                multiline=true
            />

            <Flex gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("category")}</label>
                    <InfiniteSelect
                        loader={move |search: Option<String>, page: u32| {
                            let mut params = category_search_params(search.as_deref());
                            params.page = page;
                            fetch_options::<Category, _>(params, Category::to_option)
                        }}
                        selected_label=Signal::derive(move || vm.draft.with(|d| option_label(d.as_ref().and_then(|d| d.category.as_ref()))))
                        on_pick=Callback::new(move |option| vm.update(|d| d.category = Some(option)))
                        placeholder=t("select.category")
                    />
                    {move || vm.error_for("category").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
                </div>
                <div class="form__group">
                    <label class="form__label">{t("brand")}</label>
                    <InfiniteSelect
                        loader={move |search: Option<String>, page: u32| {
                            fetch_options::<Brand, _>(option_params(search, page, None), Brand::to_option)
                        }}
                        selected_label=Signal::derive(move || vm.draft.with(|d| option_label(d.as_ref().and_then(|d| d.brand.as_ref()))))
                        on_pick=Callback::new(move |option| vm.update(|d| d.brand = Some(option)))
                        on_clear=Callback::new(move |_: ()| vm.update(|d| d.brand = None))
                        placeholder=t("select.brand")
                    />
                </div>
                <div class="form__group">
                    <label class="form__label form__label--required">{t("unit")}</label>
                    <input
                        class="form__input"
                        readonly=true
                        prop:value=move || vm.draft.with(|d| option_label(d.as_ref().and_then(|d| d.unit.as_ref())))
                    />
                    {move || vm.error_for("unit").map(|e| view! { <span class="form__error">{t(&e)}</span> })}
                </div>
            </Flex>

            <Flex gap=FlexGap::Medium>
                {number_input("min_qty", |d| d.min_qty.map(|v| v.to_string()), |d, raw| d.min_qty = parse_opt(raw))}
                {number_input("max_qty", |d| d.max_qty.map(|v| v.to_string()), |d, raw| d.max_qty = parse_opt(raw))}
                {number_input("tax", |d| d.tax.map(|v| v.to_string()), |d, raw| d.tax = parse_opt(raw))}
                {number_input("interval", |d| d.interval.map(|v| v.to_string()), |d, raw| d.interval = parse_opt(raw))}
                {number_input("age_limit", |d| d.age_limit.map(|v| v.to_string()), |d, raw| d.age_limit = parse_opt(raw))}
            </Flex>
        </div>
    }
}

/// Группы экстра-значений исходного товара; копия получает их как есть
#[component]
pub fn ExtrasStep(vm: ProductCloneViewModel) -> impl IntoView {
    let extras = move || vm.draft.with(|d| d.as_ref().map(|d| d.extras.clone()).unwrap_or_default());
    view! {
        <div class="card">
            <div class="card__body">
                {move || {
                    let groups = extras();
                    if groups.is_empty() {
                        return view! { <p class="text-muted">{t("no.extras")}</p> }.into_any();
                    }
                    groups.into_iter().map(|group| {
                        let is_color = group.is_color();
                        view! {
                            <div class="form__group">
                                <label class="form__label">{group.label.clone()}</label>
                                <div class="chips">
                                    {group.values.into_iter().map(|v| {
                                        let swatch = is_color.then(|| format!("background:{}", v.label));
                                        view! {
                                            <span class="chip">
                                                {swatch.map(|style| view! { <span class="chip__swatch" style=style></span> })}
                                                {v.label}
                                            </span>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn DigitalStep() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__body">
                <p>{t("digital.product.file.is.attached.after.creation")}</p>
            </div>
        </div>
    }
}

/// Строки стоков и панель "задать всем"
#[component]
pub fn StockStep(vm: ProductCloneViewModel) -> impl IntoView {
    let all_sku = RwSignal::new(String::new());
    let all_price = RwSignal::new(String::new());
    let all_quantity = RwSignal::new(String::new());
    let stock_count = move || vm.draft.with(|d| d.as_ref().map_or(0, |d| d.stocks.len()));

    view! {
        <div class="card">
            <div class="card__header">{t("set.all")}</div>
            <div class="card__body">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form__group">
                        <label class="form__label">{t("sku")}</label>
                        <input class="form__input" prop:value=move || all_sku.get()
                            on:input=move |ev| all_sku.set(event_target_value(&ev)) />
                    </div>
                    <Button size=ButtonSize::Small on_click=move |_| {
                        all_sku.set(generate_sku(&mut rand::thread_rng(), SKU_LENGTH));
                    }>
                        {t("generate")}
                    </Button>
                    <Button size=ButtonSize::Small on_click=move |_| {
                        let sku = all_sku.get_untracked();
                        if !sku.trim().is_empty() {
                            vm.set_all(StockPatch::Sku(sku));
                        }
                    }>
                        {t("apply")}
                    </Button>
                    <div class="form__group">
                        <label class="form__label">{t("price")}</label>
                        <input type="number" min="0" class="form__input" prop:value=move || all_price.get()
                            on:input=move |ev| all_price.set(event_target_value(&ev)) />
                    </div>
                    <Button size=ButtonSize::Small on_click=move |_| {
                        if let Some(price) = parse_opt::<f64>(&all_price.get_untracked()) {
                            vm.set_all(StockPatch::Price(price));
                        }
                    }>
                        {t("apply")}
                    </Button>
                    <div class="form__group">
                        <label class="form__label">{t("quantity")}</label>
                        <input type="number" min="0" class="form__input" prop:value=move || all_quantity.get()
                            on:input=move |ev| all_quantity.set(event_target_value(&ev)) />
                    </div>
                    <Button size=ButtonSize::Small on_click=move |_| {
                        if let Some(quantity) = parse_opt::<i64>(&all_quantity.get_untracked()) {
                            vm.set_all(StockPatch::Quantity(quantity));
                        }
                    }>
                        {t("apply")}
                    </Button>
                </Flex>
            </div>
        </div>

        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{t("id")}</th>
                        <th class="table__header-cell">{t("sku")}</th>
                        <th class="table__header-cell">{t("price")}</th>
                        <th class="table__header-cell">{t("quantity")}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..stock_count()).map(|index| {
                        let read = move |f: fn(&CloneStock) -> String| {
                            move || vm.draft.with(|d| d.as_ref().and_then(|d| d.stocks.get(index)).map(f).unwrap_or_default())
                        };
                        let sku_error = format!("stocks[{}].sku", index);
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{read(|s| s.id.to_string())}</td>
                                <td class="table__cell">
                                    <Flex gap=FlexGap::Small>
                                        <input class="form__input"
                                            prop:value=read(|s| s.sku.clone().unwrap_or_default())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                vm.update(|d| if let Some(s) = d.stocks.get_mut(index) {
                                                    s.sku = Some(value).filter(|v| !v.is_empty());
                                                });
                                            }
                                        />
                                        <Button size=ButtonSize::Small on_click=move |_| vm.generate_sku_for(index)>
                                            {icon("refresh")}
                                        </Button>
                                    </Flex>
                                    {move || vm.error_for(&sku_error).map(|e| view! { <span class="form__error">{t(&e)}</span> })}
                                </td>
                                <td class="table__cell">
                                    <input type="number" min="0" class="form__input"
                                        prop:value=read(|s| s.price.to_string())
                                        on:input=move |ev| {
                                            let price = parse_opt::<f64>(&event_target_value(&ev)).unwrap_or(0.0).max(0.0);
                                            vm.update(|d| if let Some(s) = d.stocks.get_mut(index) { s.price = price; });
                                        }
                                    />
                                </td>
                                <td class="table__cell">
                                    <input type="number" min="0" class="form__input"
                                        prop:value=read(|s| s.quantity.to_string())
                                        on:input=move |ev| {
                                            let quantity = clamp_quantity(parse_opt::<i64>(&event_target_value(&ev)).unwrap_or(0));
                                            vm.update(|d| if let Some(s) = d.stocks.get_mut(index) { s.quantity = quantity; });
                                        }
                                    />
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Изображения товара и цвета, к которым они относятся
#[component]
pub fn GalleryStep(vm: ProductCloneViewModel) -> impl IntoView {
    let new_url = RwSignal::new(String::new());
    let images = move || vm.draft.with(|d| d.as_ref().map(|d| d.images.clone()).unwrap_or_default());
    let colors = move || vm.draft.with(|d| d.as_ref().map(|d| color_values(&d.extras)).unwrap_or_default());

    view! {
        <div class="card">
            <div class="card__body">
                <div class="chips">
                    {move || colors().into_iter().map(|c| view! {
                        <span class="chip">
                            <span class="chip__swatch" style=format!("background:{}", c.label)></span>
                            {c.label}
                        </span>
                    }).collect_view()}
                </div>

                <div class="gallery">
                    {move || images().into_iter().map(|media| {
                        let uid = media.uid;
                        view! {
                            <div class="gallery__item">
                                {if media.is_video {
                                    view! { <video class="gallery__media" src=media.url controls=true></video> }.into_any()
                                } else {
                                    view! { <img class="gallery__media" src=media.url alt=media.name /> }.into_any()
                                }}
                                <button class="gallery__remove" on:click=move |_| vm.remove_image(uid)>
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <Flex gap=FlexGap::Small>
                    <input
                        type="url"
                        class="form__input"
                        placeholder="https://"
                        prop:value=move || new_url.get()
                        on:input=move |ev| new_url.set(event_target_value(&ev))
                    />
                    <Button on_click=move |_| {
                        vm.add_image(new_url.get_untracked());
                        new_url.set(String::new());
                    }>
                        {icon("plus")}
                        {t("add.image")}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[component]
pub fn PropertiesStep(vm: ProductCloneViewModel) -> impl IntoView {
    let row_ids = move || vm.draft.with(|d| d.as_ref().map(|d| d.properties.iter().map(|r| r.id).collect::<Vec<_>>()).unwrap_or_default());
    let row_value = move |id: usize, key: bool| {
        Signal::derive(move || {
            vm.draft.with(|d| {
                d.as_ref()
                    .and_then(|d| d.properties.iter().find(|r| r.id == id))
                    .map(|r| if key { r.key.clone() } else { r.value.clone() })
                    .unwrap_or_default()
            })
        })
    };

    view! {
        <div class="card">
            <div class="card__body">
                <For each=row_ids key=|id| *id let:id>
                    <Flex gap=FlexGap::Medium>
                        <TranslationInputs
                            value=row_value(id, true)
                            on_change=Callback::new(move |(locale, text)| vm.update(|d| {
                                if let Some(r) = d.properties.iter_mut().find(|r| r.id == id) {
                                    r.key.set(locale, text);
                                }
                            }))
                            errors=vm.errors
                            prefix=format!("properties[{}].key", id)
                            label=t("key")
                        />
                        <TranslationInputs
                            value=row_value(id, false)
                            on_change=Callback::new(move |(locale, text)| vm.update(|d| {
                                if let Some(r) = d.properties.iter_mut().find(|r| r.id == id) {
                                    r.value.set(locale, text);
                                }
                            }))
                            errors=vm.errors
                            prefix=format!("properties[{}].value", id)
                            label=t("value")
                        />
                        <Button size=ButtonSize::Small on_click=move |_| vm.update(|d| d.remove_property_row(id))>
                            {icon("delete")}
                        </Button>
                    </Flex>
                </For>
                <Button on_click=move |_| vm.update(CloneDraft::add_property_row)>
                    {icon("plus")}
                    {t("add.property")}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn FinishStep(vm: ProductCloneViewModel) -> impl IntoView {
    let summary = move || {
        vm.draft.with(|d| {
            d.as_ref().map(|d| {
                (
                    d.title.0.values().next().cloned().unwrap_or_default(),
                    option_label(d.category.as_ref()),
                    d.stocks.len(),
                    d.images.len(),
                )
            })
        })
    };

    view! {
        <div class="card">
            <div class="card__body">
                {move || summary().map(|(title, category, stocks, images)| view! {
                    <dl class="summary">
                        <dt>{t("title")}</dt><dd>{title}</dd>
                        <dt>{t("category")}</dt><dd>{category}</dd>
                        <dt>{t("stocks")}</dt><dd>{stocks}</dd>
                        <dt>{t("images")}</dt><dd>{images}</dd>
                    </dl>
                })}
                {move || (!vm.errors.with(|e| e.is_empty())).then(|| view! {
                    <div class="alert alert--error">{t("please.fix.errors.on.previous.steps")}</div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opt() {
        assert_eq!(parse_opt::<i64>(" 12 "), Some(12));
        assert_eq!(parse_opt::<f64>("abc"), None);
        assert_eq!(parse_opt::<i64>(""), None);
    }
}
