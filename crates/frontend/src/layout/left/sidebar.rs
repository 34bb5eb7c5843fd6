//! Sidebar component with collapsible menu groups

use contracts::domain::a101_region::aggregate::Region;
use contracts::domain::a102_country::aggregate::Country;
use contracts::domain::a103_city::aggregate::City;
use contracts::domain::a104_area::aggregate::Area;
use contracts::domain::a105_order::aggregate::Order;
use contracts::domain::a106_discount::aggregate::Discount;
use contracts::domain::a107_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::layout::global_context::use_app_store;
use crate::layout::tabs::{tab_label_for_key, POS_TAB, SHOP_ADD_TAB};
use crate::shared::i18n::t;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(String, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "delivery_zones",
            label: "delivery.zones",
            icon: "map",
            items: vec![
                (Region::full_name(), "map"),
                (Country::full_name(), "globe"),
                (City::full_name(), "building"),
                (Area::full_name(), "pin"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "sales",
            icon: "orders",
            items: vec![
                (Order::full_name(), "orders"),
                (Discount::full_name(), "discount"),
                (POS_TAB.to_string(), "pos"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "catalog",
            icon: "products",
            items: vec![
                (Product::full_name(), "products"),
                (SHOP_ADD_TAB.to_string(), "shop"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let expanded_groups = RwSignal::new(vec!["delivery_zones".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |groups| {
                                    if let Some(pos) = groups.iter().position(|x| x == &gid) {
                                        groups.remove(pos);
                                    } else {
                                        groups.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{t(group.label)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_chevron))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(&key);
                                    let key_for_active = key.clone();
                                    let label_for_click = label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || store.is_active(&key_for_active)
                                            style:padding-left="10px"
                                            on:click=move |_| store.open_menu(&key, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(&key), key, "no label for {}", key);
            }
        }
    }
}
