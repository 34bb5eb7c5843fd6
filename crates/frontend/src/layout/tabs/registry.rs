//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::keys::TabRoute;
use crate::domain::a101_region::ui::list::RegionList;
use crate::domain::a102_country::ui::list::CountryList;
use crate::domain::a103_city::ui::list::CityList;
use crate::domain::a104_area::ui::list::AreaList;
use crate::domain::a105_order::ui::details::OrderDetails;
use crate::domain::a105_order::ui::list::OrderList;
use crate::domain::a106_discount::ui::details::DiscountDetails;
use crate::domain::a106_discount::ui::list::DiscountList;
use crate::domain::a107_product::ui::clone::ProductClone;
use crate::domain::a107_product::ui::list::ProductList;
use crate::domain::a108_shop::ui::add::ShopAdd;
use crate::domain::a110_pos::ui::catalog::PosCatalog;
use leptos::logging::log;
use leptos::prelude::*;

/// View of the tab with the given key
pub fn render_tab_content(key: &str) -> AnyView {
    match TabRoute::parse(key) {
        TabRoute::Regions => view! { <RegionList /> }.into_any(),
        TabRoute::Countries => view! { <CountryList /> }.into_any(),
        TabRoute::Cities => view! { <CityList /> }.into_any(),
        TabRoute::Areas => view! { <AreaList /> }.into_any(),
        TabRoute::Orders => view! { <OrderList /> }.into_any(),
        TabRoute::Order(id) => {
            log!("✅ Creating OrderDetails with id: {}", id);
            view! { <OrderDetails id=id /> }.into_any()
        }
        TabRoute::Discounts => view! { <DiscountList /> }.into_any(),
        TabRoute::Discount(id) => view! { <DiscountDetails id=id /> }.into_any(),
        TabRoute::Products => view! { <ProductList /> }.into_any(),
        TabRoute::ProductClone(uuid) => view! { <ProductClone uuid=uuid /> }.into_any(),
        TabRoute::ShopAdd => view! { <ShopAdd /> }.into_any(),
        TabRoute::Pos => view! { <PosCatalog /> }.into_any(),
        TabRoute::Unknown => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
