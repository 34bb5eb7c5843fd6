//! Ключи вкладок.
//!
//! Список вкладка открывается под `AggregateRoot::full_name()` (`a101_regions`);
//! страницы одной записи добавляют `/{id}`.

use contracts::domain::a101_region::aggregate::Region;
use contracts::domain::a102_country::aggregate::Country;
use contracts::domain::a103_city::aggregate::City;
use contracts::domain::a104_area::aggregate::Area;
use contracts::domain::a105_order::aggregate::Order;
use contracts::domain::a106_discount::aggregate::Discount;
use contracts::domain::a107_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

pub const SHOP_ADD_TAB: &str = "a108_shop_add";
pub const POS_TAB: &str = "a110_pos";

const ORDER_PREFIX: &str = "a105_order/";
const DISCOUNT_PREFIX: &str = "a106_discount/";
const PRODUCT_CLONE_PREFIX: &str = "a107_product_clone/";
const NEW: &str = "new";

pub fn order_tab_key(id: i64) -> String {
    format!("{}{}", ORDER_PREFIX, id)
}

/// `a106_discount/new` for the create page
pub fn discount_tab_key(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{}{}", DISCOUNT_PREFIX, id),
        None => format!("{}{}", DISCOUNT_PREFIX, NEW),
    }
}

pub fn product_clone_tab_key(uuid: &Uuid) -> String {
    format!("{}{}", PRODUCT_CLONE_PREFIX, uuid)
}

/// What a tab key points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    Regions,
    Countries,
    Cities,
    Areas,
    Orders,
    Order(i64),
    Discounts,
    /// `None` creates a new discount
    Discount(Option<i64>),
    Products,
    ProductClone(Uuid),
    ShopAdd,
    Pos,
    Unknown,
}

impl TabRoute {
    pub fn parse(key: &str) -> Self {
        if let Some(id) = key.strip_prefix(ORDER_PREFIX) {
            return id.parse().map(TabRoute::Order).unwrap_or(TabRoute::Unknown);
        }
        if let Some(id) = key.strip_prefix(DISCOUNT_PREFIX) {
            if id == NEW {
                return TabRoute::Discount(None);
            }
            return id
                .parse()
                .map(|id| TabRoute::Discount(Some(id)))
                .unwrap_or(TabRoute::Unknown);
        }
        if let Some(uuid) = key.strip_prefix(PRODUCT_CLONE_PREFIX) {
            return Uuid::parse_str(uuid)
                .map(TabRoute::ProductClone)
                .unwrap_or(TabRoute::Unknown);
        }
        match key {
            SHOP_ADD_TAB => TabRoute::ShopAdd,
            POS_TAB => TabRoute::Pos,
            k if k == Region::full_name() => TabRoute::Regions,
            k if k == Country::full_name() => TabRoute::Countries,
            k if k == City::full_name() => TabRoute::Cities,
            k if k == Area::full_name() => TabRoute::Areas,
            k if k == Order::full_name() => TabRoute::Orders,
            k if k == Discount::full_name() => TabRoute::Discounts,
            k if k == Product::full_name() => TabRoute::Products,
            _ => TabRoute::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys() {
        assert_eq!(TabRoute::parse("a101_regions"), TabRoute::Regions);
        assert_eq!(TabRoute::parse("a104_areas"), TabRoute::Areas);
        assert_eq!(TabRoute::parse("a106_discounts"), TabRoute::Discounts);
        assert_eq!(TabRoute::parse(POS_TAB), TabRoute::Pos);
        assert_eq!(TabRoute::parse("a999_nothing"), TabRoute::Unknown);
    }

    #[test]
    fn test_detail_keys_round_trip() {
        assert_eq!(TabRoute::parse(&order_tab_key(15)), TabRoute::Order(15));
        assert_eq!(TabRoute::parse(&discount_tab_key(None)), TabRoute::Discount(None));
        assert_eq!(TabRoute::parse(&discount_tab_key(Some(3))), TabRoute::Discount(Some(3)));
        let uuid = Uuid::parse_str("3566bdf6-3a09-4488-8269-70a19f871bd0").unwrap();
        assert_eq!(
            TabRoute::parse(&product_clone_tab_key(&uuid)),
            TabRoute::ProductClone(uuid)
        );
        assert_eq!(TabRoute::parse("a105_order/abc"), TabRoute::Unknown);
    }
}
