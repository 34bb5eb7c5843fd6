//! Заголовки вкладок: единственное место, где ключ превращается в текст.

use super::keys::TabRoute;
use crate::shared::i18n::t;

/// Readable title of a tab. Unknown keys are shown as-is.
pub fn tab_label_for_key(key: &str) -> String {
    match TabRoute::parse(key) {
        TabRoute::Regions => t("regions"),
        TabRoute::Countries => t("countries"),
        TabRoute::Cities => t("cities"),
        TabRoute::Areas => t("areas"),
        TabRoute::Orders => t("orders"),
        TabRoute::Order(id) => format!("{} #{}", t("order"), id),
        TabRoute::Discounts => t("discounts"),
        TabRoute::Discount(Some(id)) => format!("{} #{}", t("edit.discount"), id),
        TabRoute::Discount(None) => t("add.discount"),
        TabRoute::Products => t("products"),
        TabRoute::ProductClone(_) => t("product.clone"),
        TabRoute::ShopAdd => t("add.shop"),
        TabRoute::Pos => t("pos.system"),
        TabRoute::Unknown => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a105_order/7"), format!("{} #7", t("order")));
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }
}
