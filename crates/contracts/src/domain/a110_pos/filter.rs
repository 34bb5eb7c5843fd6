//! Product filter of the POS screen

use crate::domain::common::{AggregateRoot, ApiScope, NamedRef};
use crate::shared::i18n::{title_or_dash, Translation};
use crate::shared::list::{ListParams, SelectOption};
use serde::{Deserialize, Serialize};

/// Category as returned by the public category search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub parent: Option<NamedRef>,
}

impl Category {
    /// Missing titles render as `N/A`
    pub fn to_option(&self) -> SelectOption {
        let title = title_or_dash(self.translation.as_ref());
        let label = if title == "-" { "N/A".to_string() } else { title };
        SelectOption::new(label, self.id)
    }
}

impl AggregateRoot for Category {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        title_or_dash(self.translation.as_ref())
    }

    fn aggregate_index() -> &'static str {
        "a110"
    }

    fn collection_name() -> &'static str {
        "categories/search"
    }

    fn element_name() -> &'static str {
        "category"
    }

    fn list_name() -> &'static str {
        "categories"
    }

    fn scope() -> ApiScope {
        ApiScope::Rest
    }
}

/// Brand as returned by the public brand list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

impl Brand {
    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.display_title(), self.id)
    }
}

impl AggregateRoot for Brand {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_title(&self) -> String {
        self.title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "N/A".to_string())
    }

    fn aggregate_index() -> &'static str {
        "a110"
    }

    fn collection_name() -> &'static str {
        "brands/paginate"
    }

    fn element_name() -> &'static str {
        "brand"
    }

    fn list_name() -> &'static str {
        "brands"
    }

    fn scope() -> ApiScope {
        ApiScope::Rest
    }
}

/// Params of the category search: main categories only, no empty search
pub fn category_search_params(search: Option<&str>) -> ListParams {
    let mut params = ListParams::default();
    params.filters.insert("type".into(), "main".into());
    params.search = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    params
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PosFilter {
    pub search: Option<String>,
    pub category: Option<SelectOption>,
    pub brand: Option<SelectOption>,
}

impl PosFilter {
    /// Published, active products of the seller's shop
    pub fn to_params(&self, shop_id: Option<i64>) -> ListParams {
        let mut params = ListParams::default();
        params.search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let filters = &mut params.filters;
        filters.insert("active".into(), "1".into());
        filters.insert("status".into(), "published".into());
        if let Some(shop_id) = shop_id {
            filters.insert("shop_id".into(), shop_id.to_string());
        }
        if let Some(brand) = &self.brand {
            filters.insert("brand_id".into(), brand.value.to_string());
        }
        if let Some(category) = &self.category {
            filters.insert("category_id".into(), category.value.to_string());
        }
        params
    }
}

/// Category select is narrower when the seller's shop also lists brands
pub fn category_column_span(shop_type: Option<&str>) -> u8 {
    if shop_type == Some("shop") {
        6
    } else {
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params() {
        let filter = PosFilter {
            search: Some("  tea ".into()),
            category: Some(SelectOption::new("Drinks", 4)),
            brand: None,
        };
        let params = filter.to_params(Some(501));
        assert_eq!(params.search.as_deref(), Some("tea"));
        assert_eq!(params.filter("active"), Some("1"));
        assert_eq!(params.filter("status"), Some("published"));
        assert_eq!(params.filter("shop_id"), Some("501"));
        assert_eq!(params.filter("category_id"), Some("4"));
        assert_eq!(params.filter("brand_id"), None);
    }

    #[test]
    fn test_category_search_omits_empty_search() {
        let params = category_search_params(Some(""));
        assert_eq!(params.search, None);
        assert_eq!(params.filter("type"), Some("main"));
        assert_eq!(category_search_params(Some("dr")).search.as_deref(), Some("dr"));
    }

    #[test]
    fn test_category_label_fallback() {
        let c = Category {
            id: 2,
            ..Default::default()
        };
        assert_eq!(c.to_option(), SelectOption::new("N/A", 2));
        assert_eq!(category_column_span(Some("shop")), 6);
        assert_eq!(category_column_span(None), 12);
    }

    #[test]
    fn test_brand_option_falls_back_to_na() {
        let brand = Brand { id: 3, title: None };
        assert_eq!(brand.to_option(), SelectOption::new("N/A", 3));
        assert_eq!(Brand::collection_path(), "/api/v1/rest/brands/paginate");
    }
}
