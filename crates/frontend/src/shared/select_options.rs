//! Loaders for [`InfiniteSelect`](crate::shared::components::infinite_select::InfiniteSelect).

use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiResult;
use contracts::shared::list::{ListParams, Paginated, SelectOption};
use serde::de::DeserializeOwned;

use super::rest;

/// Fetch one page of `A` and map every row to an option
pub async fn fetch_options<A, M>(params: ListParams, map: M) -> ApiResult<Paginated<SelectOption>>
where
    A: AggregateRoot + DeserializeOwned,
    M: Fn(&A) -> SelectOption,
{
    let page = rest::list::<A>(&params).await?;
    Ok(Paginated {
        data: page.data.iter().map(map).collect(),
        meta: page.meta,
    })
}

/// Options labelled by the entity title, optionally narrowed to one parent
/// (`region_id`, `country_id`, ...)
pub async fn titled_options<A>(
    search: Option<String>,
    page: u32,
    parent: Option<(&'static str, String)>,
) -> ApiResult<Paginated<SelectOption>>
where
    A: AggregateRoot<Id = i64> + DeserializeOwned,
{
    fetch_options::<A, _>(option_params(search, page, parent), |a: &A| {
        SelectOption::new(a.display_title(), a.id())
    })
    .await
}

pub fn option_params(
    search: Option<String>,
    page: u32,
    parent: Option<(&'static str, String)>,
) -> ListParams {
    let mut params = ListParams::default();
    params.page = page.max(1);
    params.search = search.filter(|s| !s.trim().is_empty());
    if let Some((key, value)) = parent {
        params.filters.insert(key.to_string(), value);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_params() {
        let params = option_params(Some("  ".into()), 0, Some(("region_id", "4".into())));
        assert_eq!(params.page, 1);
        assert_eq!(params.search, None);
        assert_eq!(params.filter("region_id"), Some("4"));

        let params = option_params(Some("tash".into()), 3, None);
        assert_eq!(params.page, 3);
        assert_eq!(params.search.as_deref(), Some("tash"));
        assert!(params.filters.is_empty());
    }
}
