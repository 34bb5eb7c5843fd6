//! CRUD calls shared by every resource.
//!
//! `{collection}` / `{collection}/{id}` / `{collection}/{id}/status`, paths
//! taken from [`AggregateRoot`].

use contracts::domain::common::AggregateRoot;
use contracts::shared::error::ApiResult;
use contracts::shared::list::{ListParams, Paginated, Single};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::http;

pub async fn list<A>(params: &ListParams) -> ApiResult<Paginated<A>>
where
    A: AggregateRoot + DeserializeOwned,
{
    http::get_json(&A::collection_path(), &params.to_pairs()).await
}

pub async fn show<A>(id: &A::Id) -> ApiResult<A>
where
    A: AggregateRoot + DeserializeOwned,
{
    let single: Single<A> = http::get_json(&A::item_path(id), &Default::default()).await?;
    Ok(single.data)
}

pub async fn create<A, B>(body: &B) -> ApiResult<serde_json::Value>
where
    A: AggregateRoot,
    B: Serialize,
{
    http::post_json(&A::collection_path(), body).await
}

pub async fn update<A, B>(id: &A::Id, body: &B) -> ApiResult<serde_json::Value>
where
    A: AggregateRoot,
    B: Serialize,
{
    http::put_json(&A::item_path(id), body).await
}

pub async fn delete<A: AggregateRoot>(id: &A::Id) -> ApiResult<()> {
    http::delete(&A::item_path(id)).await
}

pub fn status_path<A: AggregateRoot>(id: &A::Id) -> String {
    format!("{}/status", A::item_path(id))
}

/// Flip the `active` flag on the server
pub async fn toggle_status<A: AggregateRoot>(id: &A::Id) -> ApiResult<()> {
    http::patch_empty(&status_path::<A>(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a101_region::aggregate::Region;

    #[test]
    fn test_status_path() {
        assert_eq!(status_path::<Region>(&3), "/api/v1/dashboard/admin/regions/3/status");
    }
}
