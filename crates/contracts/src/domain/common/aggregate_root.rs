use super::{AggregateId, ApiScope};

/// Трейт для корня агрегата
///
/// Описывает REST-ресурс: где он живёт и как называется в UI. Generic
/// service code in the frontend builds every URL from these methods.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Title in the current locale, `"-"` when missing
    fn display_title(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a101")
    fn aggregate_index() -> &'static str;

    /// REST path segment, e.g. `regions` or `orders`
    fn collection_name() -> &'static str;

    /// i18n key of a single element (e.g. "region")
    fn element_name() -> &'static str;

    /// i18n key of the list page (e.g. "regions")
    fn list_name() -> &'static str;

    fn scope() -> ApiScope {
        ApiScope::Admin
    }

    /// URL query key narrowing the list to one parent (e.g. `region_id`)
    fn parent_filter() -> Option<&'static str> {
        None
    }

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата (например, "a101_regions"); also the refetch key
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// `/api/v1/dashboard/admin/regions`
    fn collection_path() -> String {
        format!("{}/{}", Self::scope().prefix(), Self::collection_name())
    }

    /// `/api/v1/dashboard/admin/regions/7`
    fn item_path(id: &Self::Id) -> String {
        format!(
            "{}/{}",
            Self::collection_path(),
            urlencoding::encode(&id.as_string())
        )
    }
}
