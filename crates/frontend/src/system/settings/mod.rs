//! Данные, общие для всех экранов: языки, глобальные настройки, магазин
//! продавца, статусы заказов.

pub mod api;

use contracts::shared::i18n::LanguageSet;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppAction, AppStore};

/// Load the shared reference data once at startup. Failures are toasted and
/// leave the defaults in place.
pub fn load_bootstrap(store: AppStore) {
    spawn_local(async move {
        match api::fetch_languages().await {
            Ok(languages) if !languages.is_empty() => {
                store.dispatch(AppAction::SetLanguages(LanguageSet::new(languages)))
            }
            Ok(_) => log::warn!("no active languages, keeping the default locale"),
            Err(e) => store.notify_error(&e),
        }
    });
    spawn_local(async move {
        match api::fetch_settings().await {
            Ok(settings) => store.dispatch(AppAction::SetSettings(settings)),
            Err(e) => store.notify_error(&e),
        }
    });
    spawn_local(async move {
        match api::fetch_order_statuses().await {
            Ok(statuses) => store.dispatch(AppAction::SetOrderStatuses(statuses)),
            Err(e) => store.notify_error(&e),
        }
    });
    spawn_local(async move {
        // Панель администратора без магазина: не ошибка
        match api::fetch_my_shop().await {
            Ok(shop) => store.dispatch(AppAction::SetMyShop(Some(shop))),
            Err(e) => log::info!("no seller shop: {}", e),
        }
    });
}
