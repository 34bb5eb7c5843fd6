//! Глобальное хранилище приложения.
//!
//! Каждый срез хранится в отдельном `RwSignal` и меняется только через
//! [`AppStore::dispatch`]; у каждого среза один писатель.

use contracts::domain::a105_order::aggregate::OrderStatusItem;
use contracts::domain::a108_shop::aggregate::Shop;
use contracts::domain::a109_chat::state::{ChatAction, ChatState};
use contracts::shared::config::AppConfig;
use contracts::shared::error::ApiError;
use contracts::shared::i18n::LanguageSet;
use contracts::shared::menu::{MenuAction, MenuItem, MenuState, RefetchBus};
use contracts::shared::toast::{ToastKind, ToastState};
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};

use crate::shared::query_state;

/// Typed actions of the store. One variant family per slice.
#[derive(Debug, Clone)]
pub enum AppAction {
    Menu(MenuAction),
    Chat(ChatAction),
    /// Bump the refetch counter of a resource (`a101_regions`, ...)
    Refetch(String),
    Notify(ToastKind, String),
    DismissToast(u64),
    SetLanguages(LanguageSet),
    SetSettings(HashMap<String, String>),
    SetMyShop(Option<Shop>),
    SetOrderStatuses(Vec<OrderStatusItem>),
}

#[derive(Clone, Copy)]
pub struct AppStore {
    pub menu: RwSignal<MenuState>,
    pub refetch: RwSignal<RefetchBus>,
    pub toasts: RwSignal<ToastState>,
    pub languages: RwSignal<LanguageSet>,
    pub settings: RwSignal<HashMap<String, String>>,
    pub chat: RwSignal<ChatState>,
    pub my_shop: RwSignal<Option<Shop>>,
    pub order_statuses: RwSignal<Vec<OrderStatusItem>>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppStore {
    pub fn new(config: AppConfig) -> Self {
        Self {
            menu: RwSignal::new(MenuState::default()),
            refetch: RwSignal::new(RefetchBus::default()),
            toasts: RwSignal::new(ToastState::default()),
            languages: RwSignal::new(LanguageSet::default()),
            settings: RwSignal::new(HashMap::new()),
            chat: RwSignal::new(ChatState::default()),
            my_shop: RwSignal::new(None),
            order_statuses: RwSignal::new(Vec::new()),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn dispatch(&self, action: AppAction) {
        match action {
            AppAction::Menu(action) => self.menu.update(|s| s.reduce(action)),
            AppAction::Chat(action) => self.chat.update(|s| s.reduce(action)),
            AppAction::Refetch(resource) => {
                let version = self.refetch.try_update(|bus| bus.bump(&resource));
                log!("🔄 refetch '{}' -> {:?}", resource, version);
            }
            AppAction::Notify(kind, message) => {
                let id = self.toasts.try_update(|s| s.push(kind, message));
                if let Some(id) = id {
                    self.schedule_dismiss(id);
                }
            }
            AppAction::DismissToast(id) => self.toasts.update(|s| s.dismiss(id)),
            AppAction::SetLanguages(languages) => self.languages.set(languages),
            AppAction::SetSettings(settings) => self.settings.set(settings),
            AppAction::SetMyShop(shop) => self.my_shop.set(shop),
            AppAction::SetOrderStatuses(statuses) => self.order_statuses.set(statuses),
        }
    }

    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        gloo_timers::callback::Timeout::new(5_000, move || {
            this.dispatch(AppAction::DismissToast(id));
        })
        .forget();
    }

    // ------------------------------------------------------------------
    // Уведомления
    // ------------------------------------------------------------------

    pub fn notify_success(&self, message: impl Into<String>) {
        self.dispatch(AppAction::Notify(ToastKind::Success, message.into()));
    }

    /// Единственная точка показа ошибок API
    pub fn notify_error(&self, error: &ApiError) {
        log::warn!("api error: {}", error);
        self.dispatch(AppAction::Notify(ToastKind::Error, error.user_message()));
    }

    // ------------------------------------------------------------------
    // Меню (вкладки)
    // ------------------------------------------------------------------

    pub fn open_menu(&self, id: &str, name: &str) {
        log!("📂 open_menu '{}'", id);
        let url = format!("?active={}", urlencoding::encode(id));
        self.dispatch(AppAction::Menu(MenuAction::AddMenu(MenuItem::new(id, url, name))));
    }

    pub fn activate_menu(&self, id: &str) {
        self.dispatch(AppAction::Menu(MenuAction::SetActive(id.to_string())));
    }

    pub fn close_menu(&self, id: &str) {
        log!("🗙 close_menu '{}'", id);
        self.dispatch(AppAction::Menu(MenuAction::RemoveFromMenu {
            id: id.to_string(),
            next_url: None,
        }));
    }

    pub fn set_menu_data(&self, id: &str, data: serde_json::Value) {
        self.dispatch(AppAction::Menu(MenuAction::SetMenuData {
            id: id.to_string(),
            data,
        }));
    }

    pub fn menu_data(&self, id: &str) -> serde_json::Value {
        self.menu
            .with_untracked(|m| m.find(id).map(|item| item.data.clone()))
            .unwrap_or(serde_json::Value::Null)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.menu.with(|m| m.active.as_deref() == Some(id))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|v| *v = !*v);
    }

    /// Signal the lists of `resource` to reload
    pub fn bump_refetch(&self, resource: &str) {
        self.dispatch(AppAction::Refetch(resource.to_string()));
    }

    /// Raw global setting, e.g. `order_refresh_timeout`
    pub fn setting(&self, key: &str) -> Option<String> {
        self.settings.with(|s| s.get(key).cloned())
    }

    /// Символ валюты для цен; `$`, пока настройки не загружены
    pub fn currency_symbol(&self) -> String {
        self.settings
            .with_untracked(|s| s.get("currency_symbol").cloned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "$".to_string())
    }

    pub fn is_demo(&self) -> bool {
        self.config.with_value(|c| c.is_demo)
    }

    /// Restore the active tab from `?active=` and keep the URL in sync
    pub fn init_router_integration(&self) {
        let params = query_state::read_query();
        if let Some(active_key) = params.get("active").cloned() {
            let exists = self.menu.with_untracked(|m| m.find(&active_key).is_some());
            if exists {
                self.activate_menu(&active_key);
            } else {
                let title = crate::layout::tabs::tab_label_for_key(&active_key);
                self.open_menu(&active_key, &title);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.menu.with(|m| m.active.clone()) else {
                return;
            };
            // Список вкладки сам дописывает свои параметры; здесь только `active`
            let mut params: BTreeMap<String, String> = query_state::read_query();
            if params.get("active") == Some(&active_key) {
                return;
            }
            params.clear();
            params.insert("active".to_string(), active_key);
            query_state::replace_query(&params);
        });
    }
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore not found in context")
}
