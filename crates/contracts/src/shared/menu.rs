//! Opened pages ("menus") and refetch signalling.
//!
//! Every opened page is a [`MenuItem`]. Detail pages keep their loaded data
//! in `data` so a tab switch does not lose unsaved input. Lists learn that
//! their data is stale through [`RefetchBus`] instead of a shared flag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub refetch: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            name: name.into(),
            refetch: true,
            data: serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuState {
    pub menu_items: Vec<MenuItem>,
    pub active: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Open (or re-activate) a page
    AddMenu(MenuItem),
    /// Close a page and activate `next_url`'s page if it is open
    RemoveFromMenu { id: String, next_url: Option<String> },
    SetActive(String),
    SetRefetch(String),
    DisableRefetch(String),
    SetMenuData { id: String, data: serde_json::Value },
}

impl MenuState {
    pub fn active_menu(&self) -> Option<&MenuItem> {
        let id = self.active.as_ref()?;
        self.menu_items.iter().find(|m| &m.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|m| m.id == id)
    }

    pub fn reduce(&mut self, action: MenuAction) {
        match action {
            MenuAction::AddMenu(item) => {
                let id = item.id.clone();
                match self.menu_items.iter_mut().find(|m| m.id == id) {
                    Some(existing) => {
                        existing.url = item.url;
                        existing.name = item.name;
                    }
                    None => self.menu_items.push(item),
                }
                self.active = Some(id);
            }
            MenuAction::RemoveFromMenu { id, next_url } => {
                self.menu_items.retain(|m| m.id != id);
                if self.active.as_deref() == Some(id.as_str()) {
                    let by_url = next_url.and_then(|url| {
                        self.menu_items
                            .iter()
                            .find(|m| m.url == url)
                            .map(|m| m.id.clone())
                    });
                    self.active = by_url.or_else(|| self.menu_items.last().map(|m| m.id.clone()));
                }
            }
            MenuAction::SetActive(id) => {
                if self.find(&id).is_some() {
                    self.active = Some(id);
                }
            }
            MenuAction::SetRefetch(id) => self.set_refetch(&id, true),
            MenuAction::DisableRefetch(id) => self.set_refetch(&id, false),
            MenuAction::SetMenuData { id, data } => {
                if let Some(m) = self.menu_items.iter_mut().find(|m| m.id == id) {
                    m.data = data;
                }
            }
        }
    }

    fn set_refetch(&mut self, id: &str, value: bool) {
        if let Some(m) = self.menu_items.iter_mut().find(|m| m.id == id) {
            m.refetch = value;
        }
    }
}

/// Per-resource invalidation counters.
///
/// A mutation bumps the resource key; a list view keeps the last version it
/// loaded and refetches when the bus version moves past it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefetchBus {
    versions: HashMap<String, u64>,
}

impl RefetchBus {
    pub fn bump(&mut self, resource: &str) -> u64 {
        let v = self.versions.entry(resource.to_string()).or_insert(0);
        *v += 1;
        *v
    }

    pub fn version(&self, resource: &str) -> u64 {
        self.versions.get(resource).copied().unwrap_or(0)
    }

    /// True when `seen` is older than the current version
    pub fn is_stale(&self, resource: &str, seen: u64) -> bool {
        self.version(resource) > seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_menu_activates_and_deduplicates() {
        let mut state = MenuState::default();
        state.reduce(MenuAction::AddMenu(MenuItem::new("regions", "deliveryzone/region", "regions")));
        state.reduce(MenuAction::AddMenu(MenuItem::new("orders", "orders", "orders")));
        state.reduce(MenuAction::AddMenu(MenuItem::new("regions", "deliveryzone/region", "Regions")));
        assert_eq!(state.menu_items.len(), 2);
        assert_eq!(state.active.as_deref(), Some("regions"));
        assert_eq!(state.active_menu().map(|m| m.name.as_str()), Some("Regions"));
    }

    #[test]
    fn test_remove_goes_to_next_url() {
        let mut state = MenuState::default();
        state.reduce(MenuAction::AddMenu(MenuItem::new("discounts", "seller/discounts", "discounts")));
        state.reduce(MenuAction::AddMenu(MenuItem::new("orders", "orders", "orders")));
        state.reduce(MenuAction::AddMenu(MenuItem::new("discount-edit", "seller/discount/1", "edit")));
        state.reduce(MenuAction::RemoveFromMenu {
            id: "discount-edit".into(),
            next_url: Some("seller/discounts".into()),
        });
        assert_eq!(state.active.as_deref(), Some("discounts"));
    }

    #[test]
    fn test_refetch_flags_and_data() {
        let mut state = MenuState::default();
        state.reduce(MenuAction::AddMenu(MenuItem::new("order-1", "orders/1", "order")));
        assert!(state.find("order-1").unwrap().refetch);
        state.reduce(MenuAction::DisableRefetch("order-1".into()));
        assert!(!state.find("order-1").unwrap().refetch);
        state.reduce(MenuAction::SetRefetch("order-1".into()));
        assert!(state.find("order-1").unwrap().refetch);

        state.reduce(MenuAction::SetMenuData {
            id: "order-1".into(),
            data: json!({"id": 1}),
        });
        assert_eq!(state.find("order-1").unwrap().data, json!({"id": 1}));
    }

    #[test]
    fn test_refetch_bus() {
        let mut bus = RefetchBus::default();
        assert_eq!(bus.version("region"), 0);
        let seen = bus.version("region");
        bus.bump("region");
        assert!(bus.is_stale("region", seen));
        assert!(!bus.is_stale("country", 0));
        assert!(!bus.is_stale("region", bus.version("region")));
    }
}
