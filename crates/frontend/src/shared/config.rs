//! Runtime configuration of the panel.
//!
//! Starts from the compile-time defaults and applies an optional JSON
//! override stored in `localStorage["admin_config"]`.

use contracts::shared::config::AppConfig;
use once_cell::sync::OnceCell;

use super::storage;

const CONFIG_KEY: &str = "admin_config";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Loaded once per page; later calls return the same value
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| resolve(storage::get_item(CONFIG_KEY).as_deref()))
}

fn resolve(raw: Option<&str>) -> AppConfig {
    match raw.map(AppConfig::from_json) {
        Some(Ok(config)) => {
            log::info!("config override loaded: base_url={}", config.base_url);
            config
        }
        Some(Err(e)) => {
            log::warn!("ignoring broken {}: {}", CONFIG_KEY, e);
            AppConfig::default()
        }
        None => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(None), AppConfig::default());
        assert_eq!(resolve(Some("{not json")), AppConfig::default());

        let config = resolve(Some(r#"{"is_demo": true}"#));
        assert!(config.is_demo);
        assert_eq!(config.base_url, AppConfig::default().base_url);
    }
}
