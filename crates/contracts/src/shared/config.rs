//! Static configuration of the admin panel.
//!
//! Everything here is read-only. Runtime overrides go through [`AppConfig`],
//! which starts from these constants.

use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "Dokan Marketplace";
pub const BASE_URL: &str = "https://uzapi.dokaner.com";
pub const WEBSITE_URL: &str = "https://ready.dokaner.com";

/// Public REST prefix (`{BASE_URL}/api/v1/`)
pub const API_PREFIX: &str = "/api/v1/";
/// Admin dashboard prefix
pub const API_ADMIN_PREFIX: &str = "/api/v1/dashboard/admin/";
/// Seller / generic dashboard prefix
pub const API_DASHBOARD_PREFIX: &str = "/api/v1/dashboard/";
pub const EXPORT_PREFIX: &str = "/storage/";

pub const IMG_URL: &str = "";
pub const MAP_API_KEY: &str = "";

// Push / auth provider placeholders. Filled per deployment.
pub const VAPID_KEY: &str = "";
pub const API_KEY: &str = "";
pub const AUTH_DOMAIN: &str = "";
pub const PROJECT_ID: &str = "";
pub const STORAGE_BUCKET: &str = "";
pub const MESSAGING_SENDER_ID: &str = "";
pub const APP_ID: &str = "";
pub const MEASUREMENT_ID: &str = "";
pub const DYNAMIC_LINK_DOMAIN: &str = "";
pub const ANDROID_PACKAGE_NAME: &str = "";
pub const IOS_BUNDLE_ID: &str = "";
pub const RECAPTCHA_SITE_KEY: &str = "";

/// Default map center (New York)
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 40.712_728_1,
    lng: -74.006_015_2,
};

// Demo accounts: mutations on these ids are blocked in demo mode.
pub const DEMO_SELLER: i64 = 107;
pub const DEMO_SELLER_UUID: &str = "3566bdf6-3a09-4488-8269-70a19f871bd0";
pub const DEMO_SHOP: i64 = 501;
pub const DEMO_DELIVERYMAN: i64 = 106;
pub const DEMO_MANAGER: i64 = 114;
pub const DEMO_MODERATOR: i64 = 297;
pub const DEMO_ADMIN: i64 = 501;
pub const DEMO_WAITER: i64 = 108;

pub const SUPPORTED_FORMATS: [&str; 5] = [
    "image/jpg",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "image/svg",
];

/// Order list auto-refresh period in seconds when the setting is absent or broken
pub const DEFAULT_ORDER_TIMEOUT: u64 = 30;

/// Upper bound of a stock quantity (i32::MAX on the backend)
pub const MAX_PRODUCT_QUANTITY: i64 = 2_147_483_647;

pub const SHOP_EMAIL_STATUSES: [&str; 7] = [
    "new",
    "accepted",
    "ready",
    "on_a_way",
    "pause",
    "delivered",
    "canceled",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Returns true if the MIME type is accepted by image uploads
pub fn is_supported_format(mime: &str) -> bool {
    SUPPORTED_FORMATS
        .iter()
        .any(|f| f.eq_ignore_ascii_case(mime.trim()))
}

/// Runtime configuration. Defaults come from the constants above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project_name: String,
    pub base_url: String,
    pub website_url: String,
    pub is_demo: bool,
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_name: PROJECT_NAME.to_string(),
            base_url: BASE_URL.to_string(),
            website_url: WEBSITE_URL.to_string(),
            is_demo: false,
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Parse a partial JSON override; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn api_url(&self) -> String {
        join_url(&self.base_url, API_PREFIX)
    }

    pub fn api_admin_url(&self) -> String {
        join_url(&self.base_url, API_ADMIN_PREFIX)
    }

    pub fn api_dashboard_url(&self) -> String {
        join_url(&self.base_url, API_DASHBOARD_PREFIX)
    }

    pub fn export_url(&self) -> String {
        join_url(&self.base_url, EXPORT_PREFIX)
    }

    /// Whether the given seller/shop id is a protected demo record
    pub fn is_demo_record(&self, id: i64) -> bool {
        self.is_demo && (id == DEMO_SELLER || id == DEMO_SHOP)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url(), "https://uzapi.dokaner.com/api/v1/");
        assert_eq!(
            cfg.api_admin_url(),
            "https://uzapi.dokaner.com/api/v1/dashboard/admin/"
        );
        assert_eq!(cfg.export_url(), "https://uzapi.dokaner.com/storage/");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg = AppConfig::from_json(r#"{"base_url":"http://localhost:8000/","is_demo":true}"#)
            .unwrap();
        assert_eq!(cfg.api_url(), "http://localhost:8000/api/v1/");
        assert_eq!(cfg.project_name, PROJECT_NAME);
        assert!(cfg.is_demo_record(DEMO_SHOP));
        assert!(!cfg.is_demo_record(1));
    }

    #[test]
    fn test_supported_formats() {
        assert!(is_supported_format("image/png"));
        assert!(is_supported_format("IMAGE/JPEG"));
        assert!(!is_supported_format("application/pdf"));
    }
}
