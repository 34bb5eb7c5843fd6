//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::app_config;

/// Base URL of the marketplace API (`https://api.example.com`)
pub fn api_base() -> String {
    app_config().base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v1/dashboard/admin/regions");
/// ```
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(
            join("https://api.example.com/", "/api/v1/rest/products"),
            "https://api.example.com/api/v1/rest/products"
        );
    }
}
