use serde::{Deserialize, Serialize};

/// Which API prefix a resource lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiScope {
    /// `/api/v1/dashboard/admin/`
    Admin,
    /// `/api/v1/dashboard/seller/`
    Seller,
    /// `/api/v1/rest/` (public catalog)
    Rest,
}

impl ApiScope {
    /// Path prefix relative to the API root
    pub fn prefix(&self) -> &'static str {
        match self {
            ApiScope::Admin => "/api/v1/dashboard/admin",
            ApiScope::Seller => "/api/v1/dashboard/seller",
            ApiScope::Rest => "/api/v1/rest",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiScope::Admin => "admin",
            ApiScope::Seller => "seller",
            ApiScope::Rest => "rest",
        }
    }
}

impl std::fmt::Display for ApiScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
