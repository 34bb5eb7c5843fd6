use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failure of a single REST call.
///
/// Every service function returns `ApiResult<T>`; views never inspect the
/// variant beyond turning it into a toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("not authenticated")]
    Unauthorized,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build from a non-2xx response. `body` is the raw text, if any.
    pub fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        ApiError::Status { code, message }
    }

    /// Text shown in the error toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Validation(errors) => errors.to_string(),
            ApiError::Unauthorized => "unauthorized".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Field-level validation errors: field name -> messages (i18n keys)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(pub BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    /// First message for a field, for inline rendering
    pub fn first(&self, field: &str) -> Option<String> {
        self.0.get(field).and_then(|v| v.first().cloned())
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, msgs.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        ApiError::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_message() {
        let err = ApiError::from_status(422, r#"{"message":"code already taken"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                code: 422,
                message: "code already taken".into()
            }
        );
        assert_eq!(err.user_message(), "code already taken");
    }

    #[test]
    fn test_from_status_unauthorized() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_validation_errors() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());
        errors.add("title[en]", "required");
        errors.add("title[en]", "min.2.max.200.chars");
        assert_eq!(errors.first("title[en]").as_deref(), Some("required"));
        assert_eq!(errors.get("title[en]").map(|m| m.len()), Some(2));
        assert_eq!(errors.to_string(), "title[en]: required, min.2.max.200.chars");
        assert!(errors.into_result().is_err());
    }
}
