//! JSON over HTTP with the panel's bearer token.
//!
//! Every call returns [`ApiResult`]; callers decide whether to toast.

use contracts::shared::error::{ApiError, ApiResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

use super::api_utils::api_url;
use super::storage;

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = api_url(path);
    log::debug!("{:?} {}", verb, url);
    let request = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    if error == ApiError::Unauthorized {
        storage::clear_access_token();
    }
    log::error!("request failed: {}", error);
    Err(error)
}

/// Пустое тело (204) читается как `null`
fn parse_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check(response).await?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_body(&text)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &BTreeMap<String, String>,
) -> ApiResult<T> {
    let response = builder(Verb::Get, path)
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = builder(Verb::Post, path)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> ApiResult<T> {
    let response = builder(Verb::Put, path)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

/// PATCH without a body; the response body is ignored
pub async fn patch_empty(path: &str) -> ApiResult<()> {
    let response = builder(Verb::Patch, path).send().await.map_err(network)?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> ApiResult<()> {
    let response = builder(Verb::Delete, path).send().await.map_err(network)?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(parse_body::<Value>("").unwrap(), Value::Null);
        assert_eq!(parse_body::<Value>("  \n").unwrap(), Value::Null);
        assert_eq!(parse_body::<Value>(r#"{"data":{"id":1}}"#).unwrap(), json!({"data": {"id": 1}}));
    }

    #[test]
    fn test_broken_body_is_decode_error() {
        assert!(matches!(parse_body::<Value>("<html>"), Err(ApiError::Decode(_))));
    }
}
