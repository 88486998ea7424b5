//! REST API Command Wrappers
//!
//! Frontend bindings to the task service, organized by domain.
//! Every call attaches the stored bearer token and maps HTTP failures
//! onto [`ApiError`].

mod auth;
mod comment;
mod notification;
mod task;
mod team;
mod user;

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::AuthTokens;

// Re-export all public items
pub use auth::*;
pub use comment::*;
pub use notification::*;
pub use task::*;
pub use team::*;
pub use user::*;

/// Query string pairs, empty values are skipped when sent
pub type QueryParams = Vec<(&'static str, String)>;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Set the API configuration. Only the first call has an effect.
pub fn configure(config: ApiConfig) {
    let _ = CONFIG.set(config);
}

pub fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::default)
}

// ========================
// Token Storage
// ========================

fn storage() -> ApiResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(ApiError::Storage)
}

pub fn access_token() -> Option<String> {
    storage().ok()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
}

fn refresh_token() -> Option<String> {
    storage().ok()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
}

pub fn store_tokens(tokens: &AuthTokens) -> ApiResult<()> {
    let storage = storage()?;
    storage.set_item(ACCESS_TOKEN_KEY, &tokens.access).map_err(|_| ApiError::Storage)?;
    storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh).map_err(|_| ApiError::Storage)?;
    Ok(())
}

pub fn clear_tokens() {
    if let Ok(storage) = storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

// ========================
// Request Helpers
// ========================

fn non_empty(params: &[(&'static str, String)]) -> QueryParams {
    params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .cloned()
        .collect()
}

/// Decode a response body; an empty body decodes as JSON `null`
fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

async fn send<T: DeserializeOwned>(method: &'static str, endpoint: &str, builder: reqwest::RequestBuilder) -> ApiResult<T> {
    let builder = match access_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    };

    let response = builder.send().await.map_err(|e| {
        log::error!("[API] {} {} failed: {}", method, endpoint, e);
        ApiError::from(e)
    })?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    match status {
        401 => {
            log::warn!("[API] {} {} unauthorized", method, endpoint);
            Err(ApiError::Unauthorized)
        }
        s if !(200..300).contains(&s) => {
            log::error!("[API] {} {} returned {}", method, endpoint, s);
            Err(ApiError::Status { status: s, body })
        }
        _ => decode(&body),
    }
}

pub(crate) async fn get<T: DeserializeOwned>(endpoint: &str, params: &[(&'static str, String)]) -> ApiResult<T> {
    let builder = reqwest::Client::new()
        .get(config().url(endpoint))
        .query(&non_empty(params));
    send("GET", endpoint, builder).await
}

pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: Option<&B>) -> ApiResult<T> {
    let mut builder = reqwest::Client::new().post(config().url(endpoint));
    if let Some(body) = body {
        builder = builder.json(body);
    }
    send("POST", endpoint, builder).await
}

pub(crate) async fn delete(endpoint: &str) -> ApiResult<()> {
    let builder = reqwest::Client::new().delete(config().url(endpoint));
    let _: serde_json::Value = send("DELETE", endpoint, builder).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListResponse, Task};

    #[test]
    fn test_non_empty_drops_blank_values() {
        let params = vec![("search", String::new()), ("team_id", "4".to_string())];
        assert_eq!(non_empty(&params), vec![("team_id", "4".to_string())]);
    }

    #[test]
    fn test_decode_empty_body() {
        let value: serde_json::Value = decode("").unwrap();
        assert!(value.is_null());
        let unit: () = decode("  ").unwrap();
        assert_eq!(unit, ());
    }

    #[test]
    fn test_decode_reports_bad_payload() {
        let err = decode::<ListResponse<Task>>("{\"results\": 3}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
