//! API Configuration
//!
//! Base URL and client tuning. Build-time defaults come from the
//! `TAREFA_API_URL` environment variable; a URL saved in local storage
//! under [`BASE_URL_KEY`] overrides it at runtime.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api-tarefa.justvy.in/api";

/// Local storage key for a runtime base URL override
pub const BASE_URL_KEY: &str = "tarefa.api_base_url";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Page size requested from paginated list endpoints
    pub page_size: u32,
    /// How often the unread notification badge refreshes
    pub unread_poll_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("TAREFA_API_URL").unwrap_or(DEFAULT_API_URL).to_string(),
            page_size: 50,
            unread_poll_ms: 60_000,
        }
    }
}

impl ApiConfig {
    /// Defaults with an optional base URL override applied
    pub fn with_override(base_url: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            config.base_url = url;
        }
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config
    }

    /// Load from the browser, falling back to defaults off-browser
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(BASE_URL_KEY).ok().flatten());
        Self::with_override(stored)
    }

    /// Join an endpoint path (e.g. `/tasks/`) onto the base URL
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_and_join() {
        let config = ApiConfig::with_override(Some(" http://localhost:8000/api/ ".to_string()));
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.url("/tasks/"), "http://localhost:8000/api/tasks/");
        assert_eq!(config.url("users/3/"), "http://localhost:8000/api/users/3/");
    }

    #[test]
    fn test_blank_override_keeps_default() {
        let config = ApiConfig::with_override(Some("   ".to_string()));
        assert_eq!(config, ApiConfig::with_override(None));
        assert_eq!(config.page_size, 50);
    }
}
