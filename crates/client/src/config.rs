//! Base URL configuration.

use stockroom_core::ItemId;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "INVENTORY_API_BASE_URL";

/// Local development backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from [`API_BASE_URL_ENV`], falling back to the
    /// development default when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/items/`
    pub fn items_url(&self) -> String {
        format!("{}/items/", self.base_url)
    }

    /// `{base}/items/{id}/`
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}/", self.base_url, id)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
