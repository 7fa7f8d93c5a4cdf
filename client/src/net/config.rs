//! API base URL configuration.
//!
//! The base URL is baked in at build time from `STOREFRONT_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from an explicit base URL. Trailing slashes are trimmed.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Build from the compile-time `STOREFRONT_API_URL`, or the local default.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
