//! REST client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`] since the backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! One request per call. No retry, no timeout, no batching. Non-2xx responses
//! become [`ApiError::Response`] carrying the status and parsed body so the
//! caller can render a banner message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{Company, CompanyDashboard, CompanyRegistration, OrderConfirmation, OrderRequest, Product};

/// Operations the storefront needs from the backend.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /companies`
    async fn create_company(&self, registration: &CompanyRegistration) -> Result<Company, ApiError>;

    /// `GET /companies/{id}`
    async fn fetch_company(&self, id: &str) -> Result<Company, ApiError>;

    /// `GET /companies/{id}/dashboard`
    async fn fetch_dashboard(&self, id: &str) -> Result<CompanyDashboard, ApiError>;

    /// `POST /orders`
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError>;
}

fn products_path() -> &'static str {
    "products"
}

fn companies_path() -> &'static str {
    "companies"
}

fn company_path(id: &str) -> String {
    format!("companies/{id}")
}

fn dashboard_path(id: &str) -> String {
    format!("companies/{id}/dashboard")
}

fn orders_path() -> &'static str {
    "orders"
}

/// HTTP implementation of [`StorefrontApi`].
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl StorefrontApi for HttpApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        get_json(&self.config.url(products_path())).await
    }

    async fn create_company(&self, registration: &CompanyRegistration) -> Result<Company, ApiError> {
        post_json(&self.config.url(companies_path()), registration).await
    }

    async fn fetch_company(&self, id: &str) -> Result<Company, ApiError> {
        get_json(&self.config.url(&company_path(id))).await
    }

    async fn fetch_dashboard(&self, id: &str) -> Result<CompanyDashboard, ApiError> {
        get_json(&self.config.url(&dashboard_path(id))).await
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        post_json(&self.config.url(orders_path()), order).await
    }
}

/// Decode a success body, or turn a failure status into an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(status, &body)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
