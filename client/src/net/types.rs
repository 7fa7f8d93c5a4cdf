//! Request and response DTOs for the storefront backend.
//!
//! DESIGN
//! ======
//! The backend owns these schemas. Deserialization is lenient where backends
//! commonly disagree: ids may arrive as numbers or strings, and decimal prices
//! may arrive as JSON strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Units available, when the backend reports stock.
    #[serde(default)]
    pub stock: Option<u32>,
}

/// A company as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Tax identifier (RUC).
    #[serde(default)]
    pub ruc: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub contact_name: String,
}

/// Body of `POST /companies`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyRegistration {
    pub name: String,
    pub ruc: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub contact_name: String,
}

/// Billing metadata sent with an order. Only `name` and `email` are always present.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CompanyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
}

/// One order line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /orders`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderRequest {
    pub company_data: CompanyData,
    pub cart_items: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Response of `POST /orders`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderConfirmation {
    #[serde(alias = "id", deserialize_with = "deserialize_id")]
    pub order_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total: Option<f64>,
}

/// An order as listed on the company dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /companies/{id}/dashboard`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompanyDashboard {
    pub company: Company,
    #[serde(default)]
    pub orders: Vec<OrderSummary>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn price_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<f64, E> {
    let price = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match price {
        Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(E::custom(format!("invalid price: {value}"))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    price_from_value(&value)
}

fn deserialize_optional_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => price_from_value(&value).map(Some),
    }
}
