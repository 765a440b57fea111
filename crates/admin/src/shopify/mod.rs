//! Shopify Admin data access.
//!
//! # Architecture
//!
//! - [`filters`] turns typed filter values into Shopify search syntax
//! - [`transport`] posts one GraphQL operation per call to the local proxy
//! - [`wire`] holds the raw, fully optional response nodes
//! - [`conversions`] maps wire nodes into the domain [`types`]
//! - [`client`] composes the above into one call per entity kind
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_admin::shopify::{AdminClient, Filters};
//!
//! let client = AdminClient::new(&config)?;
//! let filters = Filters { status: Some("active".into()), ..Filters::default() };
//! let page = client.fetch_products(&filters).await?;
//! ```

pub mod client;
pub mod conversions;
pub mod filters;
pub mod queries;
pub mod transport;
pub mod types;
pub mod wire;

pub use client::{AdminClient, DashboardStats};
pub use filters::{CheckoutFilters, DiscountFilters, Filters, OrderFilters, ProductFilters};
pub use transport::GraphQLTransport;
pub use types::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when possible.
        body: Value,
    },

    /// Well-formed response that reports operation-level errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried no data payload.
    #[error("Empty response")]
    EmptyResponse,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<Value>,
    /// Vendor extensions (Shopify puts `code` here).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

impl GraphQLError {
    /// Build from one entry of an `errors` array, whatever its shape.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(message) => Self {
                message,
                ..Self::default()
            },
            other => serde_json::from_value(other.clone()).unwrap_or_else(|_| Self {
                message: other.to_string(),
                ..Self::default()
            }),
        }
    }

    /// `extensions.code`, if present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }

    /// The error path rendered as `a.b.0.c`.
    #[must_use]
    pub fn field(&self) -> Option<String> {
        if self.path.is_empty() {
            return None;
        }
        Some(
            self.path
                .iter()
                .map(|p| p.as_str().map_or_else(|| p.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Normalized error shape handed to table controllers and front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message for the error banner.
    pub message: String,
    /// Offending field, when the backend names one.
    pub field: Option<String>,
    /// Raw details (status body or error list).
    pub details: Value,
}

impl ShopifyError {
    /// Normalize into an [`ErrorInfo`].
    #[must_use]
    pub fn info(&self) -> ErrorInfo {
        match self {
            Self::Http(e) => ErrorInfo {
                code: "NETWORK_ERROR".to_string(),
                message: e.to_string(),
                field: None,
                details: Value::Null,
            },
            Self::Status { status, body } => ErrorInfo {
                code: format!("HTTP_{status}"),
                message: status_message(*status, body),
                field: None,
                details: body.clone(),
            },
            Self::GraphQL(errors) => ErrorInfo {
                code: errors
                    .iter()
                    .find_map(GraphQLError::code)
                    .unwrap_or("GRAPHQL_ERROR")
                    .to_string(),
                message: format_graphql_errors(errors),
                field: errors.iter().find_map(GraphQLError::field),
                details: serde_json::to_value(errors).unwrap_or(Value::Null),
            },
            Self::Parse(e) => ErrorInfo {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                field: None,
                details: Value::Null,
            },
            Self::EmptyResponse => ErrorInfo {
                code: "EMPTY_RESPONSE".to_string(),
                message: self.to_string(),
                field: None,
                details: Value::Null,
            },
            Self::NotFound(id) => ErrorInfo {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
                field: Some("id".to_string()),
                details: Value::String(id.clone()),
            },
        }
    }
}

/// Best message out of an error body: `errors[0].message`, `message`, a
/// plain string body, or a generic status line.
fn status_message(status: u16, body: &Value) -> String {
    body.get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .or_else(|| body.as_str().filter(|s| !s.trim().is_empty()))
        .map_or_else(
            || format!("Request failed with status {status}"),
            str::to_string,
        )
}
