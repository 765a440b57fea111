//! Shopify Admin GraphQL proxy.
//!
//! Holds the access token server-side and forwards `{query, variables}` to
//! `https://{store}/admin/api/{version}/graphql.json`.
//!
//! Response contract:
//! - upstream success: the `data` object, unwrapped
//! - upstream logical errors: `{"errors": [...]}` with status 200
//! - upstream non-2xx: the same status with `{"errors": [{"message"}]}`

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Header Shopify reads the Admin API token from.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Body accepted from the client transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// `POST /api/shopify/graphql`
#[instrument(skip_all, fields(operation, upstream_status))]
pub async fn proxy(
    State(state): State<AppState>,
    payload: Result<Json<ProxyRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if request.query.trim().is_empty() {
        return Err(AppError::BadRequest("Missing GraphQL query".to_string()));
    }

    let span = tracing::Span::current();
    span.record(
        "operation",
        request.operation_name.as_deref().unwrap_or("anonymous"),
    );

    let shopify = state.shopify();
    let response = state
        .http()
        .post(shopify.endpoint.clone())
        .header(ACCESS_TOKEN_HEADER, shopify.access_token.expose_secret())
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    span.record("upstream_status", status.as_u16());
    let text = response.text().await?;

    if !status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            message: upstream_message(status.as_u16(), &text),
        });
    }

    let mut body: Value = serde_json::from_str(&text)?;

    if let Some(errors) = body
        .get("errors")
        .filter(|e| e.as_array().is_some_and(|a| !a.is_empty()))
    {
        tracing::warn!(
            count = errors.as_array().map_or(0, Vec::len),
            "Upstream returned GraphQL errors"
        );
        return Ok(Json(json!({ "errors": errors })));
    }

    match body.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(Json(data)),
        _ => Ok(Json(body)),
    }
}

/// Best message out of an upstream error body.
///
/// Shopify sends `{"errors": "..."}`, `{"errors": [{"message"}]}` or plain text.
fn upstream_message(status: u16, text: &str) -> String {
    let from_json = serde_json::from_str::<Value>(text).ok().and_then(|body| {
        let errors = body.get("errors")?;
        errors
            .as_str()
            .or_else(|| {
                errors
                    .as_array()?
                    .first()?
                    .get("message")?
                    .as_str()
            })
            .map(str::to_string)
    });

    from_json
        .or_else(|| Some(text.trim().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| format!("Upstream request failed with status {status}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_shapes() {
        assert_eq!(
            upstream_message(401, r#"{"errors":"[API] Invalid API key or access token"}"#),
            "[API] Invalid API key or access token"
        );
        assert_eq!(
            upstream_message(400, r#"{"errors":[{"message":"Parse error"}]}"#),
            "Parse error"
        );
        assert_eq!(upstream_message(503, "Service Unavailable\n"), "Service Unavailable");
        assert_eq!(
            upstream_message(502, "  "),
            "Upstream request failed with status 502"
        );
    }

    #[test]
    fn test_proxy_request_accepts_query_body() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "query": "query GetProducts { products(first: 1) { edges { node { id } } } }",
            "variables": { "first": 1 },
            "operationName": "GetProducts",
        }))
        .unwrap();
        assert_eq!(request.operation_name.as_deref(), Some("GetProducts"));
        assert_eq!(request.variables, Some(json!({ "first": 1 })));
    }
}
