//! GraphQL transport: one HTTP POST per operation.
//!
//! No batching, retry or timeout policy beyond reqwest's defaults. A failed
//! call surfaces immediately as a [`ShopifyError`].

use graphql_client::GraphQLQuery;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::config::ClientConfig;

use super::{GraphQLError, ShopifyError};

/// Posts `{ query, variables, operationName }` to a GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQLTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl GraphQLTransport {
    /// Create a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ShopifyError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint operations are posted to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute a GraphQL operation.
    ///
    /// # Errors
    ///
    /// - `ShopifyError::Http` if the request could not be sent
    /// - `ShopifyError::Status` for a non-2xx response
    /// - `ShopifyError::GraphQL` if the envelope carries a non-empty `errors` array
    /// - `ShopifyError::EmptyResponse` if there is no payload
    /// - `ShopifyError::Parse` if the payload does not match the operation's shape
    #[instrument(skip_all, fields(operation = tracing::field::Empty, status = tracing::field::Empty))]
    pub async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);
        let span = tracing::Span::current();
        span.record("operation", body.operation_name);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        span.record("status", status.as_u16());
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "GraphQL request failed");
            return Err(ShopifyError::Status {
                status: status.as_u16(),
                body: parse_error_body(text),
            });
        }

        let envelope: Value = serde_json::from_str(&text)?;
        decode_envelope(envelope)
    }
}

/// Parse an error body as JSON, keeping it as a string otherwise.
fn parse_error_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Decode a response envelope.
///
/// A non-empty `errors` array wins. Otherwise `data` is the payload when
/// present, else the whole object is (the proxy returns raw data).
///
/// # Errors
///
/// See [`GraphQLTransport::execute`].
pub fn decode_envelope<T: DeserializeOwned>(envelope: Value) -> Result<T, ShopifyError> {
    if let Some(errors) = envelope
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
    {
        let errors: Vec<GraphQLError> = errors.iter().cloned().map(GraphQLError::from_value).collect();
        tracing::warn!(count = errors.len(), "GraphQL operation reported errors");
        return Err(ShopifyError::GraphQL(errors));
    }

    let payload = match envelope {
        Value::Object(mut object) if object.contains_key("data") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    if payload.is_null() {
        return Err(ShopifyError::EmptyResponse);
    }

    Ok(serde_json::from_value(payload)?)
}
