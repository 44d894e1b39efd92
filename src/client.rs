//! HTTP client handle for the Stripe API
//!
//! [`StripeClient`] owns the pooled HTTP client, the API base URL and the
//! secret key. It is built once from a [`CashierConfig`] and cloned into every
//! resource wrapper; clones share the same connection pool.
//!
//! # Examples
//!
//! ```no_run
//! use stripe_cashier::{CashierConfig, StripeClient};
//! use stripe_cashier::types::Customer;
//! use serde_json::json;
//!
//! # async fn example() -> stripe_cashier::Result<()> {
//! let client = StripeClient::new(&CashierConfig::new("sk_test_123"))?;
//! let params = stripe_cashier::form::to_params(&json!({"email": "jenny@example.com"}))?;
//! let customer: Customer = client.post("/v1/customers", &params).await?;
//! println!("Created {}", customer.id);
//! # Ok(())
//! # }
//! ```

use crate::config::CashierConfig;
use crate::error::{ApiError, ApiErrorEnvelope};
use crate::form::{encode_pairs, Params};
use crate::{CashierError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

/// Header carrying the pinned API version
pub const STRIPE_VERSION_HEADER: &str = "stripe-version";
/// Header making POST requests safe to retry
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Characters left as-is when an identifier is placed in a path
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'~');

/// Shared handle for issuing authenticated requests to Stripe
#[derive(Clone)]
pub struct StripeClient {
    /// Base URL of the Stripe API
    api_base: String,
    /// Secret key sent as the basic-auth username
    secret: String,
    /// HTTP client
    client: Client,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl StripeClient {
    /// Create a new client handle
    pub fn new(config: &CashierConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(api_version) = &config.api_version {
            let value = HeaderValue::from_str(api_version)
                .map_err(|e| CashierError::config(format!("Invalid API version: {}", e)))?;
            headers.insert(STRIPE_VERSION_HEADER, value);
        }

        let mut client_builder = Client::builder()
            .default_headers(headers)
            .user_agent(format!("stripe-cashier/{}", crate::VERSION));

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| CashierError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret: config.secret.clone(),
            client,
        })
    }

    /// Get the base URL requests are sent to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Send a `GET` with parameters in the query string
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.send(Method::GET, path, params).await
    }

    /// Send a `POST` with a form-encoded body
    pub async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.send(Method::POST, path, params).await
    }

    /// Send a `DELETE` with parameters in the query string
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.send(Method::DELETE, path, params).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        let pairs = encode_pairs(params);

        tracing::debug!("Sending {} request to: {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.secret, None::<&str>);

        if method == Method::POST {
            request = request
                .header(IDEMPOTENCY_KEY_HEADER, uuid::Uuid::new_v4().to_string())
                .form(&pairs);
        } else if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            tracing::error!(
                "Stripe {} {} failed with status: {}. Response body: {}",
                method,
                path,
                status,
                response_body
            );

            let error = serde_json::from_str::<ApiErrorEnvelope>(&response_body)
                .map(|envelope| envelope.error)
                .unwrap_or_else(|_| ApiError {
                    error_type: "api_error".to_string(),
                    message: Some(response_body),
                    ..Default::default()
                });

            return Err(CashierError::Api { status, error });
        }

        Ok(response.json().await?)
    }
}

/// Build `/{collection}/{id}` with the identifier percent-encoded
pub(crate) fn resource_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id, PATH_SEGMENT))
}

/// Reject an empty identifier before any request is made
pub(crate) fn require_id(id: &str, message: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CashierError::missing_argument(message));
    }
    Ok(())
}
