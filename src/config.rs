//! Cashier configuration

use crate::{CashierError, Result};
use std::env;
use std::time::Duration;

/// Default Stripe API base URL
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";
/// Environment variable holding the publishable key
pub const PUBLISHABLE_KEY_ENV: &str = "STRIPE_PUBLISHABLE_KEY";
/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "STRIPE_API_BASE";
/// Environment variable pinning the API version
pub const API_VERSION_ENV: &str = "STRIPE_API_VERSION";

/// Configuration for the Stripe client
#[derive(Clone)]
pub struct CashierConfig {
    /// Secret API key used to authenticate requests
    pub secret: String,
    /// Publishable key, carried for callers that hand it to a frontend
    pub key: Option<String>,
    /// Base URL of the Stripe API
    pub api_base: String,
    /// Value of the `Stripe-Version` header, if pinned
    pub api_version: Option<String>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for CashierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashierConfig")
            .field("secret", &"<redacted>")
            .field("key", &self.key)
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CashierConfig {
    /// Create a new config with the given secret key
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: None,
            timeout: None,
        }
    }

    /// Build a config from `STRIPE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let secret = env::var(SECRET_KEY_ENV).unwrap_or_default();
        if secret.is_empty() {
            return Err(CashierError::config(format!(
                "Missing credentials: {} must be set",
                SECRET_KEY_ENV
            )));
        }

        let mut config = Self::new(secret);
        if let Ok(key) = env::var(PUBLISHABLE_KEY_ENV) {
            config = config.with_key(key);
        }
        if let Ok(api_base) = env::var(API_BASE_ENV) {
            config = config.with_api_base(api_base);
        }
        if let Ok(api_version) = env::var(API_VERSION_ENV) {
            config = config.with_api_version(api_version);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(CashierError::config("Stripe secret key cannot be empty"));
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(CashierError::config(
                "Stripe API base URL must start with http:// or https://",
            ));
        }

        url::Url::parse(&self.api_base)
            .map_err(|e| CashierError::config(format!("Invalid Stripe API base URL: {}", e)))?;

        Ok(())
    }

    /// Secret key
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Publishable key, if configured
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Set the publishable key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Point the client at a different API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Pin the Stripe API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
