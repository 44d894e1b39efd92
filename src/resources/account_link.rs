//! Account links
//!
//! See <https://stripe.com/docs/api/account_links>.

use super::params_with_trailing;
use crate::client::{require_id, StripeClient};
use crate::types::AccountLink;
use crate::Result;
use serde::Serialize;
use serde_json::Value;

const PATH: &str = "/v1/account_links";

/// Account link endpoints
#[derive(Debug, Clone)]
pub struct AccountLinks {
    client: StripeClient,
}

impl AccountLinks {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create an onboarding link for `account_id`
    ///
    /// `options` needs at least `refresh_url`, `return_url` and `type`.
    pub async fn create<O: Serialize + ?Sized>(
        &self,
        account_id: &str,
        options: &O,
    ) -> Result<AccountLink> {
        require_id(account_id, "Account ID is required")?;
        let params =
            params_with_trailing("account", Value::String(account_id.to_string()), options)?;
        self.client.post(PATH, &params).await
    }
}
