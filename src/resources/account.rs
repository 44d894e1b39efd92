//! Connected accounts
//!
//! See <https://stripe.com/docs/api/accounts>.

use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::types::Account;
use crate::Result;
use serde::Serialize;

const PATH: &str = "/v1/accounts";

/// Account endpoints
#[derive(Debug, Clone)]
pub struct Accounts {
    client: StripeClient,
}

impl Accounts {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create a connected account
    pub async fn create<O: Serialize + ?Sized>(&self, options: &O) -> Result<Account> {
        let params = to_params(options)?;
        self.client.post(PATH, &params).await
    }

    /// Update a connected account
    pub async fn update<O: Serialize + ?Sized>(
        &self,
        account_id: &str,
        options: &O,
    ) -> Result<Account> {
        require_id(account_id, "Account ID is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, account_id), &params)
            .await
    }

    /// Retrieve a connected account
    pub async fn retrieve(&self, account_id: &str) -> Result<Account> {
        require_id(account_id, "Account ID is required")?;
        self.client
            .get(&resource_path(PATH, account_id), &Default::default())
            .await
    }
}
