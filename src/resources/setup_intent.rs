//! Setup intents
//!
//! See <https://stripe.com/docs/api/setup_intents>.

use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::types::{List, SetupIntent};
use crate::Result;
use serde::Serialize;

const PATH: &str = "/v1/setup_intents";

/// Setup intent endpoints
#[derive(Debug, Clone)]
pub struct SetupIntents {
    client: StripeClient,
}

impl SetupIntents {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create a setup intent
    pub async fn create<O: Serialize + ?Sized>(&self, options: &O) -> Result<SetupIntent> {
        let params = to_params(options)?;
        self.client.post(PATH, &params).await
    }

    /// Update a setup intent
    pub async fn update<O: Serialize + ?Sized>(
        &self,
        setup_intent_id: &str,
        options: &O,
    ) -> Result<SetupIntent> {
        require_id(setup_intent_id, "Setup intent ID is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, setup_intent_id), &params)
            .await
    }

    /// Retrieve a setup intent
    pub async fn retrieve(&self, setup_intent_id: &str) -> Result<SetupIntent> {
        require_id(setup_intent_id, "Setup intent ID is required")?;
        self.client
            .get(&resource_path(PATH, setup_intent_id), &Default::default())
            .await
    }

    /// List setup intents
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<List<SetupIntent>> {
        let params = to_params(options)?;
        self.client.get(PATH, &params).await
    }

    /// Cancel a setup intent
    pub async fn cancel<O: Serialize + ?Sized>(
        &self,
        setup_intent_id: &str,
        options: &O,
    ) -> Result<SetupIntent> {
        self.action(setup_intent_id, "cancel", options).await
    }

    /// Confirm a setup intent
    pub async fn confirm<O: Serialize + ?Sized>(
        &self,
        setup_intent_id: &str,
        options: &O,
    ) -> Result<SetupIntent> {
        self.action(setup_intent_id, "confirm", options).await
    }

    /// Verify the microdeposits sent to a bank account
    pub async fn verify_microdeposits<O: Serialize + ?Sized>(
        &self,
        setup_intent_id: &str,
        options: &O,
    ) -> Result<SetupIntent> {
        self.action(setup_intent_id, "verify_microdeposits", options)
            .await
    }

    async fn action<O: Serialize + ?Sized>(
        &self,
        setup_intent_id: &str,
        action: &str,
        options: &O,
    ) -> Result<SetupIntent> {
        require_id(setup_intent_id, "Setup intent ID is required")?;
        let params = to_params(options)?;
        let path = format!("{}/{}", resource_path(PATH, setup_intent_id), action);
        self.client.post(&path, &params).await
    }
}
