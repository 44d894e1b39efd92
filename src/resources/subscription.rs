//! Subscriptions
//!
//! See <https://stripe.com/docs/api/subscriptions>.

use super::{params_with_trailing, search_params};
use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::query::FilterCriteria;
use crate::types::{List, SearchParams, SearchResult, Subscription};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

const PATH: &str = "/v1/subscriptions";

/// Subscription endpoints
#[derive(Debug, Clone)]
pub struct Subscriptions {
    client: StripeClient,
}

impl Subscriptions {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Subscribe `customer_id`; `options` carries the items and billing settings
    pub async fn create<O: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        options: &O,
    ) -> Result<Subscription> {
        require_id(customer_id, "Customer ID is required")?;
        let params =
            params_with_trailing("customer", Value::String(customer_id.to_string()), options)?;
        self.client.post(PATH, &params).await
    }

    /// Update a subscription
    pub async fn update<O: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        options: &O,
    ) -> Result<Subscription> {
        require_id(subscription_id, "Subscription ID is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, subscription_id), &params)
            .await
    }

    /// Retrieve a subscription
    pub async fn retrieve(&self, subscription_id: &str) -> Result<Subscription> {
        require_id(subscription_id, "Subscription ID is required")?;
        self.client
            .get(&resource_path(PATH, subscription_id), &Default::default())
            .await
    }

    /// List subscriptions
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<List<Subscription>> {
        let params = to_params(options)?;
        self.client.get(PATH, &params).await
    }

    /// Cancel a subscription immediately
    pub async fn cancel<O: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        options: &O,
    ) -> Result<Subscription> {
        require_id(subscription_id, "Subscription ID is required")?;
        let params = to_params(options)?;
        self.client
            .delete(&resource_path(PATH, subscription_id), &params)
            .await
    }

    /// Resume a paused subscription
    pub async fn resume<O: Serialize + ?Sized>(
        &self,
        subscription_id: &str,
        options: &O,
    ) -> Result<Subscription> {
        require_id(subscription_id, "Subscription ID is required")?;
        let params = to_params(options)?;
        let path = format!("{}/resume", resource_path(PATH, subscription_id));
        self.client.post(&path, &params).await
    }

    /// Search subscriptions
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        options: &SearchParams,
    ) -> Result<SearchResult<Subscription>> {
        let params = search_params(criteria, options)?;
        self.client.get(&format!("{}/search", PATH), &params).await
    }
}
