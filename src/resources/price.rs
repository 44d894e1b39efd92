//! Prices
//!
//! See <https://stripe.com/docs/api/prices>. Prices cannot be deleted.

use super::{params_with_leading, search_params};
use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::query::FilterCriteria;
use crate::types::{Currency, List, Price, SearchParams, SearchResult};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

const PATH: &str = "/v1/prices";

/// Price endpoints
#[derive(Debug, Clone)]
pub struct Prices {
    client: StripeClient,
}

impl Prices {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create a price in `currency`
    ///
    /// Parse user input with [`Currency::from_str`](std::str::FromStr) to get
    /// an `Invalid currency` error for unknown codes.
    pub async fn create<O: Serialize + ?Sized>(
        &self,
        currency: Currency,
        options: &O,
    ) -> Result<Price> {
        let params = params_with_leading(
            "currency",
            Value::String(currency.as_str().to_string()),
            options,
        )?;
        self.client.post(PATH, &params).await
    }

    /// Update a price
    pub async fn update<O: Serialize + ?Sized>(&self, price_id: &str, options: &O) -> Result<Price> {
        require_id(price_id, "Price id is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, price_id), &params)
            .await
    }

    /// Retrieve a price
    pub async fn retrieve(&self, price_id: &str) -> Result<Price> {
        require_id(price_id, "Price id is required")?;
        self.client
            .get(&resource_path(PATH, price_id), &Default::default())
            .await
    }

    /// List prices
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<List<Price>> {
        let params = to_params(options)?;
        self.client.get(PATH, &params).await
    }

    /// Search prices
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        options: &SearchParams,
    ) -> Result<SearchResult<Price>> {
        let params = search_params(criteria, options)?;
        self.client.get(&format!("{}/search", PATH), &params).await
    }
}
