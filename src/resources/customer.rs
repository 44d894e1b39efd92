//! Customers
//!
//! See <https://stripe.com/docs/api/customers>.

use super::search_params;
use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::query::FilterCriteria;
use crate::types::{Customer, Deleted, List, SearchParams, SearchResult};
use crate::Result;
use serde::Serialize;

const PATH: &str = "/v1/customers";

/// Customer endpoints
#[derive(Debug, Clone)]
pub struct Customers {
    client: StripeClient,
}

impl Customers {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create a customer
    pub async fn create<O: Serialize + ?Sized>(&self, options: &O) -> Result<Customer> {
        let params = to_params(options)?;
        self.client.post(PATH, &params).await
    }

    /// Update a customer
    pub async fn update<O: Serialize + ?Sized>(
        &self,
        customer_id: &str,
        options: &O,
    ) -> Result<Customer> {
        require_id(customer_id, "Customer id is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, customer_id), &params)
            .await
    }

    /// Retrieve a customer
    ///
    /// A deleted customer comes back with [`Customer::deleted`] set.
    pub async fn retrieve(&self, customer_id: &str) -> Result<Customer> {
        require_id(customer_id, "Customer id is required")?;
        self.client
            .get(&resource_path(PATH, customer_id), &Default::default())
            .await
    }

    /// List customers
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<List<Customer>> {
        let params = to_params(options)?;
        self.client.get(PATH, &params).await
    }

    /// Delete a customer
    pub async fn delete(&self, customer_id: &str) -> Result<Deleted> {
        require_id(customer_id, "Customer id is required")?;
        self.client
            .delete(&resource_path(PATH, customer_id), &Default::default())
            .await
    }

    /// Search customers
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        options: &SearchParams,
    ) -> Result<SearchResult<Customer>> {
        let params = search_params(criteria, options)?;
        self.client.get(&format!("{}/search", PATH), &params).await
    }
}
