//! Products
//!
//! See <https://stripe.com/docs/api/products>.

use super::{params_with_leading, search_params};
use crate::client::{require_id, resource_path, StripeClient};
use crate::form::to_params;
use crate::query::FilterCriteria;
use crate::types::{Deleted, List, Product, SearchParams, SearchResult};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

const PATH: &str = "/v1/products";

/// Product endpoints
#[derive(Debug, Clone)]
pub struct Products {
    client: StripeClient,
}

impl Products {
    /// Create the wrapper over a shared client
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }

    /// Create a product named `name`
    pub async fn create<O: Serialize + ?Sized>(&self, name: &str, options: &O) -> Result<Product> {
        require_id(name, "Product name is required")?;
        let params = params_with_leading("name", Value::String(name.to_string()), options)?;
        self.client.post(PATH, &params).await
    }

    /// Update a product
    pub async fn update<O: Serialize + ?Sized>(
        &self,
        product_id: &str,
        options: &O,
    ) -> Result<Product> {
        require_id(product_id, "Product ID is required")?;
        let params = to_params(options)?;
        self.client
            .post(&resource_path(PATH, product_id), &params)
            .await
    }

    /// Retrieve a product
    pub async fn retrieve(&self, product_id: &str) -> Result<Product> {
        require_id(product_id, "Product Id is required")?;
        self.client
            .get(&resource_path(PATH, product_id), &Default::default())
            .await
    }

    /// List products
    pub async fn list<O: Serialize + ?Sized>(&self, options: &O) -> Result<List<Product>> {
        let params = to_params(options)?;
        self.client.get(PATH, &params).await
    }

    /// Delete a product
    pub async fn delete(&self, product_id: &str) -> Result<Deleted> {
        require_id(product_id, "Product Id is required")?;
        self.client
            .delete(&resource_path(PATH, product_id), &Default::default())
            .await
    }

    /// Search products
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        options: &SearchParams,
    ) -> Result<SearchResult<Product>> {
        let params = search_params(criteria, options)?;
        self.client.get(&format!("{}/search", PATH), &params).await
    }
}
