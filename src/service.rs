//! Aggregate of every resource wrapper

use crate::client::StripeClient;
use crate::config::CashierConfig;
use crate::resources::{
    AccountLinks, Accounts, Customers, Prices, Products, SetupIntents, Subscriptions,
};
use crate::Result;

/// Entry point bundling one wrapper per Stripe resource
///
/// All wrappers share a single [`StripeClient`] built from the configuration.
#[derive(Debug, Clone)]
pub struct StripeService {
    /// Customer operations
    pub customer: Customers,
    /// Price operations
    pub price: Prices,
    /// Product operations
    pub product: Products,
    /// Subscription operations
    pub subscription: Subscriptions,
    /// Setup intent operations
    pub setup_intent: SetupIntents,
    /// Connected account operations
    pub account: Accounts,
    /// Account link operations
    pub account_link: AccountLinks,
    client: StripeClient,
}

impl StripeService {
    /// Build the client once and hand it to every wrapper
    pub fn new(config: CashierConfig) -> Result<Self> {
        let client = StripeClient::new(&config)?;
        tracing::debug!("Stripe service initialized against {}", client.api_base());
        Ok(Self::with_client(client))
    }

    /// Build from `STRIPE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(CashierConfig::from_env()?)
    }

    /// Wrap an existing client
    pub fn with_client(client: StripeClient) -> Self {
        Self {
            customer: Customers::new(client.clone()),
            price: Prices::new(client.clone()),
            product: Products::new(client.clone()),
            subscription: Subscriptions::new(client.clone()),
            setup_intent: SetupIntents::new(client.clone()),
            account: Accounts::new(client.clone()),
            account_link: AccountLinks::new(client.clone()),
            client,
        }
    }

    /// Shared client handle
    pub fn client(&self) -> &StripeClient {
        &self.client
    }
}
