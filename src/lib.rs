//! # stripe-cashier
//!
//! Typed wrappers over the Stripe API for customers, products, prices,
//! subscriptions, connected accounts, account links and setup intents.
//!
//! Each wrapper method checks its required arguments, sends one request and
//! hands back Stripe's response. Search methods take [`FilterCriteria`], which
//! are rendered into Stripe's search query language.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use stripe_cashier::{CashierConfig, FilterCriteria, SearchParams, StripeService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let stripe = StripeService::new(CashierConfig::new("sk_test_..."))?;
//!
//!     let product = stripe
//!         .product
//!         .create("Test Product", &json!({"metadata": {"order_id": "6735"}}))
//!         .await?;
//!     println!("Created {}", product.id);
//!
//!     // name:'Test Product' AND metadata['order_id']:'6735'
//!     let criteria = FilterCriteria::new()
//!         .field("name", "Test Product")
//!         .nested("metadata", [("order_id", "6735")]);
//!     let found = stripe.product.search(&criteria, &SearchParams::new()).await?;
//!     println!("Found {} products", found.data.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`query`**: Search query encoding
//! - **`config`**: Credentials and transport settings
//! - **`client`**: Shared HTTP client handle
//! - **`form`**: Bracket-notation request parameters
//! - **`resources`**: One wrapper per Stripe resource
//! - **`service`**: Aggregate of every wrapper
//! - **`types`**: Response objects and option types
//! - **`error`**: Error handling

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod query;
pub mod resources;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use client::StripeClient;
pub use config::CashierConfig;
pub use error::{ApiError, CashierError, Result};
pub use query::{encode, FilterCriteria, FilterValue, Primitive};
pub use service::StripeService;
pub use types::{
    Account, AccountLink, Currency, Customer, Deleted, Expandable, List, Price, Product,
    SearchParams, SearchResult, SetupIntent, Subscription, SubscriptionStatus,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
