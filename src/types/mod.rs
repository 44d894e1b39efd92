//! Response and parameter types for the Stripe API
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`resources`] - Resource objects (customers, products, prices, ...)
//! - [`list`] - List pages, search pages, deletion receipts and search options
//! - [`currency`] - ISO currency codes accepted when creating prices
//!
//! # Examples
//!
//! ```
//! use stripe_cashier::types::{Currency, SearchParams};
//!
//! # fn example() -> stripe_cashier::Result<()> {
//! let currency: Currency = "usd".parse()?;
//! assert_eq!(currency, Currency::Usd);
//!
//! let params = SearchParams::new().with_limit(20);
//! assert_eq!(params.limit, Some(20));
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod list;
pub mod resources;

// Re-export commonly used types
pub use currency::Currency;
pub use list::{Deleted, List, SearchParams, SearchResult};
pub use resources::{
    Account, AccountLink, Customer, Expandable, HasId, Metadata, Price, Product, Recurring,
    SetupIntent, Subscription, SubscriptionStatus,
};
