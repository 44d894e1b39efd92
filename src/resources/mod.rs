//! Resource wrappers
//!
//! One wrapper per Stripe resource. Every method validates its required
//! arguments, forwards a single request through the shared [`StripeClient`]
//! and returns Stripe's response as-is. Empty identifiers and empty search
//! criteria fail with [`CashierError::MissingArgument`] before anything is sent.
//!
//! Options are any [`serde::Serialize`] value that serializes to a JSON object;
//! pass `&()` when there are none.
//!
//! [`StripeClient`]: crate::client::StripeClient

use crate::form::{to_params, Params};
use crate::query::{encode, FilterCriteria};
use crate::types::SearchParams;
use crate::{CashierError, Result};
use serde::Serialize;
use serde_json::Value;

pub mod account;
pub mod account_link;
pub mod customer;
pub mod price;
pub mod product;
pub mod setup_intent;
pub mod subscription;


pub use account::Accounts;
pub use account_link::AccountLinks;
pub use customer::Customers;
pub use price::Prices;
pub use product::Products;
pub use setup_intent::SetupIntents;
pub use subscription::Subscriptions;

/// Build search parameters with the encoded query first
pub(crate) fn search_params(criteria: &FilterCriteria, options: &SearchParams) -> Result<Params> {
    if criteria.is_empty() {
        return Err(CashierError::missing_argument("Query is required"));
    }

    let query = encode(criteria);
    tracing::debug!("Encoded search query: {}", query);

    let mut params = Params::new();
    params.insert("query".to_string(), Value::String(query));
    params.extend(to_params(options)?);
    Ok(params)
}

/// Convert options and put `key` in front, overriding any option of that name
pub(crate) fn params_with_leading<O: Serialize + ?Sized>(
    key: &str,
    value: Value,
    options: &O,
) -> Result<Params> {
    let mut params = Params::new();
    params.insert(key.to_string(), value);
    for (k, v) in to_params(options)? {
        if k != key {
            params.insert(k, v);
        }
    }
    Ok(params)
}

/// Convert options and set `key`, overriding any option of that name
pub(crate) fn params_with_trailing<O: Serialize + ?Sized>(
    key: &str,
    value: Value,
    options: &O,
) -> Result<Params> {
    let mut params = to_params(options)?;
    params.remove(key);
    params.insert(key.to_string(), value);
    Ok(params)
}
