//! Stripe resource objects
//!
//! Each struct names the fields callers commonly read and keeps every other
//! field of the response in `extra`, so nothing Stripe returns is dropped.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key/value metadata attached to an object
pub type Metadata = HashMap<String, String>;

fn timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// A field that holds either an object id or, when expanded, the object itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Unexpanded identifier
    Id(String),
    /// Expanded object
    Object(Box<T>),
}

impl<T: HasId> Expandable<T> {
    /// Identifier, whether or not the field was expanded
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    /// The expanded object, if present
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }
}

/// Objects carrying a Stripe identifier
pub trait HasId {
    /// Stripe identifier
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(
            impl HasId for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }

            impl $ty {
                /// Creation time
                pub fn created_at(&self) -> Option<DateTime<Utc>> {
                    timestamp(self.created)
                }
            }
        )*
    };
}

impl_has_id!(Customer, Product, Price, Subscription, Account, SetupIntent);

/// A customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, `cus_...`
    pub id: String,
    /// Always `customer`
    #[serde(default)]
    pub object: String,
    /// Set when the customer has been deleted
    #[serde(default)]
    pub deleted: bool,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Full name or business name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, `prod_...`
    pub id: String,
    /// Always `product`
    #[serde(default)]
    pub object: String,
    /// Name shown to customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the product can be bought
    #[serde(default)]
    pub active: bool,
    /// Description shown to customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default price, expandable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price: Option<Expandable<Price>>,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Billing cadence of a recurring price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    /// `day`, `week`, `month` or `year`
    pub interval: String,
    /// Number of intervals between billings
    #[serde(default = "default_interval_count")]
    pub interval_count: u32,
    /// `licensed` or `metered`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
}

fn default_interval_count() -> u32 {
    1
}

/// A price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    /// Unique identifier, `price_...`
    pub id: String,
    /// Always `price`
    #[serde(default)]
    pub object: String,
    /// Whether the price can be used for new purchases
    #[serde(default)]
    pub active: bool,
    /// Lower-case ISO currency code
    #[serde(default)]
    pub currency: String,
    /// Product the price belongs to, expandable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Expandable<Product>>,
    /// Amount in the currency's minor unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    /// Amount in the minor unit with up to 12 decimal places
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<Decimal>,
    /// Billing cadence, for recurring prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    /// `one_time` or `recurring`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<String>,
    /// Internal label, not shown to customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Key for retrieving the price without its id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_key: Option<String>,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Price {
    /// Whether the price bills on an interval
    pub fn is_recurring(&self) -> bool {
        self.recurring.is_some()
    }
}

/// Lifecycle state of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// First payment has not succeeded yet
    Incomplete,
    /// First payment failed within 23 hours
    IncompleteExpired,
    /// In a trial period
    Trialing,
    /// Paid and in good standing
    Active,
    /// Latest renewal payment failed
    PastDue,
    /// Ended
    Canceled,
    /// Retries exhausted with the invoice left open
    Unpaid,
    /// Trial ended without a payment method
    Paused,
    /// A status this crate does not know about yet
    #[serde(other)]
    Unknown,
}

/// A subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier, `sub_...`
    pub id: String,
    /// Always `subscription`
    #[serde(default)]
    pub object: String,
    /// Customer being billed, expandable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    /// Current lifecycle state
    pub status: SubscriptionStatus,
    /// Whether the subscription ends with the current period
    #[serde(default)]
    pub cancel_at_period_end: bool,
    /// Cancellation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<i64>,
    /// End of the trial, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subscription {
    /// Whether the subscription currently grants access
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing
        )
    }

    /// When the subscription was canceled
    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.canceled_at)
    }

    /// When the trial ends
    pub fn trial_end(&self) -> Option<DateTime<Utc>> {
        timestamp(self.trial_end)
    }
}

/// A connected account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, `acct_...`
    pub id: String,
    /// Always `account`
    #[serde(default)]
    pub object: String,
    /// `standard`, `express` or `custom`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Email address of the account holder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// `individual`, `company`, `non_profit` or `government_entity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// Whether the account can create charges
    #[serde(default)]
    pub charges_enabled: bool,
    /// Whether payouts can be sent to the account
    #[serde(default)]
    pub payouts_enabled: bool,
    /// Whether onboarding details were submitted
    #[serde(default)]
    pub details_submitted: bool,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single-use onboarding link for a connected account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLink {
    /// Always `account_link`
    #[serde(default)]
    pub object: String,
    /// URL to redirect the account holder to
    pub url: String,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Expiry time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountLink {
    /// When the link stops working
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        timestamp(self.expires_at)
    }
}

/// A setup intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupIntent {
    /// Unique identifier, `seti_...`
    pub id: String,
    /// Always `setup_intent`
    #[serde(default)]
    pub object: String,
    /// Secret handed to the client to confirm the intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Customer the payment method is saved to, expandable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    /// e.g. `requires_payment_method`, `succeeded`, `canceled`
    #[serde(default)]
    pub status: String,
    /// Payment method being set up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Value>,
    /// `on_session` or `off_session`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Step the customer must complete, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<Value>,
    /// Creation time, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Whether the object exists in live mode
    #[serde(default)]
    pub livemode: bool,
    /// Attached key/value pairs
    #[serde(default)]
    pub metadata: Metadata,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cus_123",
            "object": "customer",
            "email": "jenny@example.com",
            "created": 1680893993,
            "balance": 0,
            "invoice_settings": {"default_payment_method": null}
        }))
        .unwrap();

        assert_eq!(customer.email.as_deref(), Some("jenny@example.com"));
        assert_eq!(customer.extra["balance"], json!(0));
        assert!(customer.extra.contains_key("invoice_settings"));
        assert_eq!(customer.created_at().unwrap().timestamp(), 1680893993);
    }

    #[test]
    fn test_deleted_customer() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cus_123",
            "object": "customer",
            "deleted": true
        }))
        .unwrap();
        assert!(customer.deleted);
        assert!(customer.metadata.is_empty());
    }

    #[test]
    fn test_expandable_fields() {
        let price: Price = serde_json::from_value(json!({
            "id": "price_1",
            "currency": "usd",
            "product": "prod_1",
            "unit_amount": 1200,
            "unit_amount_decimal": "1200",
            "recurring": {"interval": "month"}
        }))
        .unwrap();
        assert_eq!(price.product.as_ref().unwrap().id(), "prod_1");
        assert_eq!(price.unit_amount_decimal, Some(Decimal::from(1200)));
        assert_eq!(price.recurring.as_ref().unwrap().interval_count, 1);
        assert!(price.is_recurring());

        let subscription: Subscription = serde_json::from_value(json!({
            "id": "sub_1",
            "status": "trialing",
            "customer": {"id": "cus_9", "object": "customer", "name": "Jenny"}
        }))
        .unwrap();
        let customer = subscription.customer.as_ref().unwrap();
        assert_eq!(customer.id(), "cus_9");
        assert_eq!(customer.as_object().unwrap().name.as_deref(), Some("Jenny"));
        assert!(subscription.is_active());
    }

    #[test]
    fn test_subscription_status_names() {
        let cases = [
            ("incomplete", SubscriptionStatus::Incomplete),
            ("incomplete_expired", SubscriptionStatus::IncompleteExpired),
            ("trialing", SubscriptionStatus::Trialing),
            ("active", SubscriptionStatus::Active),
            ("past_due", SubscriptionStatus::PastDue),
            ("canceled", SubscriptionStatus::Canceled),
            ("unpaid", SubscriptionStatus::Unpaid),
            ("paused", SubscriptionStatus::Paused),
        ];
        for (name, status) in cases {
            let parsed: SubscriptionStatus = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_subscription_status() {
        let subscription: Subscription = serde_json::from_value(json!({
            "id": "sub_1",
            "status": "something_new"
        }))
        .unwrap();
        assert_eq!(subscription.status, SubscriptionStatus::Unknown);
        assert!(!subscription.is_active());
    }
}
