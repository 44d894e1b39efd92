//! Search customers by email and metadata
//!
//! ```text
//! STRIPE_SECRET_KEY=sk_test_... cargo run --example customer_search -- jenny@example.com
//! ```

use stripe_cashier::{FilterCriteria, SearchParams, StripeService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let email = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "jenny@example.com".to_string());

    let stripe = StripeService::from_env()?;

    let criteria = FilterCriteria::new()
        .field("email", email.as_str())
        .nested("metadata", [("source", "cashier")]);
    tracing::info!("Searching customers with query: {}", criteria.encode());

    let result = stripe
        .customer
        .search(&criteria, &SearchParams::new().with_limit(10))
        .await?;

    for customer in &result.data {
        tracing::info!(
            "{} {}",
            customer.id,
            customer.name.as_deref().unwrap_or("<no name>")
        );
    }
    if result.has_more {
        tracing::info!("More results after page {:?}", result.next_page);
    }

    Ok(())
}
