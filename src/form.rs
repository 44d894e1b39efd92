//! Request parameter encoding
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies (and URL query
//! strings) with nested values spelled in bracket notation:
//!
//! ```text
//! metadata[order_id]=6735
//! items[0][price]=price_123
//! ```
//!
//! Options are accepted as any [`Serialize`] value, converted to a JSON object
//! and flattened into ordered `(name, value)` pairs.

use crate::{CashierError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Request parameters as a JSON object
pub type Params = Map<String, Value>;

/// Convert caller options into a parameter object
///
/// `null` is treated as no options. Any other non-object value is rejected.
pub fn to_params<T: Serialize + ?Sized>(options: &T) -> Result<Params> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        _ => Err(CashierError::invalid_argument("Options must be an object")),
    }
}

/// Flatten parameters into bracket-notation pairs
///
/// Null values are skipped, as are empty objects and arrays.
pub fn encode_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(name: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((name, b.to_string())),
        Value::Number(n) => pairs.push((name, n.to_string())),
        Value::String(s) => pairs.push((name, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{}[{}]", name, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(format!("{}[{}]", name, key), item, pairs);
            }
        }
    }
}
