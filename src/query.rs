//! Search query encoding
//!
//! Stripe's search endpoints take a single `query` string written in the
//! [search query language](https://stripe.com/docs/search#search-query-language).
//! [`FilterCriteria`] collects filter clauses in order and [`encode`] renders them:
//!
//! ```text
//! segment        := plainSegment | nestedSegment
//! plainSegment   := key ":'" value "'"
//! nestedSegment  := key "['" subKey "']:'" subValue "'"
//! query          := segment (" AND " segment)*
//! ```
//!
//! # Examples
//!
//! ```
//! use stripe_cashier::query::{encode, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .field("name", "Test Product")
//!     .nested("metadata", [("order_id", "6735")]);
//!
//! assert_eq!(
//!     encode(&criteria),
//!     "name:'Test Product' AND metadata['order_id']:'6735'"
//! );
//! ```
//!
//! Keys and values are written verbatim. A value containing `'` or ` AND `
//! produces a query Stripe will parse differently from what was meant.
//!
//! Numbers follow the usual text form of a double: integral values up to
//! `1e21` print as plain digits (`1999.0` becomes `1999`), infinities print as
//! `Infinity` and `-Infinity`. JSON values nested below the second level are
//! flattened to text rather than rejected: arrays join their items with `,`
//! and objects print as `[object Object]`.

use crate::{CashierError, Result};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Separator placed between segments
pub const SEGMENT_SEPARATOR: &str = " AND ";

/// A scalar filter value
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Text value
    String(String),
    /// Numeric value
    Number(Number),
    /// Boolean value
    Bool(bool),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::String(s) => f.write_str(s),
            Primitive::Bool(b) => write!(f, "{}", b),
            Primitive::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v == 0.0 => f.write_str("0"),
                // Integral floats below 1e21 render as plain digits
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e21 => {
                    write!(f, "{}", v)
                }
                _ => write!(f, "{}", n),
            },
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<&String> for Primitive {
    fn from(value: &String) -> Self {
        Primitive::String(value.clone())
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

macro_rules! primitive_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Primitive::Number(Number::from(value))
                }
            }
        )*
    };
}

primitive_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => Primitive::Number(n),
            // NaN and infinities have no JSON number form
            None if value.is_nan() => Primitive::String("NaN".to_string()),
            None if value > 0.0 => Primitive::String("Infinity".to_string()),
            None => Primitive::String("-Infinity".to_string()),
        }
    }
}

impl From<Value> for Primitive {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Primitive::String(s),
            Value::Number(n) => Primitive::Number(n),
            Value::Bool(b) => Primitive::Bool(b),
            other => Primitive::String(plain_text(&other)),
        }
    }
}

/// Text form of a value nested too deep for the query language
///
/// Arrays join their items with `,` (null items become empty), objects become
/// `[object Object]` and `null` becomes `null`.
fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => Primitive::Number(n.clone()).to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => plain_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// A top-level filter value: either a scalar or one level of nested keys
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Rendered as `key:'value'`
    Primitive(Primitive),
    /// Rendered as one `key['subKey']:'subValue'` segment per entry
    Nested(Vec<(String, Primitive)>),
}

impl From<Primitive> for FilterValue {
    fn from(value: Primitive) -> Self {
        FilterValue::Primitive(value)
    }
}

macro_rules! filter_value_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    FilterValue::Primitive(value.into())
                }
            }
        )*
    };
}

filter_value_from_primitive!(
    &str, String, &String, bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f64
);

impl FilterValue {
    /// Build a nested value from ordered `(subKey, subValue)` pairs
    pub fn nested<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Primitive>,
        I: IntoIterator<Item = (K, V)>,
    {
        FilterValue::Nested(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Convert a JSON value, flattening objects and arrays by one level
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                FilterValue::Nested(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(items) => FilterValue::Nested(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v.into()))
                    .collect(),
            ),
            other => FilterValue::Primitive(other.into()),
        }
    }
}

/// Ordered filter clauses for a search request
///
/// Entries keep insertion order, which fixes the byte layout of the encoded
/// query. Setting a key that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    entries: Vec<(String, FilterValue)>,
}

impl FilterCriteria {
    /// Create empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `key:'value'` clause
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Primitive>) -> Self {
        self.insert(key, FilterValue::Primitive(value.into()));
        self
    }

    /// Add `key['subKey']:'subValue'` clauses, one per entry
    pub fn nested<K, V, I>(mut self, key: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Primitive>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.insert(key, FilterValue::nested(entries));
        self
    }

    /// Set a value, replacing an existing entry without moving it
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Whether no clauses are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the criteria as a query string
    pub fn encode(&self) -> String {
        encode(self)
    }
}

impl<K, V> FromIterator<(K, V)> for FilterCriteria
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut criteria = FilterCriteria::new();
        for (key, value) in iter {
            criteria.insert(key, value);
        }
        criteria
    }
}

impl From<Map<String, Value>> for FilterCriteria {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, FilterValue::from_json(v)))
            .collect()
    }
}

impl TryFrom<Value> for FilterCriteria {
    type Error = CashierError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into()),
            _ => Err(CashierError::invalid_argument("Query must be an object")),
        }
    }
}

/// Encode filter criteria into a Stripe search query string
///
/// Empty criteria encode to the empty string.
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut segments = Vec::with_capacity(criteria.len());

    for (key, value) in criteria.iter() {
        match value {
            FilterValue::Nested(entries) => {
                for (sub_key, sub_value) in entries {
                    segments.push(format!("{}['{}']:'{}'", key, sub_key, sub_value));
                }
            }
            FilterValue::Primitive(value) => segments.push(format!("{}:'{}'", key, value)),
        }
    }

    segments.join(SEGMENT_SEPARATOR)
}
