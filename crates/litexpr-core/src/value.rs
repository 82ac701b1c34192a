//! Runtime values returned by a compiled [`Callable`](crate::Callable).

use serde::{Serialize, Serializer};
use serde_json::Number;

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn as_exact_integer(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER).then_some(n as i64)
}

/// Serialize integral numbers as integers so `42` renders as `42`, not `42.0`.
/// Non-finite numbers go through `serialize_f64`, which JSON writes as `null`.
pub(crate) fn serialize_number<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match as_exact_integer(*n) {
        Some(i) => serializer.serialize_i64(i),
        None => serializer.serialize_f64(*n),
    }
}

/// The value a literal expression evaluates to.
///
/// Serializes to plain JSON. Non-finite numbers (from overflowing literals
/// such as `1e400`) have no JSON form and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    #[serde(serialize_with = "serialize_number")]
    Number(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Integral numbers that fit in an `i64` become JSON integers so that
    /// `42` prints as `42`, not `42.0`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if let Some(i) = as_exact_integer(n) {
        return serde_json::Value::Number(Number::from(i));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}
