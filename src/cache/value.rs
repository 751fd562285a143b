//! Cache Value Module
//!
//! Defines the tagged value type stored in the cache and the numeric
//! arithmetic used by the increment/decrement operations.

use serde::{Deserialize, Serialize};

// == Value ==
/// A storable cache value.
///
/// Values arrive as JSON scalars and keep their original type: booleans,
/// 64-bit integers, double floats, and strings. Only the `Int` and `Float`
/// variants are numeric; increment/decrement is undefined for the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean value
    Bool(bool),
    /// A 64-bit signed integer
    Int(i64),
    /// A double-precision float
    Float(f64),
    /// A string value
    Str(String),
}

impl Value {
    // == Is Numeric ==
    /// Returns true if the value supports numeric addition.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns the value as an f64 if it is numeric.
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    // == Checked Add ==
    /// Computes `self + delta` if both values are numeric.
    ///
    /// Integer plus integer stays an integer (checked, `None` on overflow);
    /// any combination involving a float widens to a float. Non-numeric
    /// operands yield `None`.
    pub fn checked_add(&self, delta: &Value) -> Option<Value> {
        match (self, delta) {
            (Value::Int(a), Value::Int(b)) => a.checked_add(*b).map(Value::Int),
            _ => Some(Value::Float(self.as_f64()? + delta.as_f64()?)),
        }
    }

    // == Checked Sub ==
    /// Computes `self - delta` if both values are numeric.
    ///
    /// Same widening rules as [`Value::checked_add`].
    pub fn checked_sub(&self, delta: &Value) -> Option<Value> {
        match (self, delta) {
            (Value::Int(a), Value::Int(b)) => a.checked_sub(*b).map(Value::Int),
            _ => Some(Value::Float(self.as_f64()? - delta.as_f64()?)),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
