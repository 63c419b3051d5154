//! Dual-key field lookup over untyped server records.
//!
//! A [`Record`] wraps a raw `serde_json::Value` and answers typed lookups
//! against an ordered list of candidate keys. The first candidate holding a
//! value of the requested type wins; when none does, the type's zero value
//! is returned. Lookups never fail.

use serde_json::{Map, Value};

/// Ordered candidate keys, highest priority first.
pub type Keys = &'static [&'static str];

/// A primitive that can be pulled out of a JSON value, with a zero default.
pub trait FieldValue: Sized {
    fn from_json(value: &Value) -> Option<Self>;
    fn zero() -> Self;
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn zero() -> Self {
        String::new()
    }
}

impl FieldValue for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn zero() -> Self {
        0.0
    }
}

impl FieldValue for u64 {
    /// Whole, non-negative numbers only; `3.0` counts, `-1` and `2.5` don't.
    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
                .map(|n| n as u64)
        })
    }

    fn zero() -> Self {
        0
    }
}

/// Read-only view over one raw record. Non-object values behave as an empty record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self {
            fields: raw.as_object(),
        }
    }

    /// First candidate whose value has type `T`, else `T::zero()`.
    pub fn get<T: FieldValue>(&self, keys: &[&str]) -> T {
        keys.iter()
            .filter_map(|key| self.raw(key))
            .find_map(T::from_json)
            .unwrap_or_else(T::zero)
    }

    pub fn string(&self, keys: &[&str]) -> String {
        self.get(keys)
    }

    pub fn number(&self, keys: &[&str]) -> f64 {
        self.get(keys)
    }

    pub fn count(&self, keys: &[&str]) -> u64 {
        self.get(keys)
    }

    /// First candidate holding an array, else an empty slice.
    pub fn array(&self, keys: &[&str]) -> &'a [Value] {
        keys.iter()
            .filter_map(|key| self.raw(key))
            .find_map(|value| value.as_array().map(Vec::as_slice))
            .unwrap_or(&[])
    }

    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }
}
