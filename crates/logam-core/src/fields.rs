//! Turning a flat, alternating key/value sequence into typed fields.
//!
//! The keyed logging calls (`infow` and friends) accept
//! `["key", value, "key", value, ...]`. Malformed input is never an error:
//! well-formed pairs are kept and everything else is reported separately so
//! the caller can log a diagnostic record about it.

use serde_json::{json, Value};

use crate::entry::Field;

/// Message of the diagnostic record for a trailing key with no value.
pub const DANGLING_KEY_MESSAGE: &str = "Ignored key without a value.";

/// Message of the diagnostic record for pairs whose key isn't a string.
pub const NON_STRING_KEYS_MESSAGE: &str = "Ignored key-value pairs with non-string keys.";

/// A key/value pair skipped because its key isn't a string.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPair {
    /// Index of the key in the original sequence
    pub position: usize,
    pub key: Value,
    pub value: Value,
}

impl InvalidPair {
    fn to_value(&self) -> Value {
        json!({
            "position": self.position,
            "key": self.key,
            "value": self.value,
        })
    }
}

/// Result of [`sweeten`].
#[derive(Debug, Default, PartialEq)]
pub struct Sweetened {
    /// Well-formed pairs, in call order
    pub fields: Vec<Field>,
    /// Trailing key that had no value
    pub dangling: Option<Value>,
    pub invalid: Vec<InvalidPair>,
}

impl Sweetened {
    /// Field for the dangling-key diagnostic record, if there is one.
    pub fn ignored_field(&self) -> Option<Field> {
        self.dangling
            .as_ref()
            .map(|key| Field::new("ignored", key.clone()))
    }

    /// Field for the non-string-key diagnostic record, if there is one.
    pub fn invalid_field(&self) -> Option<Field> {
        if self.invalid.is_empty() {
            return None;
        }
        let pairs: Vec<Value> = self.invalid.iter().map(InvalidPair::to_value).collect();
        Some(Field::new("invalid", Value::Array(pairs)))
    }
}

/// Split an alternating key/value sequence into fields.
pub fn sweeten(kvs: &[Value]) -> Sweetened {
    let mut out = Sweetened::default();
    let mut i = 0;
    while i < kvs.len() {
        let key = &kvs[i];
        let Some(value) = kvs.get(i + 1) else {
            out.dangling = Some(key.clone());
            break;
        };
        match key {
            Value::String(k) => out.fields.push(Field::new(k.clone(), value.clone())),
            _ => out.invalid.push(InvalidPair {
                position: i,
                key: key.clone(),
                value: value.clone(),
            }),
        }
        i += 2;
    }
    out
}
