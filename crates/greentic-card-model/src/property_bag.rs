//! Canonical JSON emission.
//!
//! Nodes write their properties into a [`PropertyBag`], which drops default
//! values and keeps keys sorted so the output never depends on write order.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::enums::CardEnum;

/// Sorted property map for one serialized node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: BTreeMap<&'static str, Value>,
}

impl PropertyBag {
    /// Bag pre-populated with the node's `type` discriminator.
    pub fn typed(type_name: &str) -> Self {
        let mut bag = Self::default();
        bag.insert("type", Value::String(type_name.to_string()));
        bag
    }

    /// Writes `value` unconditionally.
    pub fn insert(&mut self, key: &'static str, value: impl Into<Value>) {
        self.entries.insert(key, value.into());
    }

    /// Writes a string even when it is empty (`text`, required properties).
    pub fn string_always(&mut self, key: &'static str, value: &str) {
        self.insert(key, value);
    }

    pub fn string(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    pub fn bool(&mut self, key: &'static str, value: bool, default: bool) {
        if value != default {
            self.insert(key, value);
        }
    }

    /// Counters where `0` means unset.
    pub fn count(&mut self, key: &'static str, value: u32) {
        if value != 0 {
            self.insert(key, value);
        }
    }

    pub fn enumeration<E: CardEnum>(&mut self, key: &'static str, value: E) {
        if !value.is_default() {
            self.insert(key, value.as_str());
        }
    }

    /// Child collection, written even when empty.
    pub fn array(&mut self, key: &'static str, values: Vec<Value>) {
        self.insert(key, Value::Array(values));
    }

    pub fn non_empty_array(&mut self, key: &'static str, values: Vec<Value>) {
        if !values.is_empty() {
            self.array(key, values);
        }
    }

    pub fn optional(&mut self, key: &'static str, value: Option<Value>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Arbitrary caller JSON; nulls are skipped and object keys re-sorted.
    pub fn raw(&mut self, key: &'static str, value: &Value) {
        if !value.is_null() {
            self.insert(key, canonicalize(value));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn into_value(self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        Value::Object(map)
    }
}

/// Rebuilds every object in `value` with lexicographically sorted keys and
/// writes integral floats (`42.0`) as integers.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, Value> = map
                .iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect();
            Value::Object(
                sorted
                    .into_iter()
                    .map(|(key, value)| (key.clone(), value))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(number) => canonical_number(number),
        other => other.clone(),
    }
}

fn canonical_number(number: &Number) -> Value {
    let Some(float) = number.as_f64().filter(|_| number.is_f64()) else {
        return Value::Number(number.clone());
    };
    if float.is_finite() && float.fract() == 0.0 {
        if float >= i64::MIN as f64 && float < i64::MAX as f64 {
            return Value::from(float as i64);
        }
        if float >= 0.0 && float < u64::MAX as f64 {
            return Value::from(float as u64);
        }
    }
    Value::Number(number.clone())
}

/// Compact JSON terminated by exactly one newline.
pub fn to_canonical_string(value: &Value) -> String {
    format!("{value}\n")
}

/// Implemented by every node of the card tree.
pub trait ToCardJson {
    fn to_json(&self) -> Value;

    /// Canonical text form of this node.
    fn serialize(&self) -> String {
        to_canonical_string(&self.to_json())
    }
}
