use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Number};

use crate::tree::{NodeKind, ValueTree};

/// `serde_json::Value` as a tree backend.
impl ValueTree for serde_json::Value {
    #[inline]
    fn null() -> Self {
        Self::Null
    }

    #[inline]
    fn from_bool(value: bool) -> Self {
        Self::Bool(value)
    }

    #[inline]
    fn from_i64(value: i64) -> Self {
        Self::Number(Number::from(value))
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        Self::Number(Number::from(value))
    }

    /// Non-finite floats become `null`, as in JSON.
    #[inline]
    fn from_f64(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }

    #[inline]
    fn from_string(value: String) -> Self {
        Self::String(value)
    }

    #[inline]
    fn new_array() -> Self {
        Self::Array(Vec::new())
    }

    #[inline]
    fn new_object() -> Self {
        Self::Object(Map::new())
    }

    fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Bool(_) => NodeKind::Bool,
            Self::Number(_) => NodeKind::Number,
            Self::String(_) => NodeKind::String,
            Self::Array(_) => NodeKind::Array,
            Self::Object(_) => NodeKind::Object,
        }
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        serde_json::Value::as_bool(self)
    }

    #[inline]
    fn as_i64(&self) -> Option<i64> {
        serde_json::Value::as_i64(self)
    }

    #[inline]
    fn as_u64(&self) -> Option<u64> {
        serde_json::Value::as_u64(self)
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        serde_json::Value::as_f64(self)
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        serde_json::Value::as_str(self)
    }

    #[inline]
    fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|o| o.get(key))
    }

    #[inline]
    fn get_index(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|a| a.get(index))
    }

    fn set(&mut self, key: String, value: Self) {
        if let Self::Object(object) = self {
            object.insert(key, value);
        }
    }

    fn push(&mut self, value: Self) {
        if let Self::Array(array) = self {
            array.push(value);
        }
    }

    fn erase(&mut self, key: &str) -> Option<Self> {
        self.as_object_mut().and_then(|o| o.remove(key))
    }

    fn size(&self) -> usize {
        match self {
            Self::Array(a) => a.len(),
            Self::Object(o) => o.len(),
            _ => 0,
        }
    }

    fn entries(&self) -> Vec<(&str, &Self)> {
        match self {
            Self::Object(o) => o.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            _ => Vec::new(),
        }
    }

    fn elements(&self) -> Vec<&Self> {
        match self {
            Self::Array(a) => a.iter().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::Value;

    #[test]
    fn converts_between_backends() {
        let json = serde_json::json!({ "a": [1, -2, 0.5], "b": { "c": null } });
        let value = Value::from_tree(&json);
        assert_eq!(value.get("a").and_then(Value::as_array).map(Vec::len), Some(3));
        let back: serde_json::Value = value.to_tree();
        assert_eq!(back, json);
    }
}
