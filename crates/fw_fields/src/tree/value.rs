use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::tree::{NodeKind, ValueTree};

/// The children of an object node, ordered by key.
pub type Object = BTreeMap<String, Value>;

// -----------------------------------------------------------------------------
// Number

/// A numeric leaf.
///
/// Integers keep their exact value; negative integers are always `NegInt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::PosInt(v) => i64::try_from(v).ok(),
            Self::NegInt(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::PosInt(v) => Some(v),
            Self::NegInt(_) | Self::Float(_) => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::PosInt(v) => v as f64,
            Self::NegInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(v) => Self::PosInt(v),
            Err(_) => Self::NegInt(value),
        }
    }
}

impl From<u64> for Number {
    #[inline]
    fn from(value: u64) -> Self {
        Self::PosInt(value)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosInt(v) => fmt::Display::fmt(v, f),
            Self::NegInt(v) => fmt::Display::fmt(v, f),
            Self::Float(v) if v.is_finite() => fmt::Debug::fmt(v, f),
            Self::Float(_) => f.write_str("null"),
        }
    }
}

// -----------------------------------------------------------------------------
// Value

/// A tree node: null, boolean, number, string, array or object.
///
/// `Display` renders compact JSON text.
///
/// ```
/// use fw_fields::{Object, Value};
///
/// let value = Value::Object(Object::from([
///     ("name".into(), Value::from("Ada")),
///     ("tags".into(), Value::Array(vec![Value::from(1_u8), Value::Null])),
/// ]));
/// assert_eq!(value.to_string(), r#"{"name":"Ada","tags":[1,null]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn kind(&self) -> NodeKind {
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
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Child of an object by key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Convert into another tree format.
    #[inline]
    pub fn to_tree<V: ValueTree>(&self) -> V {
        super::convert(self)
    }

    /// Convert from another tree format.
    #[inline]
    pub fn from_tree<V: ValueTree>(tree: &V) -> Self {
        super::convert(tree)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty => $via:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::Number(Number::from(value as $via))
            }
        }
    )*};
}

impl_from_int!(
    i8 => i64, i16 => i64, i32 => i64, i64 => i64, isize => i64,
    u8 => u64, u16 => u64, u32 => u64, u64 => u64, usize => u64,
);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Number(Number::Float(f64::from(value)))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::String(s) => write_quoted(f, s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Object(object) => {
                f.write_str("{")?;
                for (index, (key, item)) in object.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    f.write_str(":")?;
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
            c => fmt::Write::write_char(f, c)?,
        }
    }
    f.write_str("\"")
}

// -----------------------------------------------------------------------------
// ValueTree

impl ValueTree for Value {
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
        Self::Number(Number::PosInt(value))
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self::Number(Number::Float(value))
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
        Self::Object(Object::new())
    }

    #[inline]
    fn kind(&self) -> NodeKind {
        Value::kind(self)
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    #[inline]
    fn as_i64(&self) -> Option<i64> {
        Value::as_i64(self)
    }

    #[inline]
    fn as_u64(&self) -> Option<u64> {
        Value::as_u64(self)
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Value::as_f64(self)
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    #[inline]
    fn get(&self, key: &str) -> Option<&Self> {
        Value::get(self, key)
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
    use super::{Number, Value};
    use crate::tree::ValueTree;

    #[test]
    fn numbers_keep_sign() {
        assert_eq!(Value::from(-3_i32), Value::Number(Number::NegInt(-3)));
        assert_eq!(Value::from(3_i32), Value::Number(Number::PosInt(3)));
        assert_eq!(Value::from(-3_i32).as_u64(), None);
        assert_eq!(Value::from(u64::MAX).as_i64(), None);
        assert_eq!(Value::from(2.5_f64).as_i64(), None);
        assert_eq!(Value::from(2_u8).as_f64(), Some(2.0));
    }

    #[test]
    fn display_escapes_strings() {
        let value = Value::from("a\"b\\c\n");
        assert_eq!(value.to_string(), r#""a\"b\\c\n""#);
        assert_eq!(Value::from(1.5_f64).to_string(), "1.5");
        assert_eq!(Value::from(f64::NAN).to_string(), "null");
    }

    #[test]
    fn tree_interface() {
        let mut object = Value::new_object();
        object.set("k".into(), Value::from(true));
        assert!(object.contains("k"));
        assert_eq!(object.size(), 1);
        assert_eq!(object.erase("k"), Some(Value::Bool(true)));
        assert_eq!(object.size(), 0);

        let mut array = Value::new_array();
        array.push(Value::Null);
        assert_eq!(array.elements().len(), 1);
        assert!(array.get_index(0).is_some_and(ValueTree::is_null));
    }
}
