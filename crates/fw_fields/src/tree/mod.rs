//! The value tree used as serialization medium.
//!
//! [`Value`] is the engine's own tagged union. Algorithms only touch it, and
//! other tree formats plug in through the narrow [`ValueTree`] interface.
//!
//! ```
//! use fw_fields::{Value, ValueTree};
//!
//! let mut object = Value::new_object();
//! object.set("a".into(), Value::from(1_i32));
//! assert_eq!(object.get("a").and_then(Value::as_i64), Some(1));
//! assert!(object.get("b").is_none());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod value;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "serde")]
mod serde;

// -----------------------------------------------------------------------------
// Exports

pub use value::{Number, Object, Value};

use alloc::string::String;
use alloc::vec::Vec;

/// The node kinds every tree format can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// The interface a tree format offers to the engine.
///
/// Construction of empty containers, keyed and indexed access, null tests,
/// scalar conversions and entry iteration. Nothing else is assumed.
pub trait ValueTree: Sized {
    fn null() -> Self;

    fn from_bool(value: bool) -> Self;

    fn from_i64(value: i64) -> Self;

    fn from_u64(value: u64) -> Self;

    fn from_f64(value: f64) -> Self;

    fn from_string(value: String) -> Self;

    fn new_array() -> Self;

    fn new_object() -> Self;

    fn kind(&self) -> NodeKind;

    #[inline]
    fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    fn as_bool(&self) -> Option<bool>;

    fn as_i64(&self) -> Option<i64>;

    fn as_u64(&self) -> Option<u64>;

    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    /// Child of an object by key.
    fn get(&self, key: &str) -> Option<&Self>;

    /// Child of an array by position.
    fn get_index(&self, index: usize) -> Option<&Self>;

    /// Set a child of an object. No-op on other kinds.
    fn set(&mut self, key: String, value: Self);

    /// Append to an array. No-op on other kinds.
    fn push(&mut self, value: Self);

    /// Remove a child of an object.
    fn erase(&mut self, key: &str) -> Option<Self>;

    #[inline]
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of children of an array or object, zero otherwise.
    fn size(&self) -> usize;

    /// Object entries as `(key, child)`.
    fn entries(&self) -> Vec<(&str, &Self)>;

    /// Array elements in order.
    fn elements(&self) -> Vec<&Self>;
}

/// Copy a tree from one format to another.
///
/// Numbers keep their signedness where the source reports it.
pub fn convert<A: ValueTree, B: ValueTree>(source: &A) -> B {
    match source.kind() {
        NodeKind::Null => B::null(),
        NodeKind::Bool => source.as_bool().map_or_else(B::null, B::from_bool),
        NodeKind::Number => {
            if let Some(value) = source.as_u64() {
                B::from_u64(value)
            } else if let Some(value) = source.as_i64() {
                B::from_i64(value)
            } else {
                source.as_f64().map_or_else(B::null, B::from_f64)
            }
        }
        NodeKind::String => source
            .as_str()
            .map_or_else(B::null, |text| B::from_string(text.into())),
        NodeKind::Array => {
            let mut array = B::new_array();
            for element in source.elements() {
                array.push(convert(element));
            }
            array
        }
        NodeKind::Object => {
            let mut object = B::new_object();
            for (key, child) in source.entries() {
                object.set(key.into(), convert(child));
            }
            object
        }
    }
}
