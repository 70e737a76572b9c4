use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::Reflect;

/// A keyed container, e.g. `BTreeMap<K, V>`.
///
/// Keys are exchanged in their text form (see [`MapKey`]), which is also how
/// they appear as object keys in a [`Value`](crate::Value).
pub trait Map: Reflect {
    fn len(&self) -> usize;

    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Entries as `(key text, value)`, in key order.
    fn entries(&self) -> Vec<(String, &dyn Reflect)>;

    /// Mutable borrows of every value.
    fn values_mut(&mut self) -> Vec<&mut dyn Reflect>;

    /// Store a default value under `key` and return it.
    ///
    /// Returns `None` if `key` is not a valid key text.
    fn insert_default(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Remove `key`, returning whether it was present.
    fn remove(&mut self, key: &str) -> bool;

    fn clear(&mut self);

    /// Order two key texts the way the map orders its keys.
    ///
    /// Texts that are not valid keys fall back to text order.
    fn cmp_keys(&self, a: &str, b: &str) -> Ordering;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// A key type with a text form.
///
/// `cmp_key` is the key order used where the container itself has none
/// (`HashMap`); it must agree with the type's `Ord` when there is one.
///
/// ```
/// use core::cmp::Ordering;
/// use fw_fields::MapKey;
///
/// assert_eq!(42_u32.to_key(), "42");
/// assert_eq!(u32::from_key("42"), Some(42));
/// assert_eq!(u32::from_key("x"), None);
/// assert_eq!(9_u32.cmp_key(&10), Ordering::Less);
/// ```
pub trait MapKey: Sized {
    fn to_key(&self) -> String;

    fn from_key(key: &str) -> Option<Self>;

    fn cmp_key(&self, other: &Self) -> Ordering;
}

/// Order two key texts by parsing them as `K`; invalid texts fall back to
/// text order.
pub fn cmp_key_texts<K: MapKey>(a: &str, b: &str, cmp: impl Fn(&K, &K) -> Ordering) -> Ordering {
    match (K::from_key(a), K::from_key(b)) {
        (Some(x), Some(y)) => cmp(&x, &y),
        _ => a.cmp(b),
    }
}

impl MapKey for String {
    #[inline]
    fn to_key(&self) -> String {
        self.clone()
    }

    #[inline]
    fn from_key(key: &str) -> Option<Self> {
        Some(key.into())
    }

    #[inline]
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

macro_rules! impl_map_key_parse {
    ($($ty:ty),* $(,)?) => {$(
        impl MapKey for $ty {
            #[inline]
            fn to_key(&self) -> String {
                self.to_string()
            }

            #[inline]
            fn from_key(key: &str) -> Option<Self> {
                key.parse().ok()
            }

            #[inline]
            fn cmp_key(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

impl_map_key_parse!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
