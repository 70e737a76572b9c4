//! Items used by the code that `derive(Fields)` and `impl_fields!` generate.
//!
//! Not public API.

use alloc::string::ToString;
use core::cmp::Ordering;

use crate::info::RecordInfo;
use crate::ops::{Enumeration, Fields};

pub use alloc::string::String;
pub use alloc::vec::Vec;

pub use crate::info::{GenericInfoCell, InfoCell, short_type_name};

/// Whether the member reached by `accessor` carries data.
///
/// The closure is never called; it only names the member's type.
#[inline(always)]
pub fn is_data<R, T>(_accessor: impl Fn(&R) -> &T) -> bool {
    size_of::<T>() != 0
}

/// The layout of a flattened member, named through its accessor.
#[inline(always)]
pub fn flattened<R, T: Fields>(_accessor: impl Fn(&R) -> &T) -> &'static RecordInfo {
    T::fields_info()
}

/// `MapKey::to_key` for derived enumerations.
pub fn enum_to_key<E: Enumeration>(value: &E) -> String {
    match value.enum_info().is_named() {
        true => value
            .variant_name()
            .map_or_else(|| value.discriminant().to_string(), String::from),
        false => value.discriminant().to_string(),
    }
}

/// `MapKey::from_key` for derived enumerations.
pub fn enum_from_key<E: Enumeration>(key: &str) -> Option<E> {
    let mut value = E::new_default();
    let info = value.enum_info();
    let discriminant = match info.by_name(key) {
        Some(variant) => variant.discriminant(),
        None => key.trim().parse::<i64>().ok()?,
    };
    value.set_discriminant(discriminant).then_some(value)
}

/// `MapKey::cmp_key` for derived enumerations: discriminant order.
#[inline]
pub fn enum_cmp_key<E: Enumeration>(a: &E, b: &E) -> Ordering {
    a.discriminant().cmp(&b.discriminant())
}
