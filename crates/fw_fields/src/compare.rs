//! Structural comparison with significant-digit tolerance.
//!
//! Floating members are equal when they agree to the number of significant
//! digits the record declares with `#[fields(precision = N)]`. A member whose
//! own type declares a precision uses it; otherwise the enclosing record's
//! precision applies, and without any the comparison is exact.
//!
//! ```
//! use fw_fields::{Fields, compare_eq};
//!
//! #[derive(Fields, Default)]
//! #[fields(precision = 4, partial_eq)]
//! struct Reading {
//!     x: f64,
//!     y: f64,
//! }
//!
//! let base = Reading { x: 40.0, y: 1.0 };
//! assert!(base != Reading { x: 40.01, y: 1.0 });
//! assert!(base == Reading { x: 40.001, y: 1.0 });
//! assert!(compare_eq(&base, &Reading { x: 40.001, y: 1.00001 }));
//! ```

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ops::{Array, Map, Record};
use crate::{Reflect, ReflectRef, Scalar};

// -----------------------------------------------------------------------------
// Digits

/// Whether `a` and `b` agree when rounded to `precision` significant digits.
///
/// A precision of zero is treated as one. Two `NaN`s are equal, so every
/// value equals itself and diffs against itself to nothing.
///
/// ```
/// use fw_fields::digits_equal;
///
/// assert!(!digits_equal(40.0, 40.01, 4));
/// assert!(digits_equal(40.0, 40.001, 4));
/// assert!(digits_equal(0.012344, 0.012341, 4));
/// assert!(digits_equal(f64::NAN, f64::NAN, 8));
/// assert!(!digits_equal(f64::NAN, 1.0, 8));
/// ```
pub fn digits_equal(a: f64, b: f64, precision: u32) -> bool {
    if exact_equal(a, b) {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let magnitude = a.abs().max(b.abs()).log10().floor() as i32;
    let exponent = i32::try_from(precision.max(1))
        .unwrap_or(i32::MAX)
        .saturating_sub(1)
        .saturating_sub(magnitude);
    let scale = 10_f64.powi(exponent);
    let (left, right) = ((a * scale).round(), (b * scale).round());
    if left.is_finite() && right.is_finite() {
        left == right
    } else {
        false
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Structural equality of two values.
#[inline]
pub fn compare_eq(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    eq_with(a, b, None)
}

/// Structural ordering of two values; `None` when they are not comparable.
///
/// Records, arrays, lists and maps order lexicographically, absent optionals
/// before present ones and enumerations by discriminant.
///
/// ```
/// use core::cmp::Ordering;
/// use fw_fields::compare;
///
/// assert_eq!(compare(&vec![1, 2], &vec![1, 3]), Some(Ordering::Less));
/// assert_eq!(compare(&None::<u8>, &Some(0_u8)), Some(Ordering::Less));
/// assert_eq!(compare(&1_u8, &"x".to_string()), None);
/// ```
#[inline]
pub fn compare(a: &dyn Reflect, b: &dyn Reflect) -> Option<Ordering> {
    cmp_with(a, b, None)
}

/// The members of `record` wrapped for comparison, in layout order.
///
/// Zero-size members are left out.
pub fn comparison_tuple(record: &dyn Record) -> ComparisonTuple<'_> {
    let precision = record.precision();
    let slots = record
        .iter_fields()
        .filter(|(info, _)| info.is_data())
        .map(|(_, value)| Compared {
            value,
            precision: value.precision().or(precision),
        })
        .collect();
    ComparisonTuple { slots }
}

// -----------------------------------------------------------------------------
// Tuple

/// One member of a [`ComparisonTuple`] with the precision it compares at.
#[derive(Clone, Copy)]
pub struct Compared<'a> {
    value: &'a dyn Reflect,
    precision: Option<u32>,
}

impl<'a> Compared<'a> {
    #[inline]
    pub fn new(value: &'a dyn Reflect, precision: Option<u32>) -> Self {
        Self { value, precision }
    }

    #[inline]
    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }

    #[inline]
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }
}

impl PartialEq for Compared<'_> {
    fn eq(&self, other: &Self) -> bool {
        eq_with(self.value, other.value, self.precision.or(other.precision))
    }
}

impl PartialOrd for Compared<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        cmp_with(self.value, other.value, self.precision.or(other.precision))
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

/// The data members of a record, compared lexicographically.
///
/// `<=` is `!(>)` and `>=` is `!(<)`.
pub struct ComparisonTuple<'a> {
    slots: Vec<Compared<'a>>,
}

impl<'a> ComparisonTuple<'a> {
    #[inline]
    pub fn slots(&self) -> &[Compared<'a>] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl PartialEq for ComparisonTuple<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl PartialOrd for ComparisonTuple<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.slots.as_slice().partial_cmp(other.slots.as_slice())
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

// -----------------------------------------------------------------------------
// Equality

fn sequence<'a>(view: &ReflectRef<'a>) -> Option<&'a dyn Array> {
    match *view {
        ReflectRef::Array(array) => Some(array),
        ReflectRef::List(list) => Some(list.as_array()),
        _ => None,
    }
}

pub(crate) fn eq_with(a: &dyn Reflect, b: &dyn Reflect, inherited: Option<u32>) -> bool {
    if let Some(equal) = a.eq_custom(b) {
        return equal;
    }
    let precision = a.precision().or(inherited);

    let (left, right) = (a.reflect_ref(), b.reflect_ref());
    if let (Some(x), Some(y)) = (sequence(&left), sequence(&right)) {
        return x.len() == y.len() && x.iter().zip(y.iter()).all(|(p, q)| eq_with(p, q, precision));
    }

    match (left, right) {
        (ReflectRef::Record(x), ReflectRef::Record(y)) => {
            x.field_len() == y.field_len()
                && x.iter_fields()
                    .zip(y.iter_fields())
                    .filter(|((info, _), _)| info.is_data())
                    .all(|((_, p), (_, q))| eq_with(p, q, precision))
        }
        (ReflectRef::Map(x), ReflectRef::Map(y)) => map_eq(x, y, precision),
        (ReflectRef::Optional(x), ReflectRef::Optional(y)) => match (x.get(), y.get()) {
            (None, None) => true,
            (Some(p), Some(q)) => eq_with(p, q, precision),
            _ => false,
        },
        (ReflectRef::Enum(x), ReflectRef::Enum(y)) => x.discriminant() == y.discriminant(),
        (ReflectRef::Scalar(x), ReflectRef::Scalar(y)) => scalar_eq(x, y, precision),
        (ReflectRef::Marker, ReflectRef::Marker) => true,
        _ => false,
    }
}

fn map_eq(x: &dyn Map, y: &dyn Map, precision: Option<u32>) -> bool {
    x.len() == y.len()
        && x.entries().into_iter().all(|(key, p)| {
            y.get(&key).is_some_and(|q| eq_with(p, q, precision))
        })
}

pub(crate) fn scalar_eq(x: Scalar<'_>, y: Scalar<'_>, precision: Option<u32>) -> bool {
    match (x.as_float(), y.as_float()) {
        (Some(p), Some(q)) => match precision {
            Some(digits) => digits_equal(p, q, digits),
            None => exact_equal(p, q),
        },
        _ => x == y,
    }
}

#[inline]
fn exact_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// -----------------------------------------------------------------------------
// Ordering

fn cmp_with(a: &dyn Reflect, b: &dyn Reflect, inherited: Option<u32>) -> Option<Ordering> {
    if let Some(ordering) = a.cmp_custom(b) {
        return ordering;
    }
    let precision = a.precision().or(inherited);

    let (left, right) = (a.reflect_ref(), b.reflect_ref());
    if let (Some(x), Some(y)) = (sequence(&left), sequence(&right)) {
        return lexicographic(
            x.iter().zip(y.iter()).map(|(p, q)| cmp_with(p, q, precision)),
            x.len().cmp(&y.len()),
        );
    }

    match (left, right) {
        (ReflectRef::Record(x), ReflectRef::Record(y)) => lexicographic(
            x.iter_fields()
                .zip(y.iter_fields())
                .filter(|((info, _), _)| info.is_data())
                .map(|((_, p), (_, q))| cmp_with(p, q, precision)),
            x.field_len().cmp(&y.field_len()),
        ),
        (ReflectRef::Map(x), ReflectRef::Map(y)) => {
            let (left, right) = (x.entries(), y.entries());
            lexicographic(
                left.iter().zip(right.iter()).map(|((k, p), (l, q))| match x.cmp_keys(k, l) {
                    Ordering::Equal => cmp_with(*p, *q, precision),
                    other => Some(other),
                }),
                left.len().cmp(&right.len()),
            )
        }
        (ReflectRef::Optional(x), ReflectRef::Optional(y)) => match (x.get(), y.get()) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(p), Some(q)) => cmp_with(p, q, precision),
        },
        (ReflectRef::Enum(x), ReflectRef::Enum(y)) => Some(x.discriminant().cmp(&y.discriminant())),
        (ReflectRef::Scalar(x), ReflectRef::Scalar(y)) => scalar_cmp(x, y, precision),
        (ReflectRef::Marker, ReflectRef::Marker) => Some(Ordering::Equal),
        _ => None,
    }
}

fn lexicographic(
    items: impl Iterator<Item = Option<Ordering>>,
    tail: Ordering,
) -> Option<Ordering> {
    for ordering in items {
        match ordering? {
            Ordering::Equal => {}
            other => return Some(other),
        }
    }
    Some(tail)
}

fn scalar_cmp(x: Scalar<'_>, y: Scalar<'_>, precision: Option<u32>) -> Option<Ordering> {
    if let (Some(p), Some(q)) = (x.as_float(), y.as_float()) {
        if scalar_eq(x, y, precision) {
            return Some(Ordering::Equal);
        }
        return p.partial_cmp(&q);
    }

    match (x, y) {
        (Scalar::Bool(p), Scalar::Bool(q)) => Some(p.cmp(&q)),
        (Scalar::I8(p), Scalar::I8(q)) => Some(p.cmp(&q)),
        (Scalar::I16(p), Scalar::I16(q)) => Some(p.cmp(&q)),
        (Scalar::I32(p), Scalar::I32(q)) => Some(p.cmp(&q)),
        (Scalar::I64(p), Scalar::I64(q)) => Some(p.cmp(&q)),
        (Scalar::Isize(p), Scalar::Isize(q)) => Some(p.cmp(&q)),
        (Scalar::U8(p), Scalar::U8(q)) => Some(p.cmp(&q)),
        (Scalar::U16(p), Scalar::U16(q)) => Some(p.cmp(&q)),
        (Scalar::U32(p), Scalar::U32(q)) => Some(p.cmp(&q)),
        (Scalar::U64(p), Scalar::U64(q)) => Some(p.cmp(&q)),
        (Scalar::Usize(p), Scalar::Usize(q)) => Some(p.cmp(&q)),
        (Scalar::Char(p), Scalar::Char(q)) => Some(p.cmp(&q)),
        (Scalar::Str(p), Scalar::Str(q)) => Some(p.cmp(q)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use core::cmp::Ordering;

    use super::{compare, compare_eq, comparison_tuple, digits_equal};
    use crate::{Fields, diff};

    #[derive(Fields, Default, Clone)]
    #[fields(precision = 3)]
    struct Coarse {
        value: f64,
    }

    #[derive(Fields, Default, Clone)]
    #[fields(precision = 6, partial_eq, partial_ord)]
    struct Sample {
        coarse: Coarse,
        fine: f32,
        samples: [f64; 2],
        tags: BTreeMap<String, u8>,
        note: Option<String>,
    }

    #[test]
    fn digits_not_decimal_places() {
        assert!(digits_equal(123_456.0, 123_457.0, 5));
        assert!(!digits_equal(123_456.0, 123_466.0, 5));
        assert!(digits_equal(1.0e-9, 1.00001e-9, 5));
        assert!(digits_equal(-2.5, -2.5, 0));
        assert!(!digits_equal(f64::INFINITY, f64::MAX, 3));
        assert!(digits_equal(1.0, 1.0, u32::MAX));
    }

    #[test]
    fn nested_record_keeps_its_own_precision() {
        let base = Sample {
            coarse: Coarse { value: 1.0 },
            fine: 2.0,
            ..Sample::default()
        };
        let mut other = base.clone();
        other.coarse.value = 1.001;
        assert!(base == other);

        other.fine = 2.000001;
        assert!(base == other);
        other.samples[1] = 0.0001;
        assert!(base != other);
        assert!(base < other);
    }

    #[test]
    fn maps_and_optionals() {
        let mut left = Sample::default();
        let mut right = Sample::default();
        left.tags.insert("a".into(), 1);
        right.tags.insert("a".into(), 1);
        assert!(compare_eq(&left, &right));

        right.tags.insert("b".into(), 0);
        assert_eq!(compare(&left.tags, &right.tags), Some(Ordering::Less));
        assert!(left != right);

        right.tags.remove("b");
        right.note = Some(String::new());
        assert!(left < right);
        assert!(left <= right);
        assert!(!(left >= right));
    }

    #[test]
    fn tuple_skips_zero_size_members() {
        #[derive(Fields, Default)]
        struct WithMarker {
            a: u8,
            marker: (),
            b: u8,
        }

        let value = WithMarker { a: 1, marker: (), b: 2 };
        let tuple = comparison_tuple(&value);
        assert_eq!(tuple.len(), 2);
        assert!(tuple <= comparison_tuple(&value));
    }

    #[test]
    fn maps_order_by_key_not_key_text() {
        let nine = BTreeMap::from([(9_i32, 0_u8)]);
        let ten = BTreeMap::from([(10_i32, 0_u8)]);
        assert_eq!(compare(&nine, &ten), nine.partial_cmp(&ten));
        assert_eq!(compare(&nine, &ten), Some(Ordering::Less));

        let low = std::collections::HashMap::from([(9_u64, 1_u8), (10, 1)]);
        let high = std::collections::HashMap::from([(9_u64, 2_u8), (10, 0)]);
        assert_eq!(compare(&low, &high), Some(Ordering::Less));
    }

    #[test]
    fn nan_equals_itself() {
        let sample = Sample {
            fine: f32::NAN,
            samples: [f64::NAN, 1.0],
            ..Sample::default()
        };
        assert!(compare_eq(&sample, &sample.clone()));
        assert_eq!(compare(&sample, &sample.clone()), Some(Ordering::Equal));
        assert_eq!(diff(&sample, &sample.clone()), None);

        let mut other = sample.clone();
        other.fine = 0.0;
        assert!(!compare_eq(&sample, &other));
    }
}
