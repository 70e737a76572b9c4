//! Member visitation over the layout of a record.
//!
//! ```
//! use fw_fields::{Fields, member_count, member_names};
//!
//! #[derive(Fields, Default)]
//! struct Vec3 {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//!
//! assert_eq!(member_count::<Vec3>(), 3);
//! assert_eq!(member_names::<Vec3>().collect::<Vec<_>>(), ["x", "y", "z"]);
//! ```

use core::ops::ControlFlow;

use crate::Reflect;
use crate::info::{FieldInfo, RecordInfo};
use crate::ops::{Fields, Record};

/// Call `f` with every member of `record`, in layout order.
///
/// Zero-size members are visited too; check [`FieldInfo::is_data`] to skip
/// them.
pub fn for_each_member(record: &dyn Record, mut f: impl FnMut(&'static FieldInfo, &dyn Reflect)) {
    for (info, member) in record.iter_fields() {
        f(info, member);
    }
}

/// Call `f` with a mutable borrow of every member of `record`, in layout order.
pub fn for_each_member_mut(
    record: &mut dyn Record,
    mut f: impl FnMut(&'static FieldInfo, &mut dyn Reflect),
) {
    let info = record.record_info();
    for (index, field) in info.fields().iter().enumerate() {
        if let Some(member) = record.field_at_mut(index) {
            f(field, member);
        }
    }
}

/// Visit the members of two records of the same type pairwise.
///
/// Stops early when `f` breaks and returns its value.
///
/// ```
/// use core::ops::ControlFlow;
/// use fw_fields::{Fields, compare_eq, for_each_zipped};
///
/// #[derive(Fields, Default)]
/// struct Pair {
///     a: i32,
///     b: i32,
/// }
///
/// let first = Pair { a: 1, b: 2 };
/// let second = Pair { a: 1, b: 3 };
/// let changed = for_each_zipped(&first, &second, |info, x, y| {
///     if compare_eq(x, y) {
///         ControlFlow::Continue(())
///     } else {
///         ControlFlow::Break(info.name())
///     }
/// });
/// assert_eq!(changed, ControlFlow::Break("b"));
/// ```
pub fn for_each_zipped<B>(
    a: &dyn Record,
    b: &dyn Record,
    mut f: impl FnMut(&'static FieldInfo, &dyn Reflect, &dyn Reflect) -> ControlFlow<B>,
) -> ControlFlow<B> {
    debug_assert_eq!(
        a.type_name(),
        b.type_name(),
        "zipped records must have the same type"
    );
    for ((info, left), (_, right)) in a.iter_fields().zip(b.iter_fields()) {
        f(info, left, right)?;
    }
    ControlFlow::Continue(())
}

/// Number of members of `T`.
#[inline]
pub fn member_count<T: Fields>() -> usize {
    T::fields_info().len()
}

/// Canonical member names of `T`, in layout order.
#[inline]
pub fn member_names<T: Fields>() -> impl Iterator<Item = &'static str> {
    T::fields_info().names()
}

/// The cached layout of `T`.
#[inline]
pub fn layout<T: Fields>() -> &'static RecordInfo {
    T::fields_info()
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::marker::PhantomData;

    use super::{for_each_member, for_each_member_mut, layout};
    use crate::{Fields, Reflect};

    #[derive(Fields, Default)]
    struct Tagged {
        value: i32,
        marker: PhantomData<u8>,
        scale: f64,
    }

    #[test]
    fn visits_in_layout_order() {
        let tagged = Tagged {
            value: 4,
            scale: 2.0,
            ..Tagged::default()
        };

        let mut seen = Vec::new();
        for_each_member(&tagged, |info, member| {
            seen.push((info.name(), info.is_data(), member.type_name()));
        });
        assert_eq!(
            seen,
            [
                ("value", true, "i32"),
                ("marker", false, "PhantomData<u8>"),
                ("scale", true, "f64"),
            ]
        );
    }

    #[test]
    fn mutates_members() {
        let mut tagged = Tagged::default();
        for_each_member_mut(&mut tagged, |_, member| {
            if let Some(value) = member.downcast_mut::<i32>() {
                *value = 11;
            }
        });
        assert_eq!(tagged.value, 11);
        assert!(!layout::<Tagged>().fields()[1].is_data());
    }
}
