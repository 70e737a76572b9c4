use crate::Reflect;
use crate::info::{FieldInfo, RecordInfo};

/// A record: a fixed, named collection of members.
///
/// Members are addressed by layout index. The returned references alias the
/// members of `self` and live only as long as the borrow of `self`.
///
/// # Example
///
/// ```
/// use fw_fields::{Fields, Record, ReflectRef, Scalar};
///
/// #[derive(Fields, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 1, y: 2 };
/// let names: Vec<_> = point.iter_fields().map(|(info, _)| info.name()).collect();
/// assert_eq!(names, ["x", "y"]);
///
/// let y = point.field("y").unwrap();
/// assert!(matches!(y.reflect_ref(), ReflectRef::Scalar(Scalar::I32(2))));
/// ```
pub trait Record: Reflect {
    /// The layout of this record type.
    fn record_info(&self) -> &'static RecordInfo;

    /// Borrow the member at `index` in layout order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutably borrow the member at `index` in layout order.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    #[inline]
    fn field_len(&self) -> usize {
        self.record_info().len()
    }

    /// Borrow the member whose canonical name is `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.record_info()
            .index_of(name)
            .and_then(|index| self.field_at(index))
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.record_info()
            .index_of(name)
            .and_then(|index| self.field_at_mut(index))
    }

    /// Iterate over `(info, member)` pairs in layout order.
    #[inline]
    fn iter_fields(&self) -> FieldIter<'_> {
        FieldIter::new(self.as_record())
    }

    fn as_record(&self) -> &dyn Record;
}

/// Static access to the layout of a record type.
///
/// Implemented by `derive(Fields)` and [`impl_fields!`](crate::impl_fields).
pub trait Fields: Record + Sized {
    fn fields_info() -> &'static RecordInfo;
}

/// An iterator over the members of a [`Record`].
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    info: &'static RecordInfo,
    index: usize,
}

impl<'a> FieldIter<'a> {
    #[inline]
    pub fn new(record: &'a dyn Record) -> Self {
        Self {
            record,
            info: record.record_info(),
            index: 0,
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'static FieldInfo, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.info.field_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.info.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}
