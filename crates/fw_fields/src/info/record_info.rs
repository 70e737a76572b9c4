use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::FieldInfo;

/// The ordered member table of a record type.
///
/// This is both the explicit field descriptor and the introspected layout:
/// the derive and [`impl_fields!`](crate::impl_fields) build the same table.
/// Order is declaration order and defines traversal and serialization order.
///
/// ```
/// use fw_fields::{FieldInfo, RecordInfo};
///
/// let info = RecordInfo::new("Point", vec![
///     FieldInfo::new("x"),
///     FieldInfo::new("y").with_alternate_names(&["why"]),
/// ]);
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.index_of("y"), Some(1));
/// assert_eq!(info.precision(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RecordInfo {
    type_name: &'static str,
    fields: Box<[FieldInfo]>,
    precision: Option<u32>,
    network_subset: bool,
}

impl RecordInfo {
    pub fn new(type_name: &'static str, fields: Vec<FieldInfo>) -> Self {
        debug_assert!(
            fields.iter().enumerate().all(|(index, field)| {
                fields[..index]
                    .iter()
                    .all(|prev| field.names().all(|name| !prev.matches(name)))
            }),
            "field names of `{type_name}` must be unique",
        );

        let network_subset = fields.iter().any(FieldInfo::is_network);
        Self {
            type_name,
            fields: fields.into_boxed_slice(),
            precision: None,
            network_subset,
        }
    }

    #[inline]
    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.precision = precision;
        self
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Index of the member whose canonical name is `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Canonical names in layout order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    #[inline]
    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Whether only some members take part in byte-order conversion.
    #[inline]
    pub fn has_network_subset(&self) -> bool {
        self.network_subset
    }

    /// Whether the member at `index` takes part in byte-order conversion.
    pub fn is_network(&self, index: usize) -> bool {
        self.fields.get(index).is_some_and(|field| {
            field.is_data() && (!self.network_subset || field.is_network())
        })
    }
}
