//! Containers for static storage of layout tables.
//!
//! A non-generic type owns a `static` [`InfoCell`]. For generic types the
//! `static` inside a function is shared by every instantiation, so
//! [`GenericInfoCell`] keeps one entry per [`TypeId`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Static storage for the layout of a non-generic type.
///
/// ```
/// use fw_fields::info::{FieldInfo, InfoCell, RecordInfo};
///
/// fn info() -> &'static RecordInfo {
///     static CELL: InfoCell<RecordInfo> = InfoCell::new();
///     CELL.get_or_init(|| RecordInfo::new("A", vec![FieldInfo::new("a")]))
/// }
///
/// assert!(core::ptr::eq(info(), info()));
/// ```
pub struct InfoCell<T>(OnceLock<T>);

impl<T> InfoCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, building it with `f` on first use.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

/// Static storage for the layout of a generic type, keyed by [`TypeId`].
///
/// ```
/// use fw_fields::info::GenericInfoCell;
///
/// fn name_of<T: 'static>() -> &'static String {
///     static CELL: GenericInfoCell<String> = GenericInfoCell::new();
///     CELL.get_or_insert::<T>(|| core::any::type_name::<T>().to_owned())
/// }
///
/// assert_eq!(name_of::<u8>(), "u8");
/// assert_eq!(name_of::<i64>(), "i64");
/// ```
pub struct GenericInfoCell<T: 'static>(RwLock<Option<HashMap<TypeId, &'static T>>>);

impl<T: Send + Sync + 'static> GenericInfoCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(None))
    }

    /// Returns the value stored for `G`, building it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &'static T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &'static T {
        if let Some(found) = self.get_by_type_id(type_id) {
            return found;
        }
        // Built outside the lock: `f` may look up other cells.
        let value = f();
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(HashMap::new)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|map| map.get(&type_id).copied())
    }
}
