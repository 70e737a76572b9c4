use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use alloc::string::String;

use crate::convert::ConvertError;
use crate::describe::Describer;
use crate::ops::{Array, Enumeration, List, Map, Optional, Record};
use crate::tree::Value;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of the engine.
///
/// A `Reflect` value can report what *kind* of value it is (record, array,
/// list, map, optional, enumeration, scalar or marker) and hand out borrowed
/// views of its parts. Every algorithm in this crate is written once against
/// these views, so a new record type needs no per-algorithm code, and a new
/// algorithm needs no change to existing record types.
///
/// # Implementing
///
/// Use [`derive(Fields)`](crate::Fields) for records and fieldless enums, or
/// [`impl_fields!`](crate::impl_fields) when you want to write the field table
/// yourself. The standard library types listed in [`impls`](crate::impls) are
/// covered by this crate.
///
/// # Overrides
///
/// The `*_custom` methods return `None` unless a type opted into supplying its
/// own behaviour (see [`hooks`](crate::hooks)). The derive wires them to the
/// capability traits, so the decision is made once per type.
///
/// ```
/// use fw_fields::{Reflect, ReflectRef};
///
/// let value = 7_u16;
/// assert!(matches!(value.reflect_ref(), ReflectRef::Scalar(_)));
/// assert_eq!(value.type_name(), "u16");
/// ```
pub trait Reflect: Any {
    /// A short, human readable name of the type, e.g. `Vec<i32>`.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_reflect(&self) -> &dyn Reflect;

    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;

    /// Borrow the value as its kind specific view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Mutably borrow the value as its kind specific view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Produce the type's default value.
    ///
    /// Records use `Default` unless they registered a default factory with
    /// `#[fields(default = path)]`.
    fn new_default() -> Self
    where
        Self: Sized;

    /// Overwrite `self` with the type's default value.
    fn reset(&mut self);

    /// The number of significant digits floating members must agree on.
    #[inline]
    fn precision(&self) -> Option<u32> {
        None
    }

    #[inline]
    fn unstructure_custom(&self) -> Option<Value> {
        None
    }

    #[inline]
    fn structure_custom(&mut self, _tree: &Value) -> Option<Result<(), ConvertError>> {
        None
    }

    #[inline]
    fn diff_custom(&self, _other: &dyn Reflect) -> Option<Option<Value>> {
        None
    }

    #[inline]
    fn patch_custom(&mut self, _diff: &Value) -> Option<Result<(), ConvertError>> {
        None
    }

    #[inline]
    fn describe_custom(&self, _describer: &mut Describer<'_>) -> Option<fmt::Result> {
        None
    }

    #[inline]
    fn eq_custom(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    #[inline]
    fn cmp_custom(&self, _other: &dyn Reflect) -> Option<Option<Ordering>> {
        None
    }

    /// Post-construction hook, run once a record has every member set.
    #[inline]
    fn after_structure(&mut self) {}
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&crate::describe_compact(self), f)
    }
}

// -----------------------------------------------------------------------------
// Kinds

/// The shape of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Record,
    Array,
    List,
    Map,
    Optional,
    Enum,
    Scalar,
    Marker,
}

impl ReflectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Array => "array",
            Self::List => "list",
            Self::Map => "map",
            Self::Optional => "optional",
            Self::Enum => "enumeration",
            Self::Scalar => "scalar",
            Self::Marker => "marker",
        }
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, kind specific view of a reflected value.
pub enum ReflectRef<'a> {
    Record(&'a dyn Record),
    Array(&'a dyn Array),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Enum(&'a dyn Enumeration),
    Scalar(Scalar<'a>),
    /// A type that carries no data (`()`, `PhantomData`, unit structs).
    Marker,
}

/// A mutable, kind specific view of a reflected value.
pub enum ReflectMut<'a> {
    Record(&'a mut dyn Record),
    Array(&'a mut dyn Array),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Enum(&'a mut dyn Enumeration),
    Scalar(ScalarMut<'a>),
    Marker,
}

impl ReflectRef<'_> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Record(_) => ReflectKind::Record,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Marker => ReflectKind::Marker,
        }
    }
}

impl ReflectMut<'_> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Record(_) => ReflectKind::Record,
            Self::Array(_) => ReflectKind::Array,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Marker => ReflectKind::Marker,
        }
    }
}

// -----------------------------------------------------------------------------
// Scalars

/// A copy of a scalar leaf value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
}

/// A mutable borrow of a scalar leaf value.
#[derive(Debug)]
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Char(&'a mut char),
    String(&'a mut String),
}

impl Scalar<'_> {
    /// The floating value, if this is a floating point scalar.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }
}
