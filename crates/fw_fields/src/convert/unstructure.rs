use alloc::string::ToString;
use alloc::vec::Vec;

use crate::ops::{Array, Enumeration, Map, Record};
use crate::tree::{Object, Value, ValueTree};
use crate::{Reflect, ReflectRef, Scalar};

/// Convert a value into a [`Value`] tree.
///
/// A type with a custom unstructure hook produces its own tree and nothing
/// else is consulted.
///
/// ```
/// use fw_fields::unstructure;
///
/// assert_eq!(unstructure(&vec![1_u8, 2]).to_string(), "[1,2]");
/// assert_eq!(unstructure(&Some('x')).to_string(), r#""x""#);
/// assert_eq!(unstructure(&None::<i32>).to_string(), "null");
/// ```
pub fn unstructure(value: &dyn Reflect) -> Value {
    if let Some(tree) = value.unstructure_custom() {
        return tree;
    }

    match value.reflect_ref() {
        ReflectRef::Record(record) => unstructure_record(record),
        ReflectRef::Array(array) => unstructure_elements(array),
        ReflectRef::List(list) => unstructure_elements(list.as_array()),
        ReflectRef::Map(map) => unstructure_map(map),
        ReflectRef::Optional(optional) => optional.get().map_or(Value::Null, unstructure),
        ReflectRef::Enum(enumeration) => unstructure_enum(enumeration),
        ReflectRef::Scalar(scalar) => unstructure_scalar(scalar),
        ReflectRef::Marker => Value::Null,
    }
}

/// [`unstructure`] into another tree format.
#[inline]
pub fn unstructure_into<V: ValueTree>(value: &dyn Reflect) -> V {
    unstructure(value).to_tree()
}

/// Whether a member is an absent optional, which records leave out.
pub(crate) fn is_absent(value: &dyn Reflect) -> bool {
    matches!(value.reflect_ref(), ReflectRef::Optional(optional) if !optional.is_some())
}

fn unstructure_record(record: &dyn Record) -> Value {
    let mut object = Object::new();
    for (info, member) in record.iter_fields() {
        if !info.is_data() || is_absent(member) {
            continue;
        }
        object.insert(info.name().into(), unstructure(member));
    }
    Value::Object(object)
}

fn unstructure_elements(array: &dyn Array) -> Value {
    Value::Array(array.iter().map(unstructure).collect::<Vec<_>>())
}

fn unstructure_map(map: &dyn Map) -> Value {
    let object = map
        .entries()
        .into_iter()
        .map(|(key, value)| (key, unstructure(value)))
        .collect::<Object>();
    Value::Object(object)
}

fn unstructure_enum(enumeration: &dyn Enumeration) -> Value {
    let discriminant = enumeration.discriminant();
    if enumeration.enum_info().is_named()
        && let Some(name) = enumeration.variant_name()
    {
        return Value::from(name);
    }
    Value::from(discriminant)
}

fn unstructure_scalar(scalar: Scalar<'_>) -> Value {
    match scalar {
        Scalar::Bool(v) => Value::Bool(v),
        Scalar::I8(v) => Value::from(v),
        Scalar::I16(v) => Value::from(v),
        Scalar::I32(v) => Value::from(v),
        Scalar::I64(v) => Value::from(v),
        Scalar::Isize(v) => Value::from(v),
        Scalar::U8(v) => Value::from(v),
        Scalar::U16(v) => Value::from(v),
        Scalar::U32(v) => Value::from(v),
        Scalar::U64(v) => Value::from(v),
        Scalar::Usize(v) => Value::from(v),
        Scalar::F32(v) => Value::from(v),
        Scalar::F64(v) => Value::from(v),
        Scalar::Char(v) => Value::String(v.to_string()),
        Scalar::Str(v) => Value::from(v),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use core::marker::PhantomData;

    use super::unstructure;
    use crate::Fields;

    #[derive(Fields, Default)]
    struct Inner {
        grid: [[u8; 2]; 2],
        tag: PhantomData<u32>,
    }

    #[derive(Fields, Default)]
    struct Outer {
        inner: Inner,
        names: BTreeMap<u16, String>,
        missing: Option<Inner>,
    }

    #[test]
    fn nested_layout() {
        let mut outer = Outer::default();
        outer.inner.grid[1][0] = 7;
        outer.names.insert(3, "three".into());

        assert_eq!(
            unstructure(&outer).to_string(),
            r#"{"inner":{"grid":[[0,0],[7,0]]},"names":{"3":"three"}}"#
        );
    }
}
