//! Sparse structural diffs and their application.
//!
//! [`diff(a, b)`](diff) describes how to turn `a` into `b`: it holds only the
//! members, elements and entries that differ, with values taken from `b`.
//! [`patch`] applies such a tree, so `patch(&mut a, &diff(&a, &b)?)` leaves
//! `a` equal to `b`.
//!
//! | kind | diff |
//! |------|------|
//! | record | object of the members whose diff is not empty |
//! | array | object keyed by decimal index |
//! | list | object keyed by index, the whole of `b` when the lengths differ |
//! | map | changed and added keys, `null` for keys missing from `b` |
//! | optional | the whole of `b` when presence flips, else the inner diff |
//! | enumeration, scalar | the value of `b` |
//!
//! `null` stands for both an absent optional and a removed map entry, so a
//! diff cannot tell `Some(None)` from `None` in an `Option<Option<T>>`, nor
//! store a `None` value into a map of optionals. Such changes patch to `None`
//! and to a removed entry.
//!
//! ```
//! use fw_fields::{Fields, diff, patch};
//!
//! #[derive(Fields, Default, Clone, Debug, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tags: Vec<String>,
//! }
//!
//! let old = Server { host: "a".into(), port: 80, tags: vec!["x".into()] };
//! let new = Server { port: 8080, ..old.clone() };
//!
//! let change = diff(&old, &new).unwrap();
//! assert_eq!(change.to_string(), r#"{"port":8080}"#);
//! assert!(diff(&new, &new).is_none());
//!
//! let mut patched = old.clone();
//! patch(&mut patched, &change).unwrap();
//! assert_eq!(patched, new);
//! ```

use alloc::string::ToString;

use crate::compare::scalar_eq;
use crate::convert::{ConvertError, ConvertErrorKind, PathSegment};
use crate::convert::{lookup_member, structure_in_place, unstructure};
use crate::ops::{Array, Map, Optional, Record};
use crate::tree::{Object, Value};
use crate::{Reflect, ReflectKind, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Diff

/// The change from `a` to `b`, or `None` when they are equal.
///
/// Floating members honour the precision of the enclosing record.
#[inline]
pub fn diff(a: &dyn Reflect, b: &dyn Reflect) -> Option<Value> {
    diff_with(a, b, None)
}

fn diff_with(a: &dyn Reflect, b: &dyn Reflect, inherited: Option<u32>) -> Option<Value> {
    if let Some(change) = a.diff_custom(b) {
        return change;
    }
    let precision = a.precision().or(inherited);

    match (a.reflect_ref(), b.reflect_ref()) {
        (ReflectRef::Record(x), ReflectRef::Record(y)) if x.type_name() == y.type_name() => {
            diff_record(x, y, precision)
        }
        (ReflectRef::Array(x), ReflectRef::Array(y)) if x.len() == y.len() => {
            diff_elements(x, y, precision)
        }
        (ReflectRef::List(x), ReflectRef::List(y)) => {
            if x.len() == y.len() {
                diff_elements(x.as_array(), y.as_array(), precision)
            } else {
                Some(unstructure(b))
            }
        }
        (ReflectRef::Map(x), ReflectRef::Map(y)) => diff_map(x, y, precision),
        (ReflectRef::Optional(x), ReflectRef::Optional(y)) => match (x.get(), y.get()) {
            (None, None) => None,
            (Some(p), Some(q)) => diff_with(p, q, precision),
            _ => Some(unstructure(b)),
        },
        (ReflectRef::Enum(x), ReflectRef::Enum(y)) => {
            (x.discriminant() != y.discriminant()).then(|| unstructure(b))
        }
        (ReflectRef::Scalar(x), ReflectRef::Scalar(y)) => {
            (!scalar_eq(x, y, precision)).then(|| unstructure(b))
        }
        (ReflectRef::Marker, ReflectRef::Marker) => None,
        (left, right) => {
            log::warn!(
                "diffing `{}` ({}) against `{}` ({}), emitting the whole value",
                a.type_name(),
                left.kind(),
                b.type_name(),
                right.kind(),
            );
            Some(unstructure(b))
        }
    }
}

fn non_empty(object: Object) -> Option<Value> {
    (!object.is_empty()).then_some(Value::Object(object))
}

fn diff_record(x: &dyn Record, y: &dyn Record, precision: Option<u32>) -> Option<Value> {
    let mut object = Object::new();
    for ((info, p), (_, q)) in x.iter_fields().zip(y.iter_fields()) {
        if !info.is_data() {
            continue;
        }
        if let Some(change) = diff_with(p, q, precision) {
            object.insert(info.name().into(), change);
        }
    }
    non_empty(object)
}

fn diff_elements(x: &dyn Array, y: &dyn Array, precision: Option<u32>) -> Option<Value> {
    let mut object = Object::new();
    for (index, (p, q)) in x.iter().zip(y.iter()).enumerate() {
        if let Some(change) = diff_with(p, q, precision) {
            object.insert(index.to_string(), change);
        }
    }
    non_empty(object)
}

fn diff_map(x: &dyn Map, y: &dyn Map, precision: Option<u32>) -> Option<Value> {
    let mut object = Object::new();
    for (key, q) in y.entries() {
        let change = match x.get(&key) {
            Some(p) => diff_with(p, q, precision),
            None => Some(unstructure(q)),
        };
        if let Some(change) = change {
            object.insert(key, change);
        }
    }
    for (key, _) in x.entries() {
        if !y.contains_key(&key) {
            object.insert(key, Value::Null);
        }
    }
    non_empty(object)
}

// -----------------------------------------------------------------------------
// Patch

/// Apply a diff produced by [`diff`] to `target`, in place.
///
/// Records run their post-structure hook once their members are patched.
pub fn patch(target: &mut dyn Reflect, diff: &Value) -> Result<(), ConvertError> {
    if let Some(result) = target.patch_custom(diff) {
        return result;
    }

    let kind = target.reflect_ref().kind();
    if matches!(kind, ReflectKind::Enum | ReflectKind::Scalar | ReflectKind::Marker) {
        return structure_in_place(target, diff);
    }

    match target.reflect_mut() {
        ReflectMut::Record(record) => patch_record(record, diff),
        ReflectMut::Array(array) => match diff {
            Value::Object(object) => patch_elements(array, object),
            _ => structure_in_place(array.as_reflect_mut(), diff),
        },
        ReflectMut::List(list) => match diff {
            Value::Object(object) => patch_elements(list, object),
            _ => structure_in_place(list.as_reflect_mut(), diff),
        },
        ReflectMut::Map(map) => patch_map(map, diff),
        ReflectMut::Optional(optional) => patch_optional(optional, diff),
        ReflectMut::Enum(_) | ReflectMut::Scalar(_) | ReflectMut::Marker => Ok(()),
    }
}

fn patch_record(record: &mut dyn Record, diff: &Value) -> Result<(), ConvertError> {
    let Value::Object(object) = diff else {
        return Err(ConvertErrorKind::NotAnObject {
            found: diff.kind().as_str(),
        }
        .into());
    };

    let info = record.record_info();
    for (index, field) in info.fields().iter().enumerate() {
        if !field.is_data() {
            continue;
        }
        let Some(child) = lookup_member(object, field) else {
            continue;
        };
        if let Some(member) = record.field_at_mut(index) {
            patch(member, child).map_err(|error| error.at(PathSegment::Field(field.name())))?;
        }
    }

    record.after_structure();
    Ok(())
}

fn patch_elements(array: &mut dyn Array, object: &Object) -> Result<(), ConvertError> {
    for (key, child) in object {
        let index = key
            .parse::<usize>()
            .map_err(|_| ConvertErrorKind::InvalidIndex { key: key.clone() })?;
        let len = array.len();
        let element = array
            .get_mut(index)
            .ok_or(ConvertErrorKind::IndexOutOfRange { index, len })?;
        patch(element, child).map_err(|error| error.at(PathSegment::Index(index)))?;
    }
    Ok(())
}

fn patch_map(map: &mut dyn Map, diff: &Value) -> Result<(), ConvertError> {
    let Value::Object(object) = diff else {
        return Err(ConvertErrorKind::NotAnObject {
            found: diff.kind().as_str(),
        }
        .into());
    };

    let type_name = map.type_name();
    for (key, child) in object {
        if child.is_null() {
            if map.remove(key) {
                log::trace!("patch removed key `{key}` from `{type_name}`");
            }
            continue;
        }
        let at_key = |error: ConvertError| error.at(PathSegment::Key(key.clone()));
        if let Some(entry) = map.get_mut(key) {
            patch(entry, child).map_err(at_key)?;
            continue;
        }
        let entry = map
            .insert_default(key)
            .ok_or_else(|| ConvertErrorKind::InvalidKey {
                key: key.clone(),
                type_name,
            })?;
        structure_in_place(entry, child).map_err(at_key)?;
    }
    Ok(())
}

fn patch_optional(optional: &mut dyn Optional, diff: &Value) -> Result<(), ConvertError> {
    if diff.is_null() {
        optional.set_none();
        return Ok(());
    }
    match optional.get_mut() {
        Some(inner) => patch(inner, diff),
        None => structure_in_place(optional.insert_default(), diff),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{diff, patch};
    use crate::convert::ConvertErrorKind;
    use crate::tree::Value;
    use crate::{Fields, compare_eq};

    #[derive(Fields, Default, Clone, Debug)]
    struct Point {
        x: f64,
        y: f64,
    }

    #[derive(Fields, Default, Clone, Debug)]
    #[fields(precision = 5)]
    struct Scene {
        origin: Point,
        corners: [Point; 2],
        path: Vec<u8>,
        labels: BTreeMap<String, Point>,
        focus: Option<Point>,
    }

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    fn round_trip(a: &Scene, b: &Scene) {
        let mut patched = a.clone();
        if let Some(change) = diff(a, b) {
            patch(&mut patched, &change).unwrap();
        }
        assert!(compare_eq(&patched, b), "{patched:?} != {b:?}");
    }

    #[test]
    fn nested_change_is_a_leaf_path() {
        let a = Scene::default();
        let mut b = a.clone();
        b.corners[1].y = 2.5;
        assert_eq!(
            diff(&a, &b).unwrap().to_string(),
            r#"{"corners":{"1":{"y":2.5}}}"#
        );
        round_trip(&a, &b);
    }

    #[test]
    fn precision_hides_small_changes() {
        let a = Scene::default();
        let mut b = a.clone();
        b.origin.x = 1.0;
        let mut c = b.clone();
        c.origin.x = 1.000001;
        assert!(diff(&b, &c).is_none());
        assert!(diff(&a, &b).is_some());
    }

    #[test]
    fn lists_replace_on_length_change() {
        let a = Scene {
            path: vec![1, 2, 3],
            ..Scene::default()
        };
        let mut b = a.clone();
        b.path[2] = 9;
        assert_eq!(diff(&a, &b).unwrap().to_string(), r#"{"path":{"2":9}}"#);

        b.path.push(4);
        assert_eq!(diff(&a, &b).unwrap().to_string(), r#"{"path":[1,2,9,4]}"#);
        round_trip(&a, &b);
        round_trip(&b, &a);
    }

    #[test]
    fn maps_mark_removed_keys() {
        let mut a = Scene::default();
        a.labels.insert("keep".into(), Point { x: 1.0, y: 1.0 });
        a.labels.insert("drop".into(), Point::default());
        let mut b = a.clone();
        b.labels.remove("drop");
        b.labels.insert("new".into(), Point { x: 3.0, y: 0.0 });
        b.labels.get_mut("keep").unwrap().y = 2.0;

        assert_eq!(
            diff(&a, &b).unwrap().to_string(),
            r#"{"labels":{"drop":null,"keep":{"y":2.0},"new":{"x":3.0,"y":0.0}}}"#
        );
        round_trip(&a, &b);
        round_trip(&b, &a);
    }

    #[test]
    fn optional_presence_flip_is_whole_value() {
        let a = Scene::default();
        let b = Scene {
            focus: Some(Point { x: 0.5, y: 0.0 }),
            ..Scene::default()
        };
        assert_eq!(
            diff(&a, &b).unwrap().to_string(),
            r#"{"focus":{"x":0.5,"y":0.0}}"#
        );
        assert_eq!(diff(&b, &a).unwrap().to_string(), r#"{"focus":null}"#);
        round_trip(&a, &b);
        round_trip(&b, &a);
    }

    #[test]
    fn malformed_patches_fail() {
        let mut scene = Scene::default();
        let error = patch(&mut scene, &parse(r#"{"corners": {"2": {"x": 1}}}"#)).unwrap_err();
        assert_eq!(
            *error.kind(),
            ConvertErrorKind::IndexOutOfRange { index: 2, len: 2 }
        );

        let error = patch(&mut scene, &parse(r#"{"corners": {"first": {}}}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::InvalidIndex { .. }));

        let error = patch(&mut scene, &parse(r#"{"corners": [{}]}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::LengthMismatch { .. }));

        let error = patch(&mut scene, &parse(r#"{"labels": 3}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::NotAnObject { .. }));

        let error = patch(&mut scene, &parse("[]")).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::NotAnObject { found: "array" }));
    }

    #[test]
    fn patch_inserts_missing_keys() {
        let mut scene = Scene::default();
        patch(&mut scene, &parse(r#"{"labels": {"a": {"y": 4}}}"#)).unwrap();
        assert_eq!(scene.labels["a"].y, 4.0);
        assert_eq!(scene.labels["a"].x, 0.0);
    }

    #[derive(Fields, Default, Clone, Debug, PartialEq)]
    struct Nested {
        value: Option<Option<u8>>,
    }

    #[test]
    fn inner_none_collapses_to_none() {
        let empty = Nested { value: None };
        let inner = Nested { value: Some(None) };

        let change = diff(&empty, &inner).unwrap();
        assert_eq!(change.to_string(), r#"{"value":null}"#);

        let mut target = empty.clone();
        patch(&mut target, &change).unwrap();
        assert_eq!(target, empty);

        let filled = Nested { value: Some(Some(3)) };
        let change = diff(&empty, &filled).unwrap();
        let mut target = empty;
        patch(&mut target, &change).unwrap();
        assert_eq!(target, filled);
    }
}
