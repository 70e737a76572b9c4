use alloc::string::ToString;

use crate::convert::{ConvertError, ConvertErrorKind, PathSegment};
use crate::info::FieldInfo;
use crate::ops::{Array, Enumeration, List, Map, Optional, Record};
use crate::tree::{Number, Object, Value, ValueTree};
use crate::{Reflect, ReflectMut, ScalarMut};

// -----------------------------------------------------------------------------
// Entry points

/// Build a `T` from a [`Value`] tree.
///
/// Starts from [`Reflect::new_default`], so members the tree leaves out keep
/// the type's default (or the value of its default factory).
///
/// ```
/// use fw_fields::{Fields, Value, structure};
///
/// #[derive(Fields, Debug, PartialEq)]
/// #[fields(default = Limits::standard)]
/// struct Limits {
///     low: i32,
///     high: i32,
/// }
///
/// impl Limits {
///     fn standard() -> Self {
///         Self { low: 0, high: 42 }
///     }
/// }
///
/// let tree: Value = serde_json::from_str(r#"{"low": -5}"#).unwrap();
/// let limits: Limits = structure(&tree).unwrap();
/// assert_eq!(limits, Limits { low: -5, high: 42 });
/// ```
pub fn structure<T: Reflect>(tree: &Value) -> Result<T, ConvertError> {
    let mut value = T::new_default();
    structure_in_place(&mut value, tree)?;
    Ok(value)
}

/// [`structure`] from another tree format.
#[inline]
pub fn structure_from<T: Reflect, V: ValueTree>(tree: &V) -> Result<T, ConvertError> {
    structure(&Value::from_tree(tree))
}

/// Write the content of `tree` into an existing value.
///
/// Record members the tree does not mention are left untouched; members it
/// does mention are reset and then filled in, so the result never mixes old
/// and new content of one member.
pub fn structure_in_place(target: &mut dyn Reflect, tree: &Value) -> Result<(), ConvertError> {
    if let Some(result) = target.structure_custom(tree) {
        return result;
    }

    match target.reflect_mut() {
        ReflectMut::Record(record) => structure_record(record, tree),
        ReflectMut::Array(array) => structure_array(array, tree),
        ReflectMut::List(list) => structure_list(list, tree),
        ReflectMut::Map(map) => structure_map(map, tree),
        ReflectMut::Optional(optional) => structure_optional(optional, tree),
        ReflectMut::Enum(enumeration) => structure_enum(enumeration, tree),
        ReflectMut::Scalar(scalar) => structure_scalar(scalar, tree),
        ReflectMut::Marker => Ok(()),
    }
}

/// Find the child for `field`: canonical name first, then the alternates.
pub(crate) fn lookup_member<'a>(object: &'a Object, field: &FieldInfo) -> Option<&'a Value> {
    if let Some(child) = object.get(field.name()) {
        return Some(child);
    }
    field.alternate_names().iter().find_map(|&alternate| {
        let child = object.get(alternate)?;
        log::trace!("member `{}` matched alternate name `{alternate}`", field.name());
        Some(child)
    })
}

// -----------------------------------------------------------------------------
// Kinds

fn structure_record(record: &mut dyn Record, tree: &Value) -> Result<(), ConvertError> {
    let Value::Object(object) = tree else {
        return Err(ConvertError::mismatch("object", tree.kind().as_str()));
    };

    let info = record.record_info();
    for (index, field) in info.fields().iter().enumerate() {
        if !field.is_data() {
            continue;
        }
        let Some(child) = lookup_member(object, field) else {
            log::debug!(
                "`{}` has no member `{}` in the tree, keeping its default",
                info.type_name(),
                field.name(),
            );
            continue;
        };
        if let Some(member) = record.field_at_mut(index) {
            member.reset();
            structure_in_place(member, child)
                .map_err(|error| error.at(PathSegment::Field(field.name())))?;
        }
    }

    record.after_structure();
    Ok(())
}

fn structure_array(array: &mut dyn Array, tree: &Value) -> Result<(), ConvertError> {
    let Value::Array(items) = tree else {
        return Err(ConvertError::mismatch("array", tree.kind().as_str()));
    };
    if items.len() != array.len() {
        return Err(ConvertErrorKind::LengthMismatch {
            expected: array.len(),
            found: items.len(),
        }
        .into());
    }

    for (index, item) in items.iter().enumerate() {
        if let Some(element) = array.get_mut(index) {
            element.reset();
            structure_in_place(element, item).map_err(|error| error.at(PathSegment::Index(index)))?;
        }
    }
    Ok(())
}

fn structure_list(list: &mut dyn List, tree: &Value) -> Result<(), ConvertError> {
    let Value::Array(items) = tree else {
        return Err(ConvertError::mismatch("array", tree.kind().as_str()));
    };

    list.clear();
    for (index, item) in items.iter().enumerate() {
        structure_in_place(list.push_default(), item)
            .map_err(|error| error.at(PathSegment::Index(index)))?;
    }
    Ok(())
}

fn structure_map(map: &mut dyn Map, tree: &Value) -> Result<(), ConvertError> {
    let Value::Object(object) = tree else {
        return Err(ConvertErrorKind::NotAnObject {
            found: tree.kind().as_str(),
        }
        .into());
    };

    let type_name = map.type_name();
    map.clear();
    for (key, item) in object {
        let Some(entry) = map.insert_default(key) else {
            return Err(ConvertErrorKind::InvalidKey {
                key: key.clone(),
                type_name,
            }
            .into());
        };
        structure_in_place(entry, item).map_err(|error| error.at(PathSegment::Key(key.clone())))?;
    }
    Ok(())
}

fn structure_optional(optional: &mut dyn Optional, tree: &Value) -> Result<(), ConvertError> {
    if tree.is_null() {
        optional.set_none();
        return Ok(());
    }
    structure_in_place(optional.insert_default(), tree)
}

fn structure_enum(enumeration: &mut dyn Enumeration, tree: &Value) -> Result<(), ConvertError> {
    let accepted = match tree {
        Value::String(name) => {
            enumeration.set_variant_name(name)
                || name
                    .trim()
                    .parse::<i64>()
                    .is_ok_and(|discriminant| enumeration.set_discriminant(discriminant))
        }
        Value::Number(number) => number
            .as_i64()
            .is_some_and(|discriminant| enumeration.set_discriminant(discriminant)),
        _ => return Err(ConvertError::mismatch("enumeration", tree.kind().as_str())),
    };

    if accepted {
        Ok(())
    } else {
        Err(ConvertErrorKind::UnknownVariant {
            value: match tree {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            },
            type_name: enumeration.enum_info().type_name(),
        }
        .into())
    }
}

// -----------------------------------------------------------------------------
// Scalars

fn structure_scalar(scalar: ScalarMut<'_>, tree: &Value) -> Result<(), ConvertError> {
    match scalar {
        ScalarMut::Bool(v) => *v = boolean(tree)?,
        ScalarMut::I8(v) => *v = integer(tree, "i8")?,
        ScalarMut::I16(v) => *v = integer(tree, "i16")?,
        ScalarMut::I32(v) => *v = integer(tree, "i32")?,
        ScalarMut::I64(v) => *v = integer(tree, "i64")?,
        ScalarMut::Isize(v) => *v = integer(tree, "isize")?,
        ScalarMut::U8(v) => *v = integer(tree, "u8")?,
        ScalarMut::U16(v) => *v = integer(tree, "u16")?,
        ScalarMut::U32(v) => *v = integer(tree, "u32")?,
        ScalarMut::U64(v) => *v = integer(tree, "u64")?,
        ScalarMut::Usize(v) => *v = integer(tree, "usize")?,
        ScalarMut::F32(v) => *v = float(tree)? as f32,
        ScalarMut::F64(v) => *v = float(tree)?,
        ScalarMut::Char(v) => *v = character(tree)?,
        ScalarMut::String(v) => match tree {
            Value::String(text) => v.clone_from(text),
            other => return Err(ConvertError::mismatch("string", other.kind().as_str())),
        },
    }
    Ok(())
}

fn boolean(tree: &Value) -> Result<bool, ConvertError> {
    match tree {
        Value::Bool(v) => Ok(*v),
        Value::String(text) if text == "true" => Ok(true),
        Value::String(text) if text == "false" => Ok(false),
        other => Err(ConvertError::mismatch("boolean", other.kind().as_str())),
    }
}

// Integral floats and numeric strings are accepted for integer members.
fn integer<T: TryFrom<i128>>(tree: &Value, target: &'static str) -> Result<T, ConvertError> {
    let wide = match tree {
        Value::Number(Number::PosInt(v)) => i128::from(*v),
        Value::Number(Number::NegInt(v)) => i128::from(*v),
        Value::Number(Number::Float(v)) if v.is_finite() && v.fract() == 0.0 => *v as i128,
        Value::String(text) => text
            .trim()
            .parse::<i128>()
            .map_err(|_| ConvertError::mismatch("integer", "string"))?,
        other => return Err(ConvertError::mismatch("integer", other.kind().as_str())),
    };

    T::try_from(wide).map_err(|_| {
        ConvertErrorKind::OutOfRange {
            value: tree.to_string(),
            target,
        }
        .into()
    })
}

fn float(tree: &Value) -> Result<f64, ConvertError> {
    match tree {
        Value::Number(number) => Ok(number.as_f64()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ConvertError::mismatch("number", "string")),
        other => Err(ConvertError::mismatch("number", other.kind().as_str())),
    }
}

fn character(tree: &Value) -> Result<char, ConvertError> {
    let Value::String(text) = tree else {
        return Err(ConvertError::mismatch("character", tree.kind().as_str()));
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConvertErrorKind::OutOfRange {
            value: tree.to_string(),
            target: "char",
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{structure, structure_in_place};
    use crate::convert::{ConvertErrorKind, PathSegment};
    use crate::tree::Value;
    use crate::{Fields, unstructure};

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[derive(Fields, Default, Debug, PartialEq, Clone, Copy)]
    enum Mode {
        #[default]
        Idle,
        #[fields(alias = "go")]
        Running = 5,
    }

    #[derive(Fields, Default, Debug, PartialEq)]
    struct Job {
        #[fields(rename = "id", alias = "job_id", alias = "jobId")]
        identifier: u32,
        mode: Mode,
        steps: Vec<String>,
        env: BTreeMap<String, String>,
        retry: Option<u8>,
    }

    #[test]
    fn alternate_names_in_order() {
        let job: Job = structure(&parse(r#"{"jobId": 2, "job_id": 1}"#)).unwrap();
        assert_eq!(job.identifier, 1);

        let tree = unstructure(&job);
        assert!(tree.get("id").is_some());
        assert!(tree.get("job_id").is_none());
    }

    #[test]
    fn lenient_scalars() {
        let job: Job = structure(&parse(r#"{"id": "7", "retry": 3.0, "mode": "go"}"#)).unwrap();
        assert_eq!(job.identifier, 7);
        assert_eq!(job.retry, Some(3));
        assert_eq!(job.mode, Mode::Running);

        let job: Job = structure(&parse(r#"{"mode": 5}"#)).unwrap();
        assert_eq!(job.mode, Mode::Running);
    }

    #[test]
    fn errors_carry_the_member_path() {
        let error = structure::<Job>(&parse(r#"{"steps": ["a", 1]}"#)).unwrap_err();
        assert_eq!(
            error.path(),
            [PathSegment::Field("steps"), PathSegment::Index(1)]
        );

        let error = structure::<Job>(&parse(r#"{"retry": 300}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::OutOfRange { target: "u8", .. }));

        let error = structure::<Job>(&parse(r#"{"env": [1]}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::NotAnObject { found: "array" }));

        let error = structure::<Job>(&parse(r#"{"mode": "Stopped"}"#)).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::UnknownVariant { .. }));
        assert_eq!(
            error.to_string(),
            "at mode: unknown enumeration value `Stopped` for `Mode`"
        );
    }

    #[test]
    fn in_place_keeps_unmentioned_members() {
        let mut job = Job {
            identifier: 9,
            steps: vec!["build".into()],
            ..Job::default()
        };
        structure_in_place(&mut job, &parse(r#"{"retry": null, "steps": []}"#)).unwrap();
        assert_eq!(job.identifier, 9);
        assert!(job.steps.is_empty());
        assert_eq!(job.retry, None);
    }

    #[test]
    fn fixed_arrays_need_exact_length() {
        let error = structure::<[u8; 3]>(&parse("[1, 2]")).unwrap_err();
        assert_eq!(
            *error.kind(),
            ConvertErrorKind::LengthMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(structure::<[u8; 2]>(&parse("[1, 2]")).unwrap(), [1, 2]);
    }
}
