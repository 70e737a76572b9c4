use crate::convert::{ConvertError, PathSegment, structure_in_place, unstructure};
use crate::ops::Record;

/// Copy the members of `source` into `target` by position.
///
/// The two layouts are zipped; each pair is converted through the value tree,
/// so the member types only need compatible tree forms. Surplus members on
/// either side are ignored. The target's post-structure hook runs afterwards.
///
/// ```
/// use fw_fields::{Fields, assign};
///
/// #[derive(Fields, Default)]
/// struct Wide {
///     a: i64,
///     b: f64,
///     c: String,
/// }
///
/// #[derive(Fields, Default)]
/// struct Narrow {
///     x: i32,
///     y: f32,
/// }
///
/// let mut narrow = Narrow::default();
/// assign(&mut narrow, &Wide { a: 3, b: 0.5, c: "unused".into() }).unwrap();
/// assert_eq!((narrow.x, narrow.y), (3, 0.5));
/// ```
pub fn assign(target: &mut dyn Record, source: &dyn Record) -> Result<(), ConvertError> {
    let target_info = target.record_info();
    let source_info = source.record_info();

    let pairs = target_info.fields().iter().zip(source_info.fields()).enumerate();
    for (index, (target_field, source_field)) in pairs {
        if !target_field.is_data() || !source_field.is_data() {
            continue;
        }
        let (Some(member), Some(value)) = (target.field_at_mut(index), source.field_at(index)) else {
            continue;
        };
        member.reset();
        structure_in_place(member, &unstructure(value))
            .map_err(|error| error.at(PathSegment::Field(target_field.name())))?;
    }

    target.after_structure();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::assign;
    use crate::convert::ConvertErrorKind;
    use crate::Fields;

    #[derive(Fields, Default)]
    struct Source {
        count: i64,
        label: String,
    }

    #[derive(Fields, Default)]
    struct Target {
        total: u8,
        name: String,
        untouched: bool,
    }

    #[test]
    fn zips_by_position() {
        let mut target = Target {
            untouched: true,
            ..Target::default()
        };
        let source = Source {
            count: 12,
            label: "twelve".into(),
        };
        assign(&mut target, &source).unwrap();
        assert_eq!(target.total, 12);
        assert_eq!(target.name, "twelve");
        assert!(target.untouched);
    }

    #[test]
    fn reports_the_failing_member() {
        let mut target = Target::default();
        let source = Source {
            count: -1,
            label: String::new(),
        };
        let error = assign(&mut target, &source).unwrap_err();
        assert!(matches!(error.kind(), ConvertErrorKind::OutOfRange { .. }));
        assert_eq!(error.to_string(), "at total: -1 does not fit in u8");
    }
}
