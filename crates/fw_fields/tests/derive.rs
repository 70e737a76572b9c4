//! The code generated by `derive(Fields)` and `impl_fields!`.

use core::cmp::Ordering;
use core::marker::PhantomData;
use std::collections::BTreeMap;

use fw_fields::hooks::{AfterStructure, CustomDiff, CustomPatch};
use fw_fields::{
    ConvertError, Enumeration, Fields, MapKey, Reflect, ReflectKind, Record, Repr, Value, assign,
    comparison_tuple, describe_compact, diff, from_bytes, impl_fields, layout, member_names, patch,
    structure, to_bytes, unstructure,
};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

// -----------------------------------------------------------------------------
// Explicit tables

#[derive(Default, Debug, PartialEq)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}

impl_fields! {
    #[fields(precision = 3)]
    Position {
        x,
        y as "why" | "y_axis",
        #[fields(network)]
        z,
    }
}

#[test]
fn table_names_and_alternates() {
    assert_eq!(member_names::<Position>().collect::<Vec<_>>(), ["x", "why", "z"]);
    assert_eq!(layout::<Position>().precision(), Some(3));
    assert!(layout::<Position>().is_network(2));
    assert!(!layout::<Position>().is_network(0));

    let position: Position = structure(&parse(r#"{"x": 1, "y_axis": 2, "z": 3}"#)).unwrap();
    assert_eq!(position, Position { x: 1.0, y: 2.0, z: 3.0 });
    assert_eq!(unstructure(&position).to_string(), r#"{"why":2.0,"x":1.0,"z":3.0}"#);
}

#[derive(Default, Debug, PartialEq)]
struct Pair(u8, String);

impl_fields! {
    Pair { 0, 1 as "label" }
}

#[test]
fn table_for_tuple_struct() {
    let pair = Pair(4, "four".into());
    assert_eq!(unstructure(&pair).to_string(), r#"{"0":4,"label":"four"}"#);
    assert_eq!(pair.field("label").and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("four"));
}

// -----------------------------------------------------------------------------
// Tuple structs, skipped and zero-size members

#[derive(Fields, Default, Debug, PartialEq)]
struct Rgb(u8, u8, u8);

#[derive(Fields, Default, Debug, PartialEq)]
struct Tagged<T: Reflect + Default> {
    value: T,
    #[fields(skip)]
    cache: Option<String>,
    unit: PhantomData<T>,
}

#[test]
fn tuple_members_are_numbered() {
    assert_eq!(member_names::<Rgb>().collect::<Vec<_>>(), ["0", "1", "2"]);
    let rgb: Rgb = structure(&parse(r#"{"0": 1, "2": 3}"#)).unwrap();
    assert_eq!(rgb, Rgb(1, 0, 3));
}

#[test]
fn skipped_members_are_invisible() {
    let tagged = Tagged {
        value: 5_i64,
        cache: Some("stale".into()),
        unit: PhantomData,
    };
    assert_eq!(tagged.field_len(), 2);
    assert!(tagged.field("cache").is_none());
    assert_eq!(unstructure(&tagged).to_string(), r#"{"value":5}"#);
    assert_eq!(comparison_tuple(&tagged).len(), 1);
}

#[test]
fn generic_layouts_are_per_instantiation() {
    assert_eq!(layout::<Tagged<u8>>().type_name(), "Tagged<u8>");
    assert_eq!(layout::<Tagged<String>>().type_name(), "Tagged<String>");
    assert!(!layout::<Tagged<u8>>().fields()[1].is_data());
}

// -----------------------------------------------------------------------------
// Flatten

#[derive(Fields, Default, Debug, Clone, PartialEq)]
struct Header {
    version: u8,
    #[fields(alias = "len")]
    length: u32,
}

#[derive(Fields, Default, Debug, Clone, PartialEq)]
struct Message {
    kind: String,
    #[fields(flatten)]
    header: Header,
    body: Vec<u8>,
}

#[test]
fn flattened_members_are_spliced() {
    assert_eq!(
        member_names::<Message>().collect::<Vec<_>>(),
        ["kind", "version", "length", "body"]
    );

    let mut message: Message = structure(&parse(
        r#"{"kind": "ping", "version": 2, "len": 9, "body": [1]}"#,
    ))
    .unwrap();
    assert_eq!(message.header, Header { version: 2, length: 9 });

    let length = message.field_at_mut(2).unwrap();
    *length.downcast_mut::<u32>().unwrap() = 10;
    assert_eq!(message.header.length, 10);
    assert_eq!(message.field_at(3).map(|v| v.reflect_ref().kind()), Some(ReflectKind::List));
    assert!(message.field_at(4).is_none());
}

// -----------------------------------------------------------------------------
// Markers and enumerations

#[derive(Fields, Debug, PartialEq)]
struct Nothing;

#[derive(Fields, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum Channel {
    #[fields(rename = "red", alias = "r")]
    Red = 1,
    Green = 2,
    #[default]
    Blue = 4,
}

#[derive(Fields, Debug, Clone, Copy, PartialEq)]
#[fields(numeric)]
enum Priority {
    Low = -1,
    High = 1,
}

#[test]
fn unit_struct_is_a_marker() {
    assert_eq!(Nothing.reflect_ref().kind(), ReflectKind::Marker);
    assert!(unstructure(&Nothing).is_null());
    assert_eq!(Nothing::new_default(), Nothing);
}

#[test]
fn enumeration_tables() {
    let info = Channel::Red.enum_info();
    assert_eq!(info.repr(), Repr::U8);
    assert_eq!(Channel::new_default(), Channel::Blue);
    assert_eq!(Channel::Red.variant_name(), Some("red"));
    assert_eq!(structure::<Channel>(&parse(r#""r""#)).unwrap(), Channel::Red);
    assert_eq!(structure::<Channel>(&parse("2")).unwrap(), Channel::Green);

    let error = structure::<Channel>(&parse(r#""purple""#)).unwrap_err();
    assert_eq!(error.to_string(), "unknown enumeration value `purple` for `Channel`");

    assert_eq!(unstructure(&Priority::Low).as_i64(), Some(-1));
    assert_eq!(Priority::Low.enum_info().repr(), Repr::I32);
    assert_eq!(to_bytes(&Priority::High).unwrap(), 1_i32.to_ne_bytes());
    assert_eq!(to_bytes(&Channel::Blue).unwrap(), [4_u8]);
}

#[test]
fn enumerations_as_map_keys() {
    assert_eq!(Channel::Green.to_key(), "Green");
    assert_eq!(Channel::from_key("r"), Some(Channel::Red));
    assert_eq!(Channel::from_key("4"), Some(Channel::Blue));
    assert_eq!(Channel::from_key("3"), None);
    assert_eq!(Priority::High.to_key(), "1");

    let levels = BTreeMap::from([(Channel::Red, 0.5_f64), (Channel::Blue, 1.0)]);
    let tree = unstructure(&levels);
    assert_eq!(tree.to_string(), r#"{"Blue":1.0,"red":0.5}"#);
    assert_eq!(structure::<BTreeMap<Channel, f64>>(&tree).unwrap(), levels);
}

// -----------------------------------------------------------------------------
// Hooks

#[derive(Fields, Default, Debug)]
#[fields(after_structure)]
struct Range {
    low: i32,
    high: i32,
}

impl AfterStructure for Range {
    fn after_structure(&mut self) {
        if self.low > self.high {
            core::mem::swap(&mut self.low, &mut self.high);
        }
    }
}

#[derive(Fields, Default)]
struct Bounds {
    low: i64,
    high: i64,
}

#[test]
fn after_structure_runs_on_every_path() {
    let range: Range = structure(&parse(r#"{"low": 9, "high": 1}"#)).unwrap();
    assert_eq!((range.low, range.high), (1, 9));

    let mut range = Range { low: 0, high: 5 };
    patch(&mut range, &parse(r#"{"low": 8}"#)).unwrap();
    assert_eq!((range.low, range.high), (5, 8));

    let mut range = Range::default();
    assert!(assign(&mut range, &Bounds { low: 3, high: -3 }).is_ok());
    assert_eq!((range.low, range.high), (-3, 3));

    let mut bytes = to_bytes(&Range { low: 0, high: 0 }).unwrap();
    bytes[..4].copy_from_slice(&7_i32.to_ne_bytes());
    let range: Range = from_bytes(&bytes).unwrap();
    assert_eq!((range.low, range.high), (0, 7));
}

/// A counter that diffs as a delta.
#[derive(Fields, Default, Debug, PartialEq)]
#[fields(custom(diff, patch))]
struct Counter {
    total: u64,
}

impl CustomDiff for Counter {
    fn diff(&self, other: &Self) -> Option<Value> {
        (self.total != other.total).then(|| Value::from(other.total as i64 - self.total as i64))
    }
}

impl CustomPatch for Counter {
    fn patch(&mut self, diff: &Value) -> Result<(), ConvertError> {
        let delta = diff
            .as_i64()
            .ok_or_else(|| ConvertError::custom("expected a delta"))?;
        self.total = self.total.saturating_add_signed(delta);
        Ok(())
    }
}

#[derive(Fields, Default, Debug, PartialEq)]
struct Stats {
    hits: Counter,
    misses: Counter,
}

#[test]
fn custom_diff_and_patch() {
    let a = Stats { hits: Counter { total: 10 }, misses: Counter { total: 2 } };
    let b = Stats { hits: Counter { total: 7 }, misses: Counter { total: 2 } };

    let change = diff(&a, &b).unwrap();
    assert_eq!(change.to_string(), r#"{"hits":-3}"#);

    let mut target = Stats { hits: Counter { total: 10 }, misses: Counter { total: 2 } };
    patch(&mut target, &change).unwrap();
    assert_eq!(target, b);

    let error = patch(&mut target, &parse(r#"{"misses": "x"}"#)).unwrap_err();
    assert_eq!(error.to_string(), "at misses: expected a delta");
}

/// Versions compare by their own rules: only `major` matters.
#[derive(Fields, Default, Debug, Clone, Copy)]
#[fields(custom(compare))]
struct Version {
    major: u16,
    build: u32,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.major.partial_cmp(&other.major)
    }
}

#[derive(Fields, Default, Debug, Clone, Copy)]
#[fields(partial_eq, partial_ord)]
struct Release {
    version: Version,
    weight: f32,
}

#[test]
fn custom_compare_inside_generic_operators() {
    let a = Release { version: Version { major: 1, build: 100 }, weight: 1.0 };
    let b = Release { version: Version { major: 1, build: 200 }, weight: 1.0 };
    let c = Release { version: Version { major: 2, build: 0 }, weight: 0.0 };

    assert_eq!(a, b);
    assert!(a < c);
    assert!(a <= b && a >= b);
    assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

    let nan = Release { version: a.version, weight: f32::NAN };
    assert_eq!(a.partial_cmp(&nan), None);
    assert!(a <= nan && a >= nan);
}

#[test]
fn debug_for_dyn_reflect() {
    let header = Header { version: 1, length: 2 };
    let rendered = format!("{:?}", header.as_reflect());
    assert_eq!(rendered, describe_compact(&header).to_string());
    assert!(rendered.starts_with("Header("));
}
