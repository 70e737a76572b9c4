//! Cross-module properties of the engine, exercised through the public API.

use std::collections::BTreeMap;

use fw_fields::{
    Fields, Value, compare_eq, diff, host_to_network, member_count, member_names,
    network_to_host, patch, structure, unstructure,
};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Fields, Default, Debug, Clone, Copy, PartialEq)]
enum Shape {
    #[default]
    Circle,
    #[fields(alias = "box")]
    Square,
}

#[derive(Fields, Default, Debug, Clone, PartialEq)]
struct Anchor {
    x: i32,
    y: i32,
}

#[derive(Fields, Default, Debug, Clone, PartialEq)]
struct Widget {
    #[fields(rename = "id", alias = "widget_id")]
    identifier: u64,
    label: String,
    shape: Shape,
    anchor: Anchor,
    scale: f64,
    tags: Vec<String>,
    weights: BTreeMap<String, f32>,
    parent: Option<u32>,
    corners: [u8; 4],
}

fn samples() -> Vec<Widget> {
    let base = Widget::default();
    let full = Widget {
        identifier: u64::MAX,
        label: "root \"node\"".into(),
        shape: Shape::Square,
        anchor: Anchor { x: -3, y: 9 },
        scale: 0.125,
        tags: vec!["a".into(), "b".into()],
        weights: BTreeMap::from([("left".into(), 0.5), ("right".into(), 2.0)]),
        parent: Some(7),
        corners: [1, 2, 3, 255],
    };
    let mut partial = full.clone();
    partial.tags.clear();
    partial.parent = None;
    partial.weights.remove("left");
    partial.anchor.y = i32::MIN;
    vec![base, full, partial]
}

// -----------------------------------------------------------------------------
// 1. Round trip

#[test]
fn structure_inverts_unstructure() {
    for widget in samples() {
        let tree = unstructure(&widget);
        let back: Widget = structure(&tree).unwrap();
        assert!(compare_eq(&back, &widget), "{widget:?}");
    }
}

#[test]
fn round_trip_survives_json_text() {
    for widget in samples() {
        let text = serde_json::to_string(&unstructure(&widget)).unwrap();
        let tree: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(structure::<Widget>(&tree).unwrap(), widget);
    }
}

// -----------------------------------------------------------------------------
// 2. Diff emptiness

#[test]
fn diff_with_itself_is_absent() {
    for widget in samples() {
        assert_eq!(diff(&widget, &widget.clone()), None);
    }
}

// -----------------------------------------------------------------------------
// 3. Diff/Patch inverse

#[test]
fn patch_applies_diff() {
    let samples = samples();
    for a in &samples {
        for b in &samples {
            let change = diff(a, b).unwrap_or_else(|| Value::Object(BTreeMap::new()));
            let mut target = a.clone();
            patch(&mut target, &change).unwrap();
            assert_eq!(&target, b, "diff was {change}");
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Sparse diff

#[test]
fn diff_names_only_the_changed_leaf() {
    let a = samples().remove(1);

    let mut b = a.clone();
    b.label = "renamed".into();
    let change = diff(&a, &b).unwrap();
    let object = change.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), ["label"]);

    let mut c = a.clone();
    c.anchor.x = 100;
    let change = diff(&a, &c).unwrap();
    assert_eq!(change.to_string(), r#"{"anchor":{"x":100}}"#);
}

// -----------------------------------------------------------------------------
// 5. Precision tolerance

#[derive(Fields, Default, Debug)]
#[fields(precision = 4, partial_eq)]
struct Reading {
    value: f64,
}

#[test]
fn precision_is_significant_digits() {
    let reference = Reading { value: 40.0 };
    assert_ne!(reference, Reading { value: 40.01 });
    assert_eq!(reference, Reading { value: 40.001 });

    let small = Reading { value: 0.0012341 };
    assert_eq!(small, Reading { value: 0.0012344 });
    assert_ne!(small, Reading { value: 0.0012361 });
}

// -----------------------------------------------------------------------------
// 6. Missing-field default

#[derive(Fields, Debug, PartialEq)]
#[fields(default = Limits::standard)]
struct Limits {
    low: i32,
    high: i32,
}

impl Limits {
    fn standard() -> Self {
        Self { low: 0, high: 42 }
    }
}

#[test]
fn absent_member_keeps_factory_default() {
    let tree: Value = serde_json::from_str(r#"{"low": -5}"#).unwrap();
    let limits: Limits = structure(&tree).unwrap();
    assert_eq!(limits, Limits { low: -5, high: 42 });
}

// -----------------------------------------------------------------------------
// 7. Alternate names

#[test]
fn alternate_name_structures_like_canonical() {
    let canonical: Value = serde_json::from_str(r#"{"id": 9, "shape": "Square"}"#).unwrap();
    let alternate: Value = serde_json::from_str(r#"{"widget_id": 9, "shape": "box"}"#).unwrap();

    let a: Widget = structure(&canonical).unwrap();
    let b: Widget = structure(&alternate).unwrap();
    assert_eq!(a, b);

    let tree = unstructure(&b);
    assert_eq!(tree.get("id").and_then(Value::as_u64), Some(9));
    assert!(tree.get("widget_id").is_none());
    assert_eq!(tree.get("shape").and_then(Value::as_str), Some("Square"));
}

// -----------------------------------------------------------------------------
// 8. Byte-order round trip

#[derive(Fields, Default, Debug, Clone, PartialEq)]
struct Frame {
    #[fields(network)]
    length: u32,
    #[fields(network)]
    gain: f32,
    sequence: u16,
    note: String,
}

#[test]
fn network_subset_round_trips() {
    let original = Frame {
        length: 0x0102_0304,
        gain: 1.5,
        sequence: 0xabcd,
        note: "payload".into(),
    };

    let mut swapped = original.clone();
    host_to_network(&mut swapped);
    assert_eq!(swapped.length, original.length.to_be());
    assert_eq!(swapped.gain.to_bits(), original.gain.to_bits().to_be());
    assert_eq!(swapped.sequence, original.sequence);
    assert_eq!(swapped.note, original.note);

    network_to_host(&mut swapped);
    assert_eq!(swapped, original);
}

// -----------------------------------------------------------------------------
// 9. Member-count/name introspection

#[derive(Fields, Default)]
struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

#[test]
fn layout_is_read_from_the_definition() {
    assert_eq!(member_count::<Vector3>(), 3);
    assert_eq!(member_names::<Vector3>().collect::<Vec<_>>(), ["x", "y", "z"]);
}
