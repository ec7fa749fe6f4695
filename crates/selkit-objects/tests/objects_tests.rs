//! Integration tests for shapes and JSON helpers.

use std::collections::BTreeMap;

use selkit_objects::{Circle, ObjectError, Rectangle, from_json, make, to_json};
use serde_json::json;

// ========== Shapes ==========

#[test]
fn test_make_rectangle() {
    let r = make(10.0, 20.0);
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 20.0);
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_area_reads_current_fields() {
    let mut r = Rectangle::new(10.0, 20.0);
    r.width = 3.0;
    assert_eq!(r.area(), 60.0);
    r.height = 0.5;
    assert_eq!(r.area(), 1.5);
}

#[test]
fn test_circle_area() {
    let c = Circle::new(2.0);
    assert!((c.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
}

// ========== to_json ==========

#[test]
fn test_to_json_array() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_to_json_struct_field_order() {
    let r = make(10.0, 20.0);
    assert_eq!(to_json(&r).unwrap(), r#"{"width":10,"height":20}"#);
}

#[test]
fn test_to_json_fractional_and_large_numbers() {
    assert_eq!(
        to_json(&Rectangle::new(1.5, -0.0)).unwrap(),
        r#"{"width":1.5,"height":0}"#
    );
    assert_eq!(to_json(&Circle::new(2.5)).unwrap(), r#"{"radius":2.5}"#);
    assert_eq!(to_json(&Circle::new(1e300)).unwrap(), r#"{"radius":1e300}"#);
}

#[test]
fn test_to_json_value_keeps_insertion_order() {
    let value = json!({ "height": 10, "width": 20 });
    assert_eq!(to_json(&value).unwrap(), r#"{"height":10,"width":20}"#);
}

#[test]
fn test_to_json_primitives() {
    assert_eq!(to_json("text").unwrap(), r#""text""#);
    assert_eq!(to_json(&true).unwrap(), "true");
    assert_eq!(to_json(&Option::<i32>::None).unwrap(), "null");
}

#[test]
fn test_to_json_non_string_keys_fail() {
    let mut map = BTreeMap::new();
    let _ = map.insert((1, 2), "pair");
    assert!(matches!(to_json(&map), Err(ObjectError::Serialize(_))));
}

// ========== from_json ==========

#[test]
fn test_from_json_circle() {
    let c: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert_eq!(c, Circle::new(10.0));
}

#[test]
fn test_from_json_is_positional() {
    let r: Rectangle = from_json(r#"{"height":10,"width":20}"#).unwrap();
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 20.0);
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_from_json_integer_keys_first() {
    let r: Rectangle = from_json(r#"{"b":1,"1":2}"#).unwrap();
    assert_eq!(r, Rectangle::new(2.0, 1.0));
}

#[test]
fn test_from_json_array_arguments() {
    let r: Rectangle = from_json("[3, 4]").unwrap();
    assert_eq!(r, Rectangle::new(3.0, 4.0));
}

#[test]
fn test_from_json_scalar_argument() {
    let c: Circle = from_json("1.5").unwrap();
    assert_eq!(c.radius, 1.5);
}

#[test]
fn test_to_json_then_from_json() {
    let r = Rectangle::new(7.0, 9.0);
    let back: Rectangle = from_json(&to_json(&r).unwrap()).unwrap();
    assert_eq!(back, r);
}

#[test]
fn test_from_json_malformed() {
    let err = from_json::<Rectangle>("{width: 1").unwrap_err();
    assert!(matches!(err, ObjectError::Parse(_)));
    assert!(err.to_string().starts_with("invalid JSON"));
}

#[test]
fn test_from_json_wrong_arity() {
    let err = from_json::<Rectangle>(r#"{"width":1}"#).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::Arity {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_from_json_wrong_type() {
    let err = from_json::<Rectangle>(r#"{"width":1,"height":"tall"}"#).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::InvalidArgument {
            position: 1,
            expected: "number"
        }
    ));
}
