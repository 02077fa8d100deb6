//! Type elision inside composite literals.

use std::collections::HashMap;

use crate::types::{Field, Type};
use crate::value::{Reflect, Value};

use super::common::{assert_flat, named, point, point_ty, printer, HOME};

#[test]
fn array_of_structs() {
    let value = Value::array(
        Type::array(point_ty(), 2),
        vec![point(1.5, -3.5), point(0.0, 0.0)],
    );
    assert_flat(&printer(), &value, "[2]Point{{x: 1.5, y: -3.5},{},}");
}

#[test]
fn nested_slices() {
    let p = printer();
    assert_flat(
        &p,
        &vec![vec![1isize, 2, 3], vec![4, 5]].reflect(),
        "[][]int{{1, 2, 3},{4, 5},}",
    );
    let rows = Type::slice(point_ty());
    let value = Value::slice(
        Type::slice(rows.clone()),
        vec![Value::slice(rows, vec![point(0.0, 1.0), point(1.0, 2.0)])],
    );
    assert_flat(&p, &value, "[][]Point{{{y: 1},{x: 1, y: 2},},}");
}

#[test]
fn map_keys_and_values() {
    let p = printer();
    let values = Value::map(
        Type::map(Type::string(), point_ty()),
        vec![(Value::string("orig"), point(0.0, 0.0))],
    );
    assert_flat(&p, &values, r#"map[string]Point{"orig": {}}"#);
    let keys = Value::map(
        Type::map(point_ty(), Type::string()),
        vec![(point(0.0, 0.0), Value::string("orig"))],
    );
    assert_flat(&p, &keys, r#"map[Point]string{{}: "orig"}"#);
}

#[test]
fn pointer_elements() {
    let p = printer();
    let ptr = Type::pointer(point_ty());
    let value = Value::array(
        Type::array(ptr, 2),
        vec![
            Value::pointer_to(point(1.5, -3.5)),
            Value::pointer_to(point(0.0, 0.0)),
        ],
    );
    assert_flat(&p, &value, "[2]*Point{{x: 1.5, y: -3.5},{},}");
}

#[test]
fn named_pointer_elements() {
    let pp = named("PPoint", &Type::pointer(point_ty()));
    let value = Value::array(
        Type::array(pp.clone(), 2),
        vec![
            Value::pointer_to(point(1.5, -3.5)).retyped(pp.clone()),
            Value::pointer_to(point(0.0, 0.0)).retyped(pp),
        ],
    );
    assert_flat(&printer(), &value, "[2]PPoint{{x: 1.5, y: -3.5},{},}");
}

#[test]
fn interface_elements_keep_type_names() {
    let value = Value::slice(
        Type::slice(Type::interface()),
        vec![
            Value::dynamic(vec![1isize].reflect()),
            Value::dynamic(point(1.0, 0.0)),
        ],
    );
    assert_flat(&printer(), &value, "[]interface{}{[]int{1},Point{x: 1},}");
}

#[test]
fn struct_fields_never_elide() {
    let holder = Type::structure(
        HOME,
        "Holder",
        vec![Field::new("Items", Type::slice(Type::int()))],
    );
    let value = Value::structure(holder, vec![vec![1isize, 2].reflect()]);
    assert_flat(&printer(), &value, "Holder{Items: []int{1, 2}}");
}

#[test]
fn nil_elements() {
    let p = printer();
    let value = HashMap::from([(1isize, None::<Vec<isize>>)]).reflect();
    assert_flat(&p, &value, "map[int][]int{1: nil}");
    let iface = Value::slice(
        Type::slice(Type::interface()),
        vec![Value::dynamic(None::<Vec<isize>>.reflect())],
    );
    assert_flat(&p, &iface, "[]interface{}{[]int(nil),}");
}
