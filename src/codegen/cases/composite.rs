//! Pointers, slices, arrays, maps and structs.

use std::collections::{BTreeMap, HashMap};

use crate::types::{Field, Kind, Type};
use crate::value::{Pointer, Reflect, Value};

use super::common::{
    assert_flat, float, float_ty, nested, nested_ty, nesting, node_list, node_ty, point,
    point_ty, printer, t_value, HOME,
};

#[test]
fn pointers() {
    let p = printer();
    let i8_ty = Type::basic(Kind::Int8);
    assert_flat(&p, &Value::nil_of(Type::pointer(Type::int())), "(*int)(nil)");
    assert_flat(
        &p,
        &Box::new(7i8).reflect(),
        "func() *int8 { var x int8 = 7; return &x }()",
    );
    assert_flat(
        &p,
        &Value::pointer_to(float(f32::NAN)),
        "func() *Float { var x Float = Float(math.NaN()); return &x }()",
    );
    assert_flat(
        &p,
        &Value::slice(Type::slice(Type::pointer(i8_ty)), vec![Box::new(7i8).reflect()]),
        "[]*int8{func() *int8 { var x int8 = 7; return &x }(),}",
    );
    let inner = vec![1isize].reflect();
    assert_flat(
        &p,
        &Value::slice(Type::slice(Type::pointer(inner.ty().clone())), vec![Value::pointer_to(inner)]),
        "[]*[]int{{1},}",
    );
}

#[test]
fn pointer_to_string() {
    assert_flat(
        &printer(),
        &Box::new("hi".to_string()).reflect(),
        r#"func() *string { var x string = "hi"; return &x }()"#,
    );
}

#[test]
fn shared_pointer_cell() {
    let p = printer();
    let cell = Pointer::new(nested(1));
    let ty = Type::pointer(nested_ty());
    let value = Value::slice(
        Type::slice(ty.clone()),
        vec![Value::from_pointer(ty.clone(), cell.clone()), Value::from_pointer(ty, cell.clone())],
    );
    assert_flat(&p, &value, "[]*Nested{{B: 1},{B: 1},}");
    cell.set(nested(2));
    assert_flat(&p, &value, "[]*Nested{{B: 2},{B: 2},}");
}

#[test]
fn slices_and_arrays() {
    let p = printer();
    assert_flat(&p, &None::<Vec<isize>>.reflect(), "[]int(nil)");
    assert_flat(&p, &Vec::<isize>::new().reflect(), "[]int{}");
    assert_flat(&p, &vec![1isize].reflect(), "[]int{1}");
    assert_flat(&p, &vec![1isize, 2].reflect(), "[]int{1, 2}");
    assert_flat(&p, &vec![1isize, 2, 3].reflect(), "[]int{1, 2, 3}");
    assert_flat(&p, &vec![1i16, 7].reflect(), "[]int16{1, 7}");
    assert_flat(&p, &Value::slice(Type::slice(float_ty()), vec![float(2.3)]), "[]Float{2.3}");
    assert_flat(&p, &[true].reflect(), "[1]bool{true}");
    assert_flat(&p, &vec!["a", "b"].reflect(), r#"[]string{"a","b",}"#);
    assert_flat(&p, &[0i64; 3].reflect(), "[3]int64{0, 0, 0}");
}

#[test]
fn maps() {
    let p = printer();
    assert_flat(&p, &None::<HashMap<String, isize>>.reflect(), "map[string]int(nil)");
    assert_flat(&p, &HashMap::<String, isize>::new().reflect(), "map[string]int{}");
    assert_flat(&p, &HashMap::from([("a", 1isize)]).reflect(), r#"map[string]int{"a": 1}"#);
    assert_flat(
        &p,
        &HashMap::from([("b", 2isize), ("a", 1)]).reflect(),
        r#"map[string]int{"a": 1,"b": 2,}"#,
    );
    assert_flat(
        &p,
        &t_value(true, &[("x", 0.5)]),
        r#"T{Boo: true,Map: map[string]Float{"x": 0.5},}"#,
    );
    assert_flat(&p, &t_value(false, &[("x", 0.5)]), r#"T{Map: map[string]Float{"x": 0.5}}"#);

    let my_map = Type::named(HOME, "MyMap", &Type::map(Type::string(), Type::int()));
    assert_flat(&p, &HashMap::from([("a", 1isize)]).reflect().retyped(my_map), r#"MyMap{"a": 1}"#);
}

#[test]
fn maps_of_slices() {
    let p = printer();
    assert_flat(&p, &HashMap::<isize, Vec<isize>>::new().reflect(), "map[int][]int{}");
    assert_flat(&p, &HashMap::from([(1isize, vec![2isize])]).reflect(), "map[int][]int{1: {2}}");
    assert_flat(
        &p,
        &HashMap::from([(3isize, vec![4isize, 5, 6]), (1, vec![2])]).reflect(),
        "map[int][]int{1: {2},3: {4, 5, 6},}",
    );
    assert_flat(
        &p,
        &vec![HashMap::from([(1isize, true)])].reflect(),
        "[]map[int]bool{{1: true},}",
    );
}

#[test]
fn map_key_order() {
    let p = printer();
    assert_flat(
        &p,
        &HashMap::from([(3isize, 4isize), (1, 2)]).reflect(),
        "map[int]int{1: 2, 3: 4}",
    );
    assert_flat(
        &p,
        &HashMap::from([(true, 1isize), (false, 2)]).reflect(),
        "map[bool]int{false: 2, true: 1}",
    );
    assert_flat(
        &p,
        &HashMap::from([(2usize, true), (1, false)]).reflect(),
        "map[uint]bool{0x1: false, 0x2: true}",
    );
    let floats = Value::map(
        Type::map(Type::basic(Kind::Float32), Type::int()),
        vec![(1f32.reflect(), Value::int(1)), ((-1f32).reflect(), Value::int(-1))],
    );
    assert_flat(&p, &floats, "map[float32]int{-1: -1, 1: 1}");
}

#[test]
fn map_output_is_deterministic() {
    let p = printer();
    let words = ["pear", "fig", "apple", "kiwi", "plum", "date", "lime"];
    let hashed: HashMap<String, usize> =
        words.iter().map(|w| (w.to_string(), w.len())).collect();
    let sorted: BTreeMap<String, usize> = hashed.clone().into_iter().collect();
    let first = p.emit(&hashed.reflect()).unwrap();
    for _ in 0..5 {
        assert_eq!(p.emit(&hashed.reflect()).unwrap(), first);
    }
    assert_eq!(first, p.emit(&sorted.reflect()).unwrap());
}

#[test]
fn structs() {
    let p = printer();
    assert_flat(&p, &Value::nil_of(Type::pointer(nested_ty())), "(*Nested)(nil)");
    assert_flat(&p, &Value::pointer_to(nested(3)), "&Nested{B: 3}");
    assert_flat(&p, &point(1.0, 2.0), "Point{x: 1, y: 2}");
    assert_flat(&p, &nesting(1, 2), "nesting{A: 1,Nested: Nested{B: 2},}");
    assert_flat(
        &p,
        &Value::slice(Type::slice(nested_ty()), vec![nested(1)]),
        "[]Nested{{B: 1},}",
    );
    let ptr = Type::pointer(nested_ty());
    assert_flat(
        &p,
        &Value::slice(
            Type::slice(ptr.clone()),
            vec![Value::pointer_to(nested(1)), Value::nil_of(ptr)],
        ),
        "[]*Nested{{B: 1},nil,}",
    );
    assert_flat(&p, &Value::structure(nested_ty(), vec![0i16.reflect()]), "Nested{}");
}

#[test]
fn unexported_fields_in_home_package() {
    let f64_ty = Type::float64();
    let ty = Type::structure(
        HOME,
        "Unexp",
        vec![Field::new("E", f64_ty.clone()), Field::new("u", f64_ty)],
    );
    let value = Value::structure(ty, vec![Value::float(1.0), Value::float(2.0)]);
    assert_flat(&printer(), &value, "Unexp{E: 1.0, u: 2.0}");
}

#[test]
fn unexported_fields_of_foreign_struct_are_skipped() {
    let mut p = printer();
    p.register_import("example.com/geo");
    let ty = Type::structure(
        "example.com/geo",
        "Place",
        vec![Field::new("Name", Type::string()), Field::new("id", Type::int())],
    );
    let value = Value::structure(ty, vec![Value::string("home"), Value::int(9)]);
    assert_flat(&p, &value, r#"geo.Place{Name: "home"}"#);
}

#[test]
fn struct_map_keys() {
    let map = Value::map(
        Type::map(nested_ty(), nested_ty()),
        vec![(nested(1), nested(2))],
    );
    assert_flat(&printer(), &map, "map[Nested]Nested{{B: 1}: {B: 2}}");
}

#[test]
fn linked_nodes() {
    let ty = node_ty();
    assert_flat(
        &printer(),
        &node_list(&ty, &[1, 2, 3]),
        "&node{v: 1,next: &node{v: 2,next: &node{v: 3},},}",
    );
}

#[test]
fn imported_types() {
    let p = printer();
    let flags = Type::named("net", "Flags", &Type::uint());
    assert_flat(&p, &17usize.reflect().retyped(flags), "net.Flags(0x11)");

    let template = Type::structure(
        "text/template",
        "Template",
        vec![Field::new("name", Type::string())],
    );
    assert_flat(&p, &Value::structure(template, vec![Value::string("")]), "ttemp.Template{}");
}

#[test]
fn point_keys_keep_insertion_order() {
    let map = Value::map(
        Type::map(point_ty(), Type::string()),
        vec![
            (point(1.0, 0.0), Value::string("a")),
            (point(0.0, 1.0), Value::string("b")),
        ],
    );
    assert_flat(&printer(), &map, r#"map[Point]string{{x: 1}: "a",{y: 1}: "b",}"#);
}
