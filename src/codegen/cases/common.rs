//! Test fixtures: a home package with a handful of named types.

use crate::types::{Field, Kind, Type};
use crate::value::{Complex64, Reflect, Value};
use crate::Printer;

/// Package the emitted code lives in.
pub const HOME: &str = "github.com/jba/printsrc";

/// A printer for [`HOME`] with `net` and `text/template` (as `ttemp`) registered.
pub fn printer() -> Printer {
    let mut printer = Printer::new(HOME);
    printer
        .register_import("net")
        .register_named_import("text/template", "ttemp");
    printer
}

/// Strip layout so only the tokens are compared.
pub fn flat(src: &str) -> String {
    src.replace(['\n', '\t'], "")
}

/// Emit `value` and compare with `want`, ignoring layout.
pub fn assert_flat(printer: &Printer, value: &Value, want: &str) {
    let got = printer
        .emit(value)
        .unwrap_or_else(|err| panic!("emitting {value:?}: {err}"));
    pretty_assertions::assert_eq!(flat(&got), want, "value: {value:?}");
}

/// Emit `value` and compare with `want` exactly.
pub fn assert_exact(printer: &Printer, value: &Value, want: &str) {
    let got = printer
        .emit(value)
        .unwrap_or_else(|err| panic!("emitting {value:?}: {err}"));
    pretty_assertions::assert_eq!(got, want, "value: {value:?}");
}

// ---------------------------------------------------------------------------
// Named types
// ---------------------------------------------------------------------------

pub fn named(name: &str, underlying: &Type) -> Type {
    Type::named(HOME, name, underlying)
}

/// `type Bool bool`
pub fn bool_ty() -> Type {
    named("Bool", &Type::bool())
}

/// `type String string`
pub fn string_ty() -> Type {
    named("String", &Type::string())
}

/// `type Int int16`
pub fn int_ty() -> Type {
    named("Int", &Type::basic(Kind::Int16))
}

/// `type Uint uint8`
pub fn uint_ty() -> Type {
    named("Uint", &Type::basic(Kind::Uint8))
}

/// `type Float float32`
pub fn float_ty() -> Type {
    named("Float", &Type::basic(Kind::Float32))
}

/// `type Complex complex64`
pub fn complex_ty() -> Type {
    named("Complex", &Type::basic(Kind::Complex64))
}

pub fn float(f: f32) -> Value {
    f.reflect().retyped(float_ty())
}

pub fn complex(re: f32, im: f32) -> Value {
    Complex64::new(re, im).reflect().retyped(complex_ty())
}

/// `type Nested struct { B int16 }`
pub fn nested_ty() -> Type {
    Type::structure(HOME, "Nested", vec![Field::new("B", Type::basic(Kind::Int16))])
}

pub fn nested(b: i16) -> Value {
    Value::structure(nested_ty(), vec![b.reflect()])
}

/// `type nesting struct { A int; Nested }`
pub fn nesting(a: i64, b: i16) -> Value {
    let ty = Type::structure(
        HOME,
        "nesting",
        vec![Field::new("A", Type::int()), Field::new("Nested", nested_ty())],
    );
    Value::structure(ty, vec![Value::int(a), nested(b)])
}

/// `type Point struct { x, y float32 }`
pub fn point_ty() -> Type {
    let f32_ty = Type::basic(Kind::Float32);
    Type::structure(
        HOME,
        "Point",
        vec![Field::new("x", f32_ty.clone()), Field::new("y", f32_ty)],
    )
}

pub fn point(x: f32, y: f32) -> Value {
    Value::structure(point_ty(), vec![x.reflect(), y.reflect()])
}

/// `type T struct { Boo bool; Map map[string]Float }`
pub fn t_value(boo: bool, entries: &[(&str, f32)]) -> Value {
    let map_ty = Type::map(Type::string(), float_ty());
    let ty = Type::structure(
        HOME,
        "T",
        vec![Field::new("Boo", Type::bool()), Field::new("Map", map_ty.clone())],
    );
    let entries = entries
        .iter()
        .map(|(k, v)| (Value::string(*k), float(*v)))
        .collect();
    Value::structure(ty, vec![Value::bool(boo), Value::map(map_ty, entries)])
}

/// `type node struct { v int; next *node }`
pub fn node_ty() -> Type {
    let ty = Type::declare_struct(HOME, "node");
    ty.define_fields(vec![
        Field::new("v", Type::int()),
        Field::new("next", Type::pointer(ty.clone())),
    ]);
    ty
}

/// A list of `node`s holding `vs`, as a `*node`.
pub fn node_list(ty: &Type, vs: &[i64]) -> Value {
    let ptr = Type::pointer(ty.clone());
    match vs.split_first() {
        None => Value::nil_of(ptr),
        Some((v, rest)) => {
            let node = Value::structure(ty.clone(), vec![Value::int(*v), node_list(ty, rest)]);
            Value::pointer_to(node).retyped(ptr)
        }
    }
}
