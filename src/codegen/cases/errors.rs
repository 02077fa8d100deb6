//! Values with no source form, and misuse of the API.

use chrono::{FixedOffset, NaiveDate};

use crate::codegen::EmitError;
use crate::config::Config;
use crate::time::{Location, Timestamp};
use crate::types::{Field, Type};
use crate::value::{Pointer, Reflect, Repr, Value};
use crate::Printer;

use super::common::{node_ty, HOME};

fn emit_err(printer: &Printer, value: &Value) -> EmitError {
    match printer.emit(value) {
        Ok(src) => panic!("expected an error, got {src}"),
        Err(err) => err,
    }
}

#[test]
fn unknown_package() {
    let printer = Printer::new(HOME);
    let flags = Type::named("net", "Flags", &Type::uint());
    let err = emit_err(&printer, &3usize.reflect().retyped(flags));
    assert!(matches!(&err, EmitError::UnknownModule { path } if path == "net"));
    assert!(err.to_string().contains("unknown package"));
}

#[test]
fn unnamed_struct() {
    let printer = Printer::new(HOME);
    let anon = Type::anonymous_struct(vec![Field::new("X", Type::int())]);
    let err = emit_err(&printer, &Value::structure(anon, vec![Value::int(3)]));
    assert!(matches!(err, EmitError::UnnamedType { .. }));
    assert!(err.to_string().contains("unnamed type"));
}

#[test]
fn funcs_and_chans() {
    let printer = Printer::new(HOME);
    let func = Value::new(Type::func(), Repr::Opaque { nil: false });
    let err = emit_err(&printer, &func);
    assert!(err.to_string().contains("cannot print"));

    let chan = Value::new(Type::chan(Type::int()), Repr::Opaque { nil: false });
    assert!(matches!(emit_err(&printer, &chan), EmitError::Unrepresentable { .. }));

    let nil_func = Value::nil_of(Type::func());
    assert!(matches!(emit_err(&printer, &nil_func), EmitError::Unrepresentable { .. }));
}

#[test]
fn pointer_cycle() {
    let printer = Printer::new(HOME);
    let ty = node_ty();
    let ptr = Type::pointer(ty.clone());
    let cell = Pointer::new(Value::nil());
    let node = Value::structure(
        ty,
        vec![Value::int(1), Value::from_pointer(ptr.clone(), cell.clone())],
    );
    cell.set(node);
    let err = emit_err(&printer, &Value::from_pointer(ptr, cell));
    assert!(matches!(err, EmitError::DepthExceeded { max: 100 }));
    assert!(err.to_string().contains("depth"));
}

#[test]
fn depth_ceiling_is_configurable() {
    let config = Config::builder().max_depth(2).build();
    let printer = Printer::with_config(HOME, config);
    assert!(printer.emit(&vec![vec![1isize]].reflect()).is_ok());
    let err = emit_err(&printer, &vec![vec![vec![1isize]]].reflect());
    assert!(matches!(err, EmitError::DepthExceeded { max: 2 }));
}

#[test]
fn fixed_zone() {
    let printer = Printer::new(HOME);
    let wall = NaiveDate::from_ymd_opt(2008, 4, 23)
        .and_then(|d| d.and_hms_nano_opt(9, 56, 23, 29))
        .unwrap();
    let offset = FixedOffset::east_opt(17).unwrap();
    let ts = Timestamp::new(
        wall,
        Location::Fixed {
            name: "foo".into(),
            offset,
        },
    );
    let err = emit_err(&printer, &ts.reflect());
    assert!(err.to_string().contains("location"));
}

#[test]
fn struct_without_printable_fields() {
    let mut printer = Printer::new(HOME);
    printer.register_named_import("text/template", "ttemp");
    let ty = Type::structure("text/template", "Template", vec![Field::new("name", Type::string())]);
    let err = emit_err(&printer, &Value::structure(ty, vec![Value::string("page")]));
    assert!(matches!(&err, EmitError::NoEmittableFields { ty } if ty == "template.Template"));
}

#[test]
fn mismatched_data() {
    let printer = Printer::new(HOME);
    let err = emit_err(&printer, &Value::new(Type::int(), Repr::Str("7".into())));
    assert!(matches!(err, EmitError::ReprMismatch { found: "string", .. }));

    let ty = Type::structure(HOME, "Pair", vec![Field::new("A", Type::int())]);
    let err = emit_err(&printer, &Value::structure(ty, vec![]));
    assert!(matches!(err, EmitError::ReprMismatch { .. }));
}

#[test]
fn error_inside_composite_stops_emission() {
    let printer = Printer::new(HOME);
    let mut out = String::new();
    let value = Value::slice(
        Type::slice(Type::interface()),
        vec![
            Value::dynamic(Value::int(1)),
            Value::dynamic(Value::new(Type::func(), Repr::Opaque { nil: false })),
        ],
    );
    assert!(printer.emit_fmt(&mut out, &value).is_err());
    assert!(out.starts_with("[]interface{}{"));
}
