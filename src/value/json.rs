//! JSON → Go value bridge.
//!
//! A `serde_json::Value` reflects as the `interface{}` tree Go's
//! `encoding/json` would decode it into, except that integers keep their
//! integer type:
//!
//! - `null` → nil `interface{}`
//! - `bool` → `bool`
//! - number → `int`, `uint64` (above `i64::MAX`) or `float64`
//! - `string` → `string`
//! - `array` → `[]interface{}`
//! - `object` → `map[string]interface{}`

use serde_json::Value as JsonValue;

use super::{Reflect, Value};
use crate::types::Type;

impl Reflect for JsonValue {
    fn reflect_type() -> Type {
        Type::interface()
    }

    fn reflect(&self) -> Value {
        match self {
            JsonValue::Null => Value::nil_of(Type::interface()),
            other => Value::dynamic(json_to_concrete(other)),
        }
    }
}

/// Convert JSON to the concrete value an `interface{}` would hold.
fn json_to_concrete(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::nil(),
        JsonValue::Bool(b) => Value::bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::int(i)
            } else if let Some(u) = n.as_u64() {
                u.reflect()
            } else {
                Value::float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::string(s.as_str()),
        JsonValue::Array(arr) => {
            let items = arr.iter().map(Reflect::reflect).collect();
            Value::slice(Type::slice(Type::interface()), items)
        }
        JsonValue::Object(obj) => {
            let entries = obj
                .iter()
                .map(|(k, v)| (Value::string(k.as_str()), v.reflect()))
                .collect();
            Value::map(Type::map(Type::string(), Type::interface()), entries)
        }
    }
}
