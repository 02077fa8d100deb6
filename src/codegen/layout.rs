//! Single-line vs multi-line layout decisions.
//!
//! A composite goes on one line when it is "simple":
//!
//! - empty, or zero;
//! - exactly one element (or map entry) that is itself simple;
//! - a short run of scalar elements (at most `max_inline_elems`);
//! - a small map whose key and value types are both scalar
//!   (at most `max_inline_entries` entries).
//!
//! Everything else gets one entry per line. Strings and pointers are never
//! scalar: strings can be long and pointers to primitives expand into inline
//! functions.

use crate::config::Config;
use crate::types::{Kind, Type};
use crate::value::{Repr, Value};

/// Whether values of `ty` always render short: numbers and booleans.
pub fn is_scalar_type(ty: &Type) -> bool {
    ty.kind().is_primitive() && ty.kind() != Kind::String
}

/// Whether every value of `ty` renders short: scalars, and structs of at
/// most two such fields.
pub fn one_line_type(ty: &Type) -> bool {
    match ty.kind() {
        Kind::Struct => {
            let fields = ty.fields();
            fields.len() <= 2 && fields.iter().all(|f| is_scalar_type(f.ty()))
        }
        _ => is_scalar_type(ty),
    }
}

/// Layout selector bound to a configuration.
#[derive(Clone, Copy)]
pub struct Layout<'c> {
    config: &'c Config,
}

impl<'c> Layout<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Whether `value` renders short enough to sit inline.
    pub fn is_simple(&self, value: &Value) -> bool {
        if one_line_type(value.ty()) || value.is_zero() {
            return true;
        }
        match value.repr() {
            Repr::Str(s) => s.len() <= self.config.max_inline_str,
            Repr::Slice(Some(items)) | Repr::Array(items) => self.is_seq_one_line(value.ty(), items),
            Repr::Map(Some(entries)) => {
                let entries: Vec<_> = entries.iter().map(|(k, v)| (k, v)).collect();
                self.is_map_one_line(value.ty(), &entries)
            }
            _ => false,
        }
    }

    /// Whether a slice or array of type `ty` with `items` goes on one line.
    pub fn is_seq_one_line(&self, ty: &Type, items: &[Value]) -> bool {
        match items {
            [] => true,
            [only] if only.kind().is_primitive() && self.is_simple(only) => true,
            _ => {
                items.len() <= self.config.max_inline_elems
                    && ty.elem().is_some_and(is_scalar_type)
            }
        }
    }

    /// Whether a map of type `ty` with `entries` (in emission order) goes on one line.
    pub fn is_map_one_line(&self, ty: &Type, entries: &[(&Value, &Value)]) -> bool {
        match entries {
            [] => true,
            [(k, v)] if self.is_simple(k) && self.is_simple(v) => true,
            _ => {
                entries.len() <= self.config.max_inline_entries
                    && ty.key().is_some_and(is_scalar_type)
                    && ty.elem().is_some_and(is_scalar_type)
            }
        }
    }

    /// Whether a struct goes on one line given the types of the fields that
    /// will actually be emitted.
    pub fn is_struct_one_line<'t>(&self, emitted: impl ExactSizeIterator<Item = &'t Type>) -> bool {
        let count = emitted.len();
        let mut emitted = emitted;
        count < 2 || emitted.all(is_scalar_type)
    }
}
