//! Deterministic ordering of map keys.
//!
//! Keys are sorted with, in order of preference:
//!
//! 1. a comparator registered for the exact key type;
//! 2. the natural order of the key's kind: `false < true`, numeric order for
//!    integers, IEEE total order for floats, byte order for strings.
//!
//! Keys of any other type keep the order the entries were supplied in, which
//! for hash maps changes from run to run.
//!
//! Several NaN keys in one map are kept as separate entries, producing
//! duplicate keys in the output.

use std::cmp::Ordering;

use super::error::EmitError;
use crate::printer::Printer;
use crate::types::{Kind, Type};
use crate::value::{Repr, Value};

/// A map entry borrowed for emission.
pub type Entry<'v> = (&'v Value, &'v Value);

/// Order `entries` of a map whose key type is `key_ty`.
pub fn order_entries<'v>(
    printer: &Printer,
    key_ty: &Type,
    entries: &'v [(Value, Value)],
) -> Result<Vec<Entry<'v>>, EmitError> {
    let mut ordered: Vec<Entry<'v>> = entries.iter().map(|(k, v)| (k, v)).collect();

    if let Some(less) = printer.comparator(key_ty) {
        let mut failure = None;
        ordered.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            match compare_with(less, a.0, b.0) {
                Ok(ord) => ord,
                Err(err) => {
                    failure = Some(err);
                    Ordering::Equal
                }
            }
        });
        return match failure {
            Some(err) => Err(err),
            None => Ok(ordered),
        };
    }

    if has_natural_order(key_ty.kind()) {
        ordered.sort_by(|a, b| natural_cmp(a.0.repr(), b.0.repr()));
    } else if ordered.len() > 1 {
        tracing::warn!(key = %key_ty, "map key type has no comparator; key order is not deterministic");
    }
    Ok(ordered)
}

fn compare_with(
    less: &(dyn Fn(&Value, &Value) -> Result<bool, EmitError> + Send + Sync),
    a: &Value,
    b: &Value,
) -> Result<Ordering, EmitError> {
    if less(a, b)? {
        Ok(Ordering::Less)
    } else if less(b, a)? {
        Ok(Ordering::Greater)
    } else {
        Ok(Ordering::Equal)
    }
}

/// Whether keys of this kind can be sorted without a registered comparator.
pub fn has_natural_order(kind: Kind) -> bool {
    matches!(kind, Kind::Bool | Kind::String) || kind.is_integer() || kind.is_float()
}

fn natural_cmp(a: &Repr, b: &Repr) -> Ordering {
    match (a, b) {
        (Repr::Bool(a), Repr::Bool(b)) => a.cmp(b),
        (Repr::Int(a), Repr::Int(b)) => a.cmp(b),
        (Repr::Uint(a), Repr::Uint(b)) => a.cmp(b),
        (Repr::Float(a), Repr::Float(b)) => a.total_cmp(b),
        (Repr::Str(a), Repr::Str(b)) => a.cmp(b),
        // Mismatched data is reported when the key itself is emitted.
        _ => Ordering::Equal,
    }
}
