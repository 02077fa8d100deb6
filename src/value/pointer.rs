//! Shared pointer cells.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::Value;

/// The target of a non-nil pointer.
///
/// Cells are shared and mutable so that callers can build self-referential
/// graphs (`n.next = n`). The emitter only reads them, and does so with
/// recursive read locks, so a cycle never deadlocks; it trips the depth
/// ceiling instead.
#[derive(Clone)]
pub struct Pointer(Arc<RwLock<Value>>);

impl Pointer {
    /// Allocate a cell holding `target`.
    pub fn new(target: Value) -> Self {
        Self(Arc::new(RwLock::new(target)))
    }

    /// Replace the pointed-to value.
    pub fn set(&self, target: Value) {
        *self.0.write() = target;
    }

    /// Read the pointed-to value.
    pub fn get(&self) -> RwLockReadGuard<'_, Value> {
        self.0.read_recursive()
    }

    /// Whether two pointers share the same cell.
    pub fn ptr_eq(&self, other: &Pointer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer({:p})", Arc::as_ptr(&self.0))
    }
}
