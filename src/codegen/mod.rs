//! Go source generation from [`Value`](crate::Value)s.
//!
//! # Modules
//!
//! - `emit` - Recursive emitter: conversions, elision, pointers, composites
//! - `literal` - Primitive literal formatting (`%#v` rules)
//! - `layout` - Single-line vs multi-line decisions
//! - `order` - Deterministic map key order
//! - `error` - Error types

mod emit;
mod error;
mod layout;
mod literal;
mod order;


pub(crate) use emit::Emitter;

// Errors
pub use error::{BoxError, EmitError};
