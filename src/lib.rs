//! # go-literal
//!
//! Render runtime values as Go source expressions.
//!
//! Generated Go code often needs to embed data: lookup tables, test
//! fixtures, configuration snapshots. This crate turns a typed [`Value`]
//! into a single Go expression that, compiled in the right package,
//! reconstructs an equal value:
//!
//! - **Types**: literals carry conversions only where Go would not infer
//!   them (`int8(3)`, `[]int8{3}`);
//! - **Layout**: short composites stay on one line, long ones get one entry
//!   per line, `gofmt`-compatible;
//! - **Determinism**: map keys are sorted, so output is stable across runs;
//! - **Extensibility**: custom encoders and key orders per type.
//!
//! ## Quick Start
//!
//! ```
//! use go_literal::{Printer, Reflect};
//! use std::collections::BTreeMap;
//!
//! let printer = Printer::new("example.com/app");
//!
//! let mut scores = BTreeMap::new();
//! scores.insert(7i32, 31i64);
//! scores.insert(3i32, 29i64);
//!
//! let src = printer.emit(&scores.reflect()).unwrap();
//! assert_eq!(src, "map[int32]int64{3: 29, 7: 31}");
//! ```
//!
//! ## Custom types
//!
//! Implement [`Reflect`] to describe your own types, and register imports
//! for the packages they live in:
//!
//! ```
//! use go_literal::{Field, Printer, Reflect, Type, Value};
//!
//! struct Point(i64, i64);
//!
//! impl Reflect for Point {
//!     fn reflect_type() -> Type {
//!         Type::structure(
//!             "example.com/geo",
//!             "Point",
//!             vec![Field::new("X", Type::int()), Field::new("Y", Type::int())],
//!         )
//!     }
//!
//!     fn reflect(&self) -> Value {
//!         Value::structure(Self::reflect_type(), vec![Value::int(self.0), Value::int(self.1)])
//!     }
//! }
//!
//! let mut printer = Printer::new("example.com/app");
//! printer.register_import("example.com/geo");
//! assert_eq!(printer.emit_reflect(&Point(1, 0)).unwrap(), "geo.Point{X: 1}");
//! ```
//!
//! ## Modules
//!
//! - [`types`]: Go type descriptors
//! - [`value`]: Values and the [`Reflect`] capability
//! - [`printer`]: Registries and entry points
//! - [`codegen`]: The emitter and its errors
//! - [`mod@time`]: `time.Time` support
//! - [`config`]: Layout and recursion knobs

#![forbid(unsafe_code)]

pub mod codegen;
pub mod config;
pub mod prelude;
pub mod printer;
pub mod time;
pub mod types;
pub mod value;

// =============================================================================
// Core API
// =============================================================================

pub use printer::{EncoderOutput, Printer};
pub use types::{Field, Kind, Type};
pub use value::{Complex64, Complex128, Pointer, Reflect, Repr, Value};

// =============================================================================
// Infrastructure
// =============================================================================

pub use codegen::{BoxError, EmitError};
pub use config::{Config, ConfigBuilder};
pub use time::{Location, Timestamp};
