//! Prelude module for convenient imports.
//!
//! ```
//! use go_literal::prelude::*;
//!
//! let printer = Printer::new("m");
//! assert_eq!(printer.emit_reflect(&3u8).unwrap(), "uint8(0x3)");
//! ```

// Printing
pub use crate::printer::{EncoderOutput, Printer};

// Describing values
pub use crate::types::{Field, Kind, Type};
pub use crate::value::{Complex64, Complex128, Pointer, Reflect, Repr, Value};

// Errors and configuration
pub use crate::codegen::{BoxError, EmitError};
pub use crate::config::{Config, ConfigBuilder};

// time.Time
pub use crate::time::{Location, Timestamp};
