//! The printer: registries plus entry points.
//!
//! # Lifecycle
//!
//! ```text
//! Printer::new(home)          configure (&mut self)            emit (&self)
//!   ├─ imports: math, time  → register_import / _encoder  →  emit / emit_to / emit_fmt
//!   └─ encoder: time.Time     register_comparator              one Emitter per call
//! ```
//!
//! Registration needs `&mut Printer`, so a printer shared between threads
//! for emission can no longer be reconfigured.

mod naming;
mod registry;

use std::{fmt, io};

use rustc_hash::FxHashMap;

pub use registry::EncoderOutput;
pub(crate) use registry::{Comparator, Encoder};

use crate::codegen::{EmitError, Emitter};
use crate::config::Config;
use crate::types::Type;
use crate::value::{Reflect, Value};

/// Renders [`Value`]s as Go source expressions.
///
/// # Example
///
/// ```
/// use go_literal::{Printer, Reflect};
///
/// let printer = Printer::new("github.com/acme/app");
/// let src = printer.emit(&vec![1i64, 2, 3].reflect()).unwrap();
/// assert_eq!(src, "[]int64{1, 2, 3}");
/// ```
pub struct Printer {
    home: String,
    config: Config,
    /// Import path → package identifier.
    imports: FxHashMap<String, String>,
    encoders: FxHashMap<Type, Encoder>,
    comparators: FxHashMap<Type, Comparator>,
}

impl Printer {
    /// Create a printer for code that will live in package `home`.
    ///
    /// Types defined in `home` render unqualified, and their unexported
    /// fields are emitted. The `math` and `time` packages are pre-registered,
    /// as is an encoder for `time.Time` ([`Timestamp`](crate::Timestamp)).
    pub fn new(home: impl Into<String>) -> Self {
        Self::with_config(home, Config::default())
    }

    /// Create a printer with a custom [`Config`].
    pub fn with_config(home: impl Into<String>, config: Config) -> Self {
        let mut printer = Self {
            home: home.into(),
            config,
            imports: FxHashMap::default(),
            encoders: FxHashMap::default(),
            comparators: FxHashMap::default(),
        };
        printer.register_import("math");
        printer.register_import("time");
        printer.register_encoder_with(crate::time::encode_timestamp);
        printer
    }

    /// Import path of the package the emitted code lives in.
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Render `value` as a Go expression.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %value.ty()))]
    pub fn emit(&self, value: &Value) -> Result<String, EmitError> {
        let mut out = String::new();
        Emitter::new(self, &mut out).emit_root(value)?;
        Ok(out)
    }

    /// Render a host value as a Go expression.
    pub fn emit_reflect<T: Reflect + ?Sized>(&self, value: &T) -> Result<String, EmitError> {
        self.emit(&value.reflect())
    }

    /// Render `value` into a formatter sink.
    ///
    /// On error, the sink may hold a partial expression.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %value.ty()))]
    pub fn emit_fmt<W: fmt::Write>(&self, out: &mut W, value: &Value) -> Result<(), EmitError> {
        Emitter::new(self, out).emit_root(value)
    }

    /// Render `value` into a byte writer.
    ///
    /// On error, the writer may hold a partial expression.
    pub fn emit_to<W: io::Write>(&self, out: &mut W, value: &Value) -> Result<(), EmitError> {
        let mut sink = IoSink {
            inner: out,
            error: None,
        };
        let result = self.emit_fmt(&mut sink, value);
        match (result, sink.error.take()) {
            (Err(EmitError::Write(_)), Some(io)) => Err(EmitError::Io(io)),
            (result, _) => result,
        }
    }

    // =========================================================================
    // Registry lookups
    // =========================================================================

    pub(crate) fn encoder(&self, ty: &Type) -> Option<&Encoder> {
        self.encoders.get(ty)
    }

    pub(crate) fn comparator(
        &self,
        ty: &Type,
    ) -> Option<&(dyn Fn(&Value, &Value) -> Result<bool, EmitError> + Send + Sync)> {
        self.comparators.get(ty).map(|c| c.as_ref())
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("home", &self.home)
            .field("config", &self.config)
            .field("imports", &self.imports)
            .field("encoders", &self.encoders.keys().collect::<Vec<_>>())
            .field("comparators", &self.comparators.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Adapts an `io::Write` to `fmt::Write`, keeping the underlying I/O error.
struct IoSink<'a, W: io::Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
