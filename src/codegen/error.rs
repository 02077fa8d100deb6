//! Error types for emission.

use std::{fmt, io};

use thiserror::Error;

/// Boxed error returned by custom encoders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error during value → Go source emission.
///
/// Every variant names the offending type or package path, so the caller
/// knows whether to register an import, an encoder, or give up on the value.
///
/// # Example
///
/// ```ignore
/// match printer.emit(&value) {
///     Ok(src) => println!("{src}"),
///     Err(EmitError::UnknownModule { path }) => {
///         eprintln!("call register_import({path:?}) first");
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum EmitError {
    /// Functions, channels and unsafe pointers have no literal form.
    #[error("cannot print values of type {ty} as source")]
    Unrepresentable {
        /// Offending type.
        ty: String,
    },

    /// A type from a package with no registered identifier.
    #[error("unknown package {path:?}; register it with Printer::register_import")]
    UnknownModule {
        /// Import path of the package.
        path: String,
    },

    /// A type with no name and no structural spelling (e.g. an anonymous struct).
    #[error("can't handle unnamed type {ty}")]
    UnnamedType {
        /// Offending type.
        ty: String,
    },

    /// Recursion went past the configured ceiling, most likely a pointer cycle.
    #[error("max recursion depth {max} exceeded (probable circularity)")]
    DepthExceeded {
        /// The configured ceiling.
        max: usize,
    },

    /// A non-zero struct whose set fields are all unexported from a foreign package.
    #[error("non-zero {ty} struct has no printable fields; register an encoder for {ty}")]
    NoEmittableFields {
        /// Offending type.
        ty: String,
    },

    /// A timestamp whose location has no source form.
    #[error("don't know how to represent location {location:?} in source")]
    UnsupportedLocation {
        /// Name of the location.
        location: String,
    },

    /// A typed encoder or comparator found no host value to hand over.
    #[error("value of type {ty} carries no host data for its registered {role}")]
    MissingHost {
        /// Offending type.
        ty: String,
        /// `"encoder"` or `"comparator"`.
        role: &'static str,
    },

    /// Value data that does not fit its type descriptor.
    #[error("value of type {ty} holds {found} data")]
    ReprMismatch {
        /// Declared type.
        ty: String,
        /// What the data actually is.
        found: &'static str,
    },

    /// A custom encoder failed; its error is passed through unchanged.
    #[error(transparent)]
    Encoder(BoxError),

    /// The output sink refused a write.
    #[error("write failed")]
    Write(#[from] fmt::Error),

    /// The output writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl EmitError {
    pub(crate) fn unrepresentable(ty: impl fmt::Display) -> Self {
        Self::Unrepresentable { ty: ty.to_string() }
    }

    pub(crate) fn unnamed(ty: impl fmt::Display) -> Self {
        Self::UnnamedType { ty: ty.to_string() }
    }

    pub(crate) fn mismatch(ty: impl fmt::Display, found: &'static str) -> Self {
        Self::ReprMismatch {
            ty: ty.to_string(),
            found,
        }
    }

    /// Convert a custom encoder's error, unwrapping errors that already are
    /// [`EmitError`]s (as returned by built-in encoders).
    pub(crate) fn from_encoder(err: BoxError) -> Self {
        match err.downcast::<EmitError>() {
            Ok(emit) => *emit,
            Err(other) => Self::Encoder(other),
        }
    }
}
