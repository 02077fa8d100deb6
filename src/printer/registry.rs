//! Import, encoder and comparator registration.

use std::any::Any;
use std::sync::Arc;

use super::Printer;
use crate::codegen::{BoxError, EmitError};
use crate::types::Type;
use crate::value::{Reflect, Value};

/// A registered encoder, erased to work on [`Value`]s.
pub(crate) type Encoder = Arc<dyn Fn(&Value, &Printer) -> Result<String, EmitError> + Send + Sync>;

/// A registered less-than function, erased to work on [`Value`]s.
pub(crate) type Comparator = Arc<dyn Fn(&Value, &Value) -> Result<bool, EmitError> + Send + Sync>;

/// What an encoder may return: source text, or a fallible source text.
pub trait EncoderOutput {
    fn into_source(self) -> Result<String, BoxError>;
}

impl EncoderOutput for String {
    fn into_source(self) -> Result<String, BoxError> {
        Ok(self)
    }
}

impl<E: Into<BoxError>> EncoderOutput for Result<String, E> {
    fn into_source(self) -> Result<String, BoxError> {
        self.map_err(Into::into)
    }
}

fn host_of<'v, T: Any>(value: &'v Value, role: &'static str) -> Result<&'v T, EmitError> {
    value.host::<T>().ok_or_else(|| EmitError::MissingHost {
        ty: value.ty().to_string(),
        role,
    })
}

impl Printer {
    // =========================================================================
    // Imports
    // =========================================================================

    /// Register an import path; its identifier is the last path component.
    ///
    /// ```
    /// use go_literal::Printer;
    ///
    /// let mut printer = Printer::new("example.com/app");
    /// printer.register_import("net/netip");
    /// assert_eq!(printer.package_identifier("net/netip").unwrap(), Some("netip"));
    /// ```
    pub fn register_import(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        let ident = path.rsplit('/').next().unwrap_or(&path).to_string();
        self.register_named_import(path, ident)
    }

    /// Register an import path under an explicit identifier.
    pub fn register_named_import(
        &mut self,
        path: impl Into<String>,
        ident: impl Into<String>,
    ) -> &mut Self {
        let (path, ident) = (path.into(), ident.into());
        tracing::debug!(%path, %ident, "registered import");
        self.imports.insert(path, ident);
        self
    }

    /// The identifier that prefixes names from the package at `path`.
    ///
    /// `None` for the home package, whose names are never qualified.
    pub fn package_identifier(&self, path: &str) -> Result<Option<&str>, EmitError> {
        if path == self.home {
            return Ok(None);
        }
        match self.imports.get(path) {
            Some(ident) => Ok(Some(ident)),
            None => Err(EmitError::UnknownModule {
                path: path.to_string(),
            }),
        }
    }

    /// `name` as seen from the home package: `name` or `ident.name`.
    pub fn qualify(&self, path: &str, name: &str) -> Result<String, EmitError> {
        Ok(match self.package_identifier(path)? {
            Some(ident) => format!("{ident}.{name}"),
            None => name.to_string(),
        })
    }

    // =========================================================================
    // Encoders
    // =========================================================================

    /// Render values of type `T` with `encode` instead of the built-in rules.
    ///
    /// The encoder receives the host value the [`Value`] was reflected from.
    /// Re-registering for the same type replaces the previous encoder.
    ///
    /// ```
    /// use go_literal::{Printer, Reflect};
    ///
    /// let mut printer = Printer::new("m");
    /// printer.register_encoder(|n: &i32| format!("Rune({n})"));
    /// assert_eq!(printer.emit(&7i32.reflect()).unwrap(), "Rune(7)");
    /// ```
    pub fn register_encoder<T, O, F>(&mut self, encode: F) -> &mut Self
    where
        T: Reflect + Any,
        O: EncoderOutput + 'static,
        F: Fn(&T) -> O + Send + Sync + 'static,
    {
        self.register_encoder_with(move |value: &T, _: &Printer| encode(value))
    }

    /// Like [`register_encoder`](Self::register_encoder), with access to the
    /// printer for qualifying names.
    pub fn register_encoder_with<T, O, F>(&mut self, encode: F) -> &mut Self
    where
        T: Reflect + Any,
        O: EncoderOutput + 'static,
        F: Fn(&T, &Printer) -> O + Send + Sync + 'static,
    {
        let encoder: Encoder = Arc::new(move |value: &Value, printer: &Printer| {
            let host = host_of::<T>(value, "encoder")?;
            encode(host, printer).into_source().map_err(EmitError::from_encoder)
        });
        self.insert_encoder(T::reflect_type(), encoder)
    }

    /// Render values whose type equals `ty` with `encode`.
    pub fn register_value_encoder<O, F>(&mut self, ty: Type, encode: F) -> &mut Self
    where
        O: EncoderOutput + 'static,
        F: Fn(&Value, &Printer) -> O + Send + Sync + 'static,
    {
        let encoder: Encoder = Arc::new(move |value: &Value, printer: &Printer| {
            encode(value, printer).into_source().map_err(EmitError::from_encoder)
        });
        self.insert_encoder(ty, encoder)
    }

    fn insert_encoder(&mut self, ty: Type, encoder: Encoder) -> &mut Self {
        tracing::debug!(%ty, "registered encoder");
        self.encoders.insert(ty, encoder);
        self
    }

    // =========================================================================
    // Comparators
    // =========================================================================

    /// Order map keys of type `T` with the less-than function `less`.
    pub fn register_comparator<T, F>(&mut self, less: F) -> &mut Self
    where
        T: Reflect + Any,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let comparator: Comparator = Arc::new(move |a: &Value, b: &Value| {
            Ok(less(host_of::<T>(a, "comparator")?, host_of::<T>(b, "comparator")?))
        });
        self.insert_comparator(T::reflect_type(), comparator)
    }

    /// Order map keys whose type equals `ty` with `less`.
    pub fn register_value_comparator<F>(&mut self, ty: Type, less: F) -> &mut Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        let comparator: Comparator = Arc::new(move |a: &Value, b: &Value| Ok(less(a, b)));
        self.insert_comparator(ty, comparator)
    }

    fn insert_comparator(&mut self, ty: Type, comparator: Comparator) -> &mut Self {
        tracing::debug!(%ty, "registered comparator");
        self.comparators.insert(ty, comparator);
        self
    }
}
