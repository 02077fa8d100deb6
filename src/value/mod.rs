//! Value descriptors.
//!
//! A [`Value`] pairs a [`Type`] with its concrete data ([`Repr`]) and,
//! optionally, the host Rust value it was reflected from. Host payloads let
//! typed encoders and comparators recover `&T` from a `Value`.
//!
//! # Layout
//!
//! ```text
//! Value
//! ├── ty: Type                      static Go type
//! ├── repr: Repr                    data, shaped by ty.kind()
//! └── host: Option<Arc<dyn Any>>    reflected Rust value (scalars, timestamps)
//! ```

mod complex;
#[cfg(feature = "json")]
mod json;
mod pointer;
mod reflect;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub use complex::{Complex64, Complex128};
pub use pointer::Pointer;
pub use reflect::Reflect;

use crate::types::{Kind, Type};

/// Concrete data of a [`Value`].
///
/// Signed integers of every width are stored as `i64`, unsigned ones as
/// `u64`, floats as `f64` (exact for `float32` values). Nil-able kinds use
/// `None` for nil.
#[derive(Clone, Debug)]
pub enum Repr {
    /// No value at all (untyped `nil`).
    Invalid,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(f64, f64),
    Str(String),
    Ptr(Option<Pointer>),
    Interface(Option<Box<Value>>),
    Slice(Option<Vec<Value>>),
    Array(Vec<Value>),
    Map(Option<Vec<(Value, Value)>>),
    /// Field values in declaration order.
    Struct(Vec<Value>),
    /// Function, channel or unsafe pointer.
    Opaque { nil: bool },
}

impl Repr {
    /// Short name of the variant, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Repr::Invalid => "invalid",
            Repr::Bool(_) => "bool",
            Repr::Int(_) => "signed integer",
            Repr::Uint(_) => "unsigned integer",
            Repr::Float(_) => "float",
            Repr::Complex(..) => "complex",
            Repr::Str(_) => "string",
            Repr::Ptr(_) => "pointer",
            Repr::Interface(_) => "interface",
            Repr::Slice(_) => "slice",
            Repr::Array(_) => "array",
            Repr::Map(_) => "map",
            Repr::Struct(_) => "struct",
            Repr::Opaque { .. } => "opaque",
        }
    }
}

/// A typed value to be emitted as Go source.
#[derive(Clone)]
pub struct Value {
    ty: Type,
    repr: Repr,
    host: Option<Arc<dyn Any + Send + Sync>>,
}

impl Value {
    /// Create a value from a descriptor and its data.
    ///
    /// The pairing is not validated here; the emitter rejects data that does
    /// not fit the descriptor's kind.
    pub fn new(ty: Type, repr: Repr) -> Self {
        Self {
            ty,
            repr,
            host: None,
        }
    }

    /// The absent value, rendered as `nil`.
    pub fn nil() -> Self {
        Self::new(Type::invalid(), Repr::Invalid)
    }

    /// Reflect a host value.
    pub fn of<T: Reflect>(value: &T) -> Self {
        value.reflect()
    }

    /// Attach the host value this value was reflected from.
    pub fn with_host<T: Any + Send + Sync>(mut self, host: T) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// A `bool` value.
    pub fn bool(b: bool) -> Self {
        b.reflect()
    }

    /// An `int` value. Its host is an `isize`, as if reflected from one.
    pub fn int(i: i64) -> Self {
        Self::new(Type::int(), Repr::Int(i)).with_host(i as isize)
    }

    /// A `float64` value.
    pub fn float(f: f64) -> Self {
        f.reflect()
    }

    /// A `string` value.
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        Self::new(Type::string(), Repr::Str(s.clone())).with_host(s)
    }

    /// A non-nil pointer of type `*elem`, pointing at a fresh cell holding `target`.
    pub fn pointer_to(target: Value) -> Self {
        let ty = Type::pointer(target.ty.clone());
        Self::new(ty, Repr::Ptr(Some(Pointer::new(target))))
    }

    /// A pointer of type `ty` (which must be a pointer type) sharing `cell`.
    pub fn from_pointer(ty: Type, cell: Pointer) -> Self {
        Self::new(ty, Repr::Ptr(Some(cell)))
    }

    /// A nil value of a nil-able type (pointer, slice, map, interface).
    pub fn nil_of(ty: Type) -> Self {
        let repr = match ty.kind() {
            Kind::Ptr => Repr::Ptr(None),
            Kind::Slice => Repr::Slice(None),
            Kind::Map => Repr::Map(None),
            Kind::Interface => Repr::Interface(None),
            Kind::Func | Kind::Chan | Kind::UnsafePointer => Repr::Opaque { nil: true },
            _ => Repr::Invalid,
        };
        Self::new(ty, repr)
    }

    /// An `interface{}` value holding `inner`.
    pub fn dynamic(inner: Value) -> Self {
        Self::new(Type::interface(), Repr::Interface(Some(Box::new(inner))))
    }

    /// A slice value of type `ty` (a slice type).
    pub fn slice(ty: Type, items: Vec<Value>) -> Self {
        Self::new(ty, Repr::Slice(Some(items)))
    }

    /// An array value of type `ty` (an array type).
    pub fn array(ty: Type, items: Vec<Value>) -> Self {
        Self::new(ty, Repr::Array(items))
    }

    /// A map value of type `ty` (a map type). Entry order is kept for key
    /// types that cannot be sorted.
    pub fn map(ty: Type, entries: Vec<(Value, Value)>) -> Self {
        Self::new(ty, Repr::Map(Some(entries)))
    }

    /// A struct value of type `ty` with field values in declaration order.
    pub fn structure(ty: Type, fields: Vec<Value>) -> Self {
        Self::new(ty, Repr::Struct(fields))
    }

    /// The same data viewed as a different type of the same kind,
    /// e.g. a `bool` re-typed as a named `Bool`.
    pub fn retyped(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn repr(&self) -> &Repr {
        &self.repr
    }

    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }

    /// The attached host value, if it has type `T`.
    pub fn host<T: Any>(&self) -> Option<&T> {
        self.host.as_deref()?.downcast_ref::<T>()
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self.repr, Repr::Invalid)
    }

    /// Whether this is a nil pointer, slice, map, interface, func or chan.
    pub fn is_nil(&self) -> bool {
        matches!(
            self.repr,
            Repr::Ptr(None)
                | Repr::Interface(None)
                | Repr::Slice(None)
                | Repr::Map(None)
                | Repr::Opaque { nil: true }
        )
    }

    /// Whether this is the zero value of its type.
    ///
    /// Floats compare by bit pattern, so `-0.0` is not zero.
    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Invalid => true,
            Repr::Bool(b) => !b,
            Repr::Int(i) => *i == 0,
            Repr::Uint(u) => *u == 0,
            Repr::Float(f) => f.to_bits() == 0,
            Repr::Complex(re, im) => re.to_bits() == 0 && im.to_bits() == 0,
            Repr::Str(s) => s.is_empty(),
            Repr::Array(items) | Repr::Struct(items) => items.iter().all(Value::is_zero),
            _ => self.is_nil(),
        }
    }

    /// Number of elements of a slice, array or map, or bytes of a string;
    /// zero otherwise.
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Slice(Some(items)) | Repr::Array(items) => items.len(),
            Repr::Map(Some(entries)) => entries.len(),
            Repr::Str(s) => s.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("ty", &self.ty)
            .field("repr", &self.repr)
            .finish_non_exhaustive()
    }
}
