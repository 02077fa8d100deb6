//! The `Reflect` capability and its implementations for std types.
//!
//! | Rust | Go |
//! |---|---|
//! | `bool`, `String`, `&str` | `bool`, `string` |
//! | `i8`..`i64`, `isize` | `int8`..`int64`, `int` |
//! | `u8`..`u64`, `usize` | `uint8`..`uint64`, `uint` |
//! | `char` | `int32` (rune) |
//! | `f32`, `f64` | `float32`, `float64` |
//! | `Complex64`, `Complex128` | `complex64`, `complex128` |
//! | `Vec<T>` / `Option<Vec<T>>` | `[]T` (nil when `None`) |
//! | `[T; N]` | `[N]T` |
//! | `Box<T>` / `Option<Box<T>>` | `*T` (nil when `None`) |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` (and `Option` of them) | `map[K]V` |
//!
//! Scalars attach themselves as host payload; containers do not.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{Complex64, Complex128, Repr, Value};
use crate::types::{Kind, Type};

/// Describe a host value as a Go [`Value`].
///
/// # Example
///
/// ```
/// use go_literal::{Field, Reflect, Type, Value};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Reflect for Point {
///     fn reflect_type() -> Type {
///         Type::structure(
///             "github.com/acme/geo",
///             "Point",
///             vec![Field::new("X", Type::int()), Field::new("Y", Type::int())],
///         )
///     }
///
///     fn reflect(&self) -> Value {
///         Value::structure(Self::reflect_type(), vec![Value::int(self.x), Value::int(self.y)])
///     }
/// }
/// ```
pub trait Reflect {
    /// The static Go type of values of `Self`.
    fn reflect_type() -> Type
    where
        Self: Sized;

    /// Describe `self`.
    fn reflect(&self) -> Value;
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! reflect_scalar {
    ($($ty:ty => $kind:ident, $variant:ident as $store:ty;)*) => {
        $(
            impl Reflect for $ty {
                fn reflect_type() -> Type {
                    Type::basic(Kind::$kind)
                }

                fn reflect(&self) -> Value {
                    Value::new(Self::reflect_type(), Repr::$variant(*self as $store)).with_host(*self)
                }
            }
        )*
    };
}

reflect_scalar! {
    i8 => Int8, Int as i64;
    i16 => Int16, Int as i64;
    i32 => Int32, Int as i64;
    i64 => Int64, Int as i64;
    isize => Int, Int as i64;
    u8 => Uint8, Uint as u64;
    u16 => Uint16, Uint as u64;
    u32 => Uint32, Uint as u64;
    u64 => Uint64, Uint as u64;
    usize => Uint, Uint as u64;
    f32 => Float32, Float as f64;
    f64 => Float64, Float as f64;
}

impl Reflect for bool {
    fn reflect_type() -> Type {
        Type::bool()
    }

    fn reflect(&self) -> Value {
        Value::new(Self::reflect_type(), Repr::Bool(*self)).with_host(*self)
    }
}

impl Reflect for char {
    fn reflect_type() -> Type {
        Type::basic(Kind::Int32)
    }

    fn reflect(&self) -> Value {
        Value::new(Self::reflect_type(), Repr::Int(*self as i64)).with_host(*self)
    }
}

impl Reflect for String {
    fn reflect_type() -> Type {
        Type::string()
    }

    fn reflect(&self) -> Value {
        Value::string(self.clone())
    }
}

impl Reflect for &str {
    fn reflect_type() -> Type {
        Type::string()
    }

    fn reflect(&self) -> Value {
        Value::string(*self)
    }
}

impl Reflect for Complex128 {
    fn reflect_type() -> Type {
        Type::complex128()
    }

    fn reflect(&self) -> Value {
        Value::new(Self::reflect_type(), Repr::Complex(self.re, self.im)).with_host(*self)
    }
}

impl Reflect for Complex64 {
    fn reflect_type() -> Type {
        Type::basic(Kind::Complex64)
    }

    fn reflect(&self) -> Value {
        let repr = Repr::Complex(f64::from(self.re), f64::from(self.im));
        Value::new(Self::reflect_type(), repr).with_host(*self)
    }
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

impl<T: Reflect> Reflect for Box<T> {
    fn reflect_type() -> Type {
        Type::pointer(T::reflect_type())
    }

    fn reflect(&self) -> Value {
        Value::from_pointer(Self::reflect_type(), super::Pointer::new(self.as_ref().reflect()))
    }
}

impl<T: Reflect> Reflect for Option<Box<T>> {
    fn reflect_type() -> Type {
        Type::pointer(T::reflect_type())
    }

    fn reflect(&self) -> Value {
        match self {
            Some(target) => target.reflect(),
            None => Value::nil_of(Self::reflect_type()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect_type() -> Type {
        Type::slice(T::reflect_type())
    }

    fn reflect(&self) -> Value {
        Value::slice(Self::reflect_type(), self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect> Reflect for Option<Vec<T>> {
    fn reflect_type() -> Type {
        Type::slice(T::reflect_type())
    }

    fn reflect(&self) -> Value {
        match self {
            Some(items) => items.reflect(),
            None => Value::nil_of(Self::reflect_type()),
        }
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect_type() -> Type {
        Type::array(T::reflect_type(), N)
    }

    fn reflect(&self) -> Value {
        Value::array(Self::reflect_type(), self.iter().map(Reflect::reflect).collect())
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn reflect_type() -> Type {
        Type::map(K::reflect_type(), V::reflect_type())
    }

    fn reflect(&self) -> Value {
        let entries = self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect();
        Value::map(Self::reflect_type(), entries)
    }
}

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for Option<HashMap<K, V, S>> {
    fn reflect_type() -> Type {
        Type::map(K::reflect_type(), V::reflect_type())
    }

    fn reflect(&self) -> Value {
        match self {
            Some(map) => map.reflect(),
            None => Value::nil_of(Self::reflect_type()),
        }
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect_type() -> Type {
        Type::map(K::reflect_type(), V::reflect_type())
    }

    fn reflect(&self) -> Value {
        let entries = self.iter().map(|(k, v)| (k.reflect(), v.reflect())).collect();
        Value::map(Self::reflect_type(), entries)
    }
}

impl<K: Reflect, V: Reflect> Reflect for Option<BTreeMap<K, V>> {
    fn reflect_type() -> Type {
        Type::map(K::reflect_type(), V::reflect_type())
    }

    fn reflect(&self) -> Value {
        match self {
            Some(map) => map.reflect(),
            None => Value::nil_of(Self::reflect_type()),
        }
    }
}
