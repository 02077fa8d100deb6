//! Type descriptors.
//!
//! A [`Type`] describes the static Go type a [`Value`](crate::Value) will be
//! rendered as. Descriptors are cheap to clone (an `Arc` handle) and immutable
//! once their fields are defined.
//!
//! # Identity
//!
//! ```text
//! named type    → identical iff kind, module and name match
//! unnamed type  → identical iff kind and component types match
//! ```
//!
//! Only named struct types may be declared before their fields are known
//! (see [`Type::declare_struct`]), which is how self-referential types such as
//! `type node struct { next *node }` are described.

mod kind;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

pub use kind::Kind;

/// A Go type descriptor.
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

struct TypeInfo {
    kind: Kind,
    /// Import path of the defining package; empty for predeclared and unnamed types.
    module: String,
    /// Type name; empty for unnamed (structural) types.
    name: String,
    elem: Option<Type>,
    key: Option<Type>,
    len: usize,
    fields: OnceLock<Vec<Field>>,
}

/// A struct field descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    ty: Type,
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Whether the field can be set from outside its defining package.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

impl Type {
    fn from_info(info: TypeInfo) -> Self {
        Self(Arc::new(info))
    }

    fn structural(kind: Kind, elem: Option<Type>, key: Option<Type>, len: usize) -> Self {
        Self::from_info(TypeInfo {
            kind,
            module: String::new(),
            name: String::new(),
            elem,
            key,
            len,
            fields: OnceLock::new(),
        })
    }

    // =========================================================================
    // Predeclared types
    // =========================================================================

    /// A predeclared basic type (`int`, `float32`, `string`, ...).
    ///
    /// Non-basic kinds produce their unnamed form with no components, which
    /// is only meaningful for [`Kind::UnsafePointer`] and [`Kind::Invalid`].
    pub fn basic(kind: Kind) -> Self {
        let name = kind.basic_name().unwrap_or_default();
        Self::from_info(TypeInfo {
            kind,
            module: String::new(),
            name: name.to_string(),
            elem: None,
            key: None,
            len: 0,
            fields: OnceLock::new(),
        })
    }

    /// `bool`
    pub fn bool() -> Self {
        Self::basic(Kind::Bool)
    }

    /// `int`
    pub fn int() -> Self {
        Self::basic(Kind::Int)
    }

    /// `uint`
    pub fn uint() -> Self {
        Self::basic(Kind::Uint)
    }

    /// `float64`
    pub fn float64() -> Self {
        Self::basic(Kind::Float64)
    }

    /// `complex128`
    pub fn complex128() -> Self {
        Self::basic(Kind::Complex128)
    }

    /// `string`
    pub fn string() -> Self {
        Self::basic(Kind::String)
    }

    /// The descriptor of an absent value (untyped `nil`).
    pub fn invalid() -> Self {
        Self::basic(Kind::Invalid)
    }

    // =========================================================================
    // Structural types
    // =========================================================================

    /// `*elem`
    pub fn pointer(elem: Type) -> Self {
        Self::structural(Kind::Ptr, Some(elem), None, 0)
    }

    /// `[]elem`
    pub fn slice(elem: Type) -> Self {
        Self::structural(Kind::Slice, Some(elem), None, 0)
    }

    /// `[len]elem`
    pub fn array(elem: Type, len: usize) -> Self {
        Self::structural(Kind::Array, Some(elem), None, len)
    }

    /// `map[key]elem`
    pub fn map(key: Type, elem: Type) -> Self {
        Self::structural(Kind::Map, Some(elem), Some(key), 0)
    }

    /// The empty interface, `interface{}`.
    pub fn interface() -> Self {
        Self::structural(Kind::Interface, None, None, 0)
    }

    /// An unnamed function type. Values of it can never be emitted.
    pub fn func() -> Self {
        Self::structural(Kind::Func, None, None, 0)
    }

    /// `chan elem`. Values of it can never be emitted.
    pub fn chan(elem: Type) -> Self {
        Self::structural(Kind::Chan, Some(elem), None, 0)
    }

    /// A struct type with no name, such as `struct{ X int }` declared inline.
    pub fn anonymous_struct(fields: Vec<Field>) -> Self {
        let ty = Self::structural(Kind::Struct, None, None, 0);
        ty.define_fields(fields);
        ty
    }

    // =========================================================================
    // Named types
    // =========================================================================

    /// Define a named type `module.name` with the given underlying type.
    ///
    /// `Type::named("net", "Flags", &Type::uint())` describes `net.Flags`.
    /// An empty `module` declares a predeclared-style name such as `error`.
    pub fn named(module: impl Into<String>, name: impl Into<String>, underlying: &Type) -> Self {
        let src = &underlying.0;
        let fields = OnceLock::new();
        if let Some(defined) = src.fields.get() {
            let _ = fields.set(defined.clone());
        }
        Self::from_info(TypeInfo {
            kind: src.kind,
            module: module.into(),
            name: name.into(),
            elem: src.elem.clone(),
            key: src.key.clone(),
            len: src.len,
            fields,
        })
    }

    /// Define a named struct type with its fields.
    pub fn structure(module: impl Into<String>, name: impl Into<String>, fields: Vec<Field>) -> Self {
        let ty = Self::declare_struct(module, name);
        ty.define_fields(fields);
        ty
    }

    /// Declare a named struct type whose fields are supplied later with
    /// [`define_fields`](Self::define_fields).
    pub fn declare_struct(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_info(TypeInfo {
            kind: Kind::Struct,
            module: module.into(),
            name: name.into(),
            elem: None,
            key: None,
            len: 0,
            fields: OnceLock::new(),
        })
    }

    /// Define the fields of a declared struct type.
    ///
    /// Returns `false` (leaving the type unchanged) if the fields were
    /// already defined.
    pub fn define_fields(&self, fields: Vec<Field>) -> bool {
        self.0.fields.set(fields).is_ok()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Structural kind.
    pub fn kind(&self) -> Kind {
        self.0.kind
    }

    /// Type name; empty for unnamed types.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Import path of the defining package; empty for predeclared and unnamed types.
    pub fn module(&self) -> &str {
        &self.0.module
    }

    /// Whether the type has a name.
    pub fn is_named(&self) -> bool {
        !self.0.name.is_empty()
    }

    /// Element type of a pointer, slice, array, map or channel.
    pub fn elem(&self) -> Option<&Type> {
        self.0.elem.as_ref()
    }

    /// Key type of a map.
    pub fn key(&self) -> Option<&Type> {
        self.0.key.as_ref()
    }

    /// Length of an array type.
    pub fn len(&self) -> usize {
        self.0.len
    }

    /// Struct fields, empty until defined.
    pub fn fields(&self) -> &[Field] {
        self.0.fields.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// The type an untyped constant of this kind defaults to.
    ///
    /// Returns `None` for non-primitive kinds. Unsigned integers default to
    /// `int`, since a printed literal behaves like any other integer constant.
    pub fn default_for(kind: Kind) -> Option<Type> {
        match kind {
            Kind::Bool => Some(Type::bool()),
            Kind::String => Some(Type::string()),
            k if k.is_integer() => Some(Type::int()),
            Kind::Float32 | Kind::Float64 => Some(Type::float64()),
            Kind::Complex64 | Kind::Complex128 => Some(Type::complex128()),
            _ => None,
        }
    }

    /// Whether this is exactly the default type of constants of its kind.
    pub fn is_default_for_kind(&self) -> bool {
        Type::default_for(self.kind()).is_some_and(|d| &d == self)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        let (a, b) = (&self.0, &other.0);
        if a.kind != b.kind || a.name != b.name || a.module != b.module {
            return false;
        }
        if !a.name.is_empty() {
            return true;
        }
        a.len == b.len && a.elem == b.elem && a.key == b.key && self.fields() == other.fields()
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let info = &self.0;
        info.kind.hash(state);
        info.module.hash(state);
        info.name.hash(state);
        if info.name.is_empty() {
            info.len.hash(state);
            info.elem.hash(state);
            info.key.hash(state);
            // Fields are covered by equality; hashing their count keeps this cheap.
            self.fields().len().hash(state);
        }
    }
}

/// Go-style rendering for diagnostics: package name (last path component)
/// plus type name, or the structural form.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_named() {
            return match self.module().rsplit('/').next() {
                Some(pkg) if !pkg.is_empty() => write!(f, "{pkg}.{}", self.name()),
                _ => f.write_str(self.name()),
            };
        }
        let elem = self.elem().cloned().unwrap_or_else(Type::invalid);
        match self.kind() {
            Kind::Ptr => write!(f, "*{elem}"),
            Kind::Slice => write!(f, "[]{elem}"),
            Kind::Array => write!(f, "[{}]{elem}", self.len()),
            Kind::Map => {
                let key = self.key().cloned().unwrap_or_else(Type::invalid);
                write!(f, "map[{key}]{elem}")
            }
            Kind::Chan => write!(f, "chan {elem}"),
            Kind::Func => f.write_str("func()"),
            Kind::Interface => f.write_str("interface {}"),
            Kind::Struct => {
                f.write_str("struct {")?;
                for (i, field) in self.fields().iter().enumerate() {
                    let sep = if i == 0 { " " } else { "; " };
                    write!(f, "{sep}{} {}", field.name(), field.ty())?;
                }
                f.write_str(" }")
            }
            Kind::UnsafePointer => f.write_str("unsafe.Pointer"),
            _ => f.write_str("<invalid>"),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}
