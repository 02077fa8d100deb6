//! The recursive value emitter.
//!
//! Every value is emitted against an *imputed type*: the type the
//! surrounding context will convert an untyped constant to, if any. A
//! literal whose type differs from its constant's default type gets an
//! explicit conversion only when nothing would convert it implicitly:
//!
//! ```text
//! int8(3)                  top level, nothing imputed
//! []int8{3}                element of []int8, imputed int8
//! []interface{}{int8(3)}   interface imputed, conversion needed
//! ```
//!
//! Composite type names are elided inside a composite literal of the same
//! declared element type, and never for struct fields.

use std::fmt;

use super::error::EmitError;
use super::layout::Layout;
use super::literal;
use super::order::order_entries;
use crate::printer::Printer;
use crate::types::{Field, Kind, Type};
use crate::value::{Pointer, Repr, Value};

/// Emission state for one entry-point call.
pub struct Emitter<'p, 'w> {
    printer: &'p Printer,
    layout: Layout<'p>,
    out: &'w mut dyn fmt::Write,
    /// Nesting of `emit` calls, checked against `Config::max_depth`.
    depth: usize,
    /// Indentation of the innermost multi-line list.
    indent: usize,
}

impl<'p, 'w> Emitter<'p, 'w> {
    pub fn new(printer: &'p Printer, out: &'w mut dyn fmt::Write) -> Self {
        Self {
            printer,
            layout: Layout::new(printer.config()),
            out,
            depth: 0,
            indent: 0,
        }
    }

    /// Emit a top-level value: nothing imputed, nothing elided.
    pub fn emit_root(&mut self, value: &Value) -> Result<(), EmitError> {
        self.emit(value, None, false)
    }

    /// Emit `value` where the context converts constants to `imputed`.
    ///
    /// With `elide`, a composite whose type equals `imputed` omits its type name.
    pub fn emit(
        &mut self,
        value: &Value,
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        let max = self.printer.config().max_depth;
        if self.depth > max {
            return Err(EmitError::DepthExceeded { max });
        }
        self.depth += 1;
        let result = self.emit_value(value, imputed, elide);
        self.depth -= 1;
        result
    }

    fn emit_value(
        &mut self,
        value: &Value,
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        if !value.is_valid() {
            return Ok(self.out.write_str("nil")?);
        }
        if let Some(encode) = self.printer.encoder(value.ty()) {
            tracing::trace!(ty = %value.ty(), "using registered encoder");
            let src = encode(value, self.printer)?;
            return Ok(self.out.write_str(&src)?);
        }

        let ty = value.ty();
        let kind = ty.kind();
        if kind.is_unrepresentable() {
            return Err(EmitError::unrepresentable(ty));
        }
        match value.repr() {
            Repr::Bool(b) if kind == Kind::Bool => {
                self.emit_constant(ty, b.to_string(), imputed)
            }
            Repr::Str(s) if kind == Kind::String => {
                self.emit_constant(ty, literal::quote(s), imputed)
            }
            Repr::Int(i) if kind.is_signed() => {
                self.emit_constant(ty, literal::format_int(*i), imputed)
            }
            Repr::Uint(u) if kind.is_unsigned() => {
                self.emit_constant(ty, literal::format_uint(*u), imputed)
            }
            Repr::Float(f) if kind.is_float() => self.emit_float(ty, *f, imputed),
            Repr::Complex(re, im) if kind.is_complex() => {
                self.emit_complex(ty, *re, *im, imputed)
            }
            Repr::Ptr(cell) if kind == Kind::Ptr => {
                self.emit_pointer(ty, cell.as_ref(), imputed, elide)
            }
            Repr::Interface(inner) if kind == Kind::Interface => match inner {
                Some(inner) => self.emit(inner, imputed, elide),
                None => Ok(self.out.write_str("nil")?),
            },
            Repr::Slice(items) if kind == Kind::Slice => match items {
                Some(items) => self.emit_seq(value, items, imputed, elide),
                None => self.emit_nil(ty, imputed),
            },
            Repr::Array(items) if kind == Kind::Array => {
                self.emit_seq(value, items, imputed, elide)
            }
            Repr::Map(entries) if kind == Kind::Map => match entries {
                Some(entries) => self.emit_map(value, entries, imputed, elide),
                None => self.emit_nil(ty, imputed),
            },
            Repr::Struct(fields) if kind == Kind::Struct => {
                self.emit_struct(value, fields, imputed, elide)
            }
            other => Err(EmitError::mismatch(ty, other.describe())),
        }
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// Whether a constant of type `ty` needs an explicit `T(...)` conversion.
    fn needs_conversion(ty: &Type, imputed: Option<&Type>) -> bool {
        !ty.is_default_for_kind() && imputed.is_none_or(|t| t.kind() == Kind::Interface)
    }

    fn emit_constant(
        &mut self,
        ty: &Type,
        lit: String,
        imputed: Option<&Type>,
    ) -> Result<(), EmitError> {
        if Self::needs_conversion(ty, imputed) {
            let name = self.printer.type_name(ty)?;
            write!(self.out, "{name}({lit})")?;
        } else {
            self.out.write_str(&lit)?;
        }
        Ok(())
    }

    /// Wrap a non-constant expression in `T(...)` unless `ty` is `default`.
    fn emit_converted(&mut self, ty: &Type, default: &Type, expr: &str) -> Result<(), EmitError> {
        if ty == default {
            self.out.write_str(expr)?;
        } else {
            let name = self.printer.type_name(ty)?;
            write!(self.out, "{name}({expr})")?;
        }
        Ok(())
    }

    fn emit_float(&mut self, ty: &Type, f: f64, imputed: Option<&Type>) -> Result<(), EmitError> {
        if let Some(call) = literal::special_float(f) {
            let expr = self.printer.qualify("math", call)?;
            return self.emit_converted(ty, &Type::float64(), &expr);
        }
        let lit = literal::format_float(f, float_bits(ty));
        let lit = if ty.kind() == Kind::Float64 {
            literal::force_fraction(lit)
        } else {
            lit
        };
        self.emit_constant(ty, lit, imputed)
    }

    fn emit_complex(
        &mut self,
        ty: &Type,
        re: f64,
        im: f64,
        imputed: Option<&Type>,
    ) -> Result<(), EmitError> {
        let bits = float_bits(ty);
        if literal::special_float(re).is_none() && literal::special_float(im).is_none() {
            return self.emit_constant(ty, literal::format_complex(re, im, bits), imputed);
        }
        let part = |f: f64| match literal::special_float(f) {
            Some(call) => self.printer.qualify("math", call),
            None => Ok(literal::format_float(f, bits)),
        };
        let expr = format!("complex({}, {})", part(re)?, part(im)?);
        self.emit_converted(ty, &Type::complex128(), &expr)
    }

    // =========================================================================
    // Pointers and nil
    // =========================================================================

    /// `nil`, `T(nil)` or `(*T)(nil)`, depending on what the context expects.
    fn emit_nil(&mut self, ty: &Type, imputed: Option<&Type>) -> Result<(), EmitError> {
        if imputed == Some(ty) {
            self.out.write_str("nil")?;
            return Ok(());
        }
        let name = self.printer.type_name(ty)?;
        if name.starts_with('*') {
            write!(self.out, "({name})(nil)")?;
        } else {
            write!(self.out, "{name}(nil)")?;
        }
        Ok(())
    }

    fn emit_pointer(
        &mut self,
        ty: &Type,
        cell: Option<&Pointer>,
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        let Some(cell) = cell else {
            return self.emit_nil(ty, imputed);
        };
        let target = cell.get();
        if target.kind().is_primitive() || self.printer.encoder(target.ty()).is_some() {
            // Go has no address-of for constants or call results.
            let name = self.printer.type_name(target.ty())?;
            write!(self.out, "func() *{name} {{ var x {name} = ")?;
            self.emit(&target, Some(target.ty()), false)?;
            self.out.write_str("; return &x }()")?;
            Ok(())
        } else if elide && imputed == Some(ty) {
            self.emit(&target, ty.elem(), true)
        } else {
            self.out.write_char('&')?;
            self.emit(&target, None, false)
        }
    }

    // =========================================================================
    // Composites
    // =========================================================================

    /// Write the type name of a composite literal unless the context elides it.
    fn emit_type_prefix(
        &mut self,
        ty: &Type,
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        if !(elide && imputed == Some(ty)) {
            let name = self.printer.type_name(ty)?;
            self.out.write_str(&name)?;
        }
        Ok(())
    }

    fn emit_seq(
        &mut self,
        value: &Value,
        items: &[Value],
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        let ty = value.ty();
        self.emit_type_prefix(ty, imputed, elide)?;
        let multiline = !self.layout.is_simple(value);
        let elem = ty.elem();
        self.emit_list(multiline, items, |this, item| this.emit(item, elem, true))
    }

    fn emit_map(
        &mut self,
        value: &Value,
        entries: &[(Value, Value)],
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        let ty = value.ty();
        self.emit_type_prefix(ty, imputed, elide)?;
        let (key_ty, elem_ty) = (ty.key(), ty.elem());
        let ordered = match key_ty {
            Some(key_ty) => order_entries(self.printer, key_ty, entries)?,
            None => entries.iter().map(|(k, v)| (k, v)).collect(),
        };
        let multiline = !self.layout.is_simple(value);
        self.emit_list(multiline, ordered, |this, (key, elem)| {
            this.emit(key, key_ty, true)?;
            this.out.write_str(": ")?;
            this.emit(elem, elem_ty, true)
        })
    }

    fn emit_struct(
        &mut self,
        value: &Value,
        fields: &[Value],
        imputed: Option<&Type>,
        elide: bool,
    ) -> Result<(), EmitError> {
        let ty = value.ty();
        let declared = ty.fields();
        if declared.len() != fields.len() {
            return Err(EmitError::mismatch(ty, "a different number of struct fields"));
        }
        let home = ty.module() == self.printer.home();
        let emitted: Vec<(&Field, &Value)> = declared
            .iter()
            .zip(fields)
            .filter(|(field, v)| (home || field.is_exported()) && !v.is_zero())
            .collect();
        if emitted.is_empty() && !value.is_zero() {
            return Err(EmitError::NoEmittableFields { ty: ty.to_string() });
        }
        let multiline = !self
            .layout
            .is_struct_one_line(emitted.iter().map(|(field, _)| field.ty()));

        self.emit_type_prefix(ty, imputed, elide)?;
        self.emit_list(multiline, emitted, |this, (field, v)| {
            write!(this.out, "{}: ", field.name())?;
            this.emit(v, Some(field.ty()), false)
        })
    }

    /// `{a, b}` or one entry per line, each followed by a comma.
    fn emit_list<T>(
        &mut self,
        multiline: bool,
        items: impl IntoIterator<Item = T>,
        mut each: impl FnMut(&mut Self, T) -> Result<(), EmitError>,
    ) -> Result<(), EmitError> {
        self.out.write_char('{')?;
        if multiline {
            self.indent += 1;
            for item in items {
                self.newline()?;
                each(self, item)?;
                self.out.write_char(',')?;
            }
            self.indent -= 1;
            self.newline()?;
        } else {
            for (i, item) in items.into_iter().enumerate() {
                if i > 0 {
                    self.out.write_str(", ")?;
                }
                each(self, item)?;
            }
        }
        self.out.write_char('}')?;
        Ok(())
    }

    fn newline(&mut self) -> fmt::Result {
        let printer = self.printer;
        let unit = &printer.config().indent;
        self.out.write_char('\n')?;
        for _ in 0..self.indent {
            self.out.write_str(unit)?;
        }
        Ok(())
    }
}

/// Precision of the shortest float formatting for values of `ty`.
fn float_bits(ty: &Type) -> u32 {
    match ty.kind() {
        Kind::Float32 | Kind::Complex64 => 32,
        _ => 64,
    }
}
