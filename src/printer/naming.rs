//! Go spelling of type descriptors, qualified from the home package.

use super::Printer;
use crate::codegen::EmitError;
use crate::types::{Kind, Type};

impl Printer {
    /// The name of `ty` as it must appear in source in the home package.
    ///
    /// Named types render as `Name` or `ident.Name`; unnamed pointer, slice,
    /// array, map and interface types are spelled out structurally.
    /// Anonymous structs and unnamed func/chan types have no usable name.
    pub fn type_name(&self, ty: &Type) -> Result<String, EmitError> {
        if ty.is_named() {
            if ty.module().is_empty() {
                return Ok(ty.name().to_string());
            }
            return self.qualify(ty.module(), ty.name());
        }
        let elem = |ty: &Type| match ty.elem() {
            Some(elem) => self.type_name(elem),
            None => Err(EmitError::unnamed(ty)),
        };
        match ty.kind() {
            Kind::Ptr => Ok(format!("*{}", elem(ty)?)),
            Kind::Slice => Ok(format!("[]{}", elem(ty)?)),
            Kind::Array => Ok(format!("[{}]{}", ty.len(), elem(ty)?)),
            Kind::Map => {
                let key = ty.key().ok_or_else(|| EmitError::unnamed(ty))?;
                Ok(format!("map[{}]{}", self.type_name(key)?, elem(ty)?))
            }
            Kind::Interface => Ok("interface{}".to_string()),
            _ => Err(EmitError::unnamed(ty)),
        }
    }
}
