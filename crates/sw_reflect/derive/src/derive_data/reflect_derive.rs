use syn::{Data, DeriveInput, Fields};

use super::{ReflectMeta, ReflectStruct, StructField, TypeAttributes};

/// The shape a derived type is reflected as.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }` and `struct T;`.
    Struct(ReflectStruct<'a>),
    /// `struct T(...);`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "enums cannot be reflected, only structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "unions cannot be reflected, only structs",
                ));
            }
        };

        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics)?;

        match &data.fields {
            Fields::Named(fields) => {
                let fields = fields
                    .named
                    .iter()
                    .map(StructField::new)
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Self::Struct(ReflectStruct::new(meta, fields)?))
            }
            Fields::Unit => Ok(Self::Struct(ReflectStruct::new(meta, Vec::new())?)),
            Fields::Unnamed(_) => Ok(Self::Opaque(meta)),
        }
    }
}
