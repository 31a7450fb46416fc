use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::Field;
use syn::ext::IdentExt;

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

/// A named field of a derived struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The reflection-based attributes on the field.
    pub attrs: FieldAttributes,
    /// The name the field is reflected under.
    pub name: String,
}

pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

// -----------------------------------------------------------------------------
// StructField Implementation

impl<'a> StructField<'a> {
    pub fn new(data: &'a Field) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
        let name = match (&attrs.rename, &data.ident) {
            (Some(rename), _) => rename.value(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => {
                return Err(syn::Error::new_spanned(data, "expected a named field"));
            }
        };

        Ok(Self { data, attrs, name })
    }

    /// Tokens of `self.field`.
    pub fn access_tokens(&self) -> TokenStream {
        let member = &self.data.ident;
        quote!(self.#member)
    }
}

// -----------------------------------------------------------------------------
// Struct Implementation

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let value = Self { meta, fields };

        let mut seen: Vec<&StructField> = Vec::new();
        for field in value.active_fields() {
            if let Some(first) = seen.iter().find(|other| other.name == field.name) {
                let mut err = syn::Error::new_spanned(
                    field.data,
                    format!("field name `{}` is already in use", field.name),
                );
                err.combine(syn::Error::new_spanned(first.data, "first used here"));
                return Err(err);
            }
            seen.push(field);
        }

        Ok(value)
    }

    /// Access the metadata associated with this struct definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Get an iterator of fields which are exposed to the reflection API.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Generates a `TokenStream` for `TypeInfo::Struct` construction.
    pub fn to_info_tokens(&self) -> TokenStream {
        let sw_reflect_path = self.meta.sw_reflect_path();
        let type_info_ = crate::path::type_info_(sw_reflect_path);
        let struct_info_ = crate::path::struct_info_(sw_reflect_path);
        let named_field_ = crate::path::named_field_(sw_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = Literal::string(&field.name);
            quote!(#named_field_::new::<#ty>(#name))
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[
                #(#fields),*
            ]))
        }
    }
}
