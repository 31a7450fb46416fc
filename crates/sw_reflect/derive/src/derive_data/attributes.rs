//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(value);
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level attributes.
///
/// - `getters`: `reflect_getters` returns the type's `Getters` impl.
/// - `type_path = "..."`: overrides the base of the type path.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub getters: Option<Span>,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("getters") {
                    set_once(&mut result.getters, meta.path.span(), &meta)
                } else if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "type path cannot be empty"));
                    }
                    set_once(&mut result.type_path, lit, &meta)
                } else {
                    Err(meta.error("unknown type attribute, expected `getters` or `type_path`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field and method level attributes.
///
/// - `rename = "..."`: reflect under a different name.
/// - `skip`: hide from reflection.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() || lit.value().contains('.') {
                        return Err(syn::Error::new(
                            lit.span(),
                            "a reflected name must be non-empty and cannot contain `.`",
                        ));
                    }
                    set_once(&mut result.rename, lit, &meta)
                } else if meta.path.is_ident("skip") {
                    set_once(&mut result.skip, meta.path.span(), &meta)
                } else {
                    Err(meta.error("unknown attribute, expected `rename` or `skip`"))
                }
            })?;
        }

        Ok(result)
    }

    /// Returns `true` for attributes this macro consumes.
    #[inline]
    pub fn is_reflect_attr(attr: &Attribute) -> bool {
        attr.path().is_ident(REFLECT_ATTRIBUTE_NAME)
    }
}
