use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Path};

use super::TypeAttributes;

/// What every generated impl needs to know about the derived type.
pub(crate) struct ReflectMeta<'a> {
    sw_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("sw_reflect_path", &self.sw_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    /// Creates the meta data, rejecting generics that cannot be reflected.
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> syn::Result<Self> {
        if let Some(param) = generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                param,
                "lifetime parameters are not supported, reflected types are `'static`",
            ));
        }
        if let Some(param) = generics.const_params().next() {
            return Err(syn::Error::new_spanned(
                param,
                "const parameters are not supported",
            ));
        }

        Ok(Self {
            sw_reflect_path: crate::path::sw_reflect(),
            attrs,
            ident,
            generics,
        })
    }

    #[inline]
    pub fn sw_reflect_path(&self) -> &Path {
        &self.sw_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Whether the type has type parameters, which means its `TypePath`
    /// and `TypeInfo` live in per-type cells.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Splits the generics for an impl block, bounding every type
    /// parameter with `bounds`.
    ///
    /// Returns `(impl_generics, ty_generics, where_clause)`.
    pub fn split_generics(&self, bounds: &TokenStream) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, _) = self.generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = self
            .generics
            .where_clause
            .iter()
            .flat_map(|clause| clause.predicates.iter())
            .map(ToTokens::to_token_stream)
            .collect();
        predicates.extend(self.generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #bounds)
        }));

        let where_clause = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote!(where #(#predicates),*)
        };

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_clause,
        )
    }

    /// Expression of the type path.
    ///
    /// For generic types this builds a `String`; the caller stores it in a
    /// `GenericTypePathCell`.
    pub fn type_path_tokens(&self) -> TokenStream {
        let base = match &self.attrs.type_path {
            Some(custom) => custom.to_token_stream(),
            None => {
                let suffix = format!("::{}", self.ident);
                quote!(::core::concat!(::core::module_path!(), #suffix))
            }
        };
        self.with_generic_args(base, quote!(type_path))
    }

    /// Expression of the short type name, see [`Self::type_path_tokens`].
    pub fn type_name_tokens(&self) -> TokenStream {
        let base = self.ident.to_string();
        self.with_generic_args(base.to_token_stream(), quote!(type_name))
    }

    fn with_generic_args(&self, base: TokenStream, getter: TokenStream) -> TokenStream {
        if !self.impl_with_generic() {
            return base;
        }

        let macro_exports_ = crate::path::macro_exports_(&self.sw_reflect_path);
        let type_path_ = crate::path::type_path_(&self.sw_reflect_path);

        let mut parts = vec![base, quote!("<")];
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                parts.push(quote!(", "));
            }
            let ident = &param.ident;
            parts.push(quote!(<#ident as #type_path_>::#getter()));
        }
        parts.push(quote!(">"));

        quote! {
            #macro_exports_::concat(&[#(#parts),*])
        }
    }
}
