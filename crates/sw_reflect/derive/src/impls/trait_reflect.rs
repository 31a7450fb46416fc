use proc_macro2::TokenStream;
use quote::quote;

use super::trait_typed::reflect_bounds;
use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `reflect_kind` is the variant name shared by `ReflectKind`, `ReflectRef`
/// and `ReflectMut`, e.g. `Struct`.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, reflect_kind: TokenStream) -> TokenStream {
    let sw_reflect_path = meta.sw_reflect_path();
    let reflect_ = crate::path::reflect_(sw_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sw_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sw_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sw_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(sw_reflect_path);
    let option_ = crate::path::option_();

    let reflect_getters_tokens = if meta.attrs().getters.is_some() {
        let getters_ = crate::path::getters_(sw_reflect_path);
        quote! {
            #[inline]
            fn reflect_getters(&self) -> #option_<&dyn #getters_> {
                #option_::Some(self)
            }
        }
    } else {
        TokenStream::new()
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&reflect_bounds(meta));

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> ::core::result::Result<(), #macro_exports_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind(self)
            }

            #reflect_getters_tokens
        }
    }
}
