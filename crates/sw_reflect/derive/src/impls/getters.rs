use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::{quote, quote_spanned};
use syn::ItemImpl;

use crate::derive_data::{GetterMethod, ReflectGetters};

/// Provided for `#[reflect_getters]`.
///
/// Emits the impl block unchanged, apart from `#[reflect]` attributes,
/// followed by an `impl Getters` for its self type.
pub(crate) fn impl_getters(item: ItemImpl) -> TokenStream {
    let getters = match ReflectGetters::from_item(item) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let sw_reflect_path = crate::path::sw_reflect();
    let reflect_ = crate::path::reflect_(&sw_reflect_path);
    let getters_ = crate::path::getters_(&sw_reflect_path);
    let method_info_ = crate::path::method_info_(&sw_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(&sw_reflect_path);
    let option_ = crate::path::option_();

    let infos = getters.methods.iter().map(|method| {
        let name = Literal::string(&method.name);
        if method.getter {
            quote!(#method_info_::getter(#name))
        } else {
            quote!(#method_info_::other(#name))
        }
    });

    let calls = getters
        .methods
        .iter()
        .enumerate()
        .filter(|(_, method)| method.getter)
        .map(|(index, GetterMethod { ident, output, .. })| {
            let index = Literal::usize_unsuffixed(index);
            let boxed = quote_spanned! {*output=>
                #reflect_::into_boxed_reflect(Self::#ident(self))
            };
            quote! {
                #index => #option_::Some(#boxed),
            }
        });

    let item = &getters.item;
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    TokenStream::from(quote! {
        #item

        impl #impl_generics #getters_ for #self_ty #where_clause {
            fn methods(&self) -> &'static [#method_info_] {
                static METHODS: &[#method_info_] = &[#(#infos),*];
                METHODS
            }

            fn call_getter(
                &self,
                index: usize,
            ) -> #option_<#macro_exports_::Box<dyn #reflect_>> {
                match index {
                    #(#calls)*
                    _ => #option_::None,
                }
            }
        }
    })
}
