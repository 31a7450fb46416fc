use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::__macro_exports::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::__macro_exports::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::__macro_exports::GenericTypePathCell
    }
}
