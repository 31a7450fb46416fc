use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn reflect_ref_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn reflect_mut_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn struct_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_field_iter_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::StructFieldIter
    }
}

#[inline]
pub(crate) fn getters_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::Getters
    }
}

#[inline]
pub(crate) fn method_info_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::ops::MethodInfo
    }
}
