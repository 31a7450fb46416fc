use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn type_info_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn reflect_kind_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::ReflectKind
    }
}

#[inline]
pub(crate) fn struct_info_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::StructInfo
    }
}

#[inline]
pub(crate) fn named_field_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::NamedField
    }
}

#[inline]
pub(crate) fn opaque_info_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::info::OpaqueInfo
    }
}
