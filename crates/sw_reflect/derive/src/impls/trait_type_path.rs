use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

fn static_path_cell(sw_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(sw_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let sw_reflect_path = meta.sw_reflect_path();
    let trait_type_path_ = crate::path::type_path_(sw_reflect_path);

    let (type_path, type_name, inline_flag) = if meta.impl_with_generic() {
        (
            static_path_cell(sw_reflect_path, meta.type_path_tokens()),
            static_path_cell(sw_reflect_path, meta.type_name_tokens()),
            TokenStream::new(),
        )
    } else {
        (
            meta.type_path_tokens(),
            meta.type_name_tokens(),
            quote! { #[inline] },
        )
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&trait_type_path_);

    quote! {
        impl #impl_generics #trait_type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
