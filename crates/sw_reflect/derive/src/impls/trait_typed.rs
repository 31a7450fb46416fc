use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`
///
/// For param `type_info_tokens`, see [`ReflectStruct::to_info_tokens`].
///
/// [`ReflectStruct::to_info_tokens`]: crate::derive_data::ReflectStruct::to_info_tokens
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let sw_reflect_path = meta.sw_reflect_path();
    let trait_typed_ = crate::path::typed_(sw_reflect_path);
    let type_info_ = crate::path::type_info_(sw_reflect_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(sw_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(sw_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&reflect_bounds(meta));

    quote! {
        impl #impl_generics #trait_typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}

/// `Reflect + Typed`, the bounds of type parameters in every impl but `TypePath`.
pub(crate) fn reflect_bounds(meta: &ReflectMeta) -> TokenStream {
    let sw_reflect_path = meta.sw_reflect_path();
    let reflect_ = crate::path::reflect_(sw_reflect_path);
    let typed_ = crate::path::typed_(sw_reflect_path);
    quote!(#reflect_ + #typed_)
}
