use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectMeta;

/// Implement reflect for a type without reflected fields.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let sw_reflect_path = meta.sw_reflect_path();
    let type_info_ = crate::path::type_info_(sw_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(sw_reflect_path);

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote!(#type_info_::Opaque(#opaque_info_::new::<Self>())),
    );

    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque));

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens
    }
}
