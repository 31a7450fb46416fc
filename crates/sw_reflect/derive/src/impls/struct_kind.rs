use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::trait_typed::reflect_bounds;
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct));

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let sw_reflect_path = meta.sw_reflect_path();
    let struct_ = crate::path::struct_(sw_reflect_path);
    let reflect_ = crate::path::reflect_(sw_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(sw_reflect_path);
    let option_ = crate::path::option_();

    let mut field_names = Vec::new();
    let mut fields_ref = Vec::new();
    let mut fields_mut = Vec::new();
    for field in info.active_fields() {
        let access = field.access_tokens();
        field_names.push(Literal::string(&field.name));
        fields_ref.push(quote!(#reflect_::as_reflect(&#access)));
        fields_mut.push(quote!(#reflect_::as_reflect_mut(&mut #access)));
    }
    let field_indices = (0..field_names.len()).map(Literal::usize_unsuffixed);
    let field_indices = field_indices.collect::<Vec<_>>();
    let field_count = Literal::usize_unsuffixed(field_names.len());

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&reflect_bounds(meta));

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
