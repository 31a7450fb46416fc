//! Paths of the `sw_reflect` items that generated code refers to.
//!
//! Keeping them in one place means a change to the layout of `sw_reflect`
//! only touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Gets the path under which `sw_reflect` is reachable from the caller.
///
/// 1. For crates that depend on `sw_reflect`, `::sw_reflect` is returned.
/// 2. For crates that depend on `structwalk`, `::structwalk::reflect` is returned.
/// 3. Otherwise `::sw_reflect` is returned, which may be wrong.
///
/// This reads the caller's `Cargo.toml`, so it is called once per macro
/// invocation and the result is passed around.
pub(crate) fn sw_reflect() -> syn::Path {
    sw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sw_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_exports_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(sw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sw_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}
