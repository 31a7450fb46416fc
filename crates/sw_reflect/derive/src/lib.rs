//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
//! - [`reflect_getters`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
///
/// Structs with named fields and unit structs are of `Struct` kind; the
/// latter simply have no fields. Tuple structs are `Opaque`: they are
/// leaves for path access. Enums and unions are not supported.
///
/// Every reflected field type must implement `Reflect` and `Typed`.
///
/// ## Field names
///
/// Fields are reflected under their declared name. Use `rename` to expose
/// a different one, or `skip` to hide a field from reflection entirely:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(rename = "ID")]
///     id: u64,
///     #[reflect(skip)]
///     cache: Cache,
/// }
/// ```
///
/// Skipped fields do not need to implement `Reflect`.
///
/// ## Custom Type Path
///
/// The default type path is `module_path!()` followed by the type name.
/// It can be overridden at the type level:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "billing::Account")]
/// struct Account { /* ... */ }
/// ```
///
/// For generic types the path of each type parameter is appended
/// automatically, e.g. `billing::Page<u32>`.
///
/// ## Getters
///
/// `#[reflect(getters)]` makes `Reflect::reflect_getters` return the type's
/// `Getters` implementation, which is generated by [`reflect_getters`]:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(getters)]
/// struct Account { balance: i64 }
///
/// #[reflect_getters]
/// impl Account {
///     pub fn balance(&self) -> i64 { self.balance }
/// }
/// ```
///
/// ## Generics
///
/// Type parameters get `Reflect + Typed` bounds in the generated impls.
/// Lifetime and const parameters are not supported, since reflected values
/// are `'static` and const parameters have no type path.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}

/// Exposes the public methods of an inherent impl block through `Getters`.
///
/// Every `pub fn` of the block is listed in `Getters::methods`, in
/// declaration order. A method is a *getter* when it:
///
/// - takes `&self` and nothing else,
/// - is neither `async` nor `unsafe` and has no generic parameters,
/// - returns a value, that is not `()`, `!`, `impl Trait`, or a
///   reference other than `&'static`.
///
/// Getters can be called through `Getters::call_getter`, their result is
/// boxed as `dyn Reflect`, so the return type must implement `Reflect`.
/// Other public methods are listed so that the getter walk can recognize
/// and skip them.
///
/// Methods accept `#[reflect(rename = "...")]` and `#[reflect(skip)]`.
///
/// Only the signature is inspected, so a getter-shaped method returning a
/// type without `Reflect` (a `Result`, an iterator struct) fails to compile
/// with the error reported at its return type. Mark such methods
/// `#[reflect(skip)]`:
///
/// ```rust, ignore
/// #[reflect_getters]
/// impl Account {
///     #[reflect(skip)]
///     pub fn audit(&self) -> Result<Report, AuditError> { /* ... */ }
/// }
/// ```
///
/// ```rust, ignore
/// #[reflect_getters]
/// impl Account {
///     pub fn balance(&self) -> i64 { self.balance }
///
///     #[reflect(rename = "owner")]
///     pub fn owner_name(&self) -> String { self.owner.clone() }
///
///     // Listed, but not a getter.
///     pub fn deposit(&mut self, amount: i64) { self.balance += amount }
/// }
/// ```
///
/// Combine with `#[reflect(getters)]` on the type's derive.
#[proc_macro_attribute]
pub fn reflect_getters(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "`#[reflect_getters]` takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(input as ItemImpl);

    impls::impl_getters(item)
}
