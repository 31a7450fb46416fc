//! Kind-specific views of reflected values.
//!
//! [`Reflect::reflect_ref`] and [`Reflect::reflect_mut`] return a
//! [`ReflectRef`] / [`ReflectMut`], whose variants carry one of the traits
//! below.
//!
//! - [`Struct`]: named fields.
//! - [`Map`]: string-keyed entries, with [`DynamicMap`] as a map of
//!   dynamically typed values.
//! - [`Indirection`]: a possibly empty reference to another value.
//! - [`Getters`]: methods exposed by `#[reflect_getters]`, reached through
//!   [`Reflect::reflect_getters`] rather than a kind.
//!
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
//! [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut
//! [`Reflect::reflect_getters`]: crate::Reflect::reflect_getters

// -----------------------------------------------------------------------------
// Modules

mod dynamic_map;
mod getter_ops;
mod indirection_ops;
mod kind;
mod map_ops;
mod name;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_map::DynamicMap;
pub use getter_ops::{Getters, MethodInfo, MethodKind};
pub use indirection_ops::Indirection;
pub use kind::{ReflectMut, ReflectRef};
pub use map_ops::{Map, MapIter, MapIterMut, MapKey, MapOrder};
pub use name::eq_ignore_case;
pub use struct_ops::{Struct, StructFieldIter};
