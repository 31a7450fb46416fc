//! Static type information.
//!
//! Every reflected type has a [`TypePath`] (its name) and a [`TypeInfo`]
//! (its shape), reached through [`Typed`] or, from a value,
//! through [`DynamicTyped`].
//!
//! Type information is what lets the field listing describe the layout behind
//! an empty indirection, where there is no value to look at.
//!
//! ```
//! use sw_reflect::derive::Reflect;
//! use sw_reflect::info::{Typed, TypeInfo};
//!
//! #[derive(Reflect)]
//! struct Point { x: f32, y: f32 }
//!
//! let TypeInfo::Struct(info) = Point::type_info() else { unreachable!() };
//! assert_eq!(info.field_len(), 2);
//! assert!(info.field("y").unwrap().type_is::<f32>());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod indirection_info;
mod map_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use indirection_info::IndirectionInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
