//! `Reflect` implementations for foreign types and helpers for implementors.
//!
//! - Leaves: `bool`, `char`, numbers, `()`, `String`, `&'static str`,
//!   `Cow<'static, str>` and `Vec<T>`.
//! - Indirections: `Option<T>` and `Box<T>`.
//! - Maps: `std` and `hashbrown` `HashMap`s, `BTreeMap`, and with the
//!   `json` feature `serde_json::Map`.
//! - `serde_json::Value` with the `json` feature.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;

mod boxed;
mod btree_map;
mod hash_map;
mod opaque;
mod option;
mod vec;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use debug::{indirection_debug, map_debug, struct_debug};
