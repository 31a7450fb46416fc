//! Items used by the code `sw_reflect_derive` generates.

pub use alloc::boxed::Box;
pub use alloc::string::String;

pub use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// Joins string pieces, used to build the type path of generic types.
pub fn concat(parts: &[&str]) -> String {
    parts.concat()
}
