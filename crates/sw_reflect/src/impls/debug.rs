use core::fmt;

use crate::ops::{Indirection, Map, Struct};

/// Formats a [`Struct`] as `TypeName { field: value, .. }`.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, value) in dyn_struct.iter_fields() {
        debug.field(name, &value);
    }
    debug.finish()
}

/// Formats a [`Map`] as `{key: value, ..}` in iteration order.
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(dyn_map.iter()).finish()
}

/// Formats an [`Indirection`] as its target, or `None` when empty.
pub fn indirection_debug(
    dyn_indirection: &dyn Indirection,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match dyn_indirection.target() {
        Some(target) => target.reflect_debug(f),
        None => f.write_str("None"),
    }
}
