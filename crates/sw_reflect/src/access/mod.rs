//! Dotted-path access into nested reflected values.
//!
//! A path such as `"Bar.Baz"` names a value by walking struct fields and
//! map keys from a root value. Segments are matched ignoring case, and
//! indirections (`Option`, `Box`, JSON `null`) are stepped through on
//! the way down.
//!
//! - [`field_value`] / [`field_value_mut`]: read the value at a path.
//! - [`set_field_value`] / [`try_set_field_value`]: overwrite it.
//! - [`getter_value`]: walk getter methods instead of fields.
//! - [`field_list`] / [`getter_list`]: enumerate every leaf path.
//!
//! [`FieldPath`] holds a parsed path for repeated use, and [`ReflectWalk`]
//! offers the same operations as methods.
//!
//! # Not found
//!
//! There is a single failure: the path does not name a value. It covers
//! missing fields, keys and methods, empty indirections, descending past a
//! leaf, and degenerate paths (`""`, `"a..b"`). Reads return `None`.
//! [`set_field_value`] ignores writes it cannot perform; use
//! [`try_set_field_value`] to find out why.
//!
//! # Examples
//!
//! ```
//! use sw_reflect::access;
//! use sw_reflect::derive::Reflect;
//! use sw_reflect::ops::DynamicMap;
//!
//! #[derive(Reflect)]
//! struct Inner { baz: i32 }
//!
//! let mut root = DynamicMap::new()
//!     .with("First", Some(Box::new(Inner { baz: 5 })))
//!     .with("Second", 5_i32);
//!
//! let baz = access::field_value("first.BAZ", &root).unwrap();
//! assert_eq!(baz.downcast_ref::<i32>(), Some(&5));
//! assert!(access::field_value("First.Qux.Baz", &root).is_none());
//!
//! access::set_field_value("First.Baz", Box::new(6_i32), &mut root);
//! assert_eq!(access::field_list(&root), ["First.baz", "Second"]);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod getter;
mod list;
mod path;
mod resolve;
mod walk;

// -----------------------------------------------------------------------------
// Exports

pub use error::WriteError;
pub use getter::GetterValue;
pub use path::{FieldPath, PathError};
pub use walk::ReflectWalk;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Diagnostics

/// Reports a failed resolution and yields the "not found" result.
#[inline]
fn miss<T>(path: &FieldPath, depth: usize, reason: &str) -> Option<T> {
    crate::cfg::debug! {
        if {
            log::trace!("`{path}` not found at segment {depth}: {reason}");
        } else {
            let _ = (path, depth, reason);
        }
    }
    None
}

#[inline]
fn parse(path: &str) -> Option<FieldPath> {
    match FieldPath::parse(path) {
        Ok(path) => Some(path),
        Err(_err) => {
            crate::cfg::debug! {
                log::trace!("`{path}` not found: {_err}");
            }
            None
        }
    }
}

// -----------------------------------------------------------------------------
// Operations

/// Returns the value at `path` inside `root`.
///
/// Indirections are unwrapped before every lookup, but not after the last
/// one: a path ending at an `Option<T>` field yields the option. A path
/// continuing past a leaf is "not found", except that the leaf reached by
/// the second to last segment is returned if the last segment has nothing
/// left to look into.
///
/// ```
/// use sw_reflect::access::field_value;
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Foo { bar: Option<u8> }
///
/// let foo = Foo { bar: Some(3) };
/// assert!(field_value("bar", &foo).unwrap().is::<Option<u8>>());
/// assert!(field_value("", &foo).is_none());
/// ```
pub fn field_value<'a>(path: &str, root: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
    parse(path)?.resolve(root)
}

/// Returns the value at `path` inside `root`, mutably.
///
/// See [`field_value`] for the resolution rules.
pub fn field_value_mut<'a>(path: &str, root: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
    parse(path)?.resolve_mut(root)
}

/// Overwrites the value at `path` inside `root` with `value`.
///
/// Nothing happens if the path does not resolve or if `value` has a
/// different type than the value it would replace. No conversion is
/// attempted.
///
/// ```
/// use sw_reflect::access::set_field_value;
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Foo { bar: u8 }
///
/// let mut foo = Foo { bar: 1 };
/// set_field_value("Bar", Box::new(2_u8), &mut foo);
/// set_field_value("Bar", Box::new(3_u64), &mut foo);
/// assert_eq!(foo.bar, 2);
/// ```
pub fn set_field_value(path: &str, value: Box<dyn Reflect>, root: &mut dyn Reflect) {
    if let Err(err) = try_set_field_value(path, value, root) {
        log::trace!("write skipped: {err}");
    }
}

/// Overwrites the value at `path` inside `root` with `value`, reporting
/// why it could not.
///
/// ```
/// use sw_reflect::access::{WriteError, try_set_field_value};
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Foo { bar: u8 }
///
/// let mut foo = Foo { bar: 1 };
/// let err = try_set_field_value("qux", Box::new(2_u8), &mut foo).unwrap_err();
/// assert!(matches!(err, WriteError::NotFound { .. }));
///
/// let err = try_set_field_value("bar", Box::new(2_i8), &mut foo).unwrap_err();
/// assert_eq!(err.to_string(), "cannot write `i8` to `bar`, which holds `u8`");
/// ```
pub fn try_set_field_value(
    path: &str,
    value: Box<dyn Reflect>,
    root: &mut dyn Reflect,
) -> Result<(), WriteError> {
    match parse(path) {
        Some(parsed) => resolve::write(&parsed, root, value),
        None => Err(WriteError::NotFound { path: path.into() }),
    }
}

/// Resolves `path` through getter methods, starting at `root`.
///
/// Each segment names a method exposed through
/// [`Getters`](crate::ops::Getters), matched ignoring case:
///
/// - A getter is called and its result becomes the current value. If the
///   result has no methods while segments remain, the path is not found.
/// - A method that is not a getter is skipped; the next segment is looked
///   up on the same value.
/// - A segment naming no method at all is not found.
///
/// If the final value is text (`String`, `&str`, `Cow<str>`, or a JSON
/// string) and the value it was read from has a getter named
/// `<getter>_bytes`, that getter's result is returned instead.
///
/// ```
/// use sw_reflect::access::getter_value;
/// use sw_reflect::derive::{Reflect, reflect_getters};
///
/// #[derive(Reflect)]
/// #[reflect(getters)]
/// struct Message;
///
/// #[reflect_getters]
/// impl Message {
///     pub fn body(&self) -> String {
///         "hi".into()
///     }
///
///     pub fn body_bytes(&self) -> Vec<u8> {
///         b"hi".to_vec()
///     }
/// }
///
/// let body = getter_value("Body", &Message).unwrap();
/// assert_eq!(body.downcast_ref::<Vec<u8>>().unwrap(), b"hi");
/// ```
pub fn getter_value<'a>(path: &str, root: &'a dyn Reflect) -> Option<GetterValue<'a>> {
    parse(path)?.call_getters(root)
}

/// Lists the path of every leaf reachable from `root`, sorted.
///
/// See [`field_list_unsorted`].
pub fn field_list(root: &dyn Reflect) -> Vec<String> {
    let mut list = list::list_fields(root);
    list.sort_unstable();
    list
}

/// Lists the path of every leaf reachable from `root`, in traversal order.
///
/// Struct fields come in declaration order and map entries in the map's
/// [order](crate::ops::Map::order). Names are listed as declared, not
/// case-folded. Structs and maps are expanded, everything else is a leaf.
///
/// Behind an empty indirection there is no value to walk, so the target
/// type decides: a struct type lists its fields, a map type lists nothing,
/// and anything else is a leaf. An empty indirection held directly by a
/// map is always a leaf.
///
/// A root that is neither a struct nor a map has no leaves.
///
/// ```
/// use sw_reflect::access::field_list_unsorted;
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Foo { b: u8, a: Option<Box<Bar>> }
///
/// #[derive(Reflect)]
/// struct Bar { y: u8, x: u8 }
///
/// let foo = Foo { b: 0, a: None };
/// assert_eq!(field_list_unsorted(&foo), ["b", "a.y", "a.x"]);
/// ```
pub fn field_list_unsorted(root: &dyn Reflect) -> Vec<String> {
    list::list_fields(root)
}

/// Lists the path of every getter reachable from `root`, sorted.
///
/// Every getter is called. A result of struct kind is expanded through its
/// own getters and contributes nothing if it has none; any other result is
/// a leaf. Text getters and their `_bytes` companions are listed
/// separately.
///
/// ```
/// use sw_reflect::access::getter_list;
/// use sw_reflect::derive::{Reflect, reflect_getters};
///
/// #[derive(Reflect)]
/// #[reflect(getters)]
/// struct Message;
///
/// #[reflect_getters]
/// impl Message {
///     pub fn body(&self) -> String {
///         "hi".into()
///     }
///
///     pub fn body_bytes(&self) -> Vec<u8> {
///         b"hi".to_vec()
///     }
/// }
///
/// assert_eq!(getter_list(&Message), ["body", "body_bytes"]);
/// ```
pub fn getter_list(root: &dyn Reflect) -> Vec<String> {
    list::list_getters(root)
}
