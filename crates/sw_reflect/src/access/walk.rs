use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::access::{self, GetterValue, WriteError};

// -----------------------------------------------------------------------------
// ReflectWalk

/// Dotted-path access as methods on reflected values.
///
/// Every method forwards to the free function of the same name in
/// [`access`](crate::access), with `self` as the root.
///
/// # Examples
///
/// ```
/// use sw_reflect::access::ReflectWalk;
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Config {
///     name: String,
///     limits: Limits,
/// }
///
/// #[derive(Reflect)]
/// struct Limits {
///     max_conn: u32,
/// }
///
/// let mut config = Config {
///     name: "edge".into(),
///     limits: Limits { max_conn: 16 },
/// };
///
/// assert_eq!(config.field_value_as::<u32>("Limits.Max_Conn"), Some(&16));
///
/// config.set_field_value("limits.max_conn", 32_u32);
/// assert_eq!(config.limits.max_conn, 32);
///
/// assert!(config.try_set_field_value("limits.max_conn", "many").is_err());
/// assert_eq!(config.field_list(), ["limits.max_conn", "name"]);
/// ```
pub trait ReflectWalk {
    /// See [`field_value`](crate::access::field_value).
    fn field_value(&self, path: &str) -> Option<&dyn Reflect>;

    /// See [`field_value`](crate::access::field_value), downcast to `T`.
    fn field_value_as<T: Reflect>(&self, path: &str) -> Option<&T>;

    /// See [`field_value_mut`](crate::access::field_value_mut).
    fn field_value_mut(&mut self, path: &str) -> Option<&mut dyn Reflect>;

    /// See [`set_field_value`](crate::access::set_field_value).
    fn set_field_value<T: Reflect>(&mut self, path: &str, value: T);

    /// See [`try_set_field_value`](crate::access::try_set_field_value).
    fn try_set_field_value<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), WriteError>;

    /// See [`getter_value`](crate::access::getter_value).
    fn getter_value(&self, path: &str) -> Option<GetterValue<'_>>;

    /// See [`field_list`](crate::access::field_list).
    fn field_list(&self) -> Vec<String>;

    /// See [`field_list_unsorted`](crate::access::field_list_unsorted).
    fn field_list_unsorted(&self) -> Vec<String>;

    /// See [`getter_list`](crate::access::getter_list).
    fn getter_list(&self) -> Vec<String>;
}

impl ReflectWalk for dyn Reflect {
    #[inline]
    fn field_value(&self, path: &str) -> Option<&dyn Reflect> {
        access::field_value(path, self)
    }

    #[inline]
    fn field_value_as<T: Reflect>(&self, path: &str) -> Option<&T> {
        access::field_value(path, self)?.downcast_ref::<T>()
    }

    #[inline]
    fn field_value_mut(&mut self, path: &str) -> Option<&mut dyn Reflect> {
        access::field_value_mut(path, self)
    }

    #[inline]
    fn set_field_value<T: Reflect>(&mut self, path: &str, value: T) {
        access::set_field_value(path, value.into_boxed_reflect(), self);
    }

    #[inline]
    fn try_set_field_value<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), WriteError> {
        access::try_set_field_value(path, value.into_boxed_reflect(), self)
    }

    #[inline]
    fn getter_value(&self, path: &str) -> Option<GetterValue<'_>> {
        access::getter_value(path, self)
    }

    #[inline]
    fn field_list(&self) -> Vec<String> {
        access::field_list(self)
    }

    #[inline]
    fn field_list_unsorted(&self) -> Vec<String> {
        access::field_list_unsorted(self)
    }

    #[inline]
    fn getter_list(&self) -> Vec<String> {
        access::getter_list(self)
    }
}

// -----------------------------------------------------------------------------
// Implementation for reflect types

impl<R: Reflect> ReflectWalk for R {
    #[inline(always)]
    fn field_value(&self, path: &str) -> Option<&dyn Reflect> {
        <dyn Reflect as ReflectWalk>::field_value(self, path)
    }

    #[inline(always)]
    fn field_value_as<T: Reflect>(&self, path: &str) -> Option<&T> {
        <dyn Reflect as ReflectWalk>::field_value_as::<T>(self, path)
    }

    #[inline(always)]
    fn field_value_mut(&mut self, path: &str) -> Option<&mut dyn Reflect> {
        <dyn Reflect as ReflectWalk>::field_value_mut(self, path)
    }

    #[inline(always)]
    fn set_field_value<T: Reflect>(&mut self, path: &str, value: T) {
        <dyn Reflect as ReflectWalk>::set_field_value::<T>(self, path, value);
    }

    #[inline(always)]
    fn try_set_field_value<T: Reflect>(&mut self, path: &str, value: T) -> Result<(), WriteError> {
        <dyn Reflect as ReflectWalk>::try_set_field_value::<T>(self, path, value)
    }

    #[inline(always)]
    fn getter_value(&self, path: &str) -> Option<GetterValue<'_>> {
        <dyn Reflect as ReflectWalk>::getter_value(self, path)
    }

    #[inline(always)]
    fn field_list(&self) -> Vec<String> {
        <dyn Reflect as ReflectWalk>::field_list(self)
    }

    #[inline(always)]
    fn field_list_unsorted(&self) -> Vec<String> {
        <dyn Reflect as ReflectWalk>::field_list_unsorted(self)
    }

    #[inline(always)]
    fn getter_list(&self) -> Vec<String> {
        <dyn Reflect as ReflectWalk>::getter_list(self)
    }
}
