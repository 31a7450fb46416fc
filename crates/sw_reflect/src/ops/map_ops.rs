use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::borrow::Borrow;

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::eq_ignore_case;

// -----------------------------------------------------------------------------
// MapKey

/// A map key with a string form.
///
/// Only string-like keys are reflected; the string form is what path
/// segments are matched against.
pub trait MapKey: Borrow<str> + TypePath + Send + Sync {
    /// Returns the string form of the key.
    #[inline]
    fn as_key_str(&self) -> &str {
        <Self as Borrow<str>>::borrow(self)
    }
}

impl MapKey for String {}
impl MapKey for &'static str {}
impl MapKey for Cow<'static, str> {}

// -----------------------------------------------------------------------------
// MapOrder

/// How a [`Map`] orders its entries during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapOrder {
    /// The order the entries were inserted in.
    Insertion,
    /// Ascending key order.
    Sorted,
    /// No guarantee, e.g. a hash map.
    Unspecified,
}

// -----------------------------------------------------------------------------
// Map trait

/// Iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a>;

/// Mutable iterator over the entries of a [`Map`].
pub type MapIterMut<'a> = Box<dyn Iterator<Item = (&'a str, &'a mut dyn Reflect)> + 'a>;

/// A string-keyed collection of reflected values.
///
/// ```
/// use std::collections::BTreeMap;
/// use sw_reflect::ops::{Map, MapOrder};
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("Foo"), 1_i32);
///
/// assert_eq!(map.order(), MapOrder::Sorted);
/// assert!(Map::get(&map, "foo").is_none());
/// assert_eq!(map.get_ignore_case("foo").unwrap().downcast_ref::<i32>(), Some(&1));
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under exactly `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the value stored under exactly `key`, mutably.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(key, value)` in [`order`](Map::order).
    fn iter(&self) -> MapIter<'_>;

    /// Iterates mutably over `(key, value)` in [`order`](Map::order).
    fn iter_mut(&mut self) -> MapIterMut<'_>;

    /// Returns the iteration order of this map.
    fn order(&self) -> MapOrder;

    /// Returns the value whose key matches `key` ignoring case.
    ///
    /// An exact match wins. Otherwise the first matching key in iteration
    /// order is used, which is arbitrary for [`MapOrder::Unspecified`] maps
    /// holding several keys that only differ in case.
    fn get_ignore_case(&self, key: &str) -> Option<&dyn Reflect> {
        if let Some(value) = self.get(key) {
            return Some(value);
        }
        self.iter()
            .find(|(name, _)| eq_ignore_case(name, key))
            .map(|(_, value)| value)
    }

    /// Mutable counterpart of [`get_ignore_case`](Map::get_ignore_case).
    fn get_ignore_case_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        if self.get(key).is_some() {
            return self.get_mut(key);
        }
        self.iter_mut()
            .find(|(name, _)| eq_ignore_case(name, key))
            .map(|(_, value)| value)
    }
}

impl dyn Map {
    /// Returns the value stored under exactly `key`, downcast to `T`.
    #[inline]
    pub fn get_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<dyn Reflect>::downcast_ref)
    }
}
