use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use indexmap::IndexMap;
use sw_utils::hash::FixedHashState;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter, MapIterMut, MapOrder};
use crate::reflection::impl_reflect_cast_fn;

/// A string-keyed map of dynamically typed values, in insertion order.
///
/// Values of different types can live side by side, which makes it the
/// natural container for loosely structured data:
///
/// ```
/// use sw_reflect::ops::{DynamicMap, Map};
///
/// let mut inner = DynamicMap::new();
/// inner.insert("Baz", 5_i32);
///
/// let mut map = DynamicMap::new();
/// map.insert("Foo", 1_i32);
/// map.insert("Null", None::<()>);
/// map.insert("Bar", inner);
///
/// let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["Foo", "Null", "Bar"]);
/// ```
#[derive(Default)]
pub struct DynamicMap {
    entries: IndexMap<String, Box<dyn Reflect>, FixedHashState>,
}

impl TypePath for DynamicMap {
    #[inline]
    fn type_path() -> &'static str {
        "sw_reflect::ops::DynamicMap"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicMap"
    }
}

impl Typed for DynamicMap {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Map(MapInfo::new::<Self, String, dyn Reflect>()))
    }
}

impl DynamicMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    /// Inserts a boxed value.
    ///
    /// Replacing an existing key keeps its position and returns the old value.
    pub fn insert_boxed(
        &mut self,
        key: impl Into<String>,
        value: Box<dyn Reflect>,
    ) -> Option<Box<dyn Reflect>> {
        self.entries.insert(key.into(), value)
    }

    /// Inserts a value, see [`insert_boxed`](Self::insert_boxed).
    #[inline]
    pub fn insert<T: Reflect>(
        &mut self,
        key: impl Into<String>,
        value: T,
    ) -> Option<Box<dyn Reflect>> {
        self.insert_boxed(key, Box::new(value))
    }

    /// Builder form of [`insert`](Self::insert).
    ///
    /// ```
    /// use sw_reflect::ops::{DynamicMap, Map};
    ///
    /// let map = DynamicMap::new().with("a", 1_u8).with("b", 2_u8);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn with<T: Reflect>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes the entry stored under exactly `key`, keeping the order of
    /// the others.
    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Reflect>> {
        self.entries.shift_remove(key)
    }

    /// Returns the entry at `index` in insertion order.
    ///
    /// ```
    /// use sw_reflect::ops::DynamicMap;
    ///
    /// let map = DynamicMap::new().with("a", 1_u8).with("b", 2_u8);
    /// let (key, value) = map.get_index(1).unwrap();
    /// assert_eq!(key, "b");
    /// assert_eq!(value.downcast_ref::<u8>(), Some(&2));
    /// assert!(map.get_index(2).is_none());
    /// ```
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&str, &dyn Reflect)> {
        let (key, value) = self.entries.get_index(index)?;
        Some((key.as_str(), &**value))
    }
}

impl Reflect for DynamicMap {
    impl_reflect_cast_fn!(Map);
}

impl Map for DynamicMap {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.entries.get(key).map(|value| &**value)
    }

    #[inline]
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        self.entries.get_mut(key).map(|value| &mut **value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            self.entries
                .iter()
                .map(|(key, value)| (key.as_str(), &**value)),
        )
    }

    fn iter_mut(&mut self) -> MapIterMut<'_> {
        Box::new(
            self.entries
                .iter_mut()
                .map(|(key, value)| (key.as_str(), &mut **value)),
        )
    }

    #[inline]
    fn order(&self) -> MapOrder {
        MapOrder::Insertion
    }
}

impl fmt::Debug for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use super::DynamicMap;
    use crate::ops::Map;

    #[test]
    fn replace_keeps_position() {
        let mut map = DynamicMap::new().with("a", 1_i32).with("b", 2_i32);
        let old = map.insert("a", 10_i32).unwrap();

        assert_eq!(old.take::<i32>().unwrap(), 1);
        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map.get("a").unwrap().downcast_ref::<i32>(), Some(&10));
    }

    #[test]
    fn remove_keeps_order() {
        let mut map = DynamicMap::new()
            .with("a", 1_i32)
            .with("b", 2_i32)
            .with("c", 3_i32);

        assert!(map.remove("b").is_some());
        assert!(map.remove("b").is_none());
        assert_eq!(map.len(), 2);

        let (key, value) = map.get_index(1).unwrap();
        assert_eq!(key, "c");
        assert_eq!(value.downcast_ref::<i32>(), Some(&3));

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "c"]);

        map.insert("b", 4_i32);
        assert_eq!(map.get_index(2).unwrap().0, "b");
    }

    #[test]
    fn mixed_value_types() {
        let map = DynamicMap::new()
            .with("name", String::from("x"))
            .with("count", 3_u64);

        assert!(map.get("name").unwrap().is::<String>());
        assert!(map.get_ignore_case("COUNT").unwrap().is::<u64>());
    }
}
