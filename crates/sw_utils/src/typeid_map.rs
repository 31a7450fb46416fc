use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::FixedHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

/// A map keyed by [`TypeId`].
///
/// Used as the backing store of per-type caches, where each generic
/// instantiation needs its own lazily built value.
pub struct TypeIdMap<V>(HashMap<TypeId, V, FixedHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw_utils::TypeIdMap;
    ///
    /// static MAP: std::sync::RwLock<TypeIdMap<&'static str>> =
    ///     std::sync::RwLock::new(TypeIdMap::new());
    /// assert!(MAP.read().unwrap().is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    /// Returns the value stored for `type_id`, inserting the result of `f`
    /// first if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::TypeId;
    /// use sw_utils::TypeIdMap;
    ///
    /// let mut map = TypeIdMap::new();
    /// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 1), 1);
    /// assert_eq!(*map.get_or_insert(TypeId::of::<u8>(), || 2), 1);
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    /// Returns the value stored for `type_id`.
    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Returns the value stored for `T`.
    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    /// Returns the number of stored types.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn get_or_insert_keeps_first_value() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<u32>(), || 10) += 1;
        map.get_or_insert(TypeId::of::<u32>(), || 99);
        map.get_or_insert(TypeId::of::<i64>(), || 5);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_type::<u32>(), Some(&11));
        assert_eq!(map.get_type::<i64>(), Some(&5));
        assert_eq!(map.get_type::<u8>(), None);
    }
}
