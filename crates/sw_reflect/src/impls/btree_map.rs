use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter, MapIterMut, MapKey, MapOrder};
use crate::reflection::impl_reflect_cast_fn;

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            ["alloc::collections::BTreeMap<", K::type_path(), ", ", V::type_path(), ">"].concat()
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| ["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"].concat())
    }
}

impl<K: MapKey + Ord, V: Reflect + Typed> Typed for BTreeMap<K, V> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K: MapKey + Ord, V: Reflect + Typed> Reflect for BTreeMap<K, V> {
    impl_reflect_cast_fn!(Map);
}

impl<K: MapKey + Ord, V: Reflect + Typed> Map for BTreeMap<K, V> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        Self::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        Self::get_mut(self, key).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(Self::iter(self).map(|(key, value)| (key.as_key_str(), value.as_reflect())))
    }

    fn iter_mut(&mut self) -> MapIterMut<'_> {
        Box::new(
            Self::iter_mut(self).map(|(key, value)| (key.as_key_str(), value.as_reflect_mut())),
        )
    }

    #[inline]
    fn order(&self) -> MapOrder {
        MapOrder::Sorted
    }
}
