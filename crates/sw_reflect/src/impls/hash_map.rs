use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter, MapIterMut, MapKey, MapOrder};
use crate::reflection::impl_reflect_cast_fn;

// The hasher is not part of the type path: maps differing only in their
// hasher describe the same data.
macro_rules! impl_reflect_for_hashmap {
    ($ty:ident, $path:literal) => {
        impl<K, V, S> TypePath for $ty<K, V, S>
        where
            K: TypePath,
            V: TypePath,
            S: 'static,
        {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    [$path, "<", K::type_path(), ", ", V::type_path(), ">"].concat()
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    ["HashMap<", K::type_name(), ", ", V::type_name(), ">"].concat()
                })
            }
        }

        impl<K, V, S> Typed for $ty<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Reflect + Typed,
            S: BuildHasher + Send + Sync + 'static,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V, S> Reflect for $ty<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Reflect + Typed,
            S: BuildHasher + Send + Sync + 'static,
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<K, V, S> Map for $ty<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Reflect + Typed,
            S: BuildHasher + Send + Sync + 'static,
        {
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
                Box::new(
                    Self::iter(self).map(|(key, value)| (key.as_key_str(), value.as_reflect())),
                )
            }

            fn iter_mut(&mut self) -> MapIterMut<'_> {
                Box::new(
                    Self::iter_mut(self)
                        .map(|(key, value)| (key.as_key_str(), value.as_reflect_mut())),
                )
            }

            #[inline]
            fn order(&self) -> MapOrder {
                MapOrder::Unspecified
            }
        }
    };
}

mod std_map {
    use super::*;
    use std::collections::HashMap;

    impl_reflect_for_hashmap!(HashMap, "std::collections::HashMap");
}

mod hashbrown_map {
    use super::*;
    use sw_utils::hash::hashbrown::HashMap;

    impl_reflect_for_hashmap!(HashMap, "hashbrown::HashMap");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::info::{TypePath, Typed};
    use crate::ops::{Map, MapOrder};

    #[test]
    fn std_hash_map() {
        let mut map: HashMap<String, i32> = HashMap::new();
        map.insert("Foo".into(), 1);

        assert_eq!(Map::len(&map), 1);
        assert_eq!(map.order(), MapOrder::Unspecified);
        assert_eq!(Map::get(&map, "Foo").unwrap().downcast_ref::<i32>(), Some(&1));
        *map.get_ignore_case_mut("FOO").unwrap().downcast_mut::<i32>().unwrap() = 2;
        assert_eq!(map["Foo"], 2);
    }

    #[test]
    fn hashbrown_map_type_info() {
        type Fixed = sw_utils::hash::HashMap<&'static str, u8>;

        assert_eq!(Fixed::type_path(), "hashbrown::HashMap<&str, u8>");
        let info = Fixed::type_info().as_map().unwrap();
        assert!(info.value_ty().is::<u8>());
    }
}
