//! Reflection for `serde_json` documents.
//!
//! A [`Value`] takes the kind of the variant it holds: objects are maps,
//! `null` is an empty indirection and everything else is a leaf. This gives
//! JSON documents the same path semantics as a map of dynamically typed
//! values with nil entries.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use serde_json::{Map as JsonMap, Value};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{MapInfo, OpaqueInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{Indirection, Map, MapIter, MapIterMut, MapOrder, ReflectMut, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Value

impl TypePath for Value {
    #[inline]
    fn type_path() -> &'static str {
        "serde_json::Value"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Value"
    }
}

impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Value {
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn reflect_kind(&self) -> ReflectKind {
        match self {
            Value::Null => ReflectKind::Indirection,
            Value::Object(_) => ReflectKind::Map,
            _ => ReflectKind::Opaque,
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Value::Null => ReflectRef::Indirection(self),
            Value::Object(map) => ReflectRef::Map(map),
            _ => ReflectRef::Opaque(self),
        }
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        match self {
            Value::Null => ReflectMut::Indirection(self),
            Value::Object(map) => ReflectMut::Map(map),
            _ => ReflectMut::Opaque(self),
        }
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Only reached for `null`, which points nowhere.
impl Indirection for Value {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        None
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }
}

// -----------------------------------------------------------------------------
// Map

impl TypePath for JsonMap<String, Value> {
    #[inline]
    fn type_path() -> &'static str {
        "serde_json::Map<alloc::string::String, serde_json::Value>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Map<String, Value>"
    }
}

impl Typed for JsonMap<String, Value> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Map(MapInfo::new::<Self, String, Value>()))
    }
}

impl Reflect for JsonMap<String, Value> {
    impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Map for JsonMap<String, Value> {
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
        Box::new(Self::iter(self).map(|(key, value)| (key.as_str(), value.as_reflect())))
    }

    fn iter_mut(&mut self) -> MapIterMut<'_> {
        Box::new(Self::iter_mut(self).map(|(key, value)| (key.as_str(), value.as_reflect_mut())))
    }

    // Sorted or insertion ordered depending on serde_json's features.
    #[inline]
    fn order(&self) -> MapOrder {
        MapOrder::Unspecified
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::{Value, json};

    use crate::Reflect;
    use crate::access::{self, WriteError};
    use crate::info::ReflectKind;

    fn document() -> Value {
        json!({
            "First": {
                "Foo": "foo",
                "Bar": { "Baz": 5 },
            },
            "Second": 5,
            "Third": { "Baz": 5 },
            "Kek": null,
        })
    }

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Value::Null.reflect_kind(), ReflectKind::Indirection);
        assert_eq!(json!({}).reflect_kind(), ReflectKind::Map);
        assert_eq!(json!([1, 2]).reflect_kind(), ReflectKind::Opaque);
        assert_eq!(json!("x").reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn read_nested_values() {
        let doc = document();

        let foo = access::field_value("first.FOO", &doc).unwrap();
        assert_eq!(foo.downcast_ref::<Value>(), Some(&json!("foo")));

        let baz = access::field_value("First.Bar.Baz", &doc).unwrap();
        assert_eq!(baz.downcast_ref::<Value>(), Some(&json!(5)));

        assert!(access::field_value("First.Foo.Bar.Baz", &doc).is_none());
        assert!(access::field_value("Kek.Baz", &doc).is_none());
        assert!(access::field_value("Fourth", &doc).is_none());

        let second = access::field_value("Second.Baz", &doc).unwrap();
        assert_eq!(second.downcast_ref::<Value>(), Some(&json!(5)));
    }

    #[test]
    fn list_document_leaves() {
        assert_eq!(
            access::field_list(&document()),
            ["First.Bar.Baz", "First.Foo", "Kek", "Second", "Third.Baz"]
        );
        assert!(access::field_list(&Value::Null).is_empty());
        assert!(access::field_list(&json!(3)).is_empty());
    }

    #[test]
    fn write_into_document() {
        let mut doc = document();

        access::try_set_field_value("Third.Baz", Box::new(json!(6)), &mut doc).unwrap();
        assert_eq!(doc["Third"]["Baz"], json!(6));

        access::set_field_value("Kek", Box::new(json!("now set")), &mut doc);
        assert_eq!(doc["Kek"], json!("now set"));

        let err = access::try_set_field_value("Third.Baz", Box::new(7_i64), &mut doc).unwrap_err();
        assert!(matches!(err, WriteError::MismatchedTypes { .. }));
        assert_eq!(doc["Third"]["Baz"], json!(6));
    }

    #[test]
    fn map_entries() {
        let doc = document();
        let map = doc.reflect_ref().as_map().unwrap();
        assert_eq!(map.len(), 4);
        assert!(map.get_ignore_case("SECOND").is_some());
        assert!(map.get("second").is_none());

        let keys: Vec<String> = map.iter().map(|(key, _)| String::from(key)).collect();
        assert!(keys.iter().any(|key| key == "Kek"));
    }
}
