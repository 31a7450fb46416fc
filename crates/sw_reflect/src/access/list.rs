use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::Reflect;
use crate::access::resolve::unwrap_ref;
use crate::info::{ReflectKind, StructInfo, TypeInfo};
use crate::ops::{Map, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Helpers

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        String::from(name)
    } else {
        let mut path = String::with_capacity(prefix.len() + name.len() + 1);
        path.push_str(prefix);
        path.push('.');
        path.push_str(name);
        path
    }
}

/// Struct types currently being expanded, outermost first.
///
/// A struct type met again while it is on the chain is listed as a leaf.
type Chain = Vec<TypeId>;

// -----------------------------------------------------------------------------
// Fields

pub(crate) fn list_fields(root: &dyn Reflect) -> Vec<String> {
    let mut out = Vec::new();
    let mut chain = Chain::new();

    match unwrap_ref(root) {
        Some(node) => match node.reflect_ref() {
            ReflectRef::Struct(value) => struct_fields("", value, &mut chain, &mut out),
            ReflectRef::Map(value) => map_entries("", value, &mut chain, &mut out),
            _ => {}
        },
        None => {
            if let TypeInfo::Struct(info) = root.reflect_type_info().pointee() {
                type_fields("", info, &mut chain, &mut out);
            }
        }
    }

    out
}

/// Expands a non-indirection value found at `path`.
fn node(path: String, value: &dyn Reflect, chain: &mut Chain, out: &mut Vec<String>) {
    match value.reflect_ref() {
        ReflectRef::Struct(value) => struct_fields(&path, value, chain, out),
        ReflectRef::Map(value) => map_entries(&path, value, chain, out),
        _ => out.push(path),
    }
}

fn struct_fields(prefix: &str, value: &dyn Struct, chain: &mut Chain, out: &mut Vec<String>) {
    chain.push(value.ty_id());
    for (name, field) in value.iter_fields() {
        let path = join(prefix, name);
        match unwrap_ref(field) {
            Some(target) => node(path, target, chain, out),
            // Nothing to read from, the declared type decides.
            None => match field.reflect_type_info().pointee() {
                TypeInfo::Struct(info) if !chain.contains(&info.ty_id()) => {
                    type_fields(&path, info, chain, out);
                }
                TypeInfo::Map(_) => {}
                _ => out.push(path),
            },
        }
    }
    chain.pop();
}

fn map_entries(prefix: &str, value: &dyn Map, chain: &mut Chain, out: &mut Vec<String>) {
    for (key, entry) in value.iter() {
        let path = join(prefix, key);
        match unwrap_ref(entry) {
            Some(target) => node(path, target, chain, out),
            None => out.push(path),
        }
    }
}

fn type_fields(prefix: &str, info: &'static StructInfo, chain: &mut Chain, out: &mut Vec<String>) {
    chain.push(info.ty_id());
    for field in info.iter() {
        let path = join(prefix, field.name());
        match field.type_info().pointee() {
            TypeInfo::Struct(inner) if !chain.contains(&inner.ty_id()) => {
                type_fields(&path, inner, chain, out);
            }
            TypeInfo::Map(_) => {}
            _ => out.push(path),
        }
    }
    chain.pop();
}

// -----------------------------------------------------------------------------
// Getters

pub(crate) fn list_getters(root: &dyn Reflect) -> Vec<String> {
    let mut out = Vec::new();
    let mut chain = Chain::new();
    getter_paths("", root, &mut chain, &mut out);
    out.sort_unstable();
    out
}

fn getter_paths(prefix: &str, value: &dyn Reflect, chain: &mut Chain, out: &mut Vec<String>) {
    let Some(getters) = value.reflect_getters() else {
        return;
    };

    chain.push(value.ty_id());
    for (index, info) in getters.methods().iter().enumerate() {
        if !info.is_getter() {
            continue;
        }
        let Some(result) = getters.call_getter(index) else {
            continue;
        };

        let path = join(prefix, info.name());
        if result.reflect_kind() == ReflectKind::Struct && !chain.contains(&result.ty_id()) {
            getter_paths(&path, &*result, chain, out);
        } else {
            out.push(path);
        }
    }
    chain.pop();
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use super::{list_fields, list_getters};
    use crate::derive::{Reflect, reflect_getters};
    use crate::ops::DynamicMap;

    #[derive(Reflect, Default)]
    struct Inner {
        #[reflect(rename = "Baz")]
        baz: i32,
        #[reflect(rename = "Array")]
        array: Vec<i32>,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        #[reflect(rename = "Foo")]
        foo: String,
        #[reflect(rename = "Bar")]
        bar: Option<Box<Inner>>,
    }

    #[derive(Reflect)]
    struct Node {
        value: u8,
        next: Option<Box<Node>>,
    }

    #[derive(Reflect)]
    struct WithMaps {
        tags: Option<BTreeMap<String, u8>>,
        #[reflect(skip)]
        hidden: u8,
        #[reflect(rename = "Extra")]
        extra: HashMap<String, u8>,
    }

    #[test]
    fn fields_of_empty_indirection_come_from_the_type() {
        let mut list = list_fields(&Outer::default());
        assert_eq!(list, ["Foo", "Bar.Baz", "Bar.Array"]);
        list.sort();
        assert_eq!(list, ["Bar.Array", "Bar.Baz", "Foo"]);

        let filled = Outer {
            foo: String::new(),
            bar: Some(Box::new(Inner::default())),
        };
        assert_eq!(list_fields(&filled), ["Foo", "Bar.Baz", "Bar.Array"]);

        // An empty root is expanded the same way.
        assert_eq!(list_fields(&None::<Outer>), ["Foo", "Bar.Baz", "Bar.Array"]);
    }

    #[test]
    fn map_fields() {
        let map = DynamicMap::new()
            .with("Foo", 1_i32)
            .with("Null", None::<Box<Inner>>)
            .with("Bar", DynamicMap::new().with("Baz", 5_i32));
        assert_eq!(list_fields(&map), ["Foo", "Null", "Bar.Baz"]);

        let mut map = HashMap::new();
        map.insert(String::from("Kek"), None);
        map.insert(String::from("Lol"), Some(String::from("aaa")));
        let mut list = list_fields(&map);
        list.sort();
        assert_eq!(list, ["Kek", "Lol"]);
    }

    #[test]
    fn maps_inside_structs() {
        let mut extra = HashMap::new();
        extra.insert(String::from("a"), 1);
        let value = WithMaps {
            tags: None,
            hidden: 0,
            extra,
        };
        assert_eq!(list_fields(&value), ["Extra.a"]);
        assert_eq!(value.hidden, 0);

        let value = WithMaps {
            tags: Some(BTreeMap::from([(String::from("x"), 1), (String::from("y"), 2)])),
            hidden: 0,
            extra: HashMap::new(),
        };
        assert_eq!(list_fields(&value), ["tags.x", "tags.y"]);
    }

    #[test]
    fn recursive_types_terminate() {
        let list = list_fields(&Node {
            value: 1,
            next: Some(Box::new(Node {
                value: 2,
                next: None,
            })),
        });
        assert_eq!(list, ["value", "next.value", "next.next"]);
    }

    #[test]
    fn leaf_roots_have_no_fields() {
        assert!(list_fields(&5_i32).is_empty());
        assert!(list_fields(&None::<u8>).is_empty());
    }

    #[derive(Reflect)]
    #[reflect(getters)]
    struct Decorated;

    #[reflect_getters]
    impl Decorated {
        pub fn foo(&self) -> String {
            "foo".into()
        }

        pub fn foo_bytes(&self) -> Vec<u8> {
            b"foo".to_vec()
        }

        pub fn bar(&self) -> Plain {
            Plain
        }

        pub fn other(&self) -> Quiet {
            Quiet { hidden: 1 }
        }
    }

    #[derive(Reflect)]
    #[reflect(getters)]
    struct Plain;

    #[reflect_getters]
    impl Plain {
        pub fn baz(&self) -> i32 {
            5
        }

        pub fn again(&self) -> Plain {
            Plain
        }
    }

    #[derive(Reflect)]
    struct Quiet {
        hidden: u8,
    }

    #[test]
    fn getter_listing() {
        assert_eq!(
            list_getters(&Decorated),
            ["bar.again", "bar.baz", "foo", "foo_bytes"]
        );
        assert_eq!(
            list_getters(&Some(Box::new(Decorated))),
            ["bar.again", "bar.baz", "foo", "foo_bytes"]
        );
        assert!(list_getters(&Quiet { hidden: 0 }).is_empty());
    }
}
