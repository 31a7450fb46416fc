use alloc::boxed::Box;

use crate::Reflect;
use crate::access::{FieldPath, WriteError, miss};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Indirections

/// Follows indirections until a non-indirection value is reached.
///
/// Returns `None` at the first empty indirection.
pub(crate) fn unwrap_ref(mut node: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Indirection(indirection) = node.reflect_ref() {
        node = indirection.target()?;
    }
    Some(node)
}

/// Mutable counterpart of [`unwrap_ref`].
pub(crate) fn unwrap_mut(mut node: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    loop {
        match node.reflect_mut() {
            ReflectMut::Indirection(indirection) => node = indirection.target_mut()?,
            other => return Some(other.into_reflect()),
        }
    }
}

// -----------------------------------------------------------------------------
// Resolution

// Each segment first unwraps the current node, then looks the segment up in
// it. The value reached by the last segment is returned as is, so reading a
// field of type `Option<T>` yields the option.
//
// A leaf met at the last segment is itself the result: `"foo.x"` resolves
// to `foo` when `foo` is a number. A leaf met earlier is a miss.

pub(crate) fn resolve<'a>(path: &FieldPath, root: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
    let last = path.len() - 1;
    let mut node = root;

    for (depth, segment) in path.segment_slice().iter().enumerate() {
        let Some(current) = unwrap_ref(node) else {
            return miss(path, depth, "empty indirection");
        };
        let next = match current.reflect_ref() {
            ReflectRef::Struct(value) => value.field_ignore_case(segment),
            ReflectRef::Map(value) => value.get_ignore_case(segment),
            _ if depth == last => Some(current),
            _ => return miss(path, depth, "descent past a leaf"),
        };
        let Some(next) = next else {
            return miss(path, depth, "no such field or key");
        };
        node = next;
    }

    Some(node)
}

pub(crate) fn resolve_mut<'a>(
    path: &FieldPath,
    root: &'a mut dyn Reflect,
) -> Option<&'a mut dyn Reflect> {
    let last = path.len() - 1;
    let mut node = root;

    for (depth, segment) in path.segment_slice().iter().enumerate() {
        let Some(current) = unwrap_mut(node) else {
            return miss(path, depth, "empty indirection");
        };
        let next = match current.reflect_mut() {
            ReflectMut::Struct(value) => value.field_ignore_case_mut(segment),
            ReflectMut::Map(value) => value.get_ignore_case_mut(segment),
            other if depth == last => Some(other.into_reflect()),
            _ => return miss(path, depth, "descent past a leaf"),
        };
        let Some(next) = next else {
            return miss(path, depth, "no such field or key");
        };
        node = next;
    }

    Some(node)
}

// -----------------------------------------------------------------------------
// Writing

pub(crate) fn write(
    path: &FieldPath,
    root: &mut dyn Reflect,
    value: Box<dyn Reflect>,
) -> Result<(), WriteError> {
    let Some(target) = resolve_mut(path, root) else {
        return Err(WriteError::NotFound {
            path: path.as_str().into(),
        });
    };

    let expected = target.reflect_type_path();
    target.set(value).map_err(|rejected| {
        let found = (*rejected).reflect_type_path();
        log::debug!("`{path}`: cannot write `{found}` over `{expected}`");
        WriteError::MismatchedTypes {
            path: path.as_str().into(),
            expected,
            found,
        }
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{resolve, resolve_mut, unwrap_ref, write};
    use crate::Reflect;
    use crate::access::{FieldPath, WriteError};
    use crate::derive::Reflect;
    use crate::ops::DynamicMap;

    #[derive(Reflect, Debug, PartialEq)]
    struct Inner {
        #[reflect(rename = "Baz")]
        baz: i32,
        #[reflect(rename = "Array")]
        array: Vec<i32>,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Outer {
        #[reflect(rename = "Foo")]
        foo: String,
        #[reflect(rename = "Bar")]
        bar: Option<Box<Inner>>,
    }

    fn outer() -> Outer {
        Outer {
            foo: "foo".into(),
            bar: Some(Box::new(Inner {
                baz: 5,
                array: vec![1, 2],
            })),
        }
    }

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn unwrap_nested_indirections() {
        let value = Some(Box::new(Some(7_u8)));
        let inner = unwrap_ref(&value).unwrap();
        assert_eq!(inner.downcast_ref::<u8>(), Some(&7));

        let empty: Option<Box<u8>> = None;
        assert!(unwrap_ref(&empty).is_none());
    }

    #[test]
    fn resolve_through_struct_and_indirection() {
        let value = outer();
        let foo = resolve(&path("foo"), &value).unwrap();
        assert_eq!(foo.downcast_ref::<String>().unwrap(), "foo");

        let baz = resolve(&path("BAR.baz"), &value).unwrap();
        assert_eq!(baz.downcast_ref::<i32>(), Some(&5));

        // The terminal option is returned as is.
        let bar = resolve(&path("Bar"), &value).unwrap();
        assert!(bar.is::<Option<Box<Inner>>>());
    }

    #[test]
    fn resolve_misses() {
        let value = outer();
        assert!(resolve(&path("Foo.Bar.Baz"), &value).is_none());
        assert!(resolve(&path("Qux"), &value).is_none());
        assert!(resolve(&path("Bar.Qux"), &value).is_none());

        let empty = Outer {
            foo: String::new(),
            bar: None,
        };
        assert!(resolve(&path("Bar.Baz"), &empty).is_none());
    }

    #[test]
    fn leaf_at_last_segment_is_returned() {
        let value = outer();
        let foo = resolve(&path("Foo.Anything"), &value).unwrap();
        assert_eq!(foo.downcast_ref::<String>().unwrap(), "foo");

        let root = 3_u64;
        assert_eq!(resolve(&path("x"), &root).unwrap().downcast_ref::<u64>(), Some(&3));
    }

    #[test]
    fn resolve_through_maps() {
        let map = DynamicMap::new()
            .with("First", outer())
            .with("Second", 5_i32)
            .with("Third", Some(Box::new(Inner { baz: 5, array: Vec::new() })));

        let first_foo = resolve(&path("first.foo"), &map).unwrap();
        assert_eq!(first_foo.downcast_ref::<String>().unwrap(), "foo");
        assert!(resolve(&path("First.Foo.Bar.Baz"), &map).is_none());

        let baz = resolve(&path("First.Bar.Baz"), &map).unwrap();
        assert_eq!(baz.downcast_ref::<i32>(), Some(&5));

        let second = resolve(&path("Second"), &map).unwrap();
        assert_eq!(second.downcast_ref::<i32>(), Some(&5));

        let third = resolve(&path("Third.Baz"), &map).unwrap();
        assert_eq!(third.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn resolve_mut_then_modify() {
        let mut value = outer();
        let baz = resolve_mut(&path("bar.baz"), &mut value).unwrap();
        *baz.downcast_mut::<i32>().unwrap() = 10;
        assert_eq!(value.bar.as_ref().unwrap().baz, 10);

        assert!(resolve_mut(&path("foo.bar.baz"), &mut value).is_none());
    }

    #[test]
    fn write_values() {
        let mut value = outer();

        write(&path("Foo"), &mut value, String::from("bar").into_boxed_reflect()).unwrap();
        assert_eq!(value.foo, "bar");

        write(&path("Bar.Baz"), &mut value, 10_i32.into_boxed_reflect()).unwrap();
        write(&path("Bar.Array"), &mut value, vec![3, 4].into_boxed_reflect()).unwrap();
        let inner = value.bar.as_ref().unwrap();
        assert_eq!(inner.baz, 10);
        assert_eq!(inner.array, [3, 4]);
    }

    #[test]
    fn write_errors() {
        let mut value = outer();

        let err = write(&path("Bar.Qux"), &mut value, 1_i32.into_boxed_reflect()).unwrap_err();
        assert_eq!(
            err,
            WriteError::NotFound {
                path: "Bar.Qux".into()
            }
        );

        let err = write(&path("Bar.Baz"), &mut value, 1_i64.into_boxed_reflect()).unwrap_err();
        assert_eq!(
            err,
            WriteError::MismatchedTypes {
                path: "Bar.Baz".into(),
                expected: "i32",
                found: "i64",
            }
        );
        assert_eq!(value, outer());
    }
}
