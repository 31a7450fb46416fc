use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::ops::Deref;

use crate::Reflect;
use crate::access::{FieldPath, miss};
use crate::ops::{Getters, MethodInfo};

// -----------------------------------------------------------------------------
// GetterValue

/// The result of a getter walk.
///
/// The root itself is returned [`Borrowed`](GetterValue::Borrowed) when no
/// segment named a getter; any getter call produces an
/// [`Owned`](GetterValue::Owned) value. Both deref to `dyn Reflect`.
pub enum GetterValue<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl GetterValue<'_> {
    /// Returns `true` if the value was produced by a getter.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns the value produced by a getter, `None` for the borrowed root.
    #[inline]
    pub fn into_owned(self) -> Option<Box<dyn Reflect>> {
        match self {
            Self::Borrowed(_) => None,
            Self::Owned(value) => Some(value),
        }
    }
}

impl Deref for GetterValue<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &dyn Reflect {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => &**value,
        }
    }
}

impl fmt::Debug for GetterValue<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Resolution

pub(crate) fn resolve_getter<'a>(
    path: &FieldPath,
    root: &'a dyn Reflect,
) -> Option<GetterValue<'a>> {
    let last = path.len() - 1;
    let mut current = GetterValue::Borrowed(root);
    let mut parent: Option<GetterValue<'a>> = None;
    let mut method: Option<&'static MethodInfo> = None;

    for (depth, segment) in path.segment_slice().iter().enumerate() {
        let Some(getters) = current.reflect_getters() else {
            return miss(path, depth, "no methods");
        };
        let Some((index, info)) = getters.method(segment) else {
            return miss(path, depth, "no such method");
        };
        if !info.is_getter() {
            continue;
        }
        let Some(value) = getters.call_getter(index) else {
            return miss(path, depth, "getter call failed");
        };

        let has_methods = value.reflect_getters().is_some();
        parent = Some(core::mem::replace(&mut current, GetterValue::Owned(value)));
        if !has_methods && depth != last {
            return miss(path, depth, "descent past a value without methods");
        }
        method = Some(info);
    }

    if let (Some(parent), Some(method)) = (&parent, method)
        && is_textual(&*current)
        && let Some(getters) = parent.reflect_getters()
        && let Some(bytes) = bytes_shadow(getters, method.name())
    {
        return Some(GetterValue::Owned(bytes));
    }

    Some(current)
}

/// Calls the `<name>_bytes` getter next to `name`, if there is one.
fn bytes_shadow(getters: &dyn Getters, name: &str) -> Option<Box<dyn Reflect>> {
    getters.call_getter_named(&format!("{name}_bytes"))
}

fn is_textual(value: &dyn Reflect) -> bool {
    if value.is::<String>() || value.is::<&'static str>() || value.is::<Cow<'static, str>>() {
        return true;
    }

    #[cfg(feature = "json")]
    if let Some(serde_json::Value::String(_)) = value.downcast_ref::<serde_json::Value>() {
        return true;
    }

    false
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::resolve_getter;
    use crate::Reflect;
    use crate::access::FieldPath;
    use crate::derive::{Reflect, reflect_getters};

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
            Plain { baz: 0 }
        }

        pub fn label(&self) -> &'static str {
            "label"
        }

        pub fn scaled(&self, factor: i32) -> i32 {
            factor * 2
        }
    }

    #[derive(Reflect)]
    #[reflect(getters)]
    struct Plain {
        baz: i32,
    }

    #[reflect_getters]
    impl Plain {
        pub fn baz(&self) -> i32 {
            5
        }
    }

    fn getter(s: &str, root: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        let path = FieldPath::parse(s).unwrap();
        resolve_getter(&path, root).map(|value| match value.into_owned() {
            Some(value) => value,
            None => panic!("`{s}` returned the root"),
        })
    }

    #[test]
    fn bytes_shadow_wins() {
        let value = getter("Foo", &Decorated).unwrap();
        assert_eq!(value.downcast_ref::<Vec<u8>>().unwrap(), b"foo");

        let value = getter("foo_bytes", &Decorated).unwrap();
        assert_eq!(value.downcast_ref::<Vec<u8>>().unwrap(), b"foo");
    }

    #[test]
    fn text_without_shadow() {
        let value = getter("label", &Decorated).unwrap();
        assert_eq!(value.downcast_ref::<&'static str>(), Some(&"label"));
    }

    #[test]
    fn nested_getters() {
        let value = getter("Bar.Baz", &Decorated).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));

        // Getters are found through indirections.
        let boxed = Some(Box::new(Decorated));
        let value = getter("bar.baz", &boxed).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn getter_misses() {
        let path = FieldPath::parse("Foo.Bar.Baz").unwrap();
        assert!(resolve_getter(&path, &Decorated).is_none());

        let path = FieldPath::parse("Qux").unwrap();
        assert!(resolve_getter(&path, &Decorated).is_none());

        let path = FieldPath::parse("Foo").unwrap();
        assert!(resolve_getter(&path, &5_i32).is_none());
    }

    #[test]
    fn non_getter_segments_are_skipped() {
        let value = getter("scaled.bar.baz", &Decorated).unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));

        let path = FieldPath::parse("Scaled").unwrap();
        let value = resolve_getter(&path, &Decorated).unwrap();
        assert!(!value.is_owned());
        assert!(value.is::<Decorated>());

        // Still an ordinary method.
        assert_eq!(Decorated.scaled(3), 6);
    }

    #[cfg(feature = "json")]
    #[derive(Reflect)]
    #[reflect(getters)]
    struct Document;

    #[cfg(feature = "json")]
    #[reflect_getters]
    impl Document {
        pub fn title(&self) -> serde_json::Value {
            serde_json::json!("title")
        }

        pub fn title_bytes(&self) -> Vec<u8> {
            b"title".to_vec()
        }

        pub fn count(&self) -> serde_json::Value {
            serde_json::json!(3)
        }

        pub fn count_bytes(&self) -> Vec<u8> {
            b"3".to_vec()
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_string_shadowed_by_bytes() {
        let value = getter("Title", &Document).unwrap();
        assert_eq!(value.downcast_ref::<Vec<u8>>().unwrap(), b"title");

        let value = getter("count", &Document).unwrap();
        assert_eq!(
            value.downcast_ref::<serde_json::Value>(),
            Some(&serde_json::json!(3))
        );
    }
}
