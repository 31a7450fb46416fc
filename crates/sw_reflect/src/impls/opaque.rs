use alloc::borrow::Cow;
use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// Implements `TypePath`, `Typed` and an opaque `Reflect` for
/// non-generic leaf types with a `Debug` impl.
macro_rules! impl_reflect_opaque {
    ($($ty:ty => $path:literal, $name:literal;)*) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_reflect_opaque! {
    () => "()", "()";
    bool => "bool", "bool";
    char => "char", "char";
    u8 => "u8", "u8";
    u16 => "u16", "u16";
    u32 => "u32", "u32";
    u64 => "u64", "u64";
    u128 => "u128", "u128";
    usize => "usize", "usize";
    i8 => "i8", "i8";
    i16 => "i16", "i16";
    i32 => "i32", "i32";
    i64 => "i64", "i64";
    i128 => "i128", "i128";
    isize => "isize", "isize";
    f32 => "f32", "f32";
    f64 => "f64", "f64";
    String => "alloc::string::String", "String";
    &'static str => "&str", "&str";
    Cow<'static, str> => "alloc::borrow::Cow<str>", "Cow<str>";
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn leaves_are_opaque() {
        assert_eq!(5_u8.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<String as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<&'static str>::type_path(), "&str");
    }

    #[test]
    fn set_requires_same_type() {
        let mut value = String::from("old");
        assert!(value.set(String::from("new").into_boxed_reflect()).is_ok());
        assert_eq!(value, "new");

        let rejected = value.set(1_i32.into_boxed_reflect()).unwrap_err();
        assert!(rejected.is::<i32>());
        assert_eq!(value, "new");
    }

    #[test]
    fn debug_uses_value() {
        let value: &dyn Reflect = &42_u16;
        assert_eq!(format!("{value:?}"), "42");
    }
}
