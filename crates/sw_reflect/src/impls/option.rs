use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{IndirectionInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Getters, Indirection};
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| ["core::option::Option<", T::type_path(), ">"].concat())
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| ["Option<", T::type_name(), ">"].concat())
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Indirection(IndirectionInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Indirection);

    #[inline]
    fn reflect_getters(&self) -> Option<&dyn Getters> {
        self.as_ref()?.reflect_getters()
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + Typed> Indirection for Option<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Indirection;

    #[test]
    fn option_type_path() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<Option<u8>>>::type_name(), "Option<Option<u8>>");
    }

    #[test]
    fn target_follows_variant() {
        let mut value = Some(3_i32);
        *value.target_mut().unwrap().downcast_mut::<i32>().unwrap() += 1;
        assert_eq!(value, Some(4));

        value = None;
        assert!(value.target().is_none());
        assert_eq!(format!("{:?}", value.as_reflect()), "None");
    }

    #[test]
    fn type_info_points_at_target() {
        let info = <Option<String>>::type_info().as_indirection().unwrap();
        assert!(info.target_ty().is::<String>());
    }
}
