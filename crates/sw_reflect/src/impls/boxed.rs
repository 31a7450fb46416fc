use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{IndirectionInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Getters, Indirection};
use crate::reflection::impl_reflect_cast_fn;

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| ["alloc::boxed::Box<", T::type_path(), ">"].concat())
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| ["Box<", T::type_name(), ">"].concat())
    }
}

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Indirection(IndirectionInfo::new::<Self, T>()))
    }
}

// A box is never empty; it is an indirection so that paths step through it
// the same way they step through `Option`.
impl<T: Reflect + Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Indirection);

    #[inline]
    fn reflect_getters(&self) -> Option<&dyn Getters> {
        (**self).reflect_getters()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Reflect + Typed> Indirection for Box<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }
}
