use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Type info of a [`Map`]: the key type and the value type.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    value_ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates the info of map `T` with keys `K` and values `V`.
    pub const fn new<T: Map + TypePath, K: TypePath + ?Sized, V: Typed + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            key_ty: Type::of::<K>(),
            value_ty: Type::of::<V>(),
            value_info: V::type_info,
        }
    }

    /// Returns the key [`Type`].
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the value [`Type`].
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
