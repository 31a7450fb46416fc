use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Indirection;

/// Type info of an [`Indirection`], linking to the type it points at.
///
/// Kept even when a value has no target, so the layout behind an empty
/// `Option<Box<T>>` can still be described.
#[derive(Clone, Debug)]
pub struct IndirectionInfo {
    ty: Type,
    target_ty: Type,
    target_info: fn() -> &'static TypeInfo,
}

impl IndirectionInfo {
    impl_type_fn!(ty);

    /// Creates the info of `T`, an indirection to `U`.
    pub const fn new<T: Indirection + TypePath, U: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            target_ty: Type::of::<U>(),
            target_info: U::type_info,
        }
    }

    /// Returns the target [`Type`].
    #[inline]
    pub const fn target_ty(&self) -> &Type {
        &self.target_ty
    }

    /// Returns the [`TypeInfo`] of the target.
    #[inline]
    pub fn target_info(&self) -> &'static TypeInfo {
        (self.target_info)()
    }
}
