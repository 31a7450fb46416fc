use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`TypeInfo`] of a type.
///
/// Implemented by `#[derive(Reflect)]`; manual implementations usually keep
/// the info in a [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`].
///
/// ```
/// use sw_reflect::info::{Typed, ReflectKind};
///
/// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Indirection);
/// assert_eq!(<String>::type_info().kind(), ReflectKind::Opaque);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe counterpart of [`Typed`], implemented for every `Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
