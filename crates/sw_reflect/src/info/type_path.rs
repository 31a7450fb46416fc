use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A stable name for a type.
///
/// Unlike [`core::any::type_name`], the result is fixed by the
/// implementation and does not depend on the compiler version.
///
/// - `type_path`: full path, e.g. `alloc::vec::Vec<u8>`.
/// - `type_name`: short name, e.g. `Vec<u8>`.
///
/// ```
/// use sw_reflect::info::TypePath;
///
/// assert_eq!(<Option<String>>::type_path(), "core::option::Option<alloc::string::String>");
/// assert_eq!(<Option<String>>::type_name(), "Option<String>");
/// ```
pub trait TypePath: 'static {
    /// Returns the full path of the type.
    fn type_path() -> &'static str;

    /// Returns the short name of the type.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe counterpart of [`TypePath`], implemented for every `TypePath`.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the [`TypePath`] functions of the type.
///
/// Equality and hashing only look at the [`TypeId`].
#[derive(Copy, Clone)]
pub struct Type {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_id: TypeId,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `ty`-based helpers (`ty_id`, `type_is`, `type_path`, ...)
/// for a type-info struct with a `Type` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) this information describes.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the [`TypeId`](core::any::TypeId) of the described type.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the full path of the described type.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the short name of the described type.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::info::{Type, Typed};

    #[test]
    fn type_compares_by_id() {
        let ty = Type::of::<Option<Box<String>>>();
        assert_eq!(ty, Type::of::<Option<Box<String>>>());
        assert_ne!(ty, Type::of::<Option<String>>());
        assert!(ty.is::<Option<Box<String>>>());
        assert_eq!(ty.name(), "Option<Box<String>>");
        assert_eq!(
            alloc::format!("{ty:?}"),
            "core::option::Option<alloc::boxed::Box<alloc::string::String>>",
        );
    }

    #[test]
    fn indirection_target_type() {
        let info = <Option<Box<u8>>>::type_info().as_indirection().unwrap();
        assert_eq!(*info.target_ty(), Type::of::<Box<u8>>());
        assert_eq!(info.target_ty().path(), "alloc::boxed::Box<u8>");
    }
}
