use core::fmt;

use thiserror::Error;

use crate::info::{IndirectionInfo, MapInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kinds of reflected values.
///
/// Obtained through [`Reflect::reflect_kind`], [`ReflectRef::kind`],
/// [`ReflectMut::kind`] or [`TypeInfo::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
/// [`ReflectMut::kind`]: crate::ops::ReflectMut::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// String-keyed entries, see [`Map`](crate::ops::Map).
    Map,
    /// A possibly empty reference to another value,
    /// see [`Indirection`](crate::ops::Indirection).
    Indirection,
    /// A leaf.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Map => f.pad("Map"),
            Self::Indirection => f.pad("Indirection"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// A value or type info was not of the expected [`ReflectKind`].
#[non_exhaustive]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time shape of a reflected type.
///
/// Obtained through [`Typed::type_info`] when the type is known,
/// or [`DynamicTyped::reflect_type_info`] from a value.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Map(MapInfo),
    Indirection(IndirectionInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_indirection: Indirection => IndirectionInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the described [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Indirection(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the [`ReflectKind`] of the described type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Map(_) => ReflectKind::Map,
            Self::Indirection(_) => ReflectKind::Indirection,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Follows indirection targets down to the first non-indirection type.
    ///
    /// ```
    /// use sw_reflect::info::{Typed, ReflectKind};
    ///
    /// let info = <Option<Box<u8>>>::type_info().pointee();
    /// assert!(info.type_is::<u8>());
    /// ```
    pub fn pointee(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Indirection(indirection) = info {
            info = indirection.target_info();
        }
        info
    }

    /// Returns the [`TypeId`](core::any::TypeId) of the described type.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Returns `true` if the described type is `T`.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the full path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the short name of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }
}
