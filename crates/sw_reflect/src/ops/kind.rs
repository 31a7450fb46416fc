use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Indirection, Map, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Map(&'a dyn Map),
    Indirection(&'a dyn Indirection),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Map(&'a mut dyn Map),
    Indirection(&'a mut dyn Indirection),
    Opaque(&'a mut dyn Reflect),
}

// -----------------------------------------------------------------------------
// Cast methods

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ret:ty) => {
        #[doc = concat!("Returns the [`", stringify!($kind), "`] view, or an error for other kinds.")]
        #[inline]
        pub fn $name(self) -> Result<$ret, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_indirection: Indirection => &'a dyn Indirection);
    impl_cast_method!(as_opaque: Opaque => &'a dyn Reflect);

    /// Returns the [`ReflectKind`] of the viewed value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Map(_) => ReflectKind::Map,
            Self::Indirection(_) => ReflectKind::Indirection,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the viewed value as a plain reflected value.
    #[inline]
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::Map(value) => value,
            Self::Indirection(value) => value,
            Self::Opaque(value) => value,
        }
    }
}

impl<'a> ReflectMut<'a> {
    impl_cast_method!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(as_map: Map => &'a mut dyn Map);
    impl_cast_method!(as_indirection: Indirection => &'a mut dyn Indirection);
    impl_cast_method!(as_opaque: Opaque => &'a mut dyn Reflect);

    /// Returns the [`ReflectKind`] of the viewed value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Map(_) => ReflectKind::Map,
            Self::Indirection(_) => ReflectKind::Indirection,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the viewed value as a plain mutable reflected value.
    #[inline]
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::Map(value) => value,
            Self::Indirection(value) => value,
            Self::Opaque(value) => value,
        }
    }
}
