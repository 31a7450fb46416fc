use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::{Getters, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose shape can be inspected and modified at runtime.
///
/// Every reflected value has a [kind](ReflectKind):
///
/// - [`Struct`]: named fields, usually through [`#[derive(Reflect)]`](crate::derive::Reflect).
/// - [`Map`]: string-keyed entries.
/// - [`Indirection`]: something that may point at another value, such as
///   `Option<T>` or `Box<T>`. An indirection with no target is *empty*.
/// - `Opaque`: a leaf.
///
/// Use [`reflect_ref`] and [`reflect_mut`] to get at the kind-specific view,
/// and the `downcast_*` methods on `dyn Reflect` to get back a concrete type.
///
/// ```rust
/// use sw_reflect::Reflect;
/// use sw_reflect::info::ReflectKind;
///
/// let value: Box<dyn Reflect> = Some(3_u8).into_boxed_reflect();
/// assert_eq!(value.reflect_kind(), ReflectKind::Indirection);
/// assert!(value.is::<Option<u8>>());
/// ```
///
/// # Manual implementation
///
/// Most methods have one obvious implementation:
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Map
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Map(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Map(self)
/// }
/// ```
///
/// [`Struct`]: crate::ops::Struct
/// [`Map`]: crate::ops::Map
/// [`Indirection`]: crate::ops::Indirection
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    ///
    /// ```
    /// use sw_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert_eq!(r.downcast_ref::<i32>(), Some(&32));
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` would be the id of the box itself.
    ///
    /// ```
    /// use sw_reflect::Reflect;
    /// use core::any::{Any, TypeId};
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    ///
    /// assert!(x.type_id() != TypeId::of::<i32>());
    /// assert!(x.ty_id() == TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces this value with `value` if both have the same type.
    ///
    /// No conversion is attempted; on a type mismatch `value` is handed back.
    ///
    /// ```
    /// use sw_reflect::Reflect;
    ///
    /// let mut x = 1_i64;
    /// assert!(x.set(5_i64.into_boxed_reflect()).is_ok());
    /// assert!(x.set(5_i32.into_boxed_reflect()).is_err());
    /// assert_eq!(x, 5);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the kind of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns the kind-specific immutable view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns the kind-specific mutable view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns the methods exposed through [`Getters`], if any.
    ///
    /// Derived types return `Some` when marked with `#[reflect(getters)]`.
    /// Indirections forward to their target.
    #[inline]
    fn reflect_getters(&self) -> Option<&dyn Getters> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// Opaque values write `Opaque(type_path)` unless the implementation
    /// overrides this.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Indirection(data) => impls::indirection_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// use sw_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// use sw_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = String::from("foo").into_boxed_reflect();
    /// assert_eq!(x.take::<String>().unwrap(), "foo");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn sw_reflect::Reflect"
    }

    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    /// The [`TypeInfo`] of `dyn Reflect` itself, an opaque type.
    ///
    /// Use [`DynamicTyped::reflect_type_info`] for the underlying value.
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`
/// for a type of the given kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
