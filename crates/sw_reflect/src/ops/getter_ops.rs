use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::eq_ignore_case;

// -----------------------------------------------------------------------------
// MethodInfo

/// Whether a method can be called by the getter walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Takes only `&self` and returns one owned value.
    Getter,
    /// Any other public method. It is listed so that path segments naming
    /// it can be recognized and skipped.
    Other,
}

/// A public method exposed through [`Getters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    name: &'static str,
    kind: MethodKind,
}

impl MethodInfo {
    /// Describes a getter called `name`.
    #[inline]
    pub const fn getter(name: &'static str) -> Self {
        Self {
            name,
            kind: MethodKind::Getter,
        }
    }

    /// Describes a non-getter method called `name`.
    #[inline]
    pub const fn other(name: &'static str) -> Self {
        Self {
            name,
            kind: MethodKind::Other,
        }
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`MethodKind`].
    #[inline]
    pub const fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Returns `true` for [`MethodKind::Getter`].
    #[inline]
    pub const fn is_getter(&self) -> bool {
        matches!(self.kind, MethodKind::Getter)
    }
}

// -----------------------------------------------------------------------------
// Getters

/// Runtime access to the public methods of a type.
///
/// Implemented by the `#[reflect_getters]` attribute on an inherent impl
/// block; add `#[reflect(getters)]` to the derive so that
/// [`Reflect::reflect_getters`] finds it.
///
/// ```
/// use sw_reflect::Reflect;
/// use sw_reflect::derive::{Reflect, reflect_getters};
///
/// #[derive(Reflect)]
/// #[reflect(getters)]
/// struct Greeter;
///
/// #[reflect_getters]
/// impl Greeter {
///     pub fn greeting(&self) -> String {
///         "hello".into()
///     }
///
///     pub fn greet(&self, name: &str) -> String {
///         format!("hello {name}")
///     }
/// }
///
/// let getters = Greeter.reflect_getters().unwrap();
/// let (index, info) = getters.method("GREETING").unwrap();
/// assert!(info.is_getter());
/// let value = getters.call_getter(index).unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "hello");
///
/// assert!(!getters.method("greet").unwrap().1.is_getter());
/// ```
///
/// [`Reflect::reflect_getters`]: crate::Reflect::reflect_getters
pub trait Getters {
    /// Returns every exposed method, in declaration order.
    fn methods(&self) -> &'static [MethodInfo];

    /// Calls the getter at `index` in [`methods`](Getters::methods).
    ///
    /// Returns `None` if `index` is out of range or not a getter.
    fn call_getter(&self, index: usize) -> Option<Box<dyn Reflect>>;

    /// Finds the first method whose name matches `name` ignoring case.
    fn method(&self, name: &str) -> Option<(usize, &'static MethodInfo)> {
        self.methods()
            .iter()
            .enumerate()
            .find(|(_, info)| eq_ignore_case(info.name(), name))
    }

    /// Calls the getter whose name matches `name` ignoring case.
    fn call_getter_named(&self, name: &str) -> Option<Box<dyn Reflect>> {
        let (index, info) = self.method(name)?;
        if info.is_getter() {
            self.call_getter(index)
        } else {
            None
        }
    }
}
