use crate::Reflect;

/// A value that may refer to another value.
///
/// `Option<T>` and `Box<T>` are indirections. An indirection without a
/// target (`None`) is *empty*: path resolution stops there with "not found".
///
/// ```
/// use sw_reflect::ops::Indirection;
///
/// let some = Some(1_u8);
/// let none = None::<u8>;
/// assert_eq!(some.target().unwrap().downcast_ref::<u8>(), Some(&1));
/// assert!(none.target().is_none());
/// ```
pub trait Indirection: Reflect {
    /// Returns the value referred to, `None` when empty.
    fn target(&self) -> Option<&dyn Reflect>;

    /// Returns the value referred to mutably, `None` when empty.
    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;
}
