use crate::Reflect;
use crate::ops::eq_ignore_case;

// -----------------------------------------------------------------------------
// Struct trait

/// A value with named fields.
///
/// Implemented by `#[derive(Reflect)]` for structs with named fields
/// (and for unit structs, which have none). Field order is declaration order.
///
/// ```
/// use sw_reflect::derive::Reflect;
/// use sw_reflect::ops::Struct;
///
/// #[derive(Reflect)]
/// struct Foo { bar: u32 }
///
/// let foo = Foo { bar: 7 };
/// assert_eq!(foo.name_at(0), Some("bar"));
/// assert_eq!(foo.field_ignore_case("BAR").unwrap().downcast_ref::<u32>(), Some(&7));
/// ```
pub trait Struct: Reflect {
    /// Returns the field called `name` (exact match).
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field called `name` mutably (exact match).
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Iterates over `(name, value)` in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns the index of the first field whose name matches `name`
    /// ignoring case.
    fn index_ignore_case(&self, name: &str) -> Option<usize> {
        (0..self.field_len()).find(|&index| {
            self.name_at(index)
                .is_some_and(|field| eq_ignore_case(field, name))
        })
    }

    /// Returns the first field whose name matches `name` ignoring case.
    #[inline]
    fn field_ignore_case(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_at(self.index_ignore_case(name)?)
    }

    /// Returns the first field whose name matches `name` ignoring case, mutably.
    #[inline]
    fn field_ignore_case_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.index_ignore_case(name)?;
        self.field_at_mut(index)
    }
}

impl dyn Struct {
    /// Returns the field called `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns the field called `name` mutably, downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// Iterator over the `(name, value)` pairs of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates an iterator starting at the first field.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
