use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::Reflect;
use crate::access::{GetterValue, WriteError, getter, resolve};

// -----------------------------------------------------------------------------
// Error

/// An error returned when a path string cannot be parsed.
///
/// The string-taking functions of [`access`](crate::access) treat both
/// cases as "not found".
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The path has no segments at all.
    #[error("the path is empty")]
    Empty,
    /// Two dots are adjacent, or the path starts or ends with a dot.
    #[error("empty segment at byte offset {offset}")]
    EmptySegment { offset: usize },
}

// -----------------------------------------------------------------------------
// FieldPath

/// A parsed, reusable dotted path.
///
/// Segments are split on `.` and case-folded once, so repeated lookups
/// with the same path do not re-parse the string.
///
/// # Examples
///
/// ```
/// use sw_reflect::access::FieldPath;
/// use sw_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let path: FieldPath = "Point.X".parse::<FieldPath>().unwrap();
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["point", "x"]);
///
/// let x = FieldPath::parse("X").unwrap();
/// let mut point = Point { x: 1, y: 2 };
/// assert_eq!(x.resolve(&point).unwrap().downcast_ref::<i32>(), Some(&1));
///
/// x.write(&mut point, 10_i32).unwrap();
/// assert_eq!(point.x, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    source: Box<str>,
    segments: Box<[Box<str>]>,
}

impl FieldPath {
    /// Parses `path`, splitting on `.` and folding every segment to lower case.
    ///
    /// ```
    /// use sw_reflect::access::{FieldPath, PathError};
    ///
    /// assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
    /// assert_eq!(
    ///     FieldPath::parse("a..b"),
    ///     Err(PathError::EmptySegment { offset: 2 }),
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        let mut offset = 0;
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(PathError::EmptySegment { offset });
            }
            segments.push(segment.to_lowercase().into_boxed_str());
            offset += segment.len() + 1;
        }

        Ok(Self {
            source: path.into(),
            segments: segments.into_boxed_slice(),
        })
    }

    /// Returns the string this path was parsed from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Iterates over the case-folded segments.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| &**segment)
    }

    /// Returns the number of segments, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub(crate) fn segment_slice(&self) -> &[Box<str>] {
        &self.segments
    }

    /// Resolves this path against `root`.
    ///
    /// See [`field_value`](crate::access::field_value).
    #[inline]
    pub fn resolve<'a>(&self, root: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        resolve::resolve(self, root)
    }

    /// Resolves this path against `root`, mutably.
    ///
    /// See [`field_value_mut`](crate::access::field_value_mut).
    #[inline]
    pub fn resolve_mut<'a>(&self, root: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        resolve::resolve_mut(self, root)
    }

    /// Overwrites the value at this path with `value`.
    ///
    /// See [`try_set_field_value`](crate::access::try_set_field_value).
    pub fn write<T: Reflect>(&self, root: &mut dyn Reflect, value: T) -> Result<(), WriteError> {
        resolve::write(self, root, value.into_boxed_reflect())
    }

    /// Resolves this path against the getters of `root`.
    ///
    /// See [`getter_value`](crate::access::getter_value).
    #[inline]
    pub fn call_getters<'a>(&self, root: &'a dyn Reflect) -> Option<GetterValue<'a>> {
        getter::resolve_getter(self, root)
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = PathError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for FieldPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FieldPath, PathError};
    use alloc::vec::Vec;

    #[test]
    fn segments_are_folded() {
        let path = FieldPath::parse("Foo.BAR.baz").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.segments().collect::<Vec<_>>(), ["foo", "bar", "baz"]);
        assert_eq!(path.as_str(), "Foo.BAR.baz");
        assert_eq!(alloc::format!("{path}"), "Foo.BAR.baz");
    }

    #[test]
    fn unicode_folding() {
        let path = FieldPath::parse("Ärger").unwrap();
        assert_eq!(path.segments().next(), Some("ärger"));
    }

    #[test]
    fn degenerate_paths() {
        assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
        assert_eq!(FieldPath::parse("."), Err(PathError::EmptySegment { offset: 0 }));
        assert_eq!(FieldPath::parse(".a"), Err(PathError::EmptySegment { offset: 0 }));
        assert_eq!(FieldPath::parse("a."), Err(PathError::EmptySegment { offset: 2 }));
        assert_eq!(FieldPath::parse("ab..c"), Err(PathError::EmptySegment { offset: 3 }));
    }

    #[test]
    fn error_messages() {
        assert_eq!(alloc::format!("{}", PathError::Empty), "the path is empty");
        assert_eq!(
            alloc::format!("{}", PathError::EmptySegment { offset: 4 }),
            "empty segment at byte offset 4",
        );
    }
}
