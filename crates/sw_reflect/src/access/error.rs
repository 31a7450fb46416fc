use alloc::string::String;

use thiserror::Error;

/// An error returned by [`try_set_field_value`](crate::access::try_set_field_value).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The path is degenerate or does not resolve to a value.
    #[error("no value at `{path}`")]
    NotFound { path: String },
    /// The value at the path has a different type than the new value.
    #[error("cannot write `{found}` to `{path}`, which holds `{expected}`")]
    MismatchedTypes {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl WriteError {
    /// Returns the path the write was attempted at.
    #[inline]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::MismatchedTypes { path, .. } => path,
        }
    }
}
