#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub(crate) mod cfg {
    /// Keeps its body only in Debug mode with the `debug` feature on.
    ///
    /// The `if { .. } else { .. }` form selects one of two bodies instead.
    #[cfg(all(debug_assertions, feature = "debug"))]
    macro_rules! debug {
        (if { $($yes:tt)* } else { $($no:tt)* }) => { $($yes)* };
        ($($yes:tt)*) => { $($yes)* };
    }

    #[cfg(not(all(debug_assertions, feature = "debug")))]
    macro_rules! debug {
        (if { $($yes:tt)* } else { $($no:tt)* }) => { $($no)* };
        ($($yes:tt)*) => {};
    }

    pub(crate) use debug;
}

// -----------------------------------------------------------------------------
// Extern Self

// Derive output refers to `::sw_reflect`, which must also resolve
// inside this crate.
extern crate self as sw_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use sw_reflect_derive as derive;
