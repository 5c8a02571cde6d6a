//! Error types for the tsunagi core library.
//!
//! Defines the single error kind raised by disjoint-set operations and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

/// An error produced by [`crate::UnionFind`] operations.
///
/// Every operation that takes a site argument validates it eagerly, before
/// any mutation, so a failed call leaves the structure unchanged.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// A site argument fell outside the universe `[0, n)`.
    #[error("site {index} is out of bounds for a universe of {sites} sites")]
    OutOfRange {
        /// The offending site index supplied by the caller.
        index: usize,
        /// Number of sites in the universe.
        sites: usize,
    },
}

/// Stable codes describing [`UnionFindError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum UnionFindErrorCode {
    /// A site argument fell outside the universe `[0, n)`.
    OutOfRange,
}

impl UnionFindErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfRange => "UNION_FIND_OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for UnionFindErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UnionFindError {
    /// Retrieve the stable [`UnionFindErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> UnionFindErrorCode {
        match self {
            Self::OutOfRange { .. } => UnionFindErrorCode::OutOfRange,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, UnionFindError>;
