//! The disjoint-set trait shared by both implementations.
//!
//! Callers pick a concrete structure at construction time and program
//! against [`UnionFind`] from then on; the driver binary holds a boxed
//! trait object for exactly this reason.

use std::fmt;

use crate::error::{Result, UnionFindError};

/// A partition of the sites `0..n` into disjoint components.
///
/// The partition only ever coarsens: a successful [`UnionFind::union`]
/// merges two components, nothing ever splits one, and
/// [`UnionFind::components`] is monotonically non-increasing.
///
/// `find` and `connected` take `&mut self` because the weighted
/// implementation compresses parent chains while answering them. The
/// quick-find implementation never exercises that liberty, but the trait
/// signature must admit the mutating read.
///
/// The `Display` supertrait renders the structure's internal state as
/// aligned rows for diagnostics; the rendering is not part of the
/// algorithmic contract.
///
/// # Examples
/// ```
/// use tsunagi_core::{UnionFind, WeightedQuickUnionUF};
///
/// let mut uf = WeightedQuickUnionUF::new(5);
/// uf.union(0, 1)?;
/// uf.union(2, 3)?;
/// uf.union(1, 3)?;
/// assert_eq!(uf.components(), 2);
/// assert!(uf.connected(0, 2)?);
/// assert!(!uf.connected(0, 4)?);
/// # Ok::<(), tsunagi_core::UnionFindError>(())
/// ```
pub trait UnionFind: fmt::Display {
    /// Returns the number of sites in the universe.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` when the universe contains no sites.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    fn components(&self) -> usize;

    /// Returns the canonical representative of `p`'s component.
    ///
    /// For [`crate::QuickFindUF`] this is the stored component identifier;
    /// for [`crate::WeightedQuickUnionUF`] it is the root of `p`'s tree,
    /// and the lookup halves the path it walks as a side effect.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when `p` is not a site.
    fn find(&mut self, p: usize) -> Result<usize>;

    /// Merges the component containing `p` with the component containing `q`.
    ///
    /// A no-op when the two sites are already connected; otherwise the
    /// component count drops by exactly one.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either site is out of
    /// bounds. Both sites are validated before any mutation.
    fn union(&mut self, p: usize, q: usize) -> Result<()>;

    /// Returns `true` when the two sites are in the same component.
    ///
    /// On [`crate::WeightedQuickUnionUF`] this may compress parent chains
    /// even though it is logically a query.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when either site is out of
    /// bounds. Both sites are validated before any lookup, so a failed
    /// call never mutates the structure.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Checks that `p` names a site in the universe.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfRange`] when it does not.
    fn validate(&self, p: usize) -> Result<()> {
        if p < self.len() {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange {
                index: p,
                sites: self.len(),
            })
        }
    }
}
