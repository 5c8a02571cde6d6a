//! Eager quick-find implementation.
//!
//! Stores the component identifier of every site explicitly, so `find` is a
//! single array read and `connected` a comparison of two of them. The price
//! is paid on `union`, which relabels every site of the absorbed component
//! in one linear scan.

use std::fmt;

use crate::{
    display::write_aligned_rows,
    error::Result,
    union_find::UnionFind,
};

/// Disjoint-set structure with constant-time `find` and linear-time `union`.
///
/// Suits workloads dominated by connectivity queries. For union-heavy
/// workloads prefer [`crate::WeightedQuickUnionUF`].
///
/// After `union(p, q)` the surviving component identifier is always the one
/// `q` carried beforehand; `p`'s old identifier disappears from the
/// structure. The connectivity relation is symmetric, the surviving
/// identifier is not.
///
/// # Examples
/// ```
/// use tsunagi_core::{QuickFindUF, UnionFind};
///
/// let mut uf = QuickFindUF::new(4);
/// assert_eq!(uf.components(), 4);
/// uf.union(0, 1)?;
/// assert!(uf.connected(0, 1)?);
/// assert_eq!(uf.find(0)?, 1);
/// assert_eq!(uf.components(), 3);
/// # Ok::<(), tsunagi_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickFindUF {
    /// `id[i]` is the component identifier currently assigned to site `i`.
    id: Vec<usize>,
    components: usize,
}

impl QuickFindUF {
    /// Creates a universe of `sites` sites, each in its own component.
    ///
    /// A universe of zero sites is valid and has zero components.
    ///
    /// # Examples
    /// ```
    /// use tsunagi_core::{QuickFindUF, UnionFind};
    ///
    /// let uf = QuickFindUF::new(10);
    /// assert_eq!(uf.len(), 10);
    /// assert_eq!(uf.components(), 10);
    /// ```
    #[must_use]
    pub fn new(sites: usize) -> Self {
        Self {
            id: (0..sites).collect(),
            components: sites,
        }
    }
}

impl UnionFind for QuickFindUF {
    fn len(&self) -> usize {
        self.id.len()
    }

    fn components(&self) -> usize {
        self.components
    }

    /// Returns `p`'s component identifier in O(1). Never mutates despite
    /// the `&mut self` the trait requires.
    fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        self.validate(p)?;
        self.validate(q)?;

        let p_id = self.id[p];
        let q_id = self.id[q];
        if p_id == q_id {
            return Ok(());
        }

        // Rename p's component to q's identifier.
        for entry in &mut self.id {
            if *entry == p_id {
                *entry = q_id;
            }
        }
        self.components -= 1;
        Ok(())
    }
}

impl fmt::Display for QuickFindUF {
    /// Renders two aligned rows: site indices and their component
    /// identifiers. Diagnostic only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sites: Vec<usize> = (0..self.id.len()).collect();
        write_aligned_rows(f, &[("site", &sites), ("id", &self.id)])
    }
}
