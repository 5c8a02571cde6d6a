//! Weighted quick-union with path halving.
//!
//! Components are rooted trees in a parent-pointer forest. Union-by-size
//! keeps every tree at most logarithmically deep, and each `find` halves
//! the path it walks by pointing sites at their grandparents, so over a
//! long operation sequence both `find` and `union` run in effectively
//! constant amortised time.

use std::fmt;

use crate::{
    display::write_aligned_rows,
    error::Result,
    union_find::UnionFind,
};

/// Disjoint-set structure with near-constant amortised `find` and `union`.
///
/// `find` and `connected` are mutating reads: they shorten parent chains
/// as they walk them. That side effect is the mechanism behind the
/// amortised bound, not an accident, but it does mean the structure must
/// not be shared across threads without external synchronisation.
///
/// # Examples
/// ```
/// use tsunagi_core::{UnionFind, WeightedQuickUnionUF};
///
/// let mut uf = WeightedQuickUnionUF::new(4);
/// uf.union(0, 1)?;
/// uf.union(2, 3)?;
/// assert_eq!(uf.components(), 2);
/// assert!(uf.connected(1, 0)?);
/// assert!(!uf.connected(1, 2)?);
/// # Ok::<(), tsunagi_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedQuickUnionUF {
    /// `parent[i]` is the parent of site `i`; a site is a root when it is
    /// its own parent.
    parent: Vec<usize>,
    /// `size[r]` is the population of the tree rooted at `r`. Only
    /// meaningful at roots; stale below them.
    size: Vec<usize>,
    components: usize,
}

impl WeightedQuickUnionUF {
    /// Creates a universe of `sites` sites, each its own root with size 1.
    ///
    /// A universe of zero sites is valid and has zero components.
    ///
    /// # Examples
    /// ```
    /// use tsunagi_core::{UnionFind, WeightedQuickUnionUF};
    ///
    /// let uf = WeightedQuickUnionUF::new(10);
    /// assert_eq!(uf.len(), 10);
    /// assert_eq!(uf.components(), 10);
    /// ```
    #[must_use]
    pub fn new(sites: usize) -> Self {
        Self {
            parent: (0..sites).collect(),
            size: vec![1; sites],
            components: sites,
        }
    }
}

impl UnionFind for WeightedQuickUnionUF {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn components(&self) -> usize {
        self.components
    }

    /// Walks to the root of `p`'s tree, halving the path on the way up.
    fn find(&mut self, p: usize) -> Result<usize> {
        self.validate(p)?;
        let mut current = p;
        while current != self.parent[current] {
            // Point at the grandparent before stepping up.
            self.parent[current] = self.parent[self.parent[current]];
            current = self.parent[current];
        }
        Ok(current)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<()> {
        self.validate(p)?;
        self.validate(q)?;

        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }

        // Attach the smaller tree under the larger; on a size tie, p's
        // root goes under q's.
        if self.size[root_q] < self.size[root_p] {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        } else {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        }
        self.components -= 1;
        Ok(())
    }
}

impl fmt::Display for WeightedQuickUnionUF {
    /// Renders three aligned rows: site indices, parent pointers, and the
    /// size bookkeeping. Diagnostic only; sizes below roots are stale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sites: Vec<usize> = (0..self.parent.len()).collect();
        write_aligned_rows(
            f,
            &[("site", &sites), ("parent", &self.parent), ("size", &self.size)],
        )
    }
}
