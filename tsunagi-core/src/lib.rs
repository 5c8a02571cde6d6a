//! Tsunagi core library.
//!
//! Disjoint-set (union-find) structures over a fixed universe of `n`
//! integer-labelled sites `0..n`. Two interchangeable implementations are
//! provided behind the [`UnionFind`] trait:
//!
//! - [`QuickFindUF`] answers `find` in constant time by storing an explicit
//!   component identifier per site, at the cost of a linear scan on every
//!   `union`. It suits workloads that query far more than they merge.
//! - [`WeightedQuickUnionUF`] keeps a forest of parent pointers balanced by
//!   union-by-size and flattened by path halving, giving near-constant
//!   amortised `find` and `union`. It is the default choice.
//!
//! Both maintain a partition of the universe: once two sites are connected
//! they stay connected for the lifetime of the structure, and the component
//! count only ever decreases.
//!
//! Note that [`UnionFind::find`] and [`UnionFind::connected`] on
//! [`WeightedQuickUnionUF`] shorten parent chains as a side effect. They are
//! mutating reads and are not safe to call concurrently without external
//! synchronisation.

mod display;
mod error;
mod quick_find;
mod union_find;
mod weighted;

pub use crate::{
    error::{Result, UnionFindError, UnionFindErrorCode},
    quick_find::QuickFindUF,
    union_find::UnionFind,
    weighted::WeightedQuickUnionUF,
};

#[cfg(test)]
mod tests;
