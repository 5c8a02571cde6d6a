//! Black-box tests exercising both disjoint-set implementations through
//! the [`UnionFind`] trait, plus a lockstep property suite pinning the two
//! to identical observable behaviour.

use proptest::prelude::*;
use proptest::sample::Index;
use rstest::rstest;

use crate::{QuickFindUF, UnionFind, UnionFindError, WeightedQuickUnionUF};

type Factory = fn(usize) -> Box<dyn UnionFind>;

fn quick_find(sites: usize) -> Box<dyn UnionFind> {
    Box::new(QuickFindUF::new(sites))
}

fn weighted(sites: usize) -> Box<dyn UnionFind> {
    Box::new(WeightedQuickUnionUF::new(sites))
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn fresh_universe_is_fully_disconnected(#[case] make: Factory) {
    let mut uf = make(6);
    assert_eq!(uf.len(), 6);
    assert_eq!(uf.components(), 6);
    for site in 0..6 {
        assert_eq!(uf.find(site).expect("site is valid"), site);
    }
    for p in 0..6 {
        for q in 0..6 {
            let expected = p == q;
            assert_eq!(uf.connected(p, q).expect("sites are valid"), expected);
        }
    }
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn connectivity_is_reflexive(#[case] make: Factory) {
    let mut uf = make(4);
    uf.union(0, 1).expect("union must succeed");
    for p in 0..4 {
        assert!(uf.connected(p, p).expect("site is valid"));
    }
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn connectivity_is_symmetric(#[case] make: Factory) {
    let mut uf = make(5);
    uf.union(1, 2).expect("union must succeed");
    uf.union(3, 4).expect("union must succeed");
    for p in 0..5 {
        for q in 0..5 {
            assert_eq!(
                uf.connected(p, q).expect("sites are valid"),
                uf.connected(q, p).expect("sites are valid"),
                "asymmetric answer for ({p}, {q})"
            );
        }
    }
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn connectivity_is_transitive(#[case] make: Factory) {
    let mut uf = make(4);
    uf.union(0, 1).expect("union must succeed");
    uf.union(1, 2).expect("union must succeed");
    assert!(uf.connected(0, 2).expect("sites are valid"));
    assert!(!uf.connected(0, 3).expect("sites are valid"));
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn union_is_idempotent(#[case] make: Factory) {
    let mut uf = make(5);
    uf.union(1, 3).expect("union must succeed");
    assert_eq!(uf.components(), 4);

    uf.union(1, 3).expect("repeat union must succeed");
    uf.union(3, 1).expect("reversed repeat must succeed");
    assert_eq!(uf.components(), 4);
    assert!(uf.connected(1, 3).expect("sites are valid"));
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn components_shrink_by_one_per_effective_union(#[case] make: Factory) {
    let mut uf = make(8);
    let pairs = [(0, 1), (2, 3), (1, 3), (0, 2), (4, 5), (5, 4), (6, 7)];
    let mut effective = 0;
    for (p, q) in pairs {
        if !uf.connected(p, q).expect("sites are valid") {
            effective += 1;
        }
        uf.union(p, q).expect("union must succeed");
        assert_eq!(uf.components(), 8 - effective);
    }
    assert_eq!(uf.components(), 3);
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn merges_chain_into_two_components(#[case] make: Factory) {
    let mut uf = make(5);
    uf.union(0, 1).expect("union must succeed");
    uf.union(2, 3).expect("union must succeed");
    uf.union(1, 3).expect("union must succeed");
    assert_eq!(uf.components(), 2);
    assert!(uf.connected(0, 2).expect("sites are valid"));
    assert!(!uf.connected(0, 4).expect("sites are valid"));
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn single_site_universe(#[case] make: Factory) {
    let mut uf = make(1);
    assert_eq!(uf.components(), 1);
    assert!(uf.connected(0, 0).expect("site is valid"));
    assert_eq!(uf.find(0).expect("site is valid"), 0);
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn empty_universe_rejects_every_site(#[case] make: Factory) {
    let mut uf = make(0);
    assert!(uf.is_empty());
    assert_eq!(uf.components(), 0);
    let err = uf.find(0).expect_err("no site is valid");
    assert_eq!(err, UnionFindError::OutOfRange { index: 0, sites: 0 });
}

#[rstest]
#[case::quick_find(quick_find as Factory)]
#[case::weighted(weighted as Factory)]
fn out_of_range_arguments_fail_without_mutating(#[case] make: Factory) {
    let mut uf = make(5);
    // Give the structure some shape so an accidental mutation would show
    // up in the dump.
    uf.union(0, 1).expect("union must succeed");
    uf.union(1, 2).expect("union must succeed");
    let snapshot = uf.to_string();
    let components = uf.components();

    let err = uf.find(5).expect_err("index == len must fail");
    assert_eq!(err, UnionFindError::OutOfRange { index: 5, sites: 5 });
    assert_eq!(err.code().as_str(), "UNION_FIND_OUT_OF_RANGE");

    uf.connected(0, 5).expect_err("invalid second site must fail");
    uf.connected(usize::MAX, 0)
        .expect_err("invalid first site must fail");
    uf.union(3, 5).expect_err("invalid union target must fail");
    uf.union(5, 3).expect_err("invalid union source must fail");

    assert_eq!(uf.to_string(), snapshot, "failed calls must not mutate");
    assert_eq!(uf.components(), components);
}

#[test]
fn quick_find_dump_shows_sites_and_identifiers() {
    let mut uf = QuickFindUF::new(3);
    uf.union(0, 1).expect("union must succeed");
    assert_eq!(uf.to_string(), "site 0 1 2\nid   1 1 2");
}

#[test]
fn weighted_dump_shows_sites_parents_and_sizes() {
    let mut uf = WeightedQuickUnionUF::new(3);
    uf.union(0, 1).expect("union must succeed");
    assert_eq!(
        uf.to_string(),
        "site   0 1 2\nparent 1 1 2\nsize   1 2 1"
    );
}

#[test]
fn dump_columns_align_for_multi_digit_sites() {
    let uf = QuickFindUF::new(11);
    assert_eq!(
        uf.to_string(),
        "site  0  1  2  3  4  5  6  7  8  9 10\nid    0  1  2  3  4  5  6  7  8  9 10"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The two implementations must be observationally identical: the same
    /// operation sequence yields the same `connected` answers and the same
    /// component count at every step.
    #[test]
    fn implementations_agree_on_random_workloads(
        sites in 1usize..24,
        ops in proptest::collection::vec((any::<Index>(), any::<Index>()), 0..64),
    ) {
        let mut eager = QuickFindUF::new(sites);
        let mut forest = WeightedQuickUnionUF::new(sites);
        let mut previous_components = sites;

        for (a, b) in &ops {
            let p = a.index(sites);
            let q = b.index(sites);

            prop_assert_eq!(
                eager.connected(p, q).expect("sites are valid"),
                forest.connected(p, q).expect("sites are valid"),
            );

            eager.union(p, q).expect("union must succeed");
            forest.union(p, q).expect("union must succeed");

            prop_assert_eq!(eager.components(), forest.components());
            prop_assert!(forest.components() <= previous_components);
            previous_components = forest.components();
        }

        for p in 0..sites {
            for q in 0..sites {
                prop_assert_eq!(
                    eager.connected(p, q).expect("sites are valid"),
                    forest.connected(p, q).expect("sites are valid"),
                );
            }
        }
    }
}
