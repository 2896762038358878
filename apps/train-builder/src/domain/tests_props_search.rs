//! Property-based tests for the train enumeration.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use crate::domain::domain_prop_helpers::brute_force_chains;
use crate::domain::{enumerate_trains, test_gens, test_prelude, Domino, Pool, Train};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Exhaustiveness
    /// The search returns exactly the maximal chains of the reference enumerator.
    #[test]
    fn prop_matches_reference_enumeration(
        pairs in test_gens::tile_pairs(8),
        root in test_gens::root(),
    ) {
        let pool: Pool = pairs.iter().copied().map(Domino::from).collect();
        let outcome = enumerate_trains(&pool, root);

        let got: BTreeSet<_> = outcome.trains.iter().map(Train::sequence).collect();
        let expected = brute_force_chains(&pairs, root);
        prop_assert_eq!(got, expected);
    }

    /// Property: Adjacency
    /// The first tile attaches to the root and each open end feeds the next tile.
    #[test]
    fn prop_adjacent_tiles_match(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        for train in enumerate_trains(&pool, root).trains.iter() {
            let mut open = root;
            for tile in train.tiles() {
                prop_assert_eq!(tile.first(), open, "train {}", train);
                open = tile.second();
            }
        }
    }

    /// Property: Tile provenance
    /// Every tile comes from the pool and none is used twice in one train.
    #[test]
    fn prop_tiles_come_from_pool_once(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        for train in enumerate_trains(&pool, root).trains.iter() {
            let distinct: HashSet<Domino> = train.tiles().iter().copied().collect();
            prop_assert_eq!(distinct.len(), train.len(), "train {}", train);
            for tile in train.tiles() {
                prop_assert!(pool.contains(tile), "tile {} not in pool {}", tile, pool);
            }
        }
    }

    /// Property: Maximality
    /// No unused pool tile matches the open end of a returned train.
    #[test]
    fn prop_trains_cannot_be_extended(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        for train in enumerate_trains(&pool, root).trains.iter() {
            let open = train.open_end().unwrap_or(root);
            let extendable = pool
                .iter()
                .filter(|d| !train.contains(d))
                .any(|d| d.contains(open));
            prop_assert!(!extendable, "train {} could still grow", train);
        }
    }

    /// Property: Search bookkeeping
    /// Stats account for every terminal branch and the result set is never empty.
    #[test]
    fn prop_stats_are_consistent(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        let outcome = enumerate_trains(&pool, root);
        prop_assert!(!outcome.trains.is_empty());
        prop_assert_eq!(
            outcome.stats.terminals,
            outcome.trains.len() as u64 + outcome.stats.duplicates
        );
        prop_assert!(outcome.stats.nodes >= outcome.stats.terminals);
    }

    /// Property: Orientation of the pool is irrelevant
    /// Flipping every tile before building the pool gives identical results.
    #[test]
    fn prop_pool_orientation_does_not_matter(
        pairs in test_gens::tile_pairs(8),
        root in test_gens::root(),
    ) {
        let straight: Pool = pairs.iter().map(|&(a, b)| Domino::new(a, b)).collect();
        let flipped: Pool = pairs.iter().map(|&(a, b)| Domino::new(b, a)).collect();

        let a: Vec<_> = enumerate_trains(&straight, root).trains.iter().map(Train::sequence).collect();
        let b: Vec<_> = enumerate_trains(&flipped, root).trains.iter().map(Train::sequence).collect();
        prop_assert_eq!(a, b);
    }
}
