//! Property-based tests for picking the reported trains.

use proptest::prelude::*;

use crate::domain::{enumerate_trains, select, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Most pips dominates every other result on pip sum.
    #[test]
    fn prop_most_pips_is_maximal(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        let outcome = enumerate_trains(&pool, root);
        let sel = select(&outcome.trains).expect("search always yields a train");
        for train in outcome.trains.iter() {
            prop_assert!(sel.most_pips.pip_sum() >= train.pip_sum());
        }
        prop_assert!(outcome.trains.contains(&sel.most_pips));
    }

    /// Property: Longest dominates every other result on tile count.
    #[test]
    fn prop_longest_is_maximal(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        let outcome = enumerate_trains(&pool, root);
        let sel = select(&outcome.trains).expect("search always yields a train");
        for train in outcome.trains.iter() {
            prop_assert!(sel.longest.len() >= train.len());
        }
        prop_assert!(outcome.trains.contains(&sel.longest));
    }

    /// Property: Determinism
    /// Running the whole pipeline twice reports byte-identical trains.
    #[test]
    fn prop_selection_is_deterministic(
        pool in test_gens::pool(),
        root in test_gens::root(),
    ) {
        let first = select(&enumerate_trains(&pool, root).trains);
        let second = select(&enumerate_trains(&pool.clone(), root).trains);
        prop_assert_eq!(
            first.map(|s| (s.most_pips.render(), s.longest.render())),
            second.map(|s| (s.most_pips.render(), s.longest.render()))
        );
    }

    /// Property: A single generated tile either attaches to its own half or not at all.
    #[test]
    fn prop_single_tile_pool(
        tile in test_gens::domino(),
        root in test_gens::root(),
    ) {
        let pool = std::iter::once(tile).collect();
        let sel = select(&enumerate_trains(&pool, root).trains).expect("one train");
        if tile.contains(root) {
            prop_assert_eq!(sel.most_pips.len(), 1);
            prop_assert_eq!(sel.most_pips.tiles()[0].first(), root);
        } else {
            prop_assert!(sel.most_pips.is_empty());
        }
    }
}
