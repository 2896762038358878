// Proptest generators shared by the integration suites.

use proptest::prelude::*;
use train_builder::{Domino, Pip, Pool};

/// Distinct canonical pairs from a double-six set, at most `max_tiles` of them
pub fn tile_pairs(max_tiles: usize) -> impl Strategy<Value = Vec<(Pip, Pip)>> {
    proptest::collection::btree_set(
        (0u32..=6, 0u32..=6).prop_map(|(a, b)| (a.min(b), a.max(b))),
        0..=max_tiles,
    )
    .prop_map(|set| set.into_iter().collect())
}

pub fn pool_of(pairs: &[(Pip, Pip)]) -> Pool {
    pairs.iter().copied().map(Domino::from).collect()
}

pub fn root() -> impl Strategy<Value = Pip> {
    0u32..=7
}
