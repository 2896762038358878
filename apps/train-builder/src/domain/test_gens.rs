// Proptest generators for domain types.
// Pools are built from distinct tiles by construction; no filtering.

use proptest::prelude::*;

use crate::domain::{Domino, Pip, Pool};

/// Highest pip value used by generated tiles (a double-six set).
pub const MAX_PIP: Pip = 6;

/// Generate a tile with halves in 0..=MAX_PIP, in either orientation
pub fn domino() -> impl Strategy<Value = Domino> {
    (0..=MAX_PIP, 0..=MAX_PIP).prop_map(|(a, b)| Domino::new(a, b))
}

/// Generate up to `max_tiles` distinct canonical pairs
pub fn tile_pairs(max_tiles: usize) -> impl Strategy<Value = Vec<(Pip, Pip)>> {
    proptest::collection::btree_set(
        (0..=MAX_PIP, 0..=MAX_PIP).prop_map(|(a, b)| (a.min(b), a.max(b))),
        0..=max_tiles,
    )
    .prop_map(|set| set.into_iter().collect())
}

/// Generate a pool small enough for exhaustive checking
pub fn pool() -> impl Strategy<Value = Pool> {
    tile_pairs(8).prop_map(|pairs| pairs.into_iter().map(Domino::from).collect())
}

/// Generate a root number, occasionally one no tile can carry
pub fn root() -> impl Strategy<Value = Pip> {
    prop_oneof![
        9 => 0..=MAX_PIP,
        1 => Just(MAX_PIP + 1),
    ]
}
