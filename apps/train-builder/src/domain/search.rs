//! Exhaustive depth-first enumeration of maximal trains.
//!
//! One live [`Train`] is threaded through the recursion. Every tile placed at
//! a given depth is removed again (by rewinding to a checkpoint) before the
//! frame returns, so sibling branches never see each other's tiles. Tiles are
//! copied into the train with their branch-local orientation; the pool itself
//! is never mutated.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::trace;

use super::domino::Pip;
use super::pool::Pool;
use super::train::Train;

/// Counters collected while enumerating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search frames entered, including the root frame.
    pub nodes: u64,
    /// Branches that ended because nothing more could be attached.
    pub terminals: u64,
    /// Terminal trains already present in the result set.
    pub duplicates: u64,
}

/// Distinct maximal trains, keyed by their oriented tile sequence.
#[derive(Debug, Clone, Default)]
pub struct TrainSet {
    trains: BTreeMap<Vec<(Pip, Pip)>, Train>,
}

impl TrainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a frozen copy of `train`. Returns `false` if it was already known.
    pub fn record(&mut self, train: &Train) -> bool {
        match self.trains.entry(train.sequence()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(train.snapshot());
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    pub fn contains(&self, train: &Train) -> bool {
        self.trains.contains_key(&train.sequence())
    }

    /// Trains in ascending oriented-sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Train> {
        self.trains.values()
    }
}

/// Outcome of a full enumeration.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub trains: TrainSet,
    pub stats: SearchStats,
}

/// Enumerate every maximal train that starts from `root` using tiles of `pool`.
///
/// Always yields at least one train: if nothing attaches to `root`, the sole
/// result is the empty train.
pub fn enumerate_trains(pool: &Pool, root: Pip) -> SearchOutcome {
    let mut live = Train::with_capacity(pool.len());
    let mut trains = TrainSet::new();
    let mut stats = SearchStats::default();
    extend(pool, root, &mut live, &mut trains, &mut stats);
    debug_assert!(live.is_empty(), "search must leave the live train empty");
    SearchOutcome { trains, stats }
}

/// One search frame: record `live` if it is maximal, otherwise try every tile
/// that attaches to `root`.
pub fn extend(
    pool: &Pool,
    root: Pip,
    live: &mut Train,
    found: &mut TrainSet,
    stats: &mut SearchStats,
) {
    stats.nodes += 1;

    let candidates = pool.eligible(root);
    if candidates.is_empty() {
        stats.terminals += 1;
        if !found.record(live) {
            stats.duplicates += 1;
        }
        trace!(tiles = live.len(), pips = live.pip_sum(), "terminal train");
        return;
    }

    for candidate in candidates {
        let Some(next_root) = candidate.other_end(root) else {
            continue;
        };
        let mark = live.checkpoint();

        let mut placed = candidate;
        placed.reorient(root);
        live.push(placed);

        extend(&pool.without(&candidate), next_root, live, found, stats);

        live.rewind(mark);
    }
}
