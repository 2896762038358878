//! Picking the reported trains out of a search result.
//!
//! Both queries use a total order so the same input always reports the same
//! trains:
//!
//! - most pips: pip sum desc, then length desc, then oriented sequence asc
//! - longest: length desc, then pip sum desc, then oriented sequence asc
//!
//! Oriented sequences compare lexicographically as lists of `(first, second)`
//! integer pairs.

use std::cmp::Ordering;

use super::search::TrainSet;
use super::train::Train;

/// The two trains reported to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub most_pips: Train,
    pub longest: Train,
}

impl Selection {
    /// Whether both queries picked the same train.
    pub fn is_same_train(&self) -> bool {
        self.most_pips == self.longest
    }
}

fn by_sequence(a: &Train, b: &Train) -> Ordering {
    a.tiles()
        .iter()
        .map(|d| d.pair())
        .cmp(b.tiles().iter().map(|d| d.pair()))
}

/// `Less` means `a` ranks ahead of `b` for the most-pips query.
pub fn rank_by_pips(a: &Train, b: &Train) -> Ordering {
    b.pip_sum()
        .cmp(&a.pip_sum())
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| by_sequence(a, b))
}

/// `Less` means `a` ranks ahead of `b` for the longest query.
pub fn rank_by_length(a: &Train, b: &Train) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| b.pip_sum().cmp(&a.pip_sum()))
        .then_with(|| by_sequence(a, b))
}

pub fn best_by_pips<'a, I>(trains: I) -> Option<&'a Train>
where
    I: IntoIterator<Item = &'a Train>,
{
    trains.into_iter().min_by(|a, b| rank_by_pips(a, b))
}

pub fn longest<'a, I>(trains: I) -> Option<&'a Train>
where
    I: IntoIterator<Item = &'a Train>,
{
    trains.into_iter().min_by(|a, b| rank_by_length(a, b))
}

/// Both picks in one pass each. `None` only for an empty set.
pub fn select(trains: &TrainSet) -> Option<Selection> {
    let most_pips = best_by_pips(trains.iter())?.snapshot();
    let longest_train = longest(trains.iter())?.snapshot();
    Some(Selection {
        most_pips,
        longest: longest_train,
    })
}
