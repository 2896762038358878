//! Domino tile: two pip halves with a current orientation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Pip count on one half of a tile.
pub type Pip = u32;

/// A single tile.
///
/// The halves are stored in their current orientation: `first` is the end
/// attached to the train, `second` is the end left open. Equality, ordering and
/// hashing ignore orientation and use the canonical `(min, max)` pair, so
/// `(4, 2)` and `(2, 4)` are the same tile.
#[derive(Debug, Copy, Clone)]
pub struct Domino {
    first: Pip,
    second: Pip,
}

impl Domino {
    pub fn new(first: Pip, second: Pip) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> Pip {
        self.first
    }

    pub fn second(&self) -> Pip {
        self.second
    }

    /// Halves in current orientation.
    pub fn pair(&self) -> (Pip, Pip) {
        (self.first, self.second)
    }

    /// Orientation-independent identity of the tile.
    pub fn canonical(&self) -> (Pip, Pip) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    pub fn pip_sum(&self) -> u64 {
        u64::from(self.first) + u64::from(self.second)
    }

    pub fn contains(&self, value: Pip) -> bool {
        self.first == value || self.second == value
    }

    /// Turn the tile so `target` is the attached end.
    ///
    /// Values not on the tile leave it untouched.
    pub fn reorient(&mut self, target: Pip) {
        if self.second == target && self.first != target {
            std::mem::swap(&mut self.first, &mut self.second);
        }
    }

    /// The half opposite `value`, or `None` if `value` is not on the tile.
    pub fn other_end(&self, value: Pip) -> Option<Pip> {
        if self.first == value {
            Some(self.second)
        } else if self.second == value {
            Some(self.first)
        } else {
            None
        }
    }
}

impl PartialEq for Domino {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Domino {}

impl Hash for Domino {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

// Ord is only for stable pool iteration: ascending canonical pair.
impl Ord for Domino {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl PartialOrd for Domino {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(Pip, Pip)> for Domino {
    fn from((first, second): (Pip, Pip)) -> Self {
        Domino::new(first, second)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
