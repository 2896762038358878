//! Train: an ordered chain of dominoes joined at matching ends.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::domino::{Domino, Pip};

/// Separator between rendered tiles. Downstream parsing relies on it.
pub const TILE_SEPARATOR: &str = " -> ";

/// Position in a train's ledger, returned by [`Train::checkpoint`].
pub type Checkpoint = usize;

/// An ordered chain of tiles.
///
/// Backed by an append-only ledger: backtracking truncates to a recorded
/// checkpoint instead of rebuilding the chain. Each tile keeps the orientation
/// it was placed with, so the open end of tile `i` equals the attached end of
/// tile `i + 1`.
///
/// Equality is order-sensitive: two trains are equal only if they hold the
/// same tiles in the same order and orientation.
#[derive(Debug, Clone, Default)]
pub struct Train {
    tiles: Vec<Domino>,
}

impl Train {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, domino: Domino) {
        self.tiles.push(domino);
    }

    /// Drop `domino` and everything placed after it.
    ///
    /// No-op if `domino` is not in the train.
    pub fn truncate_to(&mut self, domino: &Domino) {
        if let Some(pos) = self.tiles.iter().position(|d| d == domino) {
            self.tiles.truncate(pos);
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.tiles.len()
    }

    /// Restore the train to the state it had at `checkpoint`.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.tiles.truncate(checkpoint);
    }

    pub fn pip_sum(&self) -> u64 {
        self.tiles.iter().map(Domino::pip_sum).sum()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, domino: &Domino) -> bool {
        self.tiles.contains(domino)
    }

    pub fn tiles(&self) -> &[Domino] {
        &self.tiles
    }

    /// Number exposed at the far end, if any tile is placed.
    pub fn open_end(&self) -> Option<Pip> {
        self.tiles.last().map(Domino::second)
    }

    /// Independent copy safe to keep while this train keeps changing.
    pub fn snapshot(&self) -> Train {
        self.clone()
    }

    /// Oriented `(first, second)` sequence; the identity key of a train.
    pub fn sequence(&self) -> Vec<(Pip, Pip)> {
        self.tiles.iter().map(Domino::pair).collect()
    }

    /// Canonical text form, e.g. `(0, 1) -> (1, 2)`. Empty trains render as "".
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Train {
    fn eq(&self, other: &Self) -> bool {
        self.tiles.len() == other.tiles.len()
            && self
                .tiles
                .iter()
                .zip(&other.tiles)
                .all(|(a, b)| a.pair() == b.pair())
    }
}

impl Eq for Train {}

impl Hash for Train {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.len().hash(state);
        for tile in &self.tiles {
            tile.pair().hash(state);
        }
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(TILE_SEPARATOR)?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

impl FromIterator<Domino> for Train {
    fn from_iter<I: IntoIterator<Item = Domino>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
