//! Pool: the tiles not yet placed in the train being built.

use std::collections::BTreeSet;
use std::fmt;

use super::domino::{Domino, Pip};

/// A set of distinct tiles.
///
/// Tiles equal as unordered pairs collapse to one entry. Iteration is in
/// ascending canonical pair order, which fixes the order the search tries
/// candidates in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    tiles: BTreeSet<Domino>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile. Returns `false` if an equal tile was already present.
    pub fn insert(&mut self, domino: Domino) -> bool {
        self.tiles.insert(domino)
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

    pub fn iter(&self) -> impl Iterator<Item = &Domino> {
        self.tiles.iter()
    }

    /// Tiles carrying `root` on either half.
    pub fn eligible(&self, root: Pip) -> Vec<Domino> {
        self.tiles
            .iter()
            .filter(|d| d.contains(root))
            .copied()
            .collect()
    }

    /// A reduced copy without `domino`; `self` is left untouched.
    pub fn without(&self, domino: &Domino) -> Pool {
        let mut tiles = self.tiles.clone();
        tiles.remove(domino);
        Pool { tiles }
    }
}

impl FromIterator<Domino> for Pool {
    fn from_iter<I: IntoIterator<Item = Domino>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let (low, high) = tile.canonical();
            write!(f, "({low}, {high})")?;
        }
        f.write_str("}")
    }
}
