//! Reading the recognised tiles and the round's root number.
//!
//! The tile mapping is a JSON object from arbitrary identifiers to
//! `[top, bottom]` pip pairs, e.g. `{"0": [12, 4], "1": [4, 4]}`. The root
//! number file holds a single integer. Both are validated here so the domain
//! only ever sees non-negative pips.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Domino, Pip, Pool};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

/// Tile mapping as written by the recognition step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawTiles(pub BTreeMap<String, Vec<i64>>);

impl RawTiles {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, [i64; 2])> for RawTiles {
    fn from_iter<I: IntoIterator<Item = (K, [i64; 2])>>(iter: I) -> Self {
        RawTiles(
            iter.into_iter()
                .map(|(id, pair)| (id.into(), pair.to_vec()))
                .collect(),
        )
    }
}

pub fn parse_tiles(json: &str) -> Result<RawTiles, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn read_tiles(path: &Path) -> Result<RawTiles, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    parse_tiles(&text).map_err(|e| AppError::json(path, e))
}

fn to_pip(id: &str, value: i64) -> Result<Pip, DomainError> {
    if value < 0 {
        return Err(DomainError::validation(
            ValidationKind::NegativePip,
            format!("tile {id}: {value}"),
        ));
    }
    Pip::try_from(value).map_err(|_| {
        DomainError::validation(ValidationKind::PipOutOfRange, format!("tile {id}: {value}"))
    })
}

/// Validate one `[top, bottom]` entry into a tile.
pub fn to_domino(id: &str, halves: &[i64]) -> Result<Domino, DomainError> {
    match halves {
        [top, bottom] => Ok(Domino::new(to_pip(id, *top)?, to_pip(id, *bottom)?)),
        _ => Err(DomainError::validation(
            ValidationKind::MalformedTile,
            format!("tile {id}: expected 2 values, got {}", halves.len()),
        )),
    }
}

/// Validated tiles with repeated pairs folded together.
#[derive(Debug, Clone)]
pub struct DedupedTiles {
    pub pool: Pool,
    /// Entries dropped because an earlier entry had the same pair.
    pub collapsed: usize,
}

/// Validate every entry and collapse tiles that repeat an earlier pair.
///
/// Every collapsed duplicate is logged: a repeated pair usually means the
/// recognition step misread a tile.
pub fn dedupe_tiles(raw: &RawTiles) -> Result<DedupedTiles, DomainError> {
    let mut seen: BTreeMap<Domino, &str> = BTreeMap::new();
    let mut collapsed = 0;
    for (id, halves) in &raw.0 {
        let domino = to_domino(id, halves)?;
        match seen.entry(domino) {
            Entry::Occupied(first) => {
                collapsed += 1;
                warn!(
                    tile = %domino,
                    id = id.as_str(),
                    first_id = *first.get(),
                    "duplicate tile collapsed"
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(id.as_str());
            }
        }
    }
    Ok(DedupedTiles {
        pool: seen.into_keys().collect(),
        collapsed,
    })
}

/// Build the pool and enforce the distinct-tile limit.
pub fn build_pool(raw: &RawTiles, max_pool: usize) -> Result<Pool, DomainError> {
    let DedupedTiles { pool, collapsed } = dedupe_tiles(raw)?;

    if pool.len() > max_pool {
        return Err(DomainError::validation(
            ValidationKind::PoolTooLarge,
            format!("{} distinct tiles, limit is {max_pool}", pool.len()),
        ));
    }

    debug!(
        tiles = raw.len(),
        distinct = pool.len(),
        collapsed,
        "pool built"
    );
    Ok(pool)
}

pub fn parse_root(text: &str) -> Result<Pip, DomainError> {
    let trimmed = text.trim();
    trimmed.parse::<Pip>().map_err(|_| {
        DomainError::validation(
            ValidationKind::MalformedRoot,
            format!("root number: {trimmed:?}"),
        )
    })
}

pub fn read_root(path: &Path) -> Result<Pip, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    Ok(parse_root(&text)?)
}
