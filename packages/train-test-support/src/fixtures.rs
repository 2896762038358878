//! Temporary input files for end-to-end runs.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scratch directory holding a tile mapping, a root number file and the
/// path the report should be written to. Removed on drop.
pub struct InputFixture {
    dir: TempDir,
    pub tiles_path: PathBuf,
    pub root_path: PathBuf,
    pub output_path: PathBuf,
}

impl InputFixture {
    /// Write `tiles` as `{"0": [a, b], "1": ...}` and `root` followed by a newline.
    pub fn new(tiles: &[(i64, i64)], root: &str) -> io::Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = tiles
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| (i.to_string(), serde_json::json!([a, b])))
            .collect();
        Self::from_raw(&serde_json::Value::Object(map).to_string(), root)
    }

    /// Write the tile mapping text verbatim.
    pub fn from_raw(tiles_json: &str, root: &str) -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let tiles_path = dir.path().join("dominoes.json");
        let root_path = dir.path().join("root.txt");
        let output_path = dir.path().join("trains.txt");

        fs::write(&tiles_path, format!("{tiles_json}\n"))?;
        fs::write(&root_path, format!("{root}\n"))?;

        Ok(Self {
            dir,
            tiles_path,
            root_path,
            output_path,
        })
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn read_output(&self) -> io::Result<String> {
        fs::read_to_string(&self.output_path)
    }
}
