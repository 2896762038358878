//! Boundary adapters: the files exchanged with the recognition step and the
//! web front end.

pub mod report_file;
pub mod tiles_file;

pub use report_file::{render_report, write_report, ReportLines};
pub use tiles_file::{
    build_pool, dedupe_tiles, parse_root, read_root, read_tiles, DedupedTiles, RawTiles,
};
