//! The two-line report handed to the web front end.
//!
//! ```text
//! Most Pips:\t(0, 12) -> (12, 12)
//! Longest:\t(0, 1) -> (1, 2) -> (2, 3)
//! ```
//!
//! The labels and the tab after them are split on by the reader, so they must
//! not change.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::domain::Selection;
use crate::error::AppError;

pub const MOST_PIPS_LABEL: &str = "Most Pips:";
pub const LONGEST_LABEL: &str = "Longest:";

pub fn render_report(selection: &Selection) -> String {
    format!(
        "{MOST_PIPS_LABEL}\t{}\n{LONGEST_LABEL}\t{}\n",
        selection.most_pips, selection.longest
    )
}

pub fn write_report_to<W: Write>(writer: &mut W, selection: &Selection) -> io::Result<()> {
    writer.write_all(render_report(selection).as_bytes())?;
    writer.flush()
}

/// Write to `path` (created or truncated), or to stdout when no path is given.
pub fn write_report(path: Option<&Path>, selection: &Selection) -> Result<(), AppError> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| AppError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            write_report_to(&mut writer, selection).map_err(|e| AppError::io(path, e))
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_report_to(&mut lock, selection).map_err(|e| AppError::io("<stdout>", e))
        }
    }
}

/// Rendered trains read back out of a report, as the front end does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLines {
    pub most_pips: String,
    pub longest: String,
}

impl ReportLines {
    /// Split on the labels. `None` if either label is missing.
    pub fn parse(text: &str) -> Option<Self> {
        let (head, longest) = text.split_once(LONGEST_LABEL)?;
        let (_, most_pips) = head.split_once(MOST_PIPS_LABEL)?;
        Some(Self {
            most_pips: most_pips.trim().to_string(),
            longest: longest.trim().to_string(),
        })
    }
}
