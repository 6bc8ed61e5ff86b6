//! `funannotate-db-info.txt`: one tab-separated line per installed database
//! (name, type, file, version, date, record count, md5).

use fs_err as fs;
use std::path::Path;

use crate::error::Result;
use crate::model::DB_DROPPED_COLUMN;

/// Parse index text into display rows, with the file column removed.
/// Blank lines are ignored; rows too short to carry the dropped column are
/// skipped with a warning.
pub fn parse_db_info(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let mut cols: Vec<String> = line.split('\t').map(str::to_string).collect();
        if cols.len() <= DB_DROPPED_COLUMN {
            log::warn!(
                "skipping malformed database index line {}: {:?}",
                lineno + 1,
                line
            );
            continue;
        }
        cols.remove(DB_DROPPED_COLUMN);
        rows.push(cols);
    }
    rows
}

pub fn read_db_info(path: &Path) -> Result<Vec<Vec<String>>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_db_info(&text))
}
