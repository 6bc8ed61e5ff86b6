//! Directory enumeration for the report commands.

use fs_err as fs;
use std::path::Path;

use crate::error::{Result, RouterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Any,
    Dir,
}

pub fn ensure_dir(path: &Path, message: impl Into<String>) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(RouterError::missing_resource(path, message))
    }
}

/// Names of the entries in `dir`, skipping dot-prefixed ones. Unsorted.
pub fn visible_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        // Follow symlinks so linked species folders still count.
        if kind == EntryKind::Dir && !entry.path().is_dir() {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}
