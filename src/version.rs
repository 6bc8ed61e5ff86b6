//! Display version: crate base version plus an optional git revision tag.

use std::fmt;
use std::path::Path;
use std::process::Command;

pub const BASE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub base: String,
    pub revision: Option<String>,
}

impl Version {
    /// Empty tags and the literal `none` count as "no revision".
    pub fn compose(base: &str, revision: Option<&str>) -> Self {
        let revision = revision
            .map(str::trim)
            .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case("none"))
            .map(str::to_string);
        Self {
            base: base.to_string(),
            revision,
        }
    }

    /// Base version tagged with whatever revision git reports for `dir`.
    pub fn detect(dir: &Path) -> Self {
        let tag = git_revision(dir);
        Self::compose(BASE_VERSION, tag.as_deref())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(rev) => write!(f, "{}-{}", self.base, rev),
            None => f.write_str(&self.base),
        }
    }
}

/// Best-effort `git rev-parse --short HEAD` in `dir`. Any failure is `None`.
pub fn git_revision(dir: &Path) -> Option<String> {
    let git = which::which("git").ok()?;
    let output = Command::new(git)
        .arg("-C")
        .arg(dir)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map_err(|e| log::debug!("git revision lookup failed: {e}"))
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!rev.is_empty()).then_some(rev)
}
