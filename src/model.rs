use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fixed layout constants.
pub const PROGRAM: &str = "funannotate";
pub const DB_INFO_FILE: &str = "funannotate-db-info.txt";
pub const OUTGROUPS_DIR: &str = "outgroups";
pub const OUTGROUP_SUFFIX: &str = "_buscos.fa";
pub const AUGUSTUS_SPECIES_DIR: &str = "species";
pub const LISTING_COLUMNS: usize = 3;
pub const DB_TABLE_ALIGN: &str = "LLLLRL";
pub const DB_TABLE_MAX_WIDTH: usize = 60;
/// Index column (0-based) dropped from the database table.
pub const DB_DROPPED_COLUMN: usize = 2;
pub const DB_TABLE_HEADER: [&str; 6] = [
    "Database",
    "Type",
    "Version",
    "Date",
    "Num_Records",
    "Md5checksum",
];

/// Where delegate scripts live under the installation directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Pipeline-stage scripts.
    Bin,
    /// Format conversion and maintenance utilities.
    Util,
}

impl Bucket {
    pub fn dir_name(self) -> &'static str {
        match self {
            Bucket::Bin => "bin",
            Bucket::Util => "util",
        }
    }
}

/// A delegate script, relative to the installation directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub bucket: Bucket,
    pub file: &'static str,
}

impl Script {
    pub const fn bin(file: &'static str) -> Self {
        Self {
            bucket: Bucket::Bin,
            file,
        }
    }

    pub const fn util(file: &'static str) -> Self {
        Self {
            bucket: Bucket::Util,
            file,
        }
    }

    pub fn resolve(&self, install_dir: &Path) -> PathBuf {
        install_dir.join(self.bucket.dir_name()).join(self.file)
    }
}

/// One parsed command line: `argv[0]`, the verb, and everything after it.
/// Forwarded tokens stay as raw OS strings; only the verb is decoded, and
/// a verb that is not valid UTF-8 can never match a registered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub raw: Vec<OsString>,
    pub verb: Option<String>,
    pub rest: Vec<OsString>,
}

impl Invocation {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let verb = raw.get(1).map(|v| v.to_string_lossy().into_owned());
        let rest = raw.iter().skip(2).cloned().collect();
        Self { raw, verb, rest }
    }
}

/// How a routed invocation ended; maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Report or version printed.
    Success,
    /// Usage, help, or unknown verb printed.
    Usage,
    /// A router-detected error (missing environment, resource, launch).
    Failure,
    /// A delegate ran; carries its exit code.
    Delegated(i32),
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Usage | Outcome::Failure => 1,
            // Exit codes outside 0..=255 only come from non-unix platforms.
            Outcome::Delegated(code) => u8::try_from(code).unwrap_or(1),
        }
    }
}
