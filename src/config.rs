//! Start-up configuration: an environment snapshot plus the installation
//! layout. Built once in `main` and passed by reference.

use anyhow::{anyhow, Context};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Result, RouterError};
use crate::model::Script;

pub const ENV_DB: &str = "FUNANNOTATE_DB";
pub const ENV_AUGUSTUS: &str = "AUGUSTUS_CONFIG_PATH";
pub const ENV_INSTALL_DIR: &str = "FUNANNOTATE_INSTALL_DIR";
pub const ENV_PYTHON: &str = "FUNANNOTATE_PYTHON";

/// Interpreters tried on PATH when `FUNANNOTATE_PYTHON` is unset.
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Read-only view of the process environment, captured once.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, OsString>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v))))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Empty values are treated as unset.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars
            .get(name)
            .map(OsString::as_os_str)
            .filter(|v| !v.is_empty())
    }

    pub fn path(&self, name: &str) -> Option<PathBuf> {
        self.get(name).map(PathBuf::from)
    }

    /// Look up a variable the current verb cannot run without. `hint` is
    /// what the user sees when it is missing.
    pub fn require(&self, name: &'static str, hint: &str) -> Result<PathBuf> {
        self.path(name).ok_or_else(|| RouterError::MissingEnvironment {
            name,
            hint: hint.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    /// Root holding the `bin/` and `util/` script buckets.
    pub install_dir: PathBuf,
}

impl Config {
    pub fn new(env: Environment, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            env,
            install_dir: install_dir.into(),
        }
    }

    /// `FUNANNOTATE_INSTALL_DIR` if set, else the directory of the running
    /// executable.
    pub fn from_env(env: Environment) -> anyhow::Result<Self> {
        let install_dir = match env.path(ENV_INSTALL_DIR) {
            Some(dir) => dir,
            None => {
                let exe = std::env::current_exe().context("locate running executable")?;
                let exe = fs_err::canonicalize(&exe).unwrap_or(exe);
                exe.parent()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?
            }
        };
        Ok(Self::new(env, install_dir))
    }

    pub fn script_path(&self, script: &Script) -> PathBuf {
        script.resolve(&self.install_dir)
    }

    /// Resolve the script interpreter.
    /// Priority: `FUNANNOTATE_PYTHON` > python3 on PATH > python on PATH.
    pub fn interpreter(&self) -> Result<PathBuf> {
        if let Some(p) = self.env.get(ENV_PYTHON) {
            return which::which(p).map_err(|_| {
                RouterError::missing_resource(
                    p,
                    format!("interpreter {} not found ({ENV_PYTHON})", Path::new(p).display()),
                )
            });
        }
        PYTHON_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .ok_or_else(|| {
                RouterError::missing_resource(
                    "python3",
                    format!(
                        "python interpreter not found (set {ENV_PYTHON} or add python3 to PATH)"
                    ),
                )
            })
    }
}
