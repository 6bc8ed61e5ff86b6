//! Hand a verb's forwarded arguments to its pipeline script.
//!
//! The child inherits stdin/stdout/stderr and the router blocks until it
//! exits. There is no timeout and no retry; the child's exit code is
//! returned so the router can pass it through.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::config::Config;
use crate::error::{Result, RouterError};
use crate::model::Script;

/// A fully resolved child invocation: `program args...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateCall {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl DelegateCall {
    /// `[interpreter, script, forwarded...]`, with the script checked to exist.
    pub fn build(config: &Config, script: &Script, forwarded: &[OsString]) -> Result<Self> {
        let path = config.script_path(script);
        if !path.is_file() {
            return Err(RouterError::missing_resource(
                &path,
                format!(
                    "Error: {} not found; is funannotate installed correctly?",
                    path.display()
                ),
            ));
        }
        let program = config.interpreter()?;
        let mut args = Vec::with_capacity(forwarded.len() + 1);
        args.push(path.into_os_string());
        args.extend(forwarded.iter().cloned());
        Ok(Self { program, args })
    }
}

/// Process boundary. Returns the child's exit code.
pub trait Launcher {
    fn launch(&self, call: &DelegateCall) -> Result<i32>;
}

/// Runs the child for real with inherited stdio.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, call: &DelegateCall) -> Result<i32> {
        log::debug!("exec {} {:?}", call.program.display(), call.args);
        let status = Command::new(&call.program)
            .args(&call.args)
            .status()
            .map_err(|source| RouterError::Spawn {
                program: call.program.clone(),
                source,
            })?;
        Ok(status.code().unwrap_or_else(|| {
            log::warn!("{} terminated by signal ({status})", call.program.display());
            1
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, ENV_PYTHON};
    use fs_err as fs;

    #[test]
    fn missing_script_is_reported_before_launch() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::new(Environment::default(), root.path());
        let err =
            DelegateCall::build(&config, &Script::bin("funannotate-mask.py"), &[]).unwrap_err();
        assert!(matches!(err, RouterError::MissingResource { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn call_puts_script_before_forwarded_tokens() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("bin")).unwrap();
        let script = root.path().join("bin/funannotate-mask.py");
        fs::write(&script, "exit 0\n").unwrap();

        let config = Config::new(Environment::from_pairs([(ENV_PYTHON, "sh")]), root.path());
        let fwd = vec![OsString::from("-i"), OsString::from("genome.fa")];
        let call = DelegateCall::build(&config, &Script::bin("funannotate-mask.py"), &fwd).unwrap();
        assert!(call.program.ends_with("sh"));
        assert_eq!(
            call.args,
            [
                script.into_os_string(),
                OsString::from("-i"),
                OsString::from("genome.fa")
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_returned() {
        let call = DelegateCall {
            program: PathBuf::from("sh"),
            args: vec!["-c".into(), "exit 7".into()],
        };
        assert_eq!(ProcessLauncher.launch(&call).unwrap(), 7);
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let call = DelegateCall {
            program: PathBuf::from("/no/such/interpreter"),
            args: vec![],
        };
        assert!(matches!(
            ProcessLauncher.launch(&call),
            Err(RouterError::Spawn { .. })
        ));
    }
}
