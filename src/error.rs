//! Errors surfaced by the router and its report commands.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("{verb} option not recognized")]
    UnrecognizedVerb { verb: String },

    /// Fewer forwarded tokens than the verb's gate requires.
    #[error("{verb}: expected at least {required} argument(s), got {given}")]
    InsufficientArguments {
        verb: String,
        required: usize,
        given: usize,
    },

    /// A required environment variable is unset or empty. `hint` is the
    /// user-facing message printed in its place.
    #[error("{hint}")]
    MissingEnvironment { name: &'static str, hint: String },

    #[error("{message}")]
    MissingResource { path: PathBuf, message: String },

    #[error("failed to launch {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RouterError {
    pub fn missing_resource(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MissingResource {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
