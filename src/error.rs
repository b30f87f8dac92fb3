//! Error types for zellij-sessionizer
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `Display` and `Error` impls.

use std::path::PathBuf;

use thiserror::Error;

use crate::process::Multiplexer;

/// Top-level error type for zellij-sessionizer
#[derive(Error, Debug)]
pub enum Error {
    #[error("{} environment detected!", .0.display_name())]
    NestedSession(Multiplexer),

    #[error("No paths were specified, usage: zellij-sessionizer path1 path2/* etc..")]
    NoPaths,

    #[error("No valid directories found to choose from.")]
    NoValidDirectories,

    #[error("Failed to change directory to {path}: {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Extended explanation printed after the error line, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::NestedSession(mux) => Some(format!(
                "Script only works outside of {name}.\n\n\
                 This is because nested {name} sessions are not recommended,\n\
                 and it is currently not possible to change {name} sessions\n\
                 from within a script.\n\n\
                 Exit {name} and try again,\n\
                 or unset {var} env var to force this script to work.",
                name = mux.display_name(),
                var = mux.guard_var(),
            )),
            _ => None,
        }
    }
}

/// External process errors
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to execute {program}: {reason}")]
    SelectorFailed { program: String, reason: String },

    #[error("Failed to launch {program} session: {reason}")]
    LaunchFailed { program: String, reason: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
