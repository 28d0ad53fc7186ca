//! Application-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add scenario-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid scenario file {path}: {message}")]
    ScenarioParse { path: PathBuf, message: String },

    #[error("duplicate {kind} name in scenario: {name:?}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("order references unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot read scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
