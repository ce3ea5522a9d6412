// src/error.rs
use std::io;

use thiserror::Error;

/// A label could not be mapped onto its vocabulary.
///
/// These are data failures, not system faults: the caller decides whether to
/// drop the record, log and skip, or abort the batch. Nothing in the engines
/// falls back to a default code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("could not find coaching position for {alternates:?} (label '{label}')")]
    UnrecognizedPosition { label: String, alternates: Vec<String> },

    #[error("unrecognized injury status '{token}' (label '{label}')")]
    UnrecognizedStatus { label: String, token: String },

    #[error("unrecognized injury reason '{token}' (label '{label}')")]
    UnrecognizedReason { label: String, token: String },

    #[error("unrecognized player position code '{code}' (label '{label}')")]
    UnrecognizedPlayerType { label: String, code: String },

    #[error("invalid state: '{raw}'")]
    InvalidState { raw: String },
}

/// Parsing a symbolic name back into a vocabulary member failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} code '{code}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// Reading one page cell into canonical records failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("injury tooltip has no ':' separator: '{0}'")]
    MalformedTip(String),

    #[error("bad week attribute '{0}'")]
    BadWeek(String),

    #[error("different number of assistant coaches ({coaches:?}) and positions ({positions:?}) found")]
    CountMismatch { coaches: Vec<String>, positions: Vec<String> },

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Anything the command line front end can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl From<&str> for CliError {
    fn from(s: &str) -> Self {
        CliError::Usage(s.to_string())
    }
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Usage(s)
    }
}

pub type Result<T, E = ClassifyError> = std::result::Result<T, E>;
