//! CLI failure taxonomy
//!
//! Every failure kind maps onto exactly one process exit code. Failures
//! are detected once, logged once, and abort the run; no retries and no
//! partial output.

use std::io;
use std::path::PathBuf;

use crate::input::InputError;
use hessqr::EigenError;

/// Process exit codes, one per failure kind.
pub mod exit {
    pub const INVALID_INVOCATION: u8 = 1;
    pub const CANNOT_OPEN_FILE: u8 = 2;
    pub const INVALID_DATA: u8 = 3;
    pub const OUT_OF_MEMORY: u8 = 4;
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot open input file {path}: {source}")]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("cannot create output file {path}: {source}")]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("cannot write results: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Eigen(#[from] EigenError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::OpenInput { .. } | CliError::OpenOutput { .. } => exit::CANNOT_OPEN_FILE,
            CliError::Input(InputError::OutOfMemory { .. }) => exit::OUT_OF_MEMORY,
            CliError::Input(_) => exit::INVALID_DATA,
            CliError::Write(_) => exit::CANNOT_OPEN_FILE,
            CliError::Eigen(_) => exit::INVALID_DATA,
        }
    }
}
