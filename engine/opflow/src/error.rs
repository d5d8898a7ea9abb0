//! Errors surfaced by the driver.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use opflow_diagnostic::{Diagnostic, ErrorCode};
use opflow_eval::ProgramError;
use opflow_ir::{TextError, WireError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error("`dot` exited with {status}")]
    Render { status: ExitStatus },
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// The request problem as a coded diagnostic.
    ///
    /// `None` for failures that are about the environment rather than the
    /// request (I/O, bad arguments, undecodable JSON, Graphviz failures).
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let diagnostic = match self {
            CliError::Wire(err) => {
                let (code, index) = match err {
                    WireError::UnknownType { index, .. } => (ErrorCode::E1001, *index),
                    WireError::MissingOperand { index, .. } => (ErrorCode::E1002, *index),
                    WireError::EmptyName { index } => (ErrorCode::E1003, *index),
                };
                Diagnostic::error(code)
                    .with_message(err.to_string())
                    .with_operation(index)
            }
            CliError::Text(err) => {
                let code = match err {
                    TextError::UnknownKeyword { .. } => ErrorCode::E1001,
                    TextError::MalformedCalc { .. } | TextError::MalformedPrint { .. } => {
                        ErrorCode::E1004
                    }
                };
                Diagnostic::error(code).with_message(err.to_string())
            }
            CliError::Program(err) => err.to_diagnostic(),
            CliError::Io { .. }
            | CliError::Json(_)
            | CliError::Render { .. }
            | CliError::Usage(_) => return None,
        };
        Some(diagnostic)
    }
}
