//! Request loading.
//!
//! A request is either the JSON wire body or the line-oriented text form.
//! Files ending in `.json`, and any source whose first non-blank character
//! is `{`, are read as JSON; everything else as text.

use std::fs;
use std::path::Path;

use opflow_eval::Program;
use opflow_ir::{parse_operations, Operation, OperationRequest};

use crate::CliError;

/// How a request source is encoded.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SourceKind {
    Json,
    Text,
}

impl SourceKind {
    pub fn detect(path: Option<&Path>, source: &str) -> Self {
        let json_extension = path
            .and_then(Path::extension)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if json_extension || source.trim_start().starts_with('{') {
            SourceKind::Json
        } else {
            SourceKind::Text
        }
    }
}

/// Decode the operations of a request, in request order.
pub fn parse_source(source: &str, kind: SourceKind) -> Result<Vec<Operation>, CliError> {
    match kind {
        SourceKind::Json => {
            let request: OperationRequest = serde_json::from_str(source)?;
            Ok(request.into_operations()?)
        }
        SourceKind::Text => Ok(parse_operations(source)?),
    }
}

/// Decode and validate a request.
pub fn load_program(source: &str, kind: SourceKind) -> Result<Program, CliError> {
    let operations = parse_source(source, kind)?;
    tracing::debug!(operations = operations.len(), ?kind, "request decoded");
    Ok(Program::new(operations)?)
}

pub fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Read, decode and validate the request stored at `path`.
pub fn load_file(path: &Path) -> Result<Program, CliError> {
    let source = read_source(path)?;
    load_program(&source, SourceKind::detect(Some(path), &source))
}
