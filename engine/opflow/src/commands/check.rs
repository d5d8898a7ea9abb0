//! The `check` command: load and validate a request without evaluating it.

use std::path::Path;

use crate::input::load_file;
use crate::CliError;

/// Shape of a valid request.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CheckSummary {
    pub operations: usize,
    pub calcs: usize,
    pub prints: usize,
}

pub fn check_file(path: &Path) -> Result<CheckSummary, CliError> {
    let program = load_file(path)?;
    let calcs = program.calc_indices().len();
    Ok(CheckSummary {
        operations: program.len(),
        calcs,
        prints: program.len() - calcs,
    })
}
