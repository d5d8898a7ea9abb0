//! The `explain` command: documentation for diagnostic codes.

use opflow_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Documentation for `code_str`, e.g. `W6001`.
pub fn explain_code(code_str: &str) -> Result<&'static str, CliError> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(CliError::Usage(format!(
            "unknown error code `{code_str}`; codes look like E1001 (errors) or W6001 (warnings)"
        )));
    };

    ErrorDocs::get(code)
        .ok_or_else(|| CliError::Usage(format!("no documentation available for {code}")))
}
