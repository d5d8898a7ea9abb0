//! Error codes for all opflow diagnostics.
//!
//! Format: `E####` for errors, `W####` for warnings. The first digit names
//! the phase:
//! - 1xxx: request loading (wire and text forms)
//! - 2xxx: program validation
//! - 6xxx: evaluation

use std::fmt;

/// Error codes for all opflow diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Loading Errors (E1xxx)
    /// Unknown operation type
    E1001,
    /// Calc without an operand
    E1002,
    /// Empty variable name
    E1003,
    /// Malformed text line
    E1004,

    // Validation Errors (E2xxx)
    /// Variable defined by more than one calc
    E2001,

    // Evaluation Warnings (W6xxx)
    /// Print of a variable that never received a value
    W6001,
    /// Unsupported operator
    W6002,
    /// Integer overflow
    W6003,
    /// Live calc whose operands never resolved
    W6004,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::W6001,
        ErrorCode::W6002,
        ErrorCode::W6003,
        ErrorCode::W6004,
    ];

    /// The code as written in output, e.g. `"W6001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::W6001 => "W6001",
            ErrorCode::W6002 => "W6002",
            ErrorCode::W6003 => "W6003",
            ErrorCode::W6004 => "W6004",
        }
    }

    /// Short human-readable summary.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unknown operation type",
            ErrorCode::E1002 => "calc is missing an operand",
            ErrorCode::E1003 => "empty variable name",
            ErrorCode::E1004 => "malformed operation line",
            ErrorCode::E2001 => "variable defined more than once",
            ErrorCode::W6001 => "variable printed before calculation",
            ErrorCode::W6002 => "unsupported operator",
            ErrorCode::W6003 => "integer overflow",
            ErrorCode::W6004 => "unresolved dependency",
        }
    }

    /// Check if this is a request-loading error (E1xxx range).
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 | ErrorCode::E1004
        )
    }

    /// Check if this is a program validation error (E2xxx range).
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ErrorCode::E2001)
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ErrorCode::W6001 | ErrorCode::W6002 | ErrorCode::W6003 | ErrorCode::W6004
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E2001"` or `"w6001"` (case-insensitive).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
