//! Embedded documentation for `opflow explain`.
//!
//! Each code has a markdown file in this directory, embedded at compile
//! time.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Documentation for a code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// All documented codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Loading errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    (ErrorCode::E1004, include_str!("E1004.md")),
    // Validation errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    // Evaluation warnings (W6xxx)
    (ErrorCode::W6001, include_str!("W6001.md")),
    (ErrorCode::W6002, include_str!("W6002.md")),
    (ErrorCode::W6003, include_str!("W6003.md")),
    (ErrorCode::W6004, include_str!("W6004.md")),
];
