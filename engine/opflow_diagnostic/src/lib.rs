//! Diagnostic system for opflow requests.
//!
//! Every problem found while loading or evaluating a request is reported as
//! a [`Diagnostic`] with:
//! - an [`ErrorCode`] for searchability (`opflow explain W6001`)
//! - a one-line message (what went wrong)
//! - the variable and operation it concerns, when known
//! - free-form notes (why, and how to fix it)
//!
//! Evaluation never fails because of bad input; it degrades to "value
//! absent" and reports warnings here. Only request loading and program
//! validation produce errors.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
