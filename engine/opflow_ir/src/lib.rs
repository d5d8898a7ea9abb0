//! Opflow IR - operation types for the opflow evaluator.
//!
//! This crate contains the data model every other opflow crate builds on:
//! - [`Name`]: cheap-to-clone variable identifiers
//! - [`Operand`]: a literal integer or a variable reference, classified once
//! - [`BinaryOp`]: the arithmetic operator of a `calc`
//! - [`Operation`]: a `calc` or `print` record
//!
//! Two source forms are supported: the JSON wire format used by the
//! request-handling layer (behind the `serde` feature, see [`wire`]) and a
//! line-oriented text form used by the CLI (see [`text`]).
//!
//! # Design Philosophy
//!
//! Operations are immutable once built. Operand classification happens at
//! construction time, so downstream passes never re-parse operand text.

mod name;
mod operand;
mod operation;
pub mod text;
#[cfg(feature = "serde")]
pub mod wire;

pub use name::Name;
pub use operand::{is_number, Operand};
pub use operation::{BinaryOp, Operation};
pub use text::{parse_operations, TextError};
#[cfg(feature = "serde")]
pub use wire::{OperationRequest, OperationResponse, VariableValue, WireError, WireOperation};
