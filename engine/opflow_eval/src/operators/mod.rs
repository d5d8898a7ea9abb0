//! Binary operator implementations.
//!
//! Direct enum dispatch over [`BinaryOp`]. All arithmetic is checked: a
//! result outside `i64` is an error, never a wrapped value.

use opflow_ir::BinaryOp;
use thiserror::Error;

/// Why an operator could not produce a value.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum ApplyError {
    #[error("unsupported operator")]
    Unsupported,
    #[error("integer overflow")]
    Overflow,
}

#[inline]
fn checked_arith(result: Option<i64>) -> Result<i64, ApplyError> {
    result.ok_or(ApplyError::Overflow)
}

/// Apply `op` to two resolved operand values.
pub fn apply_binary(op: &BinaryOp, left: i64, right: i64) -> Result<i64, ApplyError> {
    match op {
        BinaryOp::Add => checked_arith(left.checked_add(right)),
        BinaryOp::Sub => checked_arith(left.checked_sub(right)),
        BinaryOp::Mul => checked_arith(left.checked_mul(right)),
        BinaryOp::Unsupported(_) => Err(ApplyError::Unsupported),
    }
}

#[cfg(test)]
mod tests;
