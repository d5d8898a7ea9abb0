//! Operands of a `calc` operation.

use std::fmt;

use crate::Name;

/// Whether `text` is a numeric literal.
///
/// A string is a number iff it parses fully as a base-10 signed 64-bit
/// integer: an optional leading `+` or `-` followed by ASCII digits, no
/// surrounding whitespace. Values outside the `i64` range are *not*
/// numbers and are treated as variable references.
#[inline]
pub fn is_number(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

/// A `calc` operand: either an integer literal or a variable reference.
///
/// Classified once from the operand text with [`is_number`]; consumers
/// never re-parse it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    /// Integer literal.
    Literal(i64),
    /// Reference to another variable.
    Reference(Name),
}

impl Operand {
    /// Classify raw operand text.
    pub fn parse(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(value) => Operand::Literal(value),
            Err(_) => Operand::Reference(Name::new(text)),
        }
    }

    /// The referenced variable, if this operand is a reference.
    #[inline]
    pub fn reference(&self) -> Option<&Name> {
        match self {
            Operand::Reference(name) => Some(name),
            Operand::Literal(_) => None,
        }
    }

    /// Whether this operand is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Operand::Literal(_))
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::parse(text)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{value}"),
            Operand::Reference(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests;
