//! `calc` and `print` operations.

use std::fmt;

use crate::{Name, Operand};

/// Arithmetic operator of a `calc`.
///
/// The operator text is not validated when the operation is built: an
/// unrecognised symbol is kept as [`BinaryOp::Unsupported`] and the
/// evaluator discards that operation without storing a value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// Any other operator symbol.
    Unsupported(Box<str>),
}

impl BinaryOp {
    /// Recognise an operator symbol.
    pub fn parse(symbol: &str) -> Self {
        match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            other => BinaryOp::Unsupported(other.into()),
        }
    }

    /// The operator symbol as written in the source.
    pub fn symbol(&self) -> &str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Unsupported(symbol) => symbol,
        }
    }

    /// Whether the evaluator knows how to apply this operator.
    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, BinaryOp::Unsupported(_))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One entry of a request's operation list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    /// `calc target = left op right`
    Calc {
        target: Name,
        op: BinaryOp,
        left: Operand,
        right: Operand,
    },
    /// `print target`
    Print { target: Name },
}

impl Operation {
    /// Build a `calc` from raw operand and operator text.
    pub fn calc(target: impl Into<Name>, left: &str, op: &str, right: &str) -> Self {
        Operation::Calc {
            target: target.into(),
            op: BinaryOp::parse(op),
            left: Operand::parse(left),
            right: Operand::parse(right),
        }
    }

    /// Build a `print`.
    pub fn print(target: impl Into<Name>) -> Self {
        Operation::Print {
            target: target.into(),
        }
    }

    /// The variable this operation defines or prints.
    #[inline]
    pub fn target(&self) -> &Name {
        match self {
            Operation::Calc { target, .. } | Operation::Print { target } => target,
        }
    }

    #[inline]
    pub fn is_calc(&self) -> bool {
        matches!(self, Operation::Calc { .. })
    }

    #[inline]
    pub fn is_print(&self) -> bool {
        matches!(self, Operation::Print { .. })
    }

    /// Variables referenced by this operation's operands, left before right.
    ///
    /// Empty for `print` and for a `calc` over two literals.
    pub fn references(&self) -> impl Iterator<Item = &Name> {
        let operands = match self {
            Operation::Calc { left, right, .. } => [Some(left), Some(right)],
            Operation::Print { .. } => [None, None],
        };
        operands.into_iter().flatten().filter_map(Operand::reference)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Calc {
                target,
                op,
                left,
                right,
            } => write!(f, "calc {target} = {left} {op} {right}"),
            Operation::Print { target } => write!(f, "print {target}"),
        }
    }
}

#[cfg(test)]
mod tests;
