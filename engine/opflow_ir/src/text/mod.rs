//! Line-oriented text form of an operation list.
//!
//! ```text
//! # comment
//! calc x = 10 + 2
//! print x
//! ```
//!
//! Tokens are whitespace separated. Blank lines and lines starting with `#`
//! are skipped. Operand and operator text is classified exactly as the wire
//! format does, so an unknown operator symbol parses fine and is discarded
//! later by the evaluator.

use thiserror::Error;

use crate::Operation;

/// Error produced while reading the text form.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum TextError {
    #[error("line {line}: unknown operation `{keyword}` (expected `calc` or `print`)")]
    UnknownKeyword { line: usize, keyword: String },
    #[error("line {line}: malformed calc, expected `calc <var> = <left> <op> <right>`")]
    MalformedCalc { line: usize },
    #[error("line {line}: malformed print, expected `print <var>`")]
    MalformedPrint { line: usize },
}

impl TextError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            TextError::UnknownKeyword { line, .. }
            | TextError::MalformedCalc { line }
            | TextError::MalformedPrint { line } => *line,
        }
    }
}

/// Parse every operation in `source`, in order.
pub fn parse_operations(source: &str) -> Result<Vec<Operation>, TextError> {
    let mut operations = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let operation = match tokens.as_slice() {
            ["calc", target, "=", left, op, right] => Operation::calc(*target, left, op, right),
            ["calc", ..] => return Err(TextError::MalformedCalc { line }),
            ["print", target] => Operation::print(*target),
            ["print", ..] => return Err(TextError::MalformedPrint { line }),
            [keyword, ..] => {
                return Err(TextError::UnknownKeyword {
                    line,
                    keyword: (*keyword).to_string(),
                })
            }
            [] => continue,
        };
        operations.push(operation);
    }

    Ok(operations)
}
