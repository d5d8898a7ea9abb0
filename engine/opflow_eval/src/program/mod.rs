//! Validated operation lists.

use opflow_diagnostic::{Diagnostic, ErrorCode};
use opflow_ir::{Name, Operation};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Precondition violation found while validating an operation list.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ProgramError {
    /// Two `calc`s define the same variable.
    #[error("variable `{name}` is defined by operation #{first} and again by operation #{second}")]
    DuplicateDefinition {
        name: Name,
        first: usize,
        second: usize,
    },
}

impl ProgramError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ProgramError::DuplicateDefinition {
                name,
                first,
                second,
            } => Diagnostic::error(ErrorCode::E2001)
                .with_message(format!("variable `{name}` is defined more than once"))
                .with_variable(name.clone())
                .with_operation(*second)
                .with_note(format!("first definition is operation #{first}")),
        }
    }
}

/// An operation list where every variable has at most one defining `calc`.
///
/// The scheduler relies on this: with a single definition per target, no
/// two operations of the same wave can race on one store entry.
#[derive(Clone, Debug)]
pub struct Program {
    operations: Vec<Operation>,
    definitions: FxHashMap<Name, usize>,
}

impl Program {
    /// Validate `operations`; the first duplicate definition is an error.
    pub fn new(operations: Vec<Operation>) -> Result<Self, ProgramError> {
        let mut definitions = FxHashMap::default();

        for (index, operation) in operations.iter().enumerate() {
            if let Operation::Calc { target, .. } = operation {
                if let Some(&first) = definitions.get(target) {
                    return Err(ProgramError::DuplicateDefinition {
                        name: target.clone(),
                        first,
                        second: index,
                    });
                }
                definitions.insert(target.clone(), index);
            }
        }

        Ok(Program {
            operations,
            definitions,
        })
    }

    /// All operations in input order.
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Index of the `calc` that defines `name`.
    pub fn definition_of(&self, name: &str) -> Option<usize> {
        self.definitions.get(name).copied()
    }

    /// Indices of every `calc`, in input order.
    pub fn calc_indices(&self) -> Vec<usize> {
        self.operations
            .iter()
            .enumerate()
            .filter(|(_, op)| op.is_calc())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
