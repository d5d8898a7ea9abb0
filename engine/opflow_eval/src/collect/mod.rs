//! Result collection (Stage 4).
//!
//! Resolves every `print` against the store once the scheduler has reached
//! its fixed point. Output order is input order of the `print`s.

use opflow_ir::{Name, Operation};

use crate::store::VariableStore;

/// One `print` resolved against the store.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PrintedValue {
    pub var: Name,
    /// The stored value, or 0 for a broken variable.
    pub value: i64,
}

/// Ordered print results plus the names that never got a value.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct EvaluationResult {
    pub items: Vec<PrintedValue>,
    /// Broken print targets, once per `print`, in print order.
    pub broken: Vec<Name>,
}

impl EvaluationResult {
    pub fn is_complete(&self) -> bool {
        self.broken.is_empty()
    }

    /// Value printed for `name` by its first `print`.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.var == name)
            .map(|item| item.value)
    }
}

pub fn collect(operations: &[Operation], store: &VariableStore) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    for operation in operations {
        let Operation::Print { target } = operation else {
            continue;
        };

        let value = store.get(target.as_str()).unwrap_or_else(|| {
            result.broken.push(target.clone());
            0
        });
        result.items.push(PrintedValue {
            var: target.clone(),
            value,
        });
    }

    result
}
