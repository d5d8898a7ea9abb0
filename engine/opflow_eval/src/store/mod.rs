//! Shared variable values for one request.

use opflow_ir::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Thread-safe map from variable name to its computed value.
///
/// All concurrent evaluators of one request read and write through the same
/// store. One read/write lock guards the whole map.
///
/// `set` overwrites unconditionally. Values are set at most once per run
/// because the scheduler checks [`contains`](Self::contains) before writing
/// and never lets two operations of a wave share a target.
#[derive(Default)]
pub struct VariableStore {
    values: RwLock<FxHashMap<Name, i64>>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VariableStore {
            values: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Store `value` under `name`, replacing any previous value.
    pub fn set(&self, name: Name, value: i64) {
        self.values.write().insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.read().get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Copy of every stored value, sorted by name.
    pub fn snapshot(&self) -> Vec<(Name, i64)> {
        let mut entries: Vec<(Name, i64)> = self
            .values
            .read()
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
