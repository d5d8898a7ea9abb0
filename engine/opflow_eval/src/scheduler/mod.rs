//! Wavefront evaluation (Stage 3).
//!
//! Evaluates live `calc`s without a topological sort by repeating *waves*:
//!
//! 1. **Partition** the pending `calc`s against the current store:
//!    - *ready*: target live, target not yet stored, both operands literal
//!      or already stored;
//!    - *dropped*: target not live, or already stored; never reconsidered;
//!    - *blocked*: an operand is still missing; kept for the next wave.
//! 2. **Execute** every ready operation concurrently, one rayon task each.
//!    Each task re-checks that its target is absent, applies the operator
//!    and stores the result.
//! 3. **Barrier**: the wave's tasks all finish before the next partition,
//!    so a value written in wave N is visible to every reader in wave N+1.
//!
//! The loop stops at the first wave with nothing ready or nothing newly
//! stored. That is the fixed point: operations stuck behind a cycle or an
//! undefined variable stay blocked and their targets stay absent. There is
//! no wave cap; progress is the only termination signal.

use std::fmt;

use opflow_ir::{BinaryOp, Name, Operand, Operation};
use rayon::prelude::*;

use crate::event_sink::{EvalEvent, EventSink};
use crate::liveness::LiveSet;
use crate::operators::{apply_binary, ApplyError};
use crate::program::Program;
use crate::store::VariableStore;

/// Configuration for wave execution.
#[derive(Clone, Debug)]
pub struct EvalConfig {
    /// Execute the operations of a wave in parallel.
    pub parallel: bool,
    /// Worker threads for the wave pool; 0 means rayon's default.
    pub num_threads: usize,
    /// Worker stack size in bytes; 0 keeps rayon's default.
    pub stack_size: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            parallel: true,
            num_threads: 0,
            stack_size: 2 * 1024 * 1024,
        }
    }
}

impl EvalConfig {
    /// Configuration that runs every wave on the calling thread.
    pub fn sequential() -> Self {
        EvalConfig {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Why a ready operation produced no value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiscardReason {
    UnsupportedOperator(Box<str>),
    Overflow,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::UnsupportedOperator(symbol) => {
                write!(f, "unsupported operator `{symbol}`")
            }
            DiscardReason::Overflow => write!(f, "integer overflow"),
        }
    }
}

/// A ready operation that was dropped without storing a value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Discarded {
    /// Index of the operation in the program.
    pub operation: usize,
    pub target: Name,
    pub reason: DiscardReason,
}

/// Summary of one scheduler run.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ScheduleReport {
    /// Waves that executed at least one operation.
    pub waves: usize,
    /// Variables newly stored.
    pub computed: usize,
    /// Ready operations that produced no value.
    pub discarded: Vec<Discarded>,
    /// Indices of live `calc`s still blocked at the fixed point.
    pub unresolved: Vec<usize>,
}

/// A `calc` whose operands are resolved.
struct ReadyOp<'p> {
    index: usize,
    target: &'p Name,
    op: &'p BinaryOp,
    left: i64,
    right: i64,
}

enum Outcome {
    Stored(i64),
    AlreadyPresent,
    Discarded(DiscardReason),
}

struct Partition<'p> {
    ready: Vec<ReadyOp<'p>>,
    blocked: Vec<usize>,
}

#[inline]
fn resolve(operand: &Operand, store: &VariableStore) -> Option<i64> {
    match operand {
        Operand::Literal(value) => Some(*value),
        Operand::Reference(name) => store.get(name.as_str()),
    }
}

fn partition<'p>(
    operations: &'p [Operation],
    pending: &[usize],
    live: &LiveSet,
    store: &VariableStore,
) -> Partition<'p> {
    let mut ready = Vec::new();
    let mut blocked = Vec::new();

    for &index in pending {
        let Operation::Calc {
            target,
            op,
            left,
            right,
        } = &operations[index]
        else {
            continue;
        };

        // Dead or already computed: done for good.
        if !live.contains(target.as_str()) || store.contains(target.as_str()) {
            continue;
        }

        match (resolve(left, store), resolve(right, store)) {
            (Some(left), Some(right)) => ready.push(ReadyOp {
                index,
                target,
                op,
                left,
                right,
            }),
            _ => blocked.push(index),
        }
    }

    Partition { ready, blocked }
}

/// Check-then-act: store the result only if the target is still absent.
fn execute(ready: &ReadyOp<'_>, store: &VariableStore) -> Outcome {
    if store.contains(ready.target.as_str()) {
        return Outcome::AlreadyPresent;
    }

    match apply_binary(ready.op, ready.left, ready.right) {
        Ok(value) => {
            store.set(ready.target.clone(), value);
            Outcome::Stored(value)
        }
        Err(ApplyError::Unsupported) => Outcome::Discarded(DiscardReason::UnsupportedOperator(
            ready.op.symbol().into(),
        )),
        Err(ApplyError::Overflow) => Outcome::Discarded(DiscardReason::Overflow),
    }
}

fn execute_sequential(ready: &[ReadyOp<'_>], store: &VariableStore) -> Vec<Outcome> {
    ready.iter().map(|op| execute(op, store)).collect()
}

/// `collect` returns only after every task has finished: the wave barrier.
fn execute_parallel(ready: &[ReadyOp<'_>], store: &VariableStore) -> Vec<Outcome> {
    ready.par_iter().map(|op| execute(op, store)).collect()
}

/// Run waves over `program` until the fixed point, writing into `store`.
///
/// With `config.parallel`, waves execute on a scoped rayon pool that is torn
/// down before this returns. If the pool cannot be created the run falls
/// back to sequential waves, which produce identical values.
pub fn run_waves(
    program: &Program,
    live: &LiveSet,
    store: &VariableStore,
    config: &EvalConfig,
    sink: &EventSink,
) -> ScheduleReport {
    if !config.parallel {
        return drive(program, live, store, sink, execute_sequential);
    }

    let mut builder = rayon::ThreadPoolBuilder::new().num_threads(config.num_threads);
    if config.stack_size > 0 {
        builder = builder.stack_size(config.stack_size);
    }

    builder
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| drive(program, live, store, sink, execute_parallel))
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create wave thread pool ({e}), running sequentially");
            drive(program, live, store, sink, execute_sequential)
        })
}

fn drive<F>(
    program: &Program,
    live: &LiveSet,
    store: &VariableStore,
    sink: &EventSink,
    execute_wave: F,
) -> ScheduleReport
where
    F: Fn(&[ReadyOp<'_>], &VariableStore) -> Vec<Outcome>,
{
    let operations = program.operations();
    let mut report = ScheduleReport::default();
    let mut pending = program.calc_indices();

    loop {
        let Partition { ready, blocked } = partition(operations, &pending, live, store);

        if ready.is_empty() {
            report.unresolved = blocked;
            break;
        }

        report.waves += 1;
        let wave = report.waves;
        sink.report(EvalEvent::WaveStarted {
            wave,
            ready: ready.len(),
            blocked: blocked.len(),
        });

        let outcomes = execute_wave(&ready, store);

        let mut stored = 0;
        for (op, outcome) in ready.iter().zip(outcomes) {
            match outcome {
                Outcome::Stored(value) => {
                    stored += 1;
                    sink.report(EvalEvent::Computed {
                        wave,
                        name: op.target.clone(),
                        value,
                    });
                }
                Outcome::AlreadyPresent => {}
                Outcome::Discarded(reason) => {
                    sink.report(EvalEvent::Discarded {
                        wave,
                        name: op.target.clone(),
                        reason: reason.clone(),
                    });
                    report.discarded.push(Discarded {
                        operation: op.index,
                        target: op.target.clone(),
                        reason,
                    });
                }
            }
        }
        report.computed += stored;

        if stored == 0 {
            report.unresolved = blocked;
            break;
        }
        pending = blocked;
    }

    sink.report(EvalEvent::FixedPoint {
        waves: report.waves,
        computed: report.computed,
        unresolved: report.unresolved.len(),
    });

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
