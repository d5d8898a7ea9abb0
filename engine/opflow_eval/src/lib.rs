//! Opflow Eval - evaluator for unordered `calc`/`print` operation lists.
//!
//! # Architecture
//!
//! One request flows through four stages, all created fresh per request:
//!
//! 1. [`Program::new`] validates that every variable has at most one
//!    defining `calc`.
//! 2. [`analyze`] builds the [`DependencyGraph`] and the [`LiveSet`] of
//!    variables some `print` transitively needs.
//! 3. [`run_waves`] evaluates ready live `calc`s in barrier-synchronised
//!    parallel waves, writing into a shared [`VariableStore`], until a wave
//!    stores nothing new.
//! 4. [`collect`] resolves every `print` in input order; missing values
//!    print as `0` and are listed as broken.
//!
//! [`evaluate`] runs the whole pipeline and turns the outcome into
//! diagnostics. [`to_dot`] renders the analysis for inspection and never
//! affects evaluation.
//!
//! Bad input never makes evaluation fail: unresolvable operands, unknown
//! operators, overflow and cycles all degrade to "value absent".

mod collect;
mod event_sink;
mod export;
mod liveness;
mod operators;
mod pipeline;
mod program;
mod scheduler;
mod store;

pub use collect::{collect, EvaluationResult, PrintedValue};
pub use event_sink::{
    buffer_sink, silent_sink, tracing_sink, BufferEventSink, EvalEvent, EventSink,
    SharedEventSink,
};
pub use export::to_dot;
pub use liveness::{analyze, DependencyGraph, LiveSet};
pub use operators::{apply_binary, ApplyError};
pub use pipeline::{evaluate, warning_text, Evaluation};
pub use program::{Program, ProgramError};
pub use scheduler::{run_waves, DiscardReason, Discarded, EvalConfig, ScheduleReport};
pub use store::VariableStore;
