//! Evaluation event reporting.
//!
//! The scheduler does not print anything itself. It reports [`EvalEvent`]s
//! to an injected sink:
//! - `Tracing`: forwards events to `tracing` (default)
//! - `Buffer`: captures events for tests and tooling
//! - `Silent`: discards everything
//!
//! Uses enum dispatch instead of trait objects; the sink set is closed.
//! Events are reported by the controlling thread after each wave barrier,
//! so their order is deterministic.

use std::fmt;
use std::sync::Arc;

use opflow_ir::Name;
use parking_lot::Mutex;

use crate::scheduler::DiscardReason;

/// Something that happened while evaluating one request.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum EvalEvent {
    /// A wave is about to execute `ready` operations.
    WaveStarted {
        wave: usize,
        ready: usize,
        blocked: usize,
    },
    /// A variable received its value.
    Computed { wave: usize, name: Name, value: i64 },
    /// A ready operation could not produce a value.
    Discarded {
        wave: usize,
        name: Name,
        reason: DiscardReason,
    },
    /// The scheduler stopped.
    FixedPoint {
        waves: usize,
        computed: usize,
        unresolved: usize,
    },
}

impl fmt::Display for EvalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalEvent::WaveStarted {
                wave,
                ready,
                blocked,
            } => write!(f, "wave {wave}: {ready} ready, {blocked} blocked"),
            EvalEvent::Computed { wave, name, value } => {
                write!(f, "wave {wave}: {name} = {value}")
            }
            EvalEvent::Discarded { wave, name, reason } => {
                write!(f, "wave {wave}: discarded `{name}` ({reason})")
            }
            EvalEvent::FixedPoint {
                waves,
                computed,
                unresolved,
            } => write!(
                f,
                "fixed point after {waves} wave(s): {computed} computed, {unresolved} unresolved"
            ),
        }
    }
}

/// Sink that captures events in memory.
#[derive(Default)]
pub struct BufferEventSink {
    events: Mutex<Vec<EvalEvent>>,
}

impl BufferEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, event: EvalEvent) {
        self.events.lock().push(event);
    }

    pub fn events(&self) -> Vec<EvalEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

fn report_to_tracing(event: &EvalEvent) {
    match event {
        EvalEvent::WaveStarted {
            wave,
            ready,
            blocked,
        } => tracing::debug!(wave, ready, blocked, "wave started"),
        EvalEvent::Computed { wave, name, value } => {
            tracing::trace!(wave, name = name.as_str(), value, "computed");
        }
        EvalEvent::Discarded { wave, name, reason } => {
            tracing::debug!(wave, name = name.as_str(), %reason, "discarded");
        }
        EvalEvent::FixedPoint {
            waves,
            computed,
            unresolved,
        } => tracing::debug!(waves, computed, unresolved, "fixed point reached"),
    }
}

/// Event sink implementation using enum dispatch.
#[derive(Default)]
pub enum EventSink {
    /// Forwards to `tracing` (default).
    #[default]
    Tracing,
    /// Captures events in memory.
    Buffer(BufferEventSink),
    /// Discards all events.
    Silent,
}

impl EventSink {
    pub fn report(&self, event: EvalEvent) {
        match self {
            Self::Tracing => report_to_tracing(&event),
            Self::Buffer(sink) => sink.report(event),
            Self::Silent => {}
        }
    }

    /// Captured events; empty for sinks that don't capture.
    pub fn events(&self) -> Vec<EvalEvent> {
        match self {
            Self::Buffer(sink) => sink.events(),
            Self::Tracing | Self::Silent => Vec::new(),
        }
    }

    /// Captured events rendered one per line.
    pub fn render(&self) -> String {
        self.events().iter().fold(String::new(), |mut out, event| {
            out.push_str(&event.to_string());
            out.push('\n');
            out
        })
    }

    pub fn clear(&self) {
        if let Self::Buffer(sink) = self {
            sink.clear();
        }
    }
}

/// Event sink shared between a caller and the evaluation it starts.
pub type SharedEventSink = Arc<EventSink>;

pub fn tracing_sink() -> SharedEventSink {
    Arc::new(EventSink::Tracing)
}

pub fn buffer_sink() -> SharedEventSink {
    Arc::new(EventSink::Buffer(BufferEventSink::new()))
}

pub fn silent_sink() -> SharedEventSink {
    Arc::new(EventSink::Silent)
}
