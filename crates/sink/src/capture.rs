//! In-memory capturing backend for tests.

use crate::traits::Sink;
use parking_lot::Mutex;
use pmemtrace_core::{Event, EventKind};

/// Backend that records every emitted event in order.
///
/// The assertion backend: tests hand one to a tracer, drive the wrappers,
/// then inspect the captured sequence. Holds a mutex around the buffer, so
/// it is for tests only; production contexts that forbid stalling use
/// [`RingSink`](crate::RingSink) or [`LogSink`](crate::LogSink) instead.
#[derive(Debug, Default)]
pub struct CaptureSink {
    events: Mutex<Vec<Event>>,
}

impl CaptureSink {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        CaptureSink::default()
    }

    /// Snapshot of all captured events, in emission order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Kinds of all captured events, in emission order.
    ///
    /// Convenience for asserting event sequences.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.lock().iter().map(Event::kind).collect()
    }

    /// Number of captured events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Check if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Sink for CaptureSink {
    fn emit(&self, event: Event) {
        self.events.lock().push(event);
    }
}
