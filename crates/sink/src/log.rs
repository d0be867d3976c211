//! Log-stream backend built on `tracing`.

use crate::traits::Sink;
use pmemtrace_core::Event;

/// Target under which event records are logged.
pub const LOG_TARGET: &str = "pmemtrace";

/// Backend that forwards encoded records to the `tracing` event stream.
///
/// The production channel: each record becomes one `TRACE`-level log event
/// under the [`LOG_TARGET`] target, in the wire format, for whatever
/// subscriber the host process has installed. With no subscriber interested
/// in the target, emission is a filter check and nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a log backend.
    pub fn new() -> Self {
        LogSink
    }
}

impl Sink for LogSink {
    fn emit(&self, event: Event) {
        tracing::trace!(target: LOG_TARGET, "{}", pmemtrace_wire::encode(&event));
    }
}
