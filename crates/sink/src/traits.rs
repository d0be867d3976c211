//! The emission boundary every backend implements.

use pmemtrace_core::Event;

/// Append-only output channel for event records.
///
/// `emit` must not block and must not fail observably: the wrappers call it
/// inline on the persistence hot path, from arbitrary execution contexts,
/// and their forward progress can never hinge on the channel. A backend
/// that cannot accept a record drops it.
///
/// Delivery is best-effort and asynchronous: an emitted event becomes
/// visible to the external consumer at some later, unspecified time.
pub trait Sink: Send + Sync {
    /// Accept one record.
    fn emit(&self, event: Event);
}

/// Backend that discards every record.
///
/// The wired-up-but-off configuration; also what a disabled tracer holds so
/// construction never needs a real channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn emit(&self, _event: Event) {}
}
