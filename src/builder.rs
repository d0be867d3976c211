//! Tracer configuration builder.

use crate::tracer::Tracer;
use pmemtrace_core::TraceMask;
use pmemtrace_sink::{LogSink, Sink};
use std::sync::Arc;

/// Builder for [`Tracer`] configuration.
///
/// Defaults: a fresh disabled mask and the [`LogSink`] production backend.
///
/// # Example
///
/// ```
/// use pmemtrace::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(RingSink::with_capacity(4096));
/// let tracer = Tracer::builder()
///     .enabled()
///     .sink(sink.clone())
///     .build();
///
/// tracer.commit();
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Default)]
pub struct TracerBuilder {
    mask: Option<TraceMask>,
    sink: Option<Arc<dyn Sink>>,
}

impl TracerBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        TracerBuilder::default()
    }

    /// Use an externally controlled mask.
    pub fn mask(mut self, mask: TraceMask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Start with emission enabled.
    pub fn enabled(mut self) -> Self {
        self.mask = Some(TraceMask::enabled());
        self
    }

    /// Emit into the given sink.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the tracer.
    pub fn build(self) -> Tracer {
        let mask = self.mask.unwrap_or_default();
        let sink = self.sink.unwrap_or_else(|| Arc::new(LogSink::new()));
        Tracer::new(mask, sink)
    }
}
