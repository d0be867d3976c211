//! Convenient imports for pmemtrace.
//!
//! This module re-exports the most commonly used types so instrumented code
//! can get started with a single import:
//!
//! ```
//! use pmemtrace::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let tracer = Tracer::new(TraceMask::enabled(), sink.clone());
//!
//! let mut field = 0u32;
//! tracer.store(&mut field, 7);
//! assert_eq!(sink.kinds(), vec![EventKind::Write]);
//! ```

// Main entry point
pub use crate::builder::TracerBuilder;
pub use crate::tracer::Tracer;

// Event model
pub use pmemtrace_core::{Event, EventKind, Origin, TraceMask};

// Sinks
pub use pmemtrace_sink::{CaptureSink, LogSink, NullSink, RingSink, Sink};

// Wire format
pub use pmemtrace_wire::{decode, encode, DecodeError};
