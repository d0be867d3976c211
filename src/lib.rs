//! # pmemtrace
//!
//! Transparent access instrumentation for persistent-memory storage engines.
//!
//! A storage engine that keeps its data in memory-mapped persistent storage
//! replaces each raw memory access with the matching [`Tracer`] wrapper and
//! gets, as a side channel, an ordered stream of [`Event`] records saying
//! exactly which bytes were touched, how, and from where, without changing
//! the value, address, or side effects of any operation. The stream feeds
//! offline crash-consistency checking (e.g. "every byte mutated inside a
//! transaction was flushed before the commit marker").
//!
//! ## Quick Start
//!
//! ```
//! use pmemtrace::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let tracer = Tracer::builder().enabled().sink(sink.clone()).build();
//!
//! // Instrumented transaction: two field writes, a flush, a commit.
//! let mut header = [0u8; 16];
//! tracer.tx_start();
//! tracer.fill(&mut header[..8], 0xAA);
//! tracer.fill(&mut header[8..], 0xBB);
//! tracer.flush(&header, |region| region.len());
//! tracer.commit();
//! tracer.tx_end();
//!
//! assert_eq!(sink.len(), 6);
//! ```
//!
//! ## Pieces
//!
//! - [`Tracer`]: the wrapper operations (stores, loads, bulk ops, flushes,
//!   fences, transaction markers)
//! - [`TraceMask`]: the injected on/off switch; disabled wrappers are pure
//!   pass-through
//! - [`Sink`]: where records go: [`CaptureSink`] for tests, [`RingSink`]
//!   for an in-process consumer, [`LogSink`] for the `tracing` stream
//! - [`encode`]/[`decode`]: the lossless textual record format

#![warn(missing_docs)]

mod builder;
mod tracer;

pub mod prelude;

// Re-export main entry points
pub use builder::TracerBuilder;
pub use tracer::Tracer;

// Re-export the event model
pub use pmemtrace_core::{Event, EventKind, Origin, TraceMask};

// Re-export sinks
pub use pmemtrace_sink::{CaptureSink, LogSink, NullSink, RingSink, Sink, LOG_TARGET};

// Re-export the wire format
pub use pmemtrace_wire::{decode, encode, DecodeError};
