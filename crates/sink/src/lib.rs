//! Emission backends for pmemtrace event records.
//!
//! The [`Sink`] trait is the facility's one consumed boundary: an
//! append-only channel that must not block and must not fail observably to
//! the caller. This crate ships the backends:
//!
//! - [`CaptureSink`]: ordered in-memory capture, for test assertions
//! - [`RingSink`]: bounded lock-free ring with drop-on-full, for an
//!   asynchronous consumer in the same process
//! - [`LogSink`]: forwards encoded records to the `tracing` event stream
//! - [`NullSink`]: discards everything

#![warn(missing_docs)]

mod capture;
mod log;
mod ring;
mod traits;

pub use capture::CaptureSink;
pub use log::{LogSink, LOG_TARGET};
pub use ring::RingSink;
pub use traits::{NullSink, Sink};
