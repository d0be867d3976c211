//! Core event model for persistent-memory access instrumentation.
//!
//! This crate defines the data the rest of the workspace moves around:
//!
//! - [`Event`] / [`EventKind`]: one structured record per instrumented
//!   access: loads, stores, bulk operations, flushes, fences, and
//!   transaction boundary markers
//! - [`Origin`]: the call site (file, line) that produced a record
//! - [`TraceMask`]: the shared enable flag every wrapper consults
//!
//! No I/O happens here; emission lives in the sink crate and the textual
//! record format in the wire crate.

#![warn(missing_docs)]

mod event;
mod mask;
mod origin;

pub use event::{Event, EventKind};
pub use mask::TraceMask;
pub use origin::Origin;
