//! Wire encoding for pmemtrace event records.
//!
//! Each record encodes as one colon-delimited line that preserves every
//! field losslessly and unambiguously:
//!
//! | Record shape | Layout |
//! |--------------|--------|
//! | addressed (read/write) | `TAG:0xADDR:SIZE:FILE:LINE` |
//! | completion (flush, non-temporal) | `TAG:0xADDR:DONE:REQUESTED:FILE:LINE` |
//! | boundary marker | `TAG:FILE:LINE` |
//!
//! The completed byte count precedes the requested one, so a consumer can
//! detect partial completion by comparing the two.
//!
//! ## Examples
//!
//! ```
//! use pmemtrace_core::{Event, EventKind, Origin};
//! use pmemtrace_wire::{decode, encode};
//!
//! let event = Event::access(EventKind::Write, 0x1000, 8, Origin::new("fs/inode.rs", 120));
//! let line = encode(&event);
//! assert_eq!(line, "PM_W:0x1000:8:fs/inode.rs:120");
//! assert_eq!(decode(&line).unwrap(), event);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::encode;
pub use error::DecodeError;
