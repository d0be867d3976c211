//! Call-site identification for event records.
//!
//! Every event carries the source file and line of the wrapper call that
//! produced it, so offline analysis can correlate accesses back to the
//! caller's logic. Capture rides on `#[track_caller]`: the wrappers are
//! annotated, and [`Origin::caller`] reads the propagated location, so the
//! recorded site is the caller's code and never this crate's internals.

use core::panic::Location;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Source location of the wrapper call that produced an event.
///
/// Captured records borrow the `'static` file path the compiler embeds, so
/// building an `Origin` on the instrumentation path never allocates.
/// Decoded records own their path instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin {
    /// Originating source file
    file: Cow<'static, str>,

    /// 1-based line within `file`
    line: u32,
}

impl Origin {
    /// Capture the location of the calling code.
    ///
    /// Chains through every `#[track_caller]` frame above it, so a wrapper
    /// annotated with `#[track_caller]` records its own caller here.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Origin {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }

    /// Build an origin from explicit parts (decoding, tests).
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Origin {
            file: file.into(),
            line,
        }
    }

    /// Originating source file.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// 1-based line within the originating file.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
