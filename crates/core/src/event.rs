//! Event records emitted for every instrumented persistent-memory access.
//!
//! This module defines the unit of output for the whole facility:
//! - [`EventKind`]: which operation category touched persistent memory
//! - [`Event`]: one access record (kind, address, sizes, call site)
//!
//! An event's `address` + `primary_size` describe exactly the bytes the
//! wrapped operation touches. Downstream consistency checkers trust this
//! 1:1 correspondence, so the constructors enforce the record shape:
//! boundary kinds carry no address, and only completion-bearing kinds
//! carry a secondary size.

use crate::origin::Origin;
use serde::{Deserialize, Serialize};

/// The nine access categories recorded by the facility.
///
/// Used for type discrimination on the wire and by offline checkers that
/// reconstruct, per transaction, which addresses were mutated and whether
/// each was flushed before the paired commit marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Cacheable store into persistent memory.
    ///
    /// Scalar stores, compound assignments, and bulk fills/copies.
    Write,

    /// Cacheable load from persistent memory.
    ///
    /// Scalar reads, address-of reads, and bulk compares.
    Read,

    /// Non-temporal (cache-bypassing) store.
    ///
    /// Carries both the requested and the completed byte count.
    NontemporalWrite,

    /// Cache-line flush of an address range.
    ///
    /// Carries both the requested and the completed byte count.
    Flush,

    /// Store fence. No addressed memory.
    Fence,

    /// Load/full ordering barrier. No addressed memory.
    Barrier,

    /// Logical transaction commit point. No addressed memory.
    Commit,

    /// Transaction start marker. Paired with [`EventKind::TxEnd`].
    TxStart,

    /// Transaction end marker. Paired with [`EventKind::TxStart`].
    TxEnd,
}

impl EventKind {
    /// All event kinds (for iteration)
    pub const ALL: [EventKind; 9] = [
        EventKind::Write,
        EventKind::Read,
        EventKind::NontemporalWrite,
        EventKind::Flush,
        EventKind::Fence,
        EventKind::Barrier,
        EventKind::Commit,
        EventKind::TxStart,
        EventKind::TxEnd,
    ];

    /// The marker tag identifying this kind on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::Write => "PM_W",
            EventKind::Read => "PM_R",
            EventKind::NontemporalWrite => "PM_I",
            EventKind::Flush => "PM_L",
            EventKind::Fence => "PM_N",
            EventKind::Barrier => "PM_B",
            EventKind::Commit => "PM_C",
            EventKind::TxStart => "PM_XS",
            EventKind::TxEnd => "PM_XE",
        }
    }

    /// Look up a kind by its wire marker tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        EventKind::ALL.iter().copied().find(|k| k.tag() == tag)
    }

    /// Check if this kind is a boundary marker.
    ///
    /// Boundary kinds (fence, barrier, commit, transaction start/end) apply
    /// to the whole transaction rather than a single location and never
    /// carry an address.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            EventKind::Fence
                | EventKind::Barrier
                | EventKind::Commit
                | EventKind::TxStart
                | EventKind::TxEnd
        )
    }

    /// Check if this kind records a completed count next to the requested one.
    ///
    /// Only flushes and non-temporal stores can complete partially; all
    /// other kinds never carry a secondary size.
    pub fn has_completion(&self) -> bool {
        matches!(self, EventKind::Flush | EventKind::NontemporalWrite)
    }
}

/// One recorded persistent-memory access.
///
/// Built by the wrapper operations and handed to a sink. The shape is fixed
/// per kind: addressed kinds carry `address` and `primary_size`,
/// completion-bearing kinds additionally carry `secondary_size` (bytes
/// actually completed vs. requested), and boundary kinds carry neither
/// address nor sizes beyond a zero primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Operation category
    kind: EventKind,

    /// Byte address touched; `None` for boundary kinds
    address: Option<usize>,

    /// Bytes touched, or bytes requested for completion-bearing kinds
    primary_size: usize,

    /// Bytes actually completed; only for flush and non-temporal store
    secondary_size: Option<usize>,

    /// Call site that produced this event
    origin: Origin,
}

impl Event {
    /// Build a record for an addressed access (read or write).
    ///
    /// `address` and `size` must describe exactly the bytes the wrapped
    /// operation touches.
    pub fn access(kind: EventKind, address: usize, size: usize, origin: Origin) -> Self {
        debug_assert!(!kind.is_boundary() && !kind.has_completion());
        Event {
            kind,
            address: Some(address),
            primary_size: size,
            secondary_size: None,
            origin,
        }
    }

    /// Build a record for an operation with a completed count distinct from
    /// the requested one (flush, non-temporal store).
    pub fn completion(
        kind: EventKind,
        address: usize,
        requested: usize,
        completed: usize,
        origin: Origin,
    ) -> Self {
        debug_assert!(kind.has_completion());
        Event {
            kind,
            address: Some(address),
            primary_size: requested,
            secondary_size: Some(completed),
            origin,
        }
    }

    /// Build a record for a boundary marker (no addressed memory).
    pub fn boundary(kind: EventKind, origin: Origin) -> Self {
        debug_assert!(kind.is_boundary());
        Event {
            kind,
            address: None,
            primary_size: 0,
            secondary_size: None,
            origin,
        }
    }

    /// Operation category of this record.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Byte address touched, or `None` for boundary kinds.
    pub fn address(&self) -> Option<usize> {
        self.address
    }

    /// Bytes touched, or bytes requested for completion-bearing kinds.
    pub fn primary_size(&self) -> usize {
        self.primary_size
    }

    /// Bytes actually completed, if this kind records a completion.
    pub fn secondary_size(&self) -> Option<usize> {
        self.secondary_size
    }

    /// Call site that produced this record.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}
