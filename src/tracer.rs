//! The instrumentation facade: one wrapper per persistent-memory operation.
//!
//! Every wrapper consults the injected [`TraceMask`] first. When the mask is
//! clear the wrapper performs the underlying operation and nothing else: no
//! event is built, no sink is called. When set, it emits exactly one record
//! (two for [`Tracer::load_mut`]) describing the bytes the operation
//! touches, then performs or returns the operation's result unchanged.
//!
//! Wrappers are synchronous and never spawn, block, or yield; per-thread
//! event order equals per-thread operation order. Each one is annotated
//! `#[track_caller]`, so the recorded origin names the caller's code.

use crate::builder::TracerBuilder;
use pmemtrace_core::{Event, EventKind, Origin, TraceMask};
use pmemtrace_sink::{NullSink, Sink};
use std::cmp::Ordering;
use std::mem;
use std::ops::{AddAssign, BitAndAssign, BitOrAssign, SubAssign};
use std::sync::Arc;

/// Transparent recorder of persistent-memory accesses.
///
/// Holds the injected enable mask and output sink; all wrapper operations
/// hang off it. Clones share both, so one tracer can be handed to every
/// thread of the instrumented engine.
///
/// # Example
///
/// ```
/// use pmemtrace::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(CaptureSink::new());
/// let tracer = Tracer::new(TraceMask::enabled(), sink.clone());
///
/// let mut field = 0u32;
/// tracer.store(&mut field, 7);
///
/// assert_eq!(field, 7);
/// assert_eq!(sink.kinds(), vec![EventKind::Write]);
/// ```
#[derive(Clone)]
pub struct Tracer {
    mask: TraceMask,
    sink: Arc<dyn Sink>,
}

impl Tracer {
    /// Create a tracer from an injected mask and sink.
    pub fn new(mask: TraceMask, sink: Arc<dyn Sink>) -> Self {
        Tracer { mask, sink }
    }

    /// Create a tracer that never records.
    ///
    /// The mask starts disabled and the sink discards, so every wrapper is
    /// pure pass-through until an operator flips the mask on a clone of
    /// [`Tracer::mask`], which still emits nowhere. Useful as a default in
    /// hosts that wire instrumentation in unconditionally.
    pub fn disabled() -> Self {
        Tracer::new(TraceMask::new(), Arc::new(NullSink))
    }

    /// Create a builder for tracer configuration.
    pub fn builder() -> TracerBuilder {
        TracerBuilder::new()
    }

    /// The enable mask this tracer reads.
    ///
    /// Clone it to hand the on/off control to an external operator.
    pub fn mask(&self) -> &TraceMask {
        &self.mask
    }

    // ---------------------------------------------------------------------
    // Write wrappers
    // ---------------------------------------------------------------------

    /// Store `value` into `*dst`.
    #[track_caller]
    pub fn store<T>(&self, dst: &mut T, value: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst = value;
    }

    /// Store `value` into `*dst` and yield the destination for chaining.
    #[track_caller]
    pub fn store_through<'a, T>(&self, dst: &'a mut T, value: T) -> &'a mut T {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst = value;
        dst
    }

    /// Plain assignment, `*dst = value`.
    ///
    /// Same effect as [`Tracer::store`]; kept as its own wrapper so call
    /// sites that replace an assignment operator read as one.
    #[track_caller]
    pub fn assign<T>(&self, dst: &mut T, value: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst = value;
    }

    /// Compound assignment, `*dst |= rhs`.
    #[track_caller]
    pub fn or_assign<T: BitOrAssign>(&self, dst: &mut T, rhs: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst |= rhs;
    }

    /// Compound assignment, `*dst &= rhs`.
    #[track_caller]
    pub fn and_assign<T: BitAndAssign>(&self, dst: &mut T, rhs: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst &= rhs;
    }

    /// Compound assignment, `*dst += rhs`.
    #[track_caller]
    pub fn add_assign<T: AddAssign>(&self, dst: &mut T, rhs: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst += rhs;
    }

    /// Compound assignment, `*dst -= rhs`.
    #[track_caller]
    pub fn sub_assign<T: SubAssign>(&self, dst: &mut T, rhs: T) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                address_of(dst),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *dst -= rhs;
    }

    /// Fill a byte range with `value`.
    #[track_caller]
    pub fn fill(&self, dst: &mut [u8], value: u8) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                dst.as_ptr() as usize,
                dst.len(),
                Origin::caller(),
            ));
        }
        dst.fill(value);
    }

    /// Copy `src.len()` bytes into the front of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`, exactly where the raw copy
    /// would.
    #[track_caller]
    pub fn copy(&self, dst: &mut [u8], src: &[u8]) {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                dst.as_ptr() as usize,
                src.len(),
                Origin::caller(),
            ));
        }
        dst[..src.len()].copy_from_slice(src);
    }

    /// Copy a string into a fixed-capacity destination.
    ///
    /// Copies `min(dst.len(), src.len())` bytes and returns the count;
    /// the event records that count, not the full source length.
    #[track_caller]
    pub fn copy_str(&self, dst: &mut [u8], src: &str) -> usize {
        let count = dst.len().min(src.len());
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Write,
                dst.as_ptr() as usize,
                count,
                Origin::caller(),
            ));
        }
        dst[..count].copy_from_slice(&src.as_bytes()[..count]);
        count
    }

    /// Non-temporal store through a caller-supplied continuation.
    ///
    /// `op` performs the actual cache-bypassing store of `src` into `dst`
    /// and returns how many bytes completed. The record carries the
    /// requested count (`src.len()`) and the completed count side by side,
    /// and the completed count is returned unchanged.
    #[track_caller]
    pub fn store_nt<F>(&self, dst: &mut [u8], src: &[u8], op: F) -> usize
    where
        F: FnOnce(&mut [u8], &[u8]) -> usize,
    {
        let address = dst.as_ptr() as usize;
        let requested = src.len();
        let completed = op(dst, src);
        if self.mask.is_enabled() {
            self.sink.emit(Event::completion(
                EventKind::NontemporalWrite,
                address,
                requested,
                completed,
                Origin::caller(),
            ));
        }
        completed
    }

    // ---------------------------------------------------------------------
    // Read wrappers
    // ---------------------------------------------------------------------

    /// Read the value of `*src`.
    #[track_caller]
    pub fn load<T: Copy>(&self, src: &T) -> T {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Read,
                address_of(src),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        *src
    }

    /// Obtain the address of a field the caller will only read.
    #[track_caller]
    pub fn load_ref<'a, T>(&self, src: &'a T) -> &'a T {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Read,
                address_of(src),
                mem::size_of::<T>(),
                Origin::caller(),
            ));
        }
        src
    }

    /// Obtain the address of a field the caller will read and then mutate.
    ///
    /// Models a read-modify-write access through a single call: emits a
    /// read record followed by a write record with the same address and
    /// size. Distinct from [`Tracer::load_ref`] on purpose; downstream
    /// checkers rely on knowing which address-of accesses precede a
    /// mutation.
    #[track_caller]
    pub fn load_mut<'a, T>(&self, src: &'a mut T) -> &'a mut T {
        if self.mask.is_enabled() {
            let address = address_of(src);
            let size = mem::size_of::<T>();
            let origin = Origin::caller();
            self.sink
                .emit(Event::access(EventKind::Read, address, size, origin.clone()));
            self.sink
                .emit(Event::access(EventKind::Write, address, size, origin));
        }
        src
    }

    /// Compare a persistent region against a reference buffer.
    ///
    /// The record covers the persistent side (`pm`); the outcome is the
    /// lexicographic byte comparison, returned unchanged.
    #[track_caller]
    pub fn compare(&self, pm: &[u8], other: &[u8]) -> Ordering {
        if self.mask.is_enabled() {
            self.sink.emit(Event::access(
                EventKind::Read,
                pm.as_ptr() as usize,
                pm.len(),
                Origin::caller(),
            ));
        }
        pm.cmp(other)
    }

    // ---------------------------------------------------------------------
    // Persist and boundary wrappers
    // ---------------------------------------------------------------------

    /// Cache-line flush through a caller-supplied continuation.
    ///
    /// `op` performs the actual flush of `region` and returns how many
    /// bytes it flushed. The record carries requested (`region.len()`) and
    /// completed counts; the completed count is returned unchanged.
    #[track_caller]
    pub fn flush<F>(&self, region: &[u8], op: F) -> usize
    where
        F: FnOnce(&[u8]) -> usize,
    {
        let address = region.as_ptr() as usize;
        let requested = region.len();
        let completed = op(region);
        if self.mask.is_enabled() {
            self.sink.emit(Event::completion(
                EventKind::Flush,
                address,
                requested,
                completed,
                Origin::caller(),
            ));
        }
        completed
    }

    /// Record a store fence.
    ///
    /// The marker wrappers record ordering points; the caller issues its
    /// own fence instruction, the facility only observes.
    #[track_caller]
    pub fn fence(&self) {
        if self.mask.is_enabled() {
            self.sink
                .emit(Event::boundary(EventKind::Fence, Origin::caller()));
        }
    }

    /// Record a load/full ordering barrier.
    #[track_caller]
    pub fn barrier(&self) {
        if self.mask.is_enabled() {
            self.sink
                .emit(Event::boundary(EventKind::Barrier, Origin::caller()));
        }
    }

    /// Record a transaction commit point.
    #[track_caller]
    pub fn commit(&self) {
        if self.mask.is_enabled() {
            self.sink
                .emit(Event::boundary(EventKind::Commit, Origin::caller()));
        }
    }

    /// Record the start of a transaction.
    #[track_caller]
    pub fn tx_start(&self) {
        if self.mask.is_enabled() {
            self.sink
                .emit(Event::boundary(EventKind::TxStart, Origin::caller()));
        }
    }

    /// Record the end of a transaction.
    #[track_caller]
    pub fn tx_end(&self) {
        if self.mask.is_enabled() {
            self.sink
                .emit(Event::boundary(EventKind::TxEnd, Origin::caller()));
        }
    }
}

/// Byte address of a field.
fn address_of<T>(field: &T) -> usize {
    field as *const T as usize
}
