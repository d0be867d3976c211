//! Bounded lock-free ring backend.

use crate::traits::Sink;
use crossbeam_queue::ArrayQueue;
use pmemtrace_core::Event;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed-capacity in-memory ring for event records.
///
/// `emit` is a single lock-free push; when the ring is full the record is
/// dropped and counted, never blocking the caller and never surfacing a
/// failure. An external consumer drains the ring asynchronously with
/// [`pop`](RingSink::pop) or [`drain`](RingSink::drain).
#[derive(Debug)]
pub struct RingSink {
    queue: ArrayQueue<Event>,
    dropped: AtomicU64,
}

impl RingSink {
    /// Create a ring holding at most `capacity` undelivered records.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        RingSink {
            queue: ArrayQueue::new(capacity),
            dropped: AtomicU64::new(0),
        }
    }

    /// Take the oldest undelivered record, if any.
    pub fn pop(&self) -> Option<Event> {
        self.queue.pop()
    }

    /// Take every undelivered record, oldest first.
    pub fn drain(&self) -> Vec<Event> {
        let mut events = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop() {
            events.push(event);
        }
        events
    }

    /// Maximum number of undelivered records the ring can hold.
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Number of records currently waiting for the consumer.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if no records are waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of records dropped because the ring was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Sink for RingSink {
    fn emit(&self, event: Event) {
        if self.queue.push(event).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}
