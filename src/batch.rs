//! Batch accumulation
//!
//! A [`BatchBuffer`] collects encoded events into one HTTP body. The
//! dispatcher consumes only this contract; the concrete wire format
//! (bulk NDJSON, array-bodied POSTs, ...) is supplied by the caller as a
//! [`BatchFactory`]. [`NdjsonBatch`] is the newline-delimited variant.

use crate::event::Event;
use bytes::{BufMut, Bytes, BytesMut};
use std::sync::Arc;

/// A mutable accumulator over events, forming one HTTP body
///
/// Once a batch is handed off for upload it is never mutated again; the
/// dispatcher installs a freshly constructed batch from the factory in its
/// place.
pub trait BatchBuffer: Send + Sync {
    /// Append an event, growing the encoded body
    fn append(&mut self, event: Arc<dyn Event>);

    /// Current encoded byte length
    ///
    /// Monotonically non-decreasing between appends.
    fn byte_size(&self) -> usize;

    /// Number of events appended so far
    fn event_count(&self) -> usize;

    /// Stable byte view of the encoded body, suitable as an HTTP body
    fn snapshot(&self) -> Bytes;

    /// The events owned by this batch, in append order
    ///
    /// Response interpreters use this to rebuild retry sub-batches without
    /// knowing the concrete batch type.
    fn events(&self) -> &[Arc<dyn Event>];

    /// True when no events have been appended
    fn is_empty(&self) -> bool {
        self.event_count() == 0
    }
}

/// Factory for the caller's concrete batch type
///
/// Invoked under the dispatcher state lock on every flush; keep it cheap.
pub type BatchFactory = Arc<dyn Fn() -> Box<dyn BatchBuffer> + Send + Sync>;

/// Newline-delimited batch: each event encodes to one line
///
/// Events must encode without embedded newlines; the batch supplies the
/// line terminator.
pub struct NdjsonBatch {
    events: Vec<Arc<dyn Event>>,
    buf: BytesMut,
}

impl NdjsonBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            buf: BytesMut::new(),
        }
    }

    /// A [`BatchFactory`] producing empty NDJSON batches
    pub fn factory() -> BatchFactory {
        Arc::new(|| Box::new(NdjsonBatch::new()) as Box<dyn BatchBuffer>)
    }
}

impl Default for NdjsonBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBuffer for NdjsonBatch {
    fn append(&mut self, event: Arc<dyn Event>) {
        let encoded = event.encode();
        self.buf.extend_from_slice(&encoded);
        self.buf.put_u8(b'\n');
        self.events.push(event);
    }

    fn byte_size(&self) -> usize {
        self.buf.len()
    }

    fn event_count(&self) -> usize {
        self.events.len()
    }

    fn snapshot(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    fn events(&self) -> &[Arc<dyn Event>] {
        &self.events
    }
}
